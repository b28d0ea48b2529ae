//! In-memory model of the interactive part of the page: the theme switch,
//! the editable list and the element creator.

pub mod element;
pub mod error;
pub mod list;
pub mod theme;

pub use element::{Element, ElementCreator, ElementForm, ElementStyle};
pub use error::PageError;
pub use list::{DynamicList, ListItem};
pub use theme::{Theme, ThemeSwitcher};

#[derive(Debug, Default)]
pub struct Page {
    pub theme: ThemeSwitcher,
    pub list: DynamicList,
    pub elements: ElementCreator,
}

impl Page {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: ThemeSwitcher::new(theme),
            ..Self::default()
        }
    }
}
