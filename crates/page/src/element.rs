use std::fmt;

use shared::domain::ElementId;
use tracing::debug;

use crate::error::PageError;

/// Inline style applied to every created element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStyle {
    pub margin: &'static str,
    pub padding: &'static str,
    pub background_color: &'static str,
    pub border_radius: &'static str,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            margin: "5px 0",
            padding: "5px",
            background_color: "#f0f0f0",
            border_radius: "3px",
        }
    }
}

impl fmt::Display for ElementStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "margin: {}; padding: {}; background-color: {}; border-radius: {};",
            self.margin, self.padding, self.background_color, self.border_radius
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub tag: String,
    pub text: String,
    pub style: ElementStyle,
}

impl Element {
    pub fn to_html(&self) -> String {
        format!(
            "<{tag} style=\"{style}\">{text}</{tag}>",
            tag = self.tag,
            style = self.style,
            text = escape_html(&self.text)
        )
    }
}

/// The two input fields of the element creator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementForm {
    pub element_type: String,
    pub text: String,
}

impl ElementForm {
    pub fn new(element_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            text: text.into(),
        }
    }

    fn clear(&mut self) {
        self.element_type.clear();
        self.text.clear();
    }
}

#[derive(Debug, Default)]
pub struct ElementCreator {
    elements: Vec<Element>,
    next_id: u64,
}

impl ElementCreator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element from the form and clears the form on success.
    pub fn create(&mut self, form: &mut ElementForm) -> Result<&Element, PageError> {
        let tag = form.element_type.trim().to_lowercase();
        let text = form.text.trim();
        if tag.is_empty() || text.is_empty() {
            return Err(PageError::MissingElementFields);
        }
        if !is_valid_element_name(&tag) {
            debug!(%tag, "rejected element type");
            return Err(PageError::InvalidElementType(tag));
        }

        self.next_id += 1;
        let element = Element {
            id: ElementId(self.next_id),
            tag,
            text: text.to_string(),
            style: ElementStyle::default(),
        };
        debug!(id = %element.id, tag = %element.tag, "element created");
        form.clear();

        self.elements.push(element);
        let created = self.elements.len() - 1;
        Ok(&self.elements[created])
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn to_html(&self) -> String {
        self.elements
            .iter()
            .map(Element::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Accepts names following the XML `Name` production, limited to the
/// characters a tag can realistically use.
fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let name_start = |c: char| c.is_alphabetic() || c == '_' || c == ':';
    name_start(first) && chars.all(|c| name_start(c) || c.is_alphanumeric() || c == '-' || c == '.')
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "tests/element_tests.rs"]
mod tests;
