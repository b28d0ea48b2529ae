/// Magnitudes from here up print in exponent form.
const EXPONENT_FROM: f64 = 1e21;
/// Non-zero magnitudes below this print in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Renders a number the way a script engine prints it: no trailing `.0` on
/// whole values, no negative zero, spelled-out infinities, and `1e+21` /
/// `1e-7` style exponents outside the plain-decimal range.
pub fn format_number(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= EXPONENT_FROM || value.abs() < EXPONENT_BELOW {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

fn exponent_form(value: f64) -> String {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

/// One decimal place, for converted results.
pub(crate) fn format_fixed1(value: f64) -> String {
    if value.is_finite() && value.abs() < EXPONENT_FROM {
        format!("{value:.1}")
    } else {
        format_number(value)
    }
}
