//! Colours used in inline styles. The rest of the palette lives in the CSS
//! custom properties of `styles/main.css`.

pub const LIGHT_GREY: &str = "#F3F4F6";

/// Focused option background in the standards menu
pub const YELLOW_FOCUS: &str = "rgba(252, 211, 77, 0.7)";

/// Background for a striped row: even rows are light grey.
pub fn stripe(index: usize) -> &'static str {
    if index % 2 == 0 {
        LIGHT_GREY
    } else {
        "transparent"
    }
}
