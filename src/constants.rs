// Web frontend constants. Simulation tuning lives in `scream_core::constants`.

// DOM
pub const CANVAS_ELEMENT_ID: &str = "app-canvas";

// Backdrop painted under the charge tint (stands in for the page artwork)
pub const BACKGROUND_CSS: &str = "rgb(18, 16, 28)";

// Help panel text
pub const HELP_FONT_FAMILY: &str = "system-ui, sans-serif";
