// DOM element ids shared between the wiring code and index.html.

pub const CANVAS_ID: &str = "app-canvas";
pub const TITLE_ID: &str = "planet-title";
pub const DESCRIPTION_ID: &str = "planet-description";
pub const PREV_BUTTON_ID: &str = "nav-prev";
pub const NEXT_BUTTON_ID: &str = "nav-next";
