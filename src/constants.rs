// DOM hooks and presentation tuning for the web front-end.

// Element ids expected in index.html
pub const ROOT_ID: &str = "app";
pub const TITLES_ID: &str = "titles";
pub const PREVIEW_LAYER_ID: &str = "preview-layer";
pub const HINT_ID: &str = "hint";

// Classes applied to generated elements
pub const TITLE_CLASS: &str = "title";
pub const TITLE_TEXT_CLASS: &str = "title-text";
pub const TITLE_ACTIVE_CLASS: &str = "is-active";
pub const PREVIEW_CLASS: &str = "preview";
pub const HINT_VISIBLE_CLASS: &str = "visible";

// Attribute carrying the title id on each title element
pub const TITLE_ID_ATTR: &str = "data-text";
// Optional override of the pointer normalizer on the root element
pub const NORMALIZER_ATTR: &str = "data-normalizer";

pub const HINT_TEXT: &str = "Tap a title to see its scenes";

// Steady-phase easing so pointer parallax glides instead of snapping
pub const STEADY_TRANSITION: &str = "transform 0.25s ease-out";
