// Layout and timing constants shared by the engine and the web front-end.

// Breakpoints: (exclusive upper width bound, base preview width px, offset multiplier)
pub const BREAKPOINTS: [(f32, f32, f32); 4] = [
    (640.0, 180.0, 0.4), // mobile
    (768.0, 200.0, 0.5), // small tablet
    (1024.0, 220.0, 0.7), // tablet
    (1280.0, 240.0, 0.85), // small desktop
];
pub const DESKTOP_WIDTH_PX: f32 = 256.0;
pub const DESKTOP_MULTIPLIER: f32 = 1.0;

// Widths below this are treated as touch layouts
pub const TOUCH_LAYOUT_MAX_WIDTH: f32 = 768.0;

// Previews are 3:2 landscape
pub const PREVIEW_ASPECT: f32 = 3.0 / 2.0;

// Pointer
pub const DEFAULT_NORMALIZER: f32 = 4.0;
pub const CENTER_ENTRY_INDEX: usize = 1; // the raised middle image of the arc
pub const CENTER_ENTRY_GAIN: f32 = 0.5;

// Touch arc above the selected title
pub const TOUCH_DAMPENING: f32 = 0.35;
pub const TOUCH_ARC_GAP_PX: f32 = 30.0;
pub const TOUCH_ARC_Y_FACTOR: f32 = 0.5;
pub const TOUCH_ROTATION_FACTOR: f32 = 0.6;

// Lifecycle
pub const ENTER_DURATION_SEC: f64 = 0.6;
pub const EXIT_DURATION_SEC: f64 = 0.2;
pub const ENTER_SPRING_STIFFNESS: f32 = 200.0;
pub const ENTER_SPRING_DAMPING: f32 = 15.0;
pub const ENTER_SPRING_MASS: f32 = 0.6;

// Hint banner
pub const HINT_DURATION_SEC: f64 = 4.0;
