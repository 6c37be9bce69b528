/// Motion tuning constants.
///
/// Coefficients for the scroll and pointer mappings live here so the engine
/// reads as the formulas it implements rather than a wall of literals.
// Default configuration
pub const DEFAULT_PARALLAX_INTENSITY: f32 = 0.02; // px of travel per px scrolled
pub const DEFAULT_MOUSE_SMOOTHNESS: f32 = 0.08; // fraction of remaining distance per frame
pub const DEFAULT_MOUSE_MAX_OFFSET_PX: f32 = 20.0;

// Hero visual
pub const HERO_FADE: f32 = 0.5; // opacity lost at full progress

// Headline
pub const HEADLINE_FADE: f32 = 0.6;
pub const HEADLINE_PARALLAX: f32 = 0.15;

// Scroll indicator fades out twice as fast as progress
pub const INDICATOR_FADE: f32 = 2.0;

// Floating accents (scroll channel)
pub const ACCENT_SPEED_STEP: f32 = 0.005; // extra parallax per accent index
pub const ACCENT_ROTATION_PER_PX: f32 = 0.03; // degrees per px scrolled

// Floating accents (pointer channel)
pub const ACCENT_DEPTH_BASE: f32 = 0.2;
pub const ACCENT_DEPTH_STEP: f32 = 0.08;

// Abstract shape tilt
pub const SHAPE_TILT_DEG: f32 = 6.0;
pub const SHAPE_DEPTH_PX: f32 = 15.0;

// Shape layers: depth = (index + 1) * step
pub const LAYER_DEPTH_STEP: f32 = 0.3;

// Custom properties written on shape layers
pub const MOUSE_X_PROPERTY: &str = "--mouse-x";
pub const MOUSE_Y_PROPERTY: &str = "--mouse-y";
