/// Document hooks for the landing page.
///
/// Selectors name the surfaces the engine animates; any that match nothing
/// are skipped at discovery.
// Surface selectors
pub const HERO_VISUAL_SELECTOR: &str = ".hero-visual";
pub const ABSTRACT_SHAPE_SELECTOR: &str = ".abstract-shape";
pub const SHAPE_LAYER_SELECTOR: &str = ".shape-layer";
pub const FLOATING_CIRCLE_SELECTOR: &str = ".floating-circle";
pub const HEADLINE_SELECTOR: &str = ".headline";
pub const SCROLL_INDICATOR_SELECTOR: &str = ".scroll-indicator";

// Accessibility preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Window events
pub const SCROLL_EVENT: &str = "scroll";
pub const MOUSEMOVE_EVENT: &str = "mousemove";
pub const RESIZE_EVENT: &str = "resize";
pub const LOAD_EVENT: &str = "load";
pub const TEARDOWN_EVENT: &str = "beforeunload";
pub const DOM_READY_EVENT: &str = "DOMContentLoaded";
