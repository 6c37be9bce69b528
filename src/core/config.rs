use super::constants::{
    DEFAULT_MOUSE_MAX_OFFSET_PX, DEFAULT_MOUSE_SMOOTHNESS, DEFAULT_PARALLAX_INTENSITY,
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("mouse smoothness must be in (0, 1], got {0}")]
    Smoothness(f32),
    #[error("parallax intensity must be finite and non-negative, got {0}")]
    ParallaxIntensity(f32),
    #[error("mouse max offset must be finite and non-negative, got {0}")]
    MouseMaxOffset(f32),
}

/// Tuning and feature toggles for the motion engine.
///
/// Toggles gate recompute only: raw scroll/pointer/viewport state keeps
/// tracking input while a toggle is off, so re-enabling picks up from the
/// current position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub parallax_intensity: f32,
    pub mouse_smoothness: f32,
    pub mouse_max_offset: f32,
    /// Hero visual translation/fade and the accent scroll channel.
    pub enable_parallax: bool,
    /// Per-frame pointer tilt and offsets.
    pub enable_mouse_tracking: bool,
    /// Headline and scroll indicator fades.
    pub enable_scroll_effects: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            parallax_intensity: DEFAULT_PARALLAX_INTENSITY,
            mouse_smoothness: DEFAULT_MOUSE_SMOOTHNESS,
            mouse_max_offset: DEFAULT_MOUSE_MAX_OFFSET_PX,
            enable_parallax: true,
            enable_mouse_tracking: true,
            enable_scroll_effects: true,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = self.mouse_smoothness;
        if !(s > 0.0 && s <= 1.0) {
            return Err(ConfigError::Smoothness(s));
        }
        if !self.parallax_intensity.is_finite() || self.parallax_intensity < 0.0 {
            return Err(ConfigError::ParallaxIntensity(self.parallax_intensity));
        }
        if !self.mouse_max_offset.is_finite() || self.mouse_max_offset < 0.0 {
            return Err(ConfigError::MouseMaxOffset(self.mouse_max_offset));
        }
        Ok(())
    }
}
