#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Scroll progress through the first viewport height, in `[0, 1]`.
///
/// A zero-height viewport reports full progress once anything has scrolled.
#[inline]
pub fn scroll_progress(offset_y: f32, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return if offset_y > 0.0 { 1.0 } else { 0.0 };
    }
    clamp(offset_y / viewport_height, 0.0, 1.0)
}
