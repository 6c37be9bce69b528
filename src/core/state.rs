// Transient per-page input state. Nothing here outlives the page session.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub center: Vec2,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        let mut v = Self::default();
        v.resize(width, height);
        v
    }

    /// Overwrite dimensions; the center always follows the latest size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.center = Vec2::new(width * 0.5, height * 0.5);
    }

    /// True when either center coordinate is zero and normalized offsets are undefined.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.center.x.is_finite() && self.center.y.is_finite())
            || self.center.x == 0.0
            || self.center.y == 0.0
    }
}

/// Raw pointer target plus the smoothed position chasing it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub target: Vec2,
    pub current: Vec2,
}

impl PointerState {
    /// Both positions parked at the viewport center.
    pub fn centered(viewport: &ViewportState) -> Self {
        Self {
            target: viewport.center,
            current: viewport.center,
        }
    }

    #[inline]
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Move `current` toward `target` by `factor` of the remaining distance.
    ///
    /// With `factor` in (0, 1] the distance to the target shrinks by `(1 - factor)`
    /// every step and never overshoots.
    #[inline]
    pub fn step(&mut self, factor: f32) {
        self.current = self.current.lerp(self.target, factor);
    }

    /// Offset of `current` from the viewport center, normalized to roughly [-1, 1].
    pub fn normalized_offset(&self, viewport: &ViewportState) -> Option<Vec2> {
        if viewport.is_degenerate() {
            return None;
        }
        Some((self.current - viewport.center) / viewport.center)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset_y: f32,
}
