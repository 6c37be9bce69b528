use super::config::MotionConfig;
use super::constants::{
    ACCENT_DEPTH_BASE, ACCENT_DEPTH_STEP, ACCENT_ROTATION_PER_PX, ACCENT_SPEED_STEP, HEADLINE_FADE,
    HEADLINE_PARALLAX, HERO_FADE, INDICATOR_FADE, LAYER_DEPTH_STEP, MOUSE_X_PROPERTY,
    MOUSE_Y_PROPERTY, SHAPE_DEPTH_PX, SHAPE_TILT_DEG,
};
use super::math::scroll_progress;
use super::scheduler::{FrameScheduler, FrameToken};
use super::state::{PointerState, ScrollState, ViewportState};
use super::surface::{Surface, SurfaceSet};
use super::transform::{Transform, TransformOp};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    /// Terminal. Reached on teardown, or straight from `Uninitialized` when
    /// motion is disabled.
    Stopped,
}

// Accents take a transform from both scroll and pointer; each handler
// refreshes its own channel and writes the composition of both.
#[derive(Clone, Debug, Default)]
struct AccentChannels {
    scroll: Transform,
    pointer: Transform,
}

pub struct MotionEngine<S, F> {
    config: MotionConfig,
    viewport: ViewportState,
    pointer: PointerState,
    scroll: ScrollState,
    surfaces: SurfaceSet<S>,
    accents: Vec<AccentChannels>,
    scheduler: F,
    pending: Option<FrameToken>,
    phase: Phase,
}

impl<S: Surface, F: FrameScheduler> MotionEngine<S, F> {
    pub fn new(
        config: MotionConfig,
        viewport: ViewportState,
        surfaces: SurfaceSet<S>,
        scheduler: F,
    ) -> Self {
        let accents = vec![AccentChannels::default(); surfaces.accents.len()];
        Self {
            config,
            pointer: PointerState::centered(&viewport),
            viewport,
            scroll: ScrollState::default(),
            surfaces,
            accents,
            scheduler,
            pending: None,
            phase: Phase::Uninitialized,
        }
    }

    /// Leave `Uninitialized`. Motion runs only if it is not reduced and the
    /// host can schedule frames; otherwise the engine stops without writing.
    pub fn start(&mut self, reduced_motion: bool, scroll_y: f32) -> Phase {
        if self.phase != Phase::Uninitialized {
            return self.phase;
        }
        if reduced_motion {
            log::debug!("[motion] reduced motion preferred; effects disabled");
            self.phase = Phase::Stopped;
            return self.phase;
        }
        match self.scheduler.request_frame() {
            Some(token) => {
                self.pending = Some(token);
                self.phase = Phase::Running;
                self.scroll.offset_y = scroll_y.max(0.0);
                self.apply_scroll();
                log::debug!(
                    "[motion] running: {} surfaces, viewport {}x{}",
                    self.surfaces.len(),
                    self.viewport.width,
                    self.viewport.height
                );
            }
            None => {
                log::warn!("[motion] frame scheduling unavailable; effects disabled");
                self.phase = Phase::Stopped;
            }
        }
        self.phase
    }

    /// Cancel any pending frame and stop for good. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        if self.phase != Phase::Stopped {
            log::debug!("[motion] stopped");
        }
        self.phase = Phase::Stopped;
    }

    pub fn on_scroll(&mut self, offset_y: f32) {
        if self.phase != Phase::Running {
            return;
        }
        self.scroll.offset_y = offset_y.max(0.0);
        self.apply_scroll();
    }

    /// Record the raw pointer target; the next frame picks it up.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.phase != Phase::Running {
            return;
        }
        self.pointer.set_target(x, y);
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.viewport.resize(width, height);
    }

    /// Host callback for a fired frame request: tick, then request the next frame.
    pub fn frame(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.pending = None;
        self.tick();
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::debug!("[motion] next frame request failed; pointer effects paused");
        }
    }

    /// Advance pointer smoothing one step and apply pointer-driven transforms.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.pointer.step(self.config.mouse_smoothness);
        if !self.config.enable_mouse_tracking {
            return;
        }
        let Some(offset) = self.pointer.normalized_offset(&self.viewport) else {
            return;
        };
        self.apply_pointer(offset);
    }

    fn apply_scroll(&mut self) {
        let y = self.scroll.offset_y;
        let progress = scroll_progress(y, self.viewport.height);
        let cfg = self.config;

        if cfg.enable_parallax {
            if let Some(hero) = self.surfaces.hero_visual.as_mut() {
                hero.set_transform(
                    &Transform::new().then(TransformOp::TranslateY(y * cfg.parallax_intensity)),
                );
                hero.set_opacity(1.0 - progress * HERO_FADE);
            }
            for (i, (el, ch)) in self
                .surfaces
                .accents
                .iter_mut()
                .zip(self.accents.iter_mut())
                .enumerate()
            {
                ch.scroll = accent_scroll_transform(i, y, cfg.parallax_intensity);
                el.set_transform(&ch.scroll.compose(&ch.pointer));
            }
        }

        if cfg.enable_scroll_effects {
            if let Some(headline) = self.surfaces.headline.as_mut() {
                headline.set_opacity(1.0 - progress * HEADLINE_FADE);
                headline.set_transform(
                    &Transform::new().then(TransformOp::TranslateY(y * HEADLINE_PARALLAX)),
                );
            }
            if let Some(indicator) = self.surfaces.scroll_indicator.as_mut() {
                indicator.set_opacity((1.0 - progress * INDICATOR_FADE).max(0.0));
            }
        }
    }

    fn apply_pointer(&mut self, offset: Vec2) {
        let max_offset = self.config.mouse_max_offset;

        if let Some(shape) = self.surfaces.abstract_shape.as_mut() {
            shape.set_transform(&shape_tilt_transform(offset));
        }

        for (i, layer) in self.surfaces.shape_layers.iter_mut().enumerate() {
            let depth = (i as f32 + 1.0) * LAYER_DEPTH_STEP;
            let moved = offset * max_offset * depth;
            layer.set_custom_px(MOUSE_X_PROPERTY, moved.x);
            layer.set_custom_px(MOUSE_Y_PROPERTY, moved.y);
        }

        for (i, (el, ch)) in self
            .surfaces
            .accents
            .iter_mut()
            .zip(self.accents.iter_mut())
            .enumerate()
        {
            let depth = ACCENT_DEPTH_BASE + i as f32 * ACCENT_DEPTH_STEP;
            ch.pointer = Transform::new().then(TransformOp::Translate(offset * max_offset * depth));
            el.set_transform(&ch.scroll.compose(&ch.pointer));
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn surfaces(&self) -> &SurfaceSet<S> {
        &self.surfaces
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }
}

/// Scroll channel of accent `index`: per-index parallax speed plus a rotation
/// whose sign alternates with index parity (even positive).
pub fn accent_scroll_transform(index: usize, offset_y: f32, parallax_intensity: f32) -> Transform {
    let speed = parallax_intensity + index as f32 * ACCENT_SPEED_STEP;
    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
    Transform::new()
        .then(TransformOp::TranslateY(offset_y * speed))
        .then(TransformOp::Rotate(offset_y * ACCENT_ROTATION_PER_PX * sign))
}

#[inline]
pub fn shape_tilt_transform(offset: Vec2) -> Transform {
    Transform::new()
        .then(TransformOp::RotateX(offset.y * SHAPE_TILT_DEG))
        .then(TransformOp::RotateY(-offset.x * SHAPE_TILT_DEG))
        .then(TransformOp::TranslateZ(SHAPE_DEPTH_PX))
}
