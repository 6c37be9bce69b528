use super::transform::Transform;

/// A visual element the engine writes style values to.
///
/// Writes are fire-and-forget; implementations swallow their own failures.
pub trait Surface {
    fn set_transform(&mut self, transform: &Transform);
    fn set_opacity(&mut self, opacity: f32);
    /// Write a length custom property (e.g. `--mouse-x`) in px.
    fn set_custom_px(&mut self, name: &str, px: f32);
}

/// Surfaces grouped by role. Absent roles are `None` / empty and simply skipped.
#[derive(Clone, Debug)]
pub struct SurfaceSet<S> {
    pub hero_visual: Option<S>,
    pub abstract_shape: Option<S>,
    pub shape_layers: Vec<S>,
    pub accents: Vec<S>,
    pub headline: Option<S>,
    pub scroll_indicator: Option<S>,
}

impl<S> Default for SurfaceSet<S> {
    fn default() -> Self {
        Self {
            hero_visual: None,
            abstract_shape: None,
            shape_layers: Vec::new(),
            accents: Vec::new(),
            headline: None,
            scroll_indicator: None,
        }
    }
}

impl<S> SurfaceSet<S> {
    /// Number of surfaces present across all roles.
    pub fn len(&self) -> usize {
        [
            &self.hero_visual,
            &self.abstract_shape,
            &self.headline,
            &self.scroll_indicator,
        ]
        .iter()
        .filter(|s| s.is_some())
        .count()
            + self.shape_layers.len()
            + self.accents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
