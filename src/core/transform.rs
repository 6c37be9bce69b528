use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

/// One CSS transform function. Lengths are px, angles are degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Translate(Vec2),
    TranslateY(f32),
    TranslateZ(f32),
    Rotate(f32),
    RotateX(f32),
    RotateY(f32),
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformOp::Translate(v) => write!(f, "translate({}px, {}px)", v.x, v.y),
            TransformOp::TranslateY(y) => write!(f, "translateY({}px)", y),
            TransformOp::TranslateZ(z) => write!(f, "translateZ({}px)", z),
            TransformOp::Rotate(deg) => write!(f, "rotate({}deg)", deg),
            TransformOp::RotateX(deg) => write!(f, "rotateX({}deg)", deg),
            TransformOp::RotateY(deg) => write!(f, "rotateY({}deg)", deg),
        }
    }
}

/// Ordered list of transform functions, applied left to right like CSS.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: SmallVec<[TransformOp; 4]>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    /// `self` followed by `next`; neither input is modified.
    pub fn compose(&self, next: &Transform) -> Transform {
        let mut ops = self.ops.clone();
        ops.extend(next.ops.iter().copied());
        Transform { ops }
    }

    #[inline]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return f.write_str("none");
        }
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}
