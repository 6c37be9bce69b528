/// Handle for one outstanding frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken(pub i32);

/// Host frame-tick primitive.
///
/// `request_frame` arranges for the host to call the engine's `frame` once on
/// the next display frame. `None` means the primitive is unavailable.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameToken>;
    /// Cancelling a token that already fired must be harmless.
    fn cancel_frame(&mut self, token: FrameToken);
}
