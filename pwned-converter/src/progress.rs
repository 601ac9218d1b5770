/// Receives conversion progress as a percentage of the input consumed.
///
/// Values passed to `report` never decrease, and the last call is always `100.0`.
pub trait Progress {
    fn report(&mut self, percent: f32);
}

/// Reporter that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    #[inline]
    fn report(&mut self, _percent: f32) {}
}

impl<F: FnMut(f32)> Progress for F {
    #[inline]
    fn report(&mut self, percent: f32) {
        self(percent)
    }
}
