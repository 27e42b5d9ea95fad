use crate::error::SliderResult;
use crate::render::{SliderFrame, SliderSurface};

/// No-op surface used by tests and headless usage.
///
/// It still validates frames so tests catch inconsistent output before a
/// real host binding is involved.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub frames_applied: usize,
    pub last_frame: Option<SliderFrame>,
}

impl SliderSurface for NullSurface {
    fn apply(&mut self, frame: &SliderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.frames_applied += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
