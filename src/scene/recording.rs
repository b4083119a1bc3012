use super::SceneContext;
use crate::errors::SceneError;
use crate::primitive::CirclePrimitive;

/// One call received by a [`RecordingScene`].
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    Reset,
    PlaceCircle(CirclePrimitive),
}

/// Records every call in order and never fails. Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingScene {
    pub calls: Vec<SceneCall>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Circles placed since the most recent reset.
    pub fn circles(&self) -> Vec<CirclePrimitive> {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == SceneCall::Reset)
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                SceneCall::PlaceCircle(circle) => Some(*circle),
                SceneCall::Reset => None,
            })
            .collect()
    }
}

impl SceneContext for RecordingScene {
    fn reset(&mut self) -> Result<(), SceneError> {
        self.calls.push(SceneCall::Reset);
        Ok(())
    }

    fn place_circle(&mut self, circle: CirclePrimitive) -> Result<(), SceneError> {
        self.calls.push(SceneCall::PlaceCircle(circle));
        Ok(())
    }
}
