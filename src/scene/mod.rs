//! Scene hosts.
//!
//! Generators never reach for an ambient "current scene": they receive a
//! [`SceneContext`] and talk to it through two calls. [`MemoryScene`] keeps
//! real geometry that can be exported, [`RecordingScene`] only remembers what
//! it was asked to do.

mod memory;
mod recording;

pub use memory::{MemoryScene, ObjectId, SceneObject};
pub use recording::{RecordingScene, SceneCall};

use crate::errors::SceneError;
use crate::primitive::CirclePrimitive;

/// The capability set a generator needs from its host.
pub trait SceneContext {
    /// Remove every object from the scene.
    fn reset(&mut self) -> Result<(), SceneError>;

    /// Spawn a circle mesh described by `circle`.
    fn place_circle(&mut self, circle: CirclePrimitive) -> Result<(), SceneError>;
}

impl<C: SceneContext + ?Sized> SceneContext for &mut C {
    fn reset(&mut self) -> Result<(), SceneError> {
        (**self).reset()
    }

    fn place_circle(&mut self, circle: CirclePrimitive) -> Result<(), SceneError> {
        (**self).place_circle(circle)
    }
}

/// What a "select all" request does to the selection flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectAction {
    /// Select every object
    #[default]
    Select,
    /// Clear every selection flag
    Deselect,
    /// Deselect everything if anything is selected, otherwise select everything
    Toggle,
    /// Flip every selection flag
    Invert,
}
