//! Testing utilities and harness for swipewrap carousels

pub mod recording;
pub mod robot;
pub mod robot_assertions;

pub use recording::{OffsetCommand, RecordingRenderer};
pub use robot::*;

pub mod prelude {
    pub use crate::recording::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
