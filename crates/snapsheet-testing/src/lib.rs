//! Testing utilities and headless harness for snapsheet

pub mod recording;
pub mod robot;

pub use recording::*;
pub use robot::*;

pub mod prelude {
    pub use crate::recording::{CallbackRecorder, HostCall, RecordingHost, SheetEvent};
    pub use crate::robot::SheetRobot;
}
