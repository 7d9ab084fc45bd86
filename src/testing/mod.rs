mod stubs;

pub use stubs::{FixedNoise, ScriptedDriver};
