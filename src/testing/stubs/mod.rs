pub mod fixed_noise;
pub mod scripted_driver;

pub use fixed_noise::FixedNoise;
pub use scripted_driver::ScriptedDriver;
