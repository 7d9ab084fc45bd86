pub mod args;
pub mod drivers;
pub mod wizard;
pub mod progress;
