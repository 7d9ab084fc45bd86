pub mod core;
pub mod estimators;
pub mod evaluation;
pub mod sampling;
pub mod tasks;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
