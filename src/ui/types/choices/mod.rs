mod experiment_choice;
mod schema;
mod ui_choice;

pub use experiment_choice::*;
pub use schema::*;
pub use ui_choice::UIChoice;
