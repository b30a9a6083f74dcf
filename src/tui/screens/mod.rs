//! Screen rendering and input handling.

mod home;
mod input;
mod item;

pub use home::HomeScreen;
pub use input::GoalInput;
pub use item::GoalItem;
