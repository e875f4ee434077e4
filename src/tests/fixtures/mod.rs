pub mod state;
pub mod talks;
