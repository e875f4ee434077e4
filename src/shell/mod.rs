// Composition root for the scheduler.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory stores and wire them into the use case handlers.
// - Run the command loop against the terminal.

pub mod config;
pub mod session;
pub mod state;
