//! User Interface module
//!
//! Line-based terminal front end on crossterm. Screens and the console
//! driver only present state; all game rules live in [`crate::game`].

pub mod console;
pub mod driver;
pub mod screens;
pub mod widgets;

pub use console::Console;
pub use driver::ConsoleDriver;
pub use screens::MenuChoice;
