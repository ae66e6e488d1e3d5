//! A menu-driven to-do list for the terminal, persisted as JSON.

pub mod cli;
pub mod io;
pub mod menu;
pub mod model;
pub mod ops;
pub mod util;
