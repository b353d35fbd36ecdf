// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod graph;
pub mod log;
pub mod model;
pub mod progress;
pub mod specs;
pub mod store;
pub mod universe;

pub use error::{Error, Result};
pub use universe::Universe;
