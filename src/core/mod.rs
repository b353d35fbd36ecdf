// src/core/mod.rs

pub mod fold;
pub mod html;
pub mod net;

pub use net::{Fetch, HttpFetcher};
