// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for the catalog site. Each spec
//! covers a single page kind and encodes *where the ground truth lives in the
//! HTML* and *how to extract it tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of the search listing (`search`) and of an author
//!   profile (`profile`), built on the `core::html` traversal helpers.
//! - **Selection policy**: which search candidate wins (`search::pick_match`),
//!   which sub-group of the influences block holds the links.
//! - **Thin fetch wrappers** that take a `core::net::Fetch`, so every spec can
//!   be exercised offline against captured fixtures.
//!
//! ## What does **not** live here
//! - **Merging into the metadata map / graph**: that is `universe::Universe`.
//! - **Persistence**: `store`.
//!
//! ## Typical call chain
//! ```text
//! Universe::add_author → search::resolve  → fetch + parse_candidates + pick_match
//!                      → profile::fetch_profile → parse_details + parse_influences
//! ```
//!
//! ## Conventions & invariants
//! - A missing optional section is a value (`None` / empty), never an error.
//! - Only a failed fetch is an error, and it is never retried here.
//! - Results keep document order.
pub mod profile;
pub mod search;
