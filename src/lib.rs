//! Library exports for polyscribe.
//!
//! Exposes the polyline drawing machine, the undo history and the data model
//! so that frontends and headless tools share one implementation of the
//! drawing session.

pub mod config;
pub mod draw;
pub mod history;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
