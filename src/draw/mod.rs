//! Drawing data model.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with palette constants
//! - [`Polyline`]: the only shape type, built vertex by vertex
//! - [`Frame`]: container for all committed polylines
//! - [`Canvas`]: committed frame plus redraw bookkeeping, the state commands act on
//! - [`DirtyTracker`]: per-layer redraw requests for the rendering backend

pub mod canvas;
pub mod color;
pub mod dirty;
pub mod frame;
pub mod shape;

pub use canvas::Canvas;
pub use color::Color;
pub use dirty::{DirtyTracker, Layer};
pub use frame::Frame;
pub use shape::{Point, Polyline, ShapeId};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
