//! Ticket Core
//!
//! Foundational types shared by the ticket shape builders and their hosts:
//!
//! - **Geometry**: points, sizes, rectangles and affine transforms
//! - **Color**: RGBA colors and hex parsing
//! - **Draw**: backend-neutral paths, strokes and the `DrawContext` seam
//!
//! Nothing in this crate performs rasterization. Paths are values a host
//! replays onto its own 2D backend.
//!
//! # Example
//!
//! ```rust
//! use ticket_core::{Path, Rect};
//!
//! let path = Path::rect(Rect::new(0.0, 0.0, 100.0, 50.0));
//! assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
//! ```

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use draw::{
    Arc, ArcDirection, DrawCommand, DrawContext, DrawContextExt, LineCap, LineJoin, Path,
    PathCommand, RecordingContext, Stroke,
};
pub use geometry::{Affine2D, Point, Rect, Size};
