//! Ticket Shape
//!
//! Path builders for a decorative ticket: a rounded rectangle with an inward
//! semicircular notch on each side, plus a dashed separator line above the
//! notches. Used for tickets, boarding passes and coupons.
//!
//! - [`build_outline_path`] traces the notched outline
//! - [`build_line_path`] traces the separator
//! - [`TicketView`] / [`render_ticket`] layer both under host content
//!
//! Builders are pure functions of a [`Rect`] and a config value. Nothing is
//! validated or clamped: degenerate inputs give degenerate (but non-empty)
//! paths.
//!
//! # Example
//!
//! ```rust
//! use ticket_core::Rect;
//! use ticket_shape::{build_line_path, build_outline_path, LineConfig, OutlineConfig};
//!
//! let rect = Rect::new(0.0, 0.0, 200.0, 300.0);
//! let outline = build_outline_path(rect, &OutlineConfig::default());
//! let line = build_line_path(rect, &LineConfig::default());
//!
//! assert_eq!(outline.len(), 13);
//! assert_eq!(line.bounds().min_y(), 215.0);
//! ```

pub mod line;
pub mod outline;
pub mod presets;
pub mod shape;
pub mod svg;
pub mod view;

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from ticket_core
// ─────────────────────────────────────────────────────────────────────────────

pub use ticket_core::{
    Color, DrawCommand, DrawContext, DrawContextExt, Path, PathCommand, Point, Rect,
    RecordingContext, Size, Stroke,
};

// ─────────────────────────────────────────────────────────────────────────────
// ticket_shape specific exports
// ─────────────────────────────────────────────────────────────────────────────

pub use line::{build_line_path, LineConfig};
pub use outline::{build_outline_path, OutlineConfig};
pub use presets::TicketPreset;
pub use shape::Shape;
pub use svg::{path_data, SvgContext};
pub use view::{
    render_ticket, NoContent, RecordedContent, TicketConfig, TicketContent, TicketPaths,
    TicketView,
};
