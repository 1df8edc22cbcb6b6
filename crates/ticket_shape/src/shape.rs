//! The `Shape` seam between configuration values and paths

use ticket_core::{Path, Rect};

/// A value that can trace itself inside a rectangle
///
/// Shapes hold no state between calls: the same shape and rect always
/// produce the same path, and the rect is supplied fresh on every layout
/// pass.
pub trait Shape {
    /// Build the path for this shape within `rect`
    fn path(&self, rect: Rect) -> Path;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn path(&self, rect: Rect) -> Path {
        (**self).path(rect)
    }
}
