//! Separator line
//!
//! A single horizontal segment spanning the full width of the ticket, drawn
//! a little above the notch row to suggest a tear line. Stroke it with a
//! dashed [`Stroke`](ticket_core::Stroke) to get the perforated look.

use ticket_core::{Path, Rect};

use crate::outline::DEFAULT_CUTOUT_Y_POSITION;
use crate::shape::Shape;

/// Default distance the line sits above its fractional position
pub const DEFAULT_LINE_OFFSET: f32 = 10.0;

/// Parameters of the separator line
///
/// `y_position` is independent of
/// [`OutlineConfig::cutout_y_position`](crate::OutlineConfig::cutout_y_position);
/// keep them equal for the line to track the notches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineConfig {
    /// Vertical position as a fraction of the height, 0.0 (top) to 1.0 (bottom)
    pub y_position: f32,
    /// Distance subtracted from the computed y; negative values move the line down
    pub offset: f32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            y_position: DEFAULT_CUTOUT_Y_POSITION,
            offset: DEFAULT_LINE_OFFSET,
        }
    }
}

impl LineConfig {
    pub fn new(y_position: f32, offset: f32) -> Self {
        Self { y_position, offset }
    }

    pub fn with_y_position(mut self, position: f32) -> Self {
        self.y_position = position;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Y coordinate of the line within `rect`
    pub fn y(&self, rect: Rect) -> f32 {
        rect.min_y() + rect.height() * self.y_position - self.offset
    }
}

impl Shape for LineConfig {
    fn path(&self, rect: Rect) -> Path {
        build_line_path(rect, self)
    }
}

/// Build the separator line inside `rect`
pub fn build_line_path(rect: Rect, config: &LineConfig) -> Path {
    let y = config.y(rect);
    tracing::trace!(?rect, ?config, y, "building separator line");

    Path::new()
        .move_to(rect.min_x(), y)
        .line_to(rect.max_x(), y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_core::{PathCommand, Point};

    fn ticket_rect() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 300.0)
    }

    #[test]
    fn test_default_config() {
        let line = LineConfig::default();
        assert_eq!(line.y_position, 0.75);
        assert_eq!(line.offset, 10.0);
    }

    #[test]
    fn test_custom_config() {
        let line = LineConfig::new(0.5, 15.0);
        assert_eq!(line.y_position, 0.5);
        assert_eq!(line.offset, 15.0);
        assert_eq!(
            line,
            LineConfig::default().with_y_position(0.5).with_offset(15.0)
        );
    }

    #[test]
    fn test_default_line_position() {
        let path = build_line_path(ticket_rect(), &LineConfig::default());

        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 215.0)),
                PathCommand::LineTo(Point::new(200.0, 215.0)),
            ]
        );
        let bounds = path.bounds();
        assert_eq!(bounds.min_y(), 215.0);
        assert_eq!(bounds.max_y(), 215.0);
        assert_eq!(bounds.width(), 200.0);
    }

    #[test]
    fn test_zero_offset() {
        let line = LineConfig::default().with_offset(0.0);
        let path = build_line_path(ticket_rect(), &line);

        assert!(!path.is_empty());
        assert_eq!(path.bounds().min_y(), 225.0);
    }

    #[test]
    fn test_negative_offset_moves_down() {
        let line = LineConfig::default().with_offset(-10.0);
        assert_eq!(line.y(ticket_rect()), 235.0);
    }

    #[test]
    fn test_spans_offset_rect() {
        let rect = Rect::new(20.0, 40.0, 100.0, 100.0);
        let path = LineConfig::new(0.5, 0.0).path(rect);
        assert_eq!(path.start_point(), Some(Point::new(20.0, 90.0)));
        assert_eq!(path.current_point(), Some(Point::new(120.0, 90.0)));
    }

    #[test]
    fn test_idempotent() {
        let line = LineConfig::new(0.3, 4.0);
        assert_eq!(
            build_line_path(ticket_rect(), &line),
            build_line_path(ticket_rect(), &line)
        );
    }
}
