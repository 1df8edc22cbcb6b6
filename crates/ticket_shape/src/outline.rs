//! Ticket outline
//!
//! A rounded rectangle with an inward semicircular notch on the left and
//! right edges. Both notches sit at the same fraction of the height.
//!
//! ```text
//!   ╭──────────────╮
//!   │              │
//!   │              │
//!   ◖              ◗   <- cutout_y_position
//!   │              │
//!   ╰──────────────╯
//! ```
//!
//! # Example
//!
//! ```rust
//! use ticket_core::Rect;
//! use ticket_shape::{build_outline_path, OutlineConfig};
//!
//! let config = OutlineConfig::default().with_corner_radius(12.0);
//! let path = build_outline_path(Rect::new(0.0, 0.0, 200.0, 300.0), &config);
//! assert_eq!(path.len(), 13);
//! ```

use std::f32::consts::FRAC_PI_2;

use ticket_core::{ArcDirection, Path, Point, Rect};

use crate::shape::Shape;

/// Default vertical position of the notches, as a fraction of the height
pub const DEFAULT_CUTOUT_Y_POSITION: f32 = 0.75;
/// Default notch radius
pub const DEFAULT_CUTOUT_RADIUS: f32 = 8.0;
/// Default corner radius
pub const DEFAULT_CORNER_RADIUS: f32 = 16.0;

/// Parameters of the ticket outline
///
/// No value is clamped. Radii larger than half the rect, negative radii or
/// positions outside `0.0..=1.0` all produce a path; it just looks wrong.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineConfig {
    /// Vertical position of both notch centers, 0.0 (top) to 1.0 (bottom)
    pub cutout_y_position: f32,
    /// Radius of each semicircular notch
    pub cutout_radius: f32,
    /// Radius of the four rounded corners
    pub corner_radius: f32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            cutout_y_position: DEFAULT_CUTOUT_Y_POSITION,
            cutout_radius: DEFAULT_CUTOUT_RADIUS,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl OutlineConfig {
    pub fn new(cutout_y_position: f32, cutout_radius: f32, corner_radius: f32) -> Self {
        Self {
            cutout_y_position,
            cutout_radius,
            corner_radius,
        }
    }

    /// Set the notch position
    pub fn with_cutout_y_position(mut self, position: f32) -> Self {
        self.cutout_y_position = position;
        self
    }

    /// Set the notch radius
    pub fn with_cutout_radius(mut self, radius: f32) -> Self {
        self.cutout_radius = radius;
        self
    }

    /// Set the corner radius
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Y coordinate of the notch centers within `rect`
    pub fn cutout_y(&self, rect: Rect) -> f32 {
        rect.min_y() + rect.height() * self.cutout_y_position
    }
}

impl Shape for OutlineConfig {
    fn path(&self, rect: Rect) -> Path {
        build_outline_path(rect, self)
    }
}

/// Build the ticket outline inside `rect`
///
/// The path is one move followed by twelve segments, traced clockwise on
/// screen from the end of the top-left corner. Corners are quadratic curves
/// whose control point is the rect's own vertex. The final corner ends on
/// the starting point, so no explicit close is emitted.
pub fn build_outline_path(rect: Rect, config: &OutlineConfig) -> Path {
    let min_x = rect.min_x();
    let min_y = rect.min_y();
    let max_x = rect.max_x();
    let max_y = rect.max_y();

    let corner = config.corner_radius;
    let notch = config.cutout_radius;
    let cutout_y = config.cutout_y(rect);

    tracing::trace!(?rect, ?config, cutout_y, "building ticket outline");

    Path::new()
        .move_to(min_x + corner, min_y)
        // Top edge and top-right corner
        .line_to(max_x - corner, min_y)
        .quad_to(max_x, min_y, max_x, min_y + corner)
        // Right edge down to the notch
        .line_to(max_x, cutout_y - notch)
        // Right notch, bulging into the ticket
        .arc(
            Point::new(max_x, cutout_y),
            notch,
            -FRAC_PI_2,
            FRAC_PI_2,
            ArcDirection::CounterClockwise,
        )
        .line_to(max_x, max_y - corner)
        // Bottom-right corner and bottom edge
        .quad_to(max_x, max_y, max_x - corner, max_y)
        .line_to(min_x + corner, max_y)
        // Bottom-left corner, then up to the notch
        .quad_to(min_x, max_y, min_x, max_y - corner)
        .line_to(min_x, cutout_y + notch)
        // Left notch, mirrored
        .arc(
            Point::new(min_x, cutout_y),
            notch,
            FRAC_PI_2,
            -FRAC_PI_2,
            ArcDirection::CounterClockwise,
        )
        .line_to(min_x, min_y + corner)
        // Top-left corner back to the start
        .quad_to(min_x, min_y, min_x + corner, min_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_core::PathCommand;

    fn ticket_rect() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 300.0)
    }

    fn close_to(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-3
    }

    fn arcs(path: &Path) -> Vec<ticket_core::Arc> {
        path.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::Arc(arc) => Some(*arc),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = OutlineConfig::default();
        assert_eq!(config.cutout_y_position, 0.75);
        assert_eq!(config.cutout_radius, 8.0);
        assert_eq!(config.corner_radius, 16.0);
    }

    #[test]
    fn test_custom_config() {
        let config = OutlineConfig::new(0.6, 12.0, 20.0);
        assert_eq!(config.cutout_y_position, 0.6);
        assert_eq!(config.cutout_radius, 12.0);
        assert_eq!(config.corner_radius, 20.0);
        assert_eq!(
            config,
            OutlineConfig::default()
                .with_cutout_y_position(0.6)
                .with_cutout_radius(12.0)
                .with_corner_radius(20.0)
        );
    }

    #[test]
    fn test_default_path_bounds_match_rect() {
        let rect = ticket_rect();
        let path = build_outline_path(rect, &OutlineConfig::default());

        assert!(!path.is_empty());
        let bounds = path.bounds();
        assert!((bounds.width() - rect.width()).abs() <= 1.0);
        assert!((bounds.height() - rect.height()).abs() <= 1.0);
    }

    #[test]
    fn test_bounds_match_offset_rects() {
        for rect in [
            Rect::new(10.0, 20.0, 200.0, 300.0),
            Rect::new(-50.0, 5.0, 80.0, 60.0),
            Rect::new(0.0, 0.0, 1000.0, 120.0),
        ] {
            let bounds = build_outline_path(rect, &OutlineConfig::default())
                .bounds();
            assert!((bounds.min_x() - rect.min_x()).abs() <= 1.0);
            assert!((bounds.min_y() - rect.min_y()).abs() <= 1.0);
            assert!((bounds.width() - rect.width()).abs() <= 1.0);
            assert!((bounds.height() - rect.height()).abs() <= 1.0);
        }
    }

    #[test]
    fn test_segment_sequence() {
        let path = build_outline_path(ticket_rect(), &OutlineConfig::default());
        let commands = path.commands();

        // One move plus twelve segments, no explicit close
        assert_eq!(commands.len(), 13);
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(16.0, 0.0)));
        assert_eq!(commands[1], PathCommand::LineTo(Point::new(184.0, 0.0)));
        assert_eq!(
            commands[2],
            PathCommand::QuadTo {
                control: Point::new(200.0, 0.0),
                end: Point::new(200.0, 16.0),
            }
        );
        assert_eq!(commands[3], PathCommand::LineTo(Point::new(200.0, 217.0)));
        assert!(matches!(commands[4], PathCommand::Arc(_)));
        assert_eq!(commands[5], PathCommand::LineTo(Point::new(200.0, 284.0)));
        assert_eq!(
            commands[6],
            PathCommand::QuadTo {
                control: Point::new(200.0, 300.0),
                end: Point::new(184.0, 300.0),
            }
        );
        assert_eq!(commands[7], PathCommand::LineTo(Point::new(16.0, 300.0)));
        assert_eq!(
            commands[8],
            PathCommand::QuadTo {
                control: Point::new(0.0, 300.0),
                end: Point::new(0.0, 284.0),
            }
        );
        assert_eq!(commands[9], PathCommand::LineTo(Point::new(0.0, 233.0)));
        assert!(matches!(commands[10], PathCommand::Arc(_)));
        assert_eq!(commands[11], PathCommand::LineTo(Point::new(0.0, 16.0)));
        assert_eq!(
            commands[12],
            PathCommand::QuadTo {
                control: Point::new(0.0, 0.0),
                end: Point::new(16.0, 0.0),
            }
        );
        assert!(!commands.contains(&PathCommand::Close));
    }

    #[test]
    fn test_path_ends_where_it_starts() {
        let path = build_outline_path(ticket_rect(), &OutlineConfig::default());
        assert_eq!(path.start_point(), path.current_point());
    }

    #[test]
    fn test_notches_bulge_inward() {
        let rect = ticket_rect();
        let path = build_outline_path(rect, &OutlineConfig::default());
        let notches = arcs(&path);
        assert_eq!(notches.len(), 2);

        let right = notches[0];
        assert_eq!(right.center, Point::new(200.0, 225.0));
        assert!(close_to(right.start_point(), Point::new(200.0, 217.0)));
        assert!(close_to(right.mid_point(), Point::new(192.0, 225.0)));
        assert!(close_to(right.end_point(), Point::new(200.0, 233.0)));

        let left = notches[1];
        assert_eq!(left.center, Point::new(0.0, 225.0));
        assert!(close_to(left.start_point(), Point::new(0.0, 233.0)));
        assert!(close_to(left.mid_point(), Point::new(8.0, 225.0)));
        assert!(close_to(left.end_point(), Point::new(0.0, 217.0)));

        assert!(rect.contains(right.mid_point()));
        assert!(rect.contains(left.mid_point()));
    }

    #[test]
    fn test_cutout_follows_rect_origin() {
        let rect = Rect::new(40.0, 100.0, 200.0, 200.0);
        let config = OutlineConfig::default().with_cutout_y_position(0.5);
        assert_eq!(config.cutout_y(rect), 200.0);

        let notches = arcs(&build_outline_path(rect, &config));
        assert_eq!(notches[0].center, Point::new(240.0, 200.0));
        assert_eq!(notches[1].center, Point::new(40.0, 200.0));
    }

    #[test]
    fn test_zero_radii() {
        let config = OutlineConfig::default()
            .with_cutout_radius(0.0)
            .with_corner_radius(0.0);
        let rect = ticket_rect();
        let path = build_outline_path(rect, &config);

        assert!(!path.is_empty());
        assert_eq!(path.len(), 13);
        assert_eq!(path.bounds(), rect);
        for notch in arcs(&path) {
            assert!(close_to(notch.start_point(), notch.end_point()));
        }
    }

    #[test]
    fn test_extreme_cutout_positions() {
        for position in [0.0, 1.0] {
            let config = OutlineConfig::default().with_cutout_y_position(position);
            let path = build_outline_path(ticket_rect(), &config);
            assert!(!path.is_empty(), "path empty at position {position}");
            assert_eq!(path.len(), 13);
        }
    }

    #[test]
    fn test_degenerate_inputs_are_accepted() {
        let oversized = OutlineConfig::new(2.5, 500.0, 400.0);
        let path = build_outline_path(Rect::new(0.0, 0.0, -20.0, 0.0), &oversized);
        assert_eq!(path.len(), 13);
    }

    #[test]
    fn test_idempotent() {
        let config = OutlineConfig::new(0.6, 10.0, 12.0);
        let rect = Rect::new(3.0, 4.0, 250.0, 350.0);
        assert_eq!(
            build_outline_path(rect, &config),
            build_outline_path(rect, &config)
        );
        assert_eq!(config.path(rect), build_outline_path(rect, &config));
    }
}
