//! Draw Context - Paths, strokes and the rendering seam
//!
//! Path builders in this workspace produce [`Path`] values made of a small,
//! backend-neutral command set (move, line, quadratic, cubic, center-form
//! arc, close). Anything that can draw those commands implements
//! [`DrawContext`]; [`RecordingContext`] records them for later replay.
//!
//! # Coordinate space
//!
//! All geometry is in a y-down screen space. Angles are radians measured
//! from the +x axis towards +y, so `FRAC_PI_2` points straight down.
//!
//! # Example
//!
//! ```rust
//! use ticket_core::{Color, DrawContext, Path, RecordingContext, Size, Stroke};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 100.0));
//! let path = Path::new().move_to(0.0, 50.0).line_to(200.0, 50.0);
//! ctx.stroke_path(&path, &Stroke::dashed(1.0, vec![4.0, 4.0]), Color::BLACK);
//! assert_eq!(ctx.commands().len(), 1);
//! ```

use std::f32::consts::{FRAC_PI_2, TAU};

use smallvec::SmallVec;

use crate::color::Color;
use crate::geometry::{Affine2D, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Miter limit (for Miter joins)
    pub miter_limit: f32,
    /// Dash pattern (empty for solid line)
    pub dash: Vec<f32>,
    /// Dash offset
    pub dash_offset: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 4.0,
            dash: Vec::new(),
            dash_offset: 0.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Create a dashed stroke with a zero dash offset
    pub fn dashed(width: f32, pattern: Vec<f32>) -> Self {
        Self::new(width).with_dash(pattern, 0.0)
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Set dash pattern
    pub fn with_dash(mut self, pattern: Vec<f32>, offset: f32) -> Self {
        self.dash = pattern;
        self.dash_offset = offset;
        self
    }

    /// Whether this stroke draws dashes
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Arcs
// ─────────────────────────────────────────────────────────────────────────────

/// Direction an arc travels between its start and end angles
///
/// Directions are screen-space (y-down): `Clockwise` means the angle
/// increases from start to end, `CounterClockwise` means it decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArcDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// A circular arc in center form
///
/// When an arc follows other segments, renderers connect the current point
/// to [`Arc::start_point`] with a straight line before tracing the arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub direction: ArcDirection,
}

impl Arc {
    pub fn new(
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: ArcDirection,
    ) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        }
    }

    /// Signed angle travelled from start to end, in `-TAU..=TAU`
    ///
    /// Positive sweeps increase the angle. A difference of a full turn or
    /// more in the arc's direction yields a full circle.
    pub fn sweep_angle(&self) -> f32 {
        let delta = self.end_angle - self.start_angle;
        match self.direction {
            ArcDirection::Clockwise => {
                if delta >= TAU {
                    TAU
                } else {
                    delta.rem_euclid(TAU)
                }
            }
            ArcDirection::CounterClockwise => {
                if delta <= -TAU {
                    -TAU
                } else {
                    -(-delta).rem_euclid(TAU)
                }
            }
        }
    }

    /// Point on the arc's circle at `angle`
    pub fn point_at(&self, angle: f32) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.start_angle + self.sweep_angle())
    }

    /// Point halfway along the sweep
    pub fn mid_point(&self) -> Point {
        self.point_at(self.start_angle + self.sweep_angle() / 2.0)
    }

    /// Tight bounds: both endpoints plus every axis extreme inside the sweep
    pub fn bounds(&self) -> Rect {
        let sweep = self.sweep_angle();
        let mut bounds = Rect::from_points(self.start_point(), self.end_point());
        if !sweep.is_finite() || !self.start_angle.is_finite() {
            return bounds;
        }

        // Bucket from the start angle's position on the circle
        let start = self.start_angle.rem_euclid(TAU);
        let lo = start.min(start + sweep);
        let hi = start.max(start + sweep);

        let first = (lo / FRAC_PI_2).ceil() as i32;
        let last = (hi / FRAC_PI_2).floor() as i32;
        // A sweep never exceeds a full turn, so at most five extremes apply
        for k in first..=last.min(first + 4) {
            bounds = bounds.expand_to_include(self.point_at(k as f32 * FRAC_PI_2));
        }

        bounds
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Quadratic Bézier curve
    QuadTo { control: Point, end: Point },
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Circular arc in center form
    Arc(Arc),
    /// Close the current subpath
    Close,
}

/// A vector path
///
/// Paths are plain values: builders consume and return `self`, and two
/// paths built from the same inputs compare equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: SmallVec::new(),
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Quadratic Bézier curve
    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Circular arc around `center`
    ///
    /// - `start_angle`, `end_angle`: radians from +x towards +y
    /// - `direction`: which way round the circle to travel
    pub fn arc(
        mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: ArcDirection,
    ) -> Self {
        self.commands.push(PathCommand::Arc(Arc::new(
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        )));
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::new()
            .move_to(rect.min_x(), rect.min_y())
            .line_to(rect.max_x(), rect.min_y())
            .line_to(rect.max_x(), rect.max_y())
            .line_to(rect.min_x(), rect.max_y())
            .close()
    }

    /// Create a line path
    pub fn line(from: Point, to: Point) -> Self {
        Self::new().move_to(from.x, from.y).line_to(to.x, to.y)
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of commands, including moves and closes
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First point of the path, if it starts with a move
    pub fn start_point(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Pen position after replaying every command
    pub fn current_point(&self) -> Option<Point> {
        let mut subpath_start = None;
        let mut current = None;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(*p);
                    current = Some(*p);
                }
                PathCommand::LineTo(p) => current = Some(*p),
                PathCommand::QuadTo { end, .. } | PathCommand::CubicTo { end, .. } => {
                    current = Some(*end)
                }
                PathCommand::Arc(arc) => current = Some(arc.end_point()),
                PathCommand::Close => current = subpath_start,
            }
        }

        current
    }

    /// Calculate the bounding rectangle of this path
    ///
    /// Béziers contribute their control-point hull; arcs contribute their
    /// exact extent.
    pub fn bounds(&self) -> Rect {
        let mut bounds: Option<Rect> = None;
        let mut include = |p: Point| {
            bounds = Some(match bounds {
                Some(b) => b.expand_to_include(p),
                None => Rect::from_points(p, p),
            });
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(*p),
                PathCommand::QuadTo { control, end } => {
                    include(*control);
                    include(*end);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(*control1);
                    include(*control2);
                    include(*end);
                }
                PathCommand::Arc(arc) => {
                    let arc_bounds = arc.bounds();
                    include(arc_bounds.origin);
                    include(Point::new(arc_bounds.max_x(), arc_bounds.max_y()));
                }
                PathCommand::Close => {}
            }
        }

        match bounds {
            Some(b) if b.origin.x.is_finite()
                && b.origin.y.is_finite()
                && b.size.width.is_finite()
                && b.size.height.is_finite() =>
            {
                b
            }
            _ => Rect::ZERO,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// Drawing surface for paths
///
/// Implementors keep a transform stack and an opacity stack and accept
/// filled and stroked paths. Everything the ticket renderer emits goes
/// through this trait.
pub trait DrawContext {
    /// Push a transform onto the stack (applied after the current one)
    fn push_transform(&mut self, transform: Affine2D);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current combined transform
    fn current_transform(&self) -> Affine2D;

    /// Push an opacity value (multiplied with parent)
    fn push_opacity(&mut self, opacity: f32);

    /// Pop the top opacity from the stack
    fn pop_opacity(&mut self);

    /// Get the current opacity
    fn current_opacity(&self) -> f32;

    /// Fill a path with a solid color
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke a path with a solid color
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color);

    /// Get the viewport size
    fn viewport_size(&self) -> Size;
}

/// Extension trait for DrawContext with closure-scoped helpers
pub trait DrawContextExt: DrawContext {
    /// Draw inside a translated coordinate space
    fn translated<F: FnOnce(&mut Self)>(&mut self, dx: f32, dy: f32, f: F)
    where
        Self: Sized,
    {
        self.push_transform(Affine2D::translation(dx, dy));
        f(self);
        self.pop_transform();
    }
}

// Blanket implementation for all DrawContext implementers
impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    // State
    PushTransform(Affine2D),
    PopTransform,
    PushOpacity(f32),
    PopOpacity,

    // 2D Drawing
    FillPath {
        path: Path,
        color: Color,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        color: Color,
    },
}

impl DrawCommand {
    /// Replay this command onto another context
    pub fn apply(&self, ctx: &mut dyn DrawContext) {
        match self {
            DrawCommand::PushTransform(t) => ctx.push_transform(*t),
            DrawCommand::PopTransform => ctx.pop_transform(),
            DrawCommand::PushOpacity(o) => ctx.push_opacity(*o),
            DrawCommand::PopOpacity => ctx.pop_opacity(),
            DrawCommand::FillPath { path, color } => ctx.fill_path(path, *color),
            DrawCommand::StrokePath {
                path,
                stroke,
                color,
            } => ctx.stroke_path(path, stroke, *color),
        }
    }
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Affine2D>,
    opacity_stack: Vec<f32>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Affine2D::IDENTITY],
            opacity_stack: vec![1.0],
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Affine2D) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        } else {
            tracing::debug!("pop_transform with no pushed transform");
        }
    }

    fn current_transform(&self) -> Affine2D {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn push_opacity(&mut self, opacity: f32) {
        self.commands.push(DrawCommand::PushOpacity(opacity));
        let current = self.current_opacity();
        self.opacity_stack.push(current * opacity);
    }

    fn pop_opacity(&mut self) {
        self.commands.push(DrawCommand::PopOpacity);
        if self.opacity_stack.len() > 1 {
            self.opacity_stack.pop();
        } else {
            tracing::debug!("pop_opacity with no pushed opacity");
        }
    }

    fn current_opacity(&self) -> f32 {
        *self.opacity_stack.last().unwrap_or(&1.0)
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            color,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}
