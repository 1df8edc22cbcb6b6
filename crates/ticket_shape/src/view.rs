//! Ticket container
//!
//! Combines the outline, the separator line and caller content into one
//! drawable unit. Drawing order is back to front:
//!
//! 1. the outline filled with `fill_color`
//! 2. the separator stroked with `dashed_line_stroke` (when shown)
//! 3. the content, drawn over the full rect and not clipped to the outline
//!
//! # Example
//!
//! ```rust
//! use ticket_core::{Color, DrawContext, Path, Rect, RecordingContext, Size};
//! use ticket_shape::TicketView;
//!
//! let view = TicketView::new(|ctx: &mut dyn DrawContext, bounds: Rect| {
//!     // Barcode strip along the stub
//!     let strip = Rect::new(
//!         bounds.min_x() + 16.0,
//!         bounds.max_y() - 40.0,
//!         bounds.width() - 32.0,
//!         24.0,
//!     );
//!     ctx.fill_path(&Path::rect(strip), Color::BLACK);
//! })
//! .ticket_fill(Color::rgb(0.95, 0.95, 1.0))
//! .dashed_line(true);
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 300.0));
//! view.render(&mut ctx, Rect::new(0.0, 0.0, 200.0, 300.0));
//! assert_eq!(ctx.commands().len(), 3);
//! ```

use ticket_core::{Color, DrawCommand, DrawContext, Path, Rect, Stroke};

use crate::line::{build_line_path, LineConfig, DEFAULT_LINE_OFFSET};
use crate::outline::{
    build_outline_path, OutlineConfig, DEFAULT_CORNER_RADIUS, DEFAULT_CUTOUT_RADIUS,
    DEFAULT_CUTOUT_Y_POSITION,
};

/// Default dashed line width
pub const DEFAULT_DASHED_LINE_WIDTH: f32 = 0.5;
/// Default dash pattern: 4 on, 4 off
pub const DEFAULT_DASH_PATTERN: [f32; 2] = [4.0, 4.0];

/// Stroke used for the separator unless overridden
pub fn default_dashed_line_stroke() -> Stroke {
    Stroke::dashed(DEFAULT_DASHED_LINE_WIDTH, DEFAULT_DASH_PATTERN.to_vec())
}

/// Color used for the separator unless overridden: gray at 30% alpha
pub fn default_dashed_line_color() -> Color {
    Color::GRAY.with_alpha(0.3)
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Full styling of a ticket container
///
/// Every `with_*` method borrows the config and returns a new one with just
/// that field changed, so a shared base style can be specialised freely.
#[derive(Clone, Debug, PartialEq)]
pub struct TicketConfig {
    /// Fill of the outline
    pub fill_color: Color,
    /// Color of the separator stroke
    pub dashed_line_color: Color,
    /// Vertical position of the notches and of the separator
    pub cutout_y_position: f32,
    /// Radius of each notch
    pub cutout_radius: f32,
    /// Radius of the rounded corners
    pub corner_radius: f32,
    /// Distance the separator sits above the notch row
    pub dashed_line_offset: f32,
    /// Width and dash pattern of the separator
    pub dashed_line_stroke: Stroke,
    /// Whether the separator is drawn at all
    pub show_dashed_line: bool,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            fill_color: Color::WHITE,
            dashed_line_color: default_dashed_line_color(),
            cutout_y_position: DEFAULT_CUTOUT_Y_POSITION,
            cutout_radius: DEFAULT_CUTOUT_RADIUS,
            corner_radius: DEFAULT_CORNER_RADIUS,
            dashed_line_offset: DEFAULT_LINE_OFFSET,
            dashed_line_stroke: default_dashed_line_stroke(),
            show_dashed_line: true,
        }
    }
}

impl TicketConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_color(&self, color: Color) -> Self {
        Self {
            fill_color: color,
            ..self.clone()
        }
    }

    pub fn with_dashed_line_color(&self, color: Color) -> Self {
        Self {
            dashed_line_color: color,
            ..self.clone()
        }
    }

    pub fn with_cutout_y_position(&self, position: f32) -> Self {
        Self {
            cutout_y_position: position,
            ..self.clone()
        }
    }

    pub fn with_cutout_radius(&self, radius: f32) -> Self {
        Self {
            cutout_radius: radius,
            ..self.clone()
        }
    }

    pub fn with_corner_radius(&self, radius: f32) -> Self {
        Self {
            corner_radius: radius,
            ..self.clone()
        }
    }

    pub fn with_dashed_line_offset(&self, offset: f32) -> Self {
        Self {
            dashed_line_offset: offset,
            ..self.clone()
        }
    }

    pub fn with_dashed_line_stroke(&self, stroke: Stroke) -> Self {
        Self {
            dashed_line_stroke: stroke,
            ..self.clone()
        }
    }

    /// Show or hide the separator
    pub fn with_dashed_line(&self, show: bool) -> Self {
        Self {
            show_dashed_line: show,
            ..self.clone()
        }
    }

    /// Outline parameters derived from this config
    pub fn outline(&self) -> OutlineConfig {
        OutlineConfig::new(
            self.cutout_y_position,
            self.cutout_radius,
            self.corner_radius,
        )
    }

    /// Separator parameters derived from this config
    ///
    /// The separator shares the notch position so it lines up with them.
    pub fn separator(&self) -> LineConfig {
        LineConfig::new(self.cutout_y_position, self.dashed_line_offset)
    }

    /// Both background paths for `rect`
    pub fn paths(&self, rect: Rect) -> TicketPaths {
        TicketPaths {
            outline: build_outline_path(rect, &self.outline()),
            separator: self
                .show_dashed_line
                .then(|| build_line_path(rect, &self.separator())),
        }
    }
}

/// The background geometry of one ticket
#[derive(Clone, Debug, PartialEq)]
pub struct TicketPaths {
    pub outline: Path,
    /// `None` when the separator is hidden
    pub separator: Option<Path>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Content
// ─────────────────────────────────────────────────────────────────────────────

/// Something the host draws on top of the ticket background
pub trait TicketContent {
    /// Draw into `ctx`; `bounds` is the full ticket rect
    fn draw(&self, ctx: &mut dyn DrawContext, bounds: Rect);
}

impl<F> TicketContent for F
where
    F: Fn(&mut dyn DrawContext, Rect),
{
    fn draw(&self, ctx: &mut dyn DrawContext, bounds: Rect) {
        self(ctx, bounds)
    }
}

/// A ticket with nothing drawn over its background
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoContent;

impl TicketContent for NoContent {
    fn draw(&self, _ctx: &mut dyn DrawContext, _bounds: Rect) {}
}

/// Content the host has already recorded, replayed verbatim
///
/// Recorded coordinates are used as-is; the bounds are not applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedContent(pub Vec<DrawCommand>);

impl TicketContent for RecordedContent {
    fn draw(&self, ctx: &mut dyn DrawContext, _bounds: Rect) {
        for cmd in &self.0 {
            cmd.apply(ctx);
        }
    }
}

impl From<Vec<DrawCommand>> for RecordedContent {
    fn from(commands: Vec<DrawCommand>) -> Self {
        Self(commands)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Draw one ticket into `ctx`
///
/// This is a single stateless pass; call it again on every layout or draw.
pub fn render_ticket(
    ctx: &mut dyn DrawContext,
    rect: Rect,
    config: &TicketConfig,
    content: &dyn TicketContent,
) {
    tracing::debug!(
        ?rect,
        show_dashed_line = config.show_dashed_line,
        "rendering ticket"
    );

    let TicketPaths { outline, separator } = config.paths(rect);

    ctx.fill_path(&outline, config.fill_color);

    if let Some(separator) = separator {
        ctx.stroke_path(
            &separator,
            &config.dashed_line_stroke,
            config.dashed_line_color,
        );
    }

    content.draw(ctx, rect);
}

/// A ticket-shaped container around host content
#[derive(Clone, Debug)]
pub struct TicketView<C> {
    config: TicketConfig,
    content: C,
}

impl TicketView<NoContent> {
    /// A ticket with the default style and no content
    pub fn empty() -> Self {
        Self::new(NoContent)
    }
}

impl<C: TicketContent> TicketView<C> {
    /// Wrap `content` with the default ticket style
    pub fn new(content: C) -> Self {
        Self::with_config(TicketConfig::default(), content)
    }

    pub fn with_config(config: TicketConfig, content: C) -> Self {
        Self { config, content }
    }

    pub fn config(&self) -> &TicketConfig {
        &self.config
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Replace the whole style
    pub fn style(mut self, config: TicketConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the fill color of the ticket
    pub fn ticket_fill(mut self, color: Color) -> Self {
        self.config = self.config.with_fill_color(color);
        self
    }

    /// Set the separator color
    pub fn dashed_line_color(mut self, color: Color) -> Self {
        self.config = self.config.with_dashed_line_color(color);
        self
    }

    /// Set the separator stroke style
    pub fn dashed_line_style(mut self, stroke: Stroke) -> Self {
        self.config = self.config.with_dashed_line_stroke(stroke);
        self
    }

    /// Show or hide the separator
    pub fn dashed_line(mut self, show: bool) -> Self {
        self.config = self.config.with_dashed_line(show);
        self
    }

    pub fn cutout_y_position(mut self, position: f32) -> Self {
        self.config = self.config.with_cutout_y_position(position);
        self
    }

    pub fn cutout_radius(mut self, radius: f32) -> Self {
        self.config = self.config.with_cutout_radius(radius);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.config = self.config.with_corner_radius(radius);
        self
    }

    pub fn dashed_line_offset(mut self, offset: f32) -> Self {
        self.config = self.config.with_dashed_line_offset(offset);
        self
    }

    /// Draw background and content into `ctx`
    pub fn render(&self, ctx: &mut dyn DrawContext, rect: Rect) {
        render_ticket(ctx, rect, &self.config, &self.content);
    }
}
