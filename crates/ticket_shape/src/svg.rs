//! SVG export
//!
//! [`path_data`] turns a [`Path`] into an SVG `d` attribute, and
//! [`SvgContext`] is a [`DrawContext`] that writes every fill and stroke into
//! a standalone SVG document. Render a ticket into an `SvgContext` to get a
//! file any browser or vector editor can open.
//!
//! ```rust
//! use ticket_core::{Rect, Size};
//! use ticket_shape::{svg::SvgContext, TicketView};
//!
//! let mut svg = SvgContext::new(Size::new(200.0, 300.0));
//! TicketView::empty().render(&mut svg, Rect::new(0.0, 0.0, 200.0, 300.0));
//! let document = svg.finish();
//! assert!(document.starts_with("<svg"));
//! ```

use std::f32::consts::{PI, TAU};

use ticket_core::{
    Affine2D, Arc, Color, DrawContext, LineCap, LineJoin, Path, PathCommand, Point, Size, Stroke,
};

/// Points closer than this are treated as the same pen position
const SAME_POINT_EPSILON: f32 = 1e-3;

/// Format a coordinate with at most three decimals
fn num(v: f32) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // Avoid "-0"
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

fn point(p: Point) -> String {
    format!("{} {}", num(p.x), num(p.y))
}

/// Append an endpoint-form arc, splitting full circles in two
fn push_arc(out: &mut Vec<String>, arc: &Arc) {
    let sweep = arc.sweep_angle();
    let radius = arc.radius.abs();

    if radius == 0.0 || sweep == 0.0 {
        out.push(format!("L{}", point(arc.end_point())));
        return;
    }

    let sweep_flag = if sweep > 0.0 { 1 } else { 0 };
    let r = num(radius);

    if sweep.abs() >= TAU {
        let half = arc.point_at(arc.start_angle + sweep / 2.0);
        out.push(format!("A{r} {r} 0 0 {sweep_flag} {}", point(half)));
        out.push(format!("A{r} {r} 0 0 {sweep_flag} {}", point(arc.end_point())));
        return;
    }

    let large_arc = if sweep.abs() > PI { 1 } else { 0 };
    out.push(format!(
        "A{r} {r} 0 {large_arc} {sweep_flag} {}",
        point(arc.end_point())
    ));
}

/// Convert a path into SVG path data
///
/// Arcs become endpoint-form `A` commands preceded by a line to their start
/// when the pen is elsewhere. Zero-radius arcs degrade to `L`.
pub fn path_data(path: &Path) -> String {
    let mut out = Vec::with_capacity(path.len());
    let mut subpath_start: Option<Point> = None;
    let mut current: Option<Point> = None;

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                out.push(format!("M{}", point(*p)));
                subpath_start = Some(*p);
                current = Some(*p);
            }
            PathCommand::LineTo(p) => {
                out.push(format!("L{}", point(*p)));
                current = Some(*p);
            }
            PathCommand::QuadTo { control, end } => {
                out.push(format!("Q{} {}", point(*control), point(*end)));
                current = Some(*end);
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                out.push(format!(
                    "C{} {} {}",
                    point(*control1),
                    point(*control2),
                    point(*end)
                ));
                current = Some(*end);
            }
            PathCommand::Arc(arc) => {
                let start = arc.start_point();
                match current {
                    None => {
                        out.push(format!("M{}", point(start)));
                        subpath_start = Some(start);
                    }
                    Some(p) if p.distance(start) > SAME_POINT_EPSILON => {
                        out.push(format!("L{}", point(start)));
                    }
                    Some(_) => {}
                }
                push_arc(&mut out, arc);
                current = Some(arc.end_point());
            }
            PathCommand::Close => {
                out.push("Z".to_string());
                current = subpath_start;
            }
        }
    }

    out.join(" ")
}

// ─────────────────────────────────────────────────────────────────────────────
// SVG Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw context that writes an SVG document
///
/// Transforms and opacity become nested `<g>` groups. Groups still open
/// when [`SvgContext::finish`] is called are closed automatically.
#[derive(Debug)]
pub struct SvgContext {
    size: Size,
    body: Vec<String>,
    transform_stack: Vec<Affine2D>,
    opacity_stack: Vec<f32>,
    open_groups: usize,
}

impl SvgContext {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: Vec::new(),
            transform_stack: vec![Affine2D::IDENTITY],
            opacity_stack: vec![1.0],
            open_groups: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.open_groups + 1)
    }

    /// Close open groups and return the finished document
    pub fn finish(mut self) -> String {
        while self.open_groups > 0 {
            self.open_groups -= 1;
            let indent = self.indent();
            self.body.push(format!("{indent}</g>"));
        }

        let width = num(self.size.width);
        let height = num(self.size.height);

        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );
        for line in &self.body {
            doc.push_str(line);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }
}

fn solid_paint(attr: &str, color: &Color) -> String {
    let mut out = format!("{attr}=\"{}\"", color.to_rgb_hex_string());
    if color.a < 1.0 {
        out.push_str(&format!(" {attr}-opacity=\"{}\"", num(color.a)));
    }
    out
}

fn stroke_attributes(stroke: &Stroke) -> String {
    let mut out = format!("stroke-width=\"{}\"", num(stroke.width));

    match stroke.cap {
        LineCap::Butt => {}
        LineCap::Round => out.push_str(" stroke-linecap=\"round\""),
        LineCap::Square => out.push_str(" stroke-linecap=\"square\""),
    }
    match stroke.join {
        LineJoin::Miter => {
            if stroke.miter_limit != 4.0 {
                out.push_str(&format!(
                    " stroke-miterlimit=\"{}\"",
                    num(stroke.miter_limit)
                ));
            }
        }
        LineJoin::Round => out.push_str(" stroke-linejoin=\"round\""),
        LineJoin::Bevel => out.push_str(" stroke-linejoin=\"bevel\""),
    }
    if stroke.is_dashed() {
        let dashes: Vec<String> = stroke.dash.iter().map(|d| num(*d)).collect();
        out.push_str(&format!(" stroke-dasharray=\"{}\"", dashes.join(" ")));
        if stroke.dash_offset != 0.0 {
            out.push_str(&format!(
                " stroke-dashoffset=\"{}\"",
                num(stroke.dash_offset)
            ));
        }
    }
    out
}

impl DrawContext for SvgContext {
    fn push_transform(&mut self, transform: Affine2D) {
        let [a, b, c, d, e, f] = transform.elements;
        let indent = self.indent();
        self.body.push(format!(
            "{indent}<g transform=\"matrix({} {} {} {} {} {})\">",
            num(a),
            num(b),
            num(c),
            num(d),
            num(e),
            num(f)
        ));
        self.open_groups += 1;
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        if self.transform_stack.len() > 1 && self.open_groups > 0 {
            self.transform_stack.pop();
            self.open_groups -= 1;
            let indent = self.indent();
            self.body.push(format!("{indent}</g>"));
        } else {
            tracing::debug!("pop_transform with no open transform group");
        }
    }

    fn current_transform(&self) -> Affine2D {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn push_opacity(&mut self, opacity: f32) {
        let indent = self.indent();
        self.body
            .push(format!("{indent}<g opacity=\"{}\">", num(opacity)));
        self.open_groups += 1;
        let current = self.current_opacity();
        self.opacity_stack.push(current * opacity);
    }

    fn pop_opacity(&mut self) {
        if self.opacity_stack.len() > 1 && self.open_groups > 0 {
            self.opacity_stack.pop();
            self.open_groups -= 1;
            let indent = self.indent();
            self.body.push(format!("{indent}</g>"));
        } else {
            tracing::debug!("pop_opacity with no open opacity group");
        }
    }

    fn current_opacity(&self) -> f32 {
        *self.opacity_stack.last().unwrap_or(&1.0)
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let fill = solid_paint("fill", &color);
        let indent = self.indent();
        self.body
            .push(format!("{indent}<path d=\"{}\" {fill}/>", path_data(path)));
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        let paint = solid_paint("stroke", &color);
        let indent = self.indent();
        self.body.push(format!(
            "{indent}<path d=\"{}\" fill=\"none\" {paint} {}/>",
            path_data(path),
            stroke_attributes(stroke)
        ));
    }

    fn viewport_size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{build_outline_path, OutlineConfig};
    use crate::view::TicketView;
    use ticket_core::{ArcDirection, DrawContextExt, Rect};

    #[test]
    fn test_number_formatting() {
        assert_eq!(num(16.0), "16");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(199.999_99), "200");
        assert_eq!(num(-0.000_1), "0");
    }

    #[test]
    fn test_line_path_data() {
        let path = Path::line(Point::new(0.0, 215.0), Point::new(200.0, 215.0));
        assert_eq!(path_data(&path), "M0 215 L200 215");
        assert_eq!(
            path_data(&Path::rect(Rect::new(0.0, 0.0, 2.0, 1.0))),
            "M0 0 L2 0 L2 1 L0 1 Z"
        );
    }

    #[test]
    fn test_outline_path_data() {
        let path = build_outline_path(
            Rect::new(0.0, 0.0, 200.0, 300.0),
            &OutlineConfig::default(),
        );
        assert_eq!(
            path_data(&path),
            "M16 0 L184 0 Q200 0 200 16 L200 217 A8 8 0 0 0 200 233 \
             L200 284 Q200 300 184 300 L16 300 Q0 300 0 284 L0 233 \
             A8 8 0 0 0 0 217 L0 16 Q0 0 16 0"
        );
    }

    #[test]
    fn test_arc_without_current_point_moves_first() {
        let path = Path::new().arc(
            Point::new(10.0, 10.0),
            5.0,
            0.0,
            PI / 2.0,
            ArcDirection::Clockwise,
        );
        assert_eq!(path_data(&path), "M15 10 A5 5 0 0 1 10 15");
    }

    #[test]
    fn test_full_circle_is_split() {
        let path = Path::new().arc(
            Point::ZERO,
            1.0,
            0.0,
            TAU,
            ArcDirection::Clockwise,
        );
        assert_eq!(path_data(&path), "M1 0 A1 1 0 0 1 -1 0 A1 1 0 0 1 1 0");
    }

    #[test]
    fn test_zero_radius_arc_degrades_to_line() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .arc(Point::new(0.0, 5.0), 0.0, 0.0, PI, ArcDirection::Clockwise);
        assert_eq!(path_data(&path), "M0 0 L0 5 L0 5");
    }

    #[test]
    fn test_ticket_document() {
        let mut svg = SvgContext::new(Size::new(200.0, 300.0));
        TicketView::empty().render(&mut svg, Rect::new(0.0, 0.0, 200.0, 300.0));
        let doc = svg.finish();

        assert!(doc.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"300\""
        ));
        assert!(doc.contains("fill=\"#ffffff\"/>"));
        assert!(doc.contains(
            "d=\"M0 215 L200 215\" fill=\"none\" stroke=\"#808080\" stroke-opacity=\"0.3\""
        ));
        assert!(doc.contains("stroke-width=\"0.5\" stroke-dasharray=\"4 4\""));
        assert!(doc.ends_with("</svg>\n"));
    }

    #[test]
    fn test_groups_are_balanced() {
        let mut svg = SvgContext::new(Size::new(10.0, 10.0));
        svg.push_opacity(0.5);
        svg.translated(2.0, 3.0, |ctx| {
            ctx.fill_path(&Path::rect(Rect::new(0.0, 0.0, 1.0, 1.0)), Color::RED);
        });
        // Left open on purpose
        let doc = svg.finish();

        assert!(doc.contains("<g opacity=\"0.5\">"));
        assert!(doc.contains("<g transform=\"matrix(1 0 0 1 2 3)\">"));
        assert_eq!(doc.matches("<g ").count(), doc.matches("</g>").count());
    }
}
