use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::primitives::trim_float;
use crate::render::{
    CirclePrimitive, Color, GroupPrimitive, LinePrimitive, Node, PolylinePrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes frames into standalone SVG documents.
///
/// The document uses a `viewBox` matching the frame viewport, stretches to the
/// container width, and keeps annotations as `<title>` children so hosts get
/// native hover tooltips.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn last_document(&self) -> &str {
        &self.last_document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    /// Renders `frame` and returns the resulting document.
    pub fn render_to_string(&mut self, frame: &RenderFrame) -> ChartResult<String> {
        self.render(frame)?;
        Ok(self.last_document.clone())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut writer = SvgWriter::default();
        writer.open_document(frame)?;
        for node in &frame.nodes {
            writer.node(node)?;
        }
        writer.out.push_str("</svg>");

        self.last_document = writer.out;
        self.last_stats = writer.stats;
        Ok(())
    }
}

#[derive(Default)]
struct SvgWriter {
    out: String,
    stats: SvgRenderStats,
}

impl SvgWriter {
    fn open_document(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        write!(
            self.out,
            r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="0 0 {width} {height}" width="100%" height="{height}" role="img" aria-label="{}">"#,
            escape(&frame.aria_label)
        )
        .map_err(map_fmt_error)
    }

    fn node(&mut self, node: &Node) -> ChartResult<()> {
        match node {
            Node::Rect(rect) => self.rect(rect),
            Node::Line(line) => self.line(*line),
            Node::Polyline(polyline) => self.polyline(polyline),
            Node::Circle(circle) => self.circle(circle),
            Node::Text(text) => self.text(text),
            Node::Group(group) => self.group(group),
        }
    }

    fn group(&mut self, group: &GroupPrimitive) -> ChartResult<()> {
        let opened = match group.layer {
            Some(kind) => write!(self.out, r#"<g class="{}">"#, kind.as_str()),
            None => write!(self.out, "<g>"),
        };
        opened.map_err(map_fmt_error)?;
        for child in &group.children {
            self.node(child)?;
        }
        self.out.push_str("</g>");
        Ok(())
    }

    fn rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        let max_radius = (rect.width * 0.5).min(rect.height * 0.5).max(0.0);
        let top = rect.corners.top.clamp(0.0, max_radius);
        let bottom = rect.corners.bottom.clamp(0.0, max_radius);

        if top == bottom {
            write!(
                self.out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                trim_float(rect.x),
                trim_float(rect.y),
                trim_float(rect.width),
                trim_float(rect.height)
            )
            .map_err(map_fmt_error)?;
            if top > 0.0 {
                write!(self.out, r#" rx="{}""#, trim_float(top)).map_err(map_fmt_error)?;
            }
        } else {
            write!(
                self.out,
                r#"<path d="{}""#,
                edge_rounded_rect_path(rect, top, bottom)
            )
            .map_err(map_fmt_error)?;
        }

        self.paint_attributes(rect.fill, rect.opacity)?;
        if let Some(stroke) = rect.stroke {
            write!(
                self.out,
                r#" stroke="{}" stroke-width="{}""#,
                stroke.color.to_css(),
                trim_float(stroke.width)
            )
            .map_err(map_fmt_error)?;
        }

        let tag = if top == bottom { "rect" } else { "path" };
        self.close_with_title(tag, rect.title.as_deref())?;
        self.stats.rects_drawn += 1;
        Ok(())
    }

    fn line(&mut self, line: LinePrimitive) -> ChartResult<()> {
        write!(
            self.out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            trim_float(line.x1),
            trim_float(line.y1),
            trim_float(line.x2),
            trim_float(line.y2),
            line.color.to_css(),
            trim_float(line.stroke_width)
        )
        .map_err(map_fmt_error)?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn polyline(&mut self, polyline: &PolylinePrimitive) -> ChartResult<()> {
        let points = polyline
            .points
            .iter()
            .map(|(x, y)| format!("{},{}", trim_float(*x), trim_float(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            self.out,
            r#"<polyline points="{points}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            polyline.color.to_css(),
            trim_float(polyline.stroke_width)
        )
        .map_err(map_fmt_error)?;
        self.stats.polylines_drawn += 1;
        Ok(())
    }

    fn circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()> {
        write!(
            self.out,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            trim_float(circle.cx),
            trim_float(circle.cy),
            trim_float(circle.radius)
        )
        .map_err(map_fmt_error)?;
        self.paint_attributes(circle.fill, 1.0)?;
        self.close_with_title("circle", circle.title.as_deref())?;
        self.stats.circles_drawn += 1;
        Ok(())
    }

    fn text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        write!(
            self.out,
            r#"<text x="{}" y="{}" fill="{}" font-size="{}" text-anchor="{anchor}""#,
            trim_float(text.x),
            trim_float(text.y),
            text.color.to_css(),
            trim_float(text.font_size_px)
        )
        .map_err(map_fmt_error)?;
        if !text.font_family.is_empty() {
            write!(self.out, r#" font-family="{}""#, escape(&text.font_family))
                .map_err(map_fmt_error)?;
        }
        write!(self.out, ">{}</text>", escape(&text.text)).map_err(map_fmt_error)?;
        self.stats.texts_drawn += 1;
        Ok(())
    }

    fn paint_attributes(&mut self, fill: Color, opacity: f64) -> ChartResult<()> {
        write!(self.out, r#" fill="{}""#, fill.to_css()).map_err(map_fmt_error)?;
        if opacity < 1.0 {
            write!(self.out, r#" opacity="{}""#, trim_float(opacity)).map_err(map_fmt_error)?;
        }
        Ok(())
    }

    fn close_with_title(&mut self, tag: &str, title: Option<&str>) -> ChartResult<()> {
        let closed = match title {
            Some(title) => write!(self.out, "><title>{}</title></{tag}>", escape(title)),
            None => write!(self.out, "/>"),
        };
        closed.map_err(map_fmt_error)
    }
}

/// Path for a rectangle whose top corners use `top` and bottom corners use `bottom`.
fn edge_rounded_rect_path(rect: &RectPrimitive, top: f64, bottom: f64) -> String {
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    let f = trim_float;
    let mut d = format!("M{} {}H{}", f(x + top), f(y), f(x + w - top));
    if top > 0.0 {
        let _ = write!(d, "A{} {} 0 0 1 {} {}", f(top), f(top), f(x + w), f(y + top));
    }
    let _ = write!(d, "V{}", f(y + h - bottom));
    if bottom > 0.0 {
        let _ = write!(
            d,
            "A{} {} 0 0 1 {} {}",
            f(bottom),
            f(bottom),
            f(x + w - bottom),
            f(y + h)
        );
    }
    let _ = write!(d, "H{}", f(x + bottom));
    if bottom > 0.0 {
        let _ = write!(
            d,
            "A{} {} 0 0 1 {} {}",
            f(bottom),
            f(bottom),
            f(x),
            f(y + h - bottom)
        );
    }
    let _ = write!(d, "V{}", f(y + top));
    if top > 0.0 {
        let _ = write!(d, "A{} {} 0 0 1 {} {}", f(top), f(top), f(x + top), f(y));
    }
    d.push('Z');
    d
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn map_fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to write svg document: {err}"))
}
