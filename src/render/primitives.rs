use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let value = input.trim();
        let invalid = || ChartError::InvalidColor(value.to_owned());

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let lower = value.to_ascii_lowercase();
        let (body, expects_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let mut channels = [0.0_f64; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let raw: f64 = part.parse().map_err(|_| invalid())?;
            if !raw.is_finite() || !(0.0..=255.0).contains(&raw) {
                return Err(invalid());
            }
            *slot = raw / 255.0;
        }
        let alpha = if expects_alpha {
            let raw: f64 = parts[3].parse().map_err(|_| invalid())?;
            if !raw.is_finite() || !(0.0..=1.0).contains(&raw) {
                return Err(invalid());
            }
            raw
        } else {
            1.0
        };

        Ok(Self::rgba(channels[0], channels[1], channels[2], alpha))
    }

    /// CSS serialization: `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let [red, green, blue] = [self.red, self.green, self.blue].map(to_channel_u8);
        if self.alpha >= 1.0 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            let mut out = String::with_capacity(24);
            let _ = write!(out, "rgba({red},{green},{blue},{})", trim_float(self.alpha));
            out
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |index: usize| u8::from_str_radix(hex.get(index..index + 2)?, 16).ok();
    let nibble = |index: usize| {
        let value = u8::from_str_radix(hex.get(index..=index)?, 16).ok()?;
        Some(value * 17)
    };
    match hex.len() {
        3 => Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f64::from(byte(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn to_channel_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Formats a float without trailing zeros (`0.5`, `12`, `3.25`).
pub(crate) fn trim_float(value: f64) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

fn require_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

/// Outline drawn around a filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Corner radii applied to the top edge and bottom edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top: f64,
    pub bottom: f64,
}

impl CornerRadii {
    #[must_use]
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top: radius,
            bottom: radius,
        }
    }

    #[must_use]
    pub const fn top_only(radius: f64) -> Self {
        Self {
            top: radius,
            bottom: 0.0,
        }
    }

    #[must_use]
    pub const fn bottom_only(radius: f64) -> Self {
        Self {
            top: 0.0,
            bottom: radius,
        }
    }

    #[must_use]
    pub fn is_square(self) -> bool {
        self.top <= 0.0 && self.bottom <= 0.0
    }

    #[must_use]
    pub fn is_uniform(self) -> bool {
        self.top == self.bottom
    }
}

/// Filled rectangle in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub opacity: f64,
    pub stroke: Option<Stroke>,
    pub corners: CornerRadii,
    /// Hover annotation (tooltip text).
    pub title: Option<String>,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            opacity: 1.0,
            stroke: None,
            corners: CornerRadii::default(),
            title: None,
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_corners(mut self, corners: CornerRadii) -> Self {
        self.corners = corners;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn validate(&self) -> ChartResult<()> {
        require_finite(
            &[
                self.x,
                self.y,
                self.width,
                self.height,
                self.corners.top,
                self.corners.bottom,
            ],
            "rect geometry",
        )?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "rect opacity must be in [0, 1]".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            require_finite(&[stroke.width], "rect stroke width")?;
            stroke.color.validate()?;
        }
        self.fill.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        require_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Open polyline connecting `points` in order with straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 2 {
            return Err(ChartError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        for (x, y) in &self.points {
            require_finite(&[*x, *y], "polyline points")?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled circle marker.
#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub title: Option<String>,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        require_finite(&[self.cx, self.cy, self.radius], "circle geometry")?;
        if self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub font_family: String,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            font_family: String::new(),
            color,
            h_align,
        }
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        require_finite(&[self.x, self.y], "text coordinates")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Semantic layer a top-level group belongs to, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Grid,
    Axis,
    Legend,
    Series,
    Labels,
}

impl LayerKind {
    #[must_use]
    pub const fn canonical_order() -> [LayerKind; 5] {
        [
            LayerKind::Grid,
            LayerKind::Axis,
            LayerKind::Legend,
            LayerKind::Series,
            LayerKind::Labels,
        ]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LayerKind::Grid => "grid",
            LayerKind::Axis => "axis",
            LayerKind::Legend => "legend",
            LayerKind::Series => "series",
            LayerKind::Labels => "labels",
        }
    }
}

/// Ordered container of child nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupPrimitive {
    pub layer: Option<LayerKind>,
    pub children: Vec<Node>,
}

impl GroupPrimitive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn layer(kind: LayerKind) -> Self {
        Self {
            layer: Some(kind),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    #[must_use]
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }
}

/// One node of the drawing-primitive tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Polyline(PolylinePrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
    Group(GroupPrimitive),
}

impl Node {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Node::Rect(rect) => rect.validate(),
            Node::Line(line) => line.validate(),
            Node::Polyline(polyline) => polyline.validate(),
            Node::Circle(circle) => circle.validate(),
            Node::Text(text) => text.validate(),
            Node::Group(group) => group.children.iter().try_for_each(Node::validate),
        }
    }
}

impl From<RectPrimitive> for Node {
    fn from(value: RectPrimitive) -> Self {
        Node::Rect(value)
    }
}

impl From<LinePrimitive> for Node {
    fn from(value: LinePrimitive) -> Self {
        Node::Line(value)
    }
}

impl From<PolylinePrimitive> for Node {
    fn from(value: PolylinePrimitive) -> Self {
        Node::Polyline(value)
    }
}

impl From<CirclePrimitive> for Node {
    fn from(value: CirclePrimitive) -> Self {
        Node::Circle(value)
    }
}

impl From<TextPrimitive> for Node {
    fn from(value: TextPrimitive) -> Self {
        Node::Text(value)
    }
}

impl From<GroupPrimitive> for Node {
    fn from(value: GroupPrimitive) -> Self {
        Node::Group(value)
    }
}
