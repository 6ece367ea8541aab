use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, GroupPrimitive, LayerKind, LinePrimitive, Node, PolylinePrimitive,
    RectPrimitive, TextPrimitive,
};

/// Backend-agnostic drawing tree for one chart draw pass.
///
/// Frames are built from scratch on every render and never patched; a new frame
/// fully supersedes the previous one on its mount point.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    /// Single textual label describing the chart.
    pub aria_label: String,
    pub nodes: Vec<Node>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, aria_label: impl Into<String>) -> Self {
        Self {
            viewport,
            aria_label: aria_label.into(),
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_node(mut self, node: impl Into<Node>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Appends `group` unless it has no children.
    pub fn push_layer(&mut self, group: GroupPrimitive) {
        if !group.children.is_empty() {
            self.nodes.push(Node::Group(group));
        }
    }

    /// First top-level group tagged with `kind`.
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&GroupPrimitive> {
        self.nodes.iter().find_map(|node| match node {
            Node::Group(group) if group.layer == Some(kind) => Some(group),
            _ => None,
        })
    }

    /// Depth-first, pre-order traversal over every node, groups included.
    #[must_use]
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        collect_nodes(&self.nodes, &mut out);
        out
    }

    #[must_use]
    pub fn rects(&self) -> Vec<&RectPrimitive> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<&LinePrimitive> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn polylines(&self) -> Vec<&PolylinePrimitive> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Polyline(polyline) => Some(polyline),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn circles(&self) -> Vec<&CirclePrimitive> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&TextPrimitive> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.nodes.iter().try_for_each(Node::validate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn collect_nodes<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
    for node in nodes {
        out.push(node);
        if let Node::Group(group) = node {
            collect_nodes(&group.children, out);
        }
    }
}
