// File: crates/chart-core/src/scene.rs
// Summary: Draw-command scene: an ordered, mutable list of primitives that backends replay.
// Notes:
// - Command coordinates are plot-local; `origin` is the margin translation applied by backends.
// - Nodes may carry a `class` (mark group) and a `key` (datum key) so charts can update
//   or remove them later and pointer hits can be mapped back to data.

use crate::geometry::{Point, Rect};
use crate::theme::Color;
use crate::types::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of text relative to its `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Middle,
    Hanging,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub bold: bool,
    pub anchor: Anchor,
    pub baseline: Baseline,
    /// Rotation in degrees around the plot origin; `at` is given in the rotated frame.
    pub rotate: Option<f32>,
}

impl TextStyle {
    pub fn new(color: Color, size: f32) -> Self {
        Self { color, size, bold: false, anchor: Anchor::Start, baseline: Baseline::Alphabetic, rotate: None }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Open polyline through `points`.
    Path { points: Vec<Point>, stroke: Stroke },
    Circle { center: Point, radius: f32, fill: Color, opacity: f32 },
    Rect { rect: Rect, fill: Option<Color>, stroke: Option<Stroke> },
    Text { text: String, at: Point, style: TextStyle },
    Line { from: Point, to: Point, stroke: Stroke },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub class: Option<String>,
    pub key: Option<String>,
    pub cmd: DrawCommand,
}

impl Node {
    pub fn has_class(&self, class: &str) -> bool {
        self.class.as_deref() == Some(class)
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub origin: Point,
    pub background: Color,
    nodes: Vec<Node>,
    next_id: u64,
}

impl Scene {
    pub fn new(frame: &Frame, background: Color) -> Self {
        let (ox, oy) = frame.origin();
        Self {
            width: frame.width,
            height: frame.height,
            origin: Point::new(ox, oy),
            background,
            nodes: Vec::new(),
            next_id: 0,
        }
    }

    /// A scene holding only a centered message, used for "no data" and load-failure states.
    pub fn message(frame: &Frame, background: Color, color: Color, text: impl Into<String>) -> Self {
        let mut scene = Self::new(frame, background);
        let at = Point::new(frame.plot_width() * 0.5, frame.plot_height() * 0.5);
        let style = TextStyle::new(color, 16.0).anchor(Anchor::Middle).baseline(Baseline::Middle);
        scene.push_classed("message", DrawCommand::Text { text: text.into(), at, style });
        scene
    }

    pub fn push(&mut self, cmd: DrawCommand) -> NodeId {
        self.insert(None, None, cmd)
    }

    pub fn push_classed(&mut self, class: &str, cmd: DrawCommand) -> NodeId {
        self.insert(Some(class.to_string()), None, cmd)
    }

    pub fn push_keyed(&mut self, class: &str, key: impl Into<String>, cmd: DrawCommand) -> NodeId {
        self.insert(Some(class.to_string()), Some(key.into()), cmd)
    }

    fn insert(&mut self, class: Option<String>, key: Option<String>, cmd: DrawCommand) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(Node { id, class, key, cmd });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn remove(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        self.nodes.len() != before
    }

    /// Remove every node of `class`; returns how many were removed.
    pub fn remove_class(&mut self, class: &str) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|n| !n.has_class(class));
        before - self.nodes.len()
    }

    pub fn count_class(&self, class: &str) -> usize {
        self.nodes.iter().filter(|n| n.has_class(class)).count()
    }

    pub fn by_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.has_class(class))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Topmost keyed rect or circle under a canvas-space point.
    pub fn hit_test(&self, canvas: Point) -> Option<&Node> {
        let p = Point::new(canvas.x - self.origin.x, canvas.y - self.origin.y);
        self.nodes.iter().rev().filter(|n| n.key.is_some()).find(|n| match &n.cmd {
            DrawCommand::Rect { rect, .. } => rect.contains(p),
            DrawCommand::Circle { center, radius, .. } => center.distance(p) <= *radius,
            _ => false,
        })
    }
}
