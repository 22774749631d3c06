use foundation::color::Rgba;
use foundation::math::Vec2;

/// Backend-agnostic draw commands, replayed in order by a canvas or SVG
/// backend. Later commands occlude earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clears the whole canvas.
    Clear { width: f64, height: f64 },
    /// Filled and/or stroked circle.
    Circle {
        center: Vec2,
        radius: f64,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
    },
    /// One or more subpaths drawn as a single path, so even-odd holes and
    /// shared strokes behave like one canvas `beginPath` block.
    Shape {
        subpaths: Vec<Vec<Vec2>>,
        closed: bool,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
        shadow: Option<Shadow>,
    },
    /// Radial gradient from `color` at `inner` to transparent at `outer`,
    /// painted across the whole canvas.
    Glow {
        center: Vec2,
        inner: f64,
        outer: f64,
        color: Rgba,
        width: f64,
        height: f64,
    },
    /// Tooltip box near the pointer. The backend measures the text and sizes
    /// the box per the style constants.
    Tooltip { anchor: Vec2, text: String },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f64,
}

/// One frame's ordered draw sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter()
    }
}
