use egui::{Color32, Pos2};

/// Diameter of the one-shot circle and of a placed square, in canvas units.
/// Circles additionally ignore the stroke width entirely (they are filled).
pub const FIXED_SHAPE_DIAMETER: f32 = 30.0;

/// A single renderable shape placed on the canvas.
///
/// Coordinates are canvas-local: the canvas panel's top-left corner is the
/// origin. Color and width are captured when the primitive is begun and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A freehand stroke: consecutive points joined by line segments.
    Polyline {
        points: Vec<Pos2>,
        color: Color32,
        width: f32,
    },
    /// A filled ellipse (always circular, fixed diameter).
    Ellipse {
        center: Pos2,
        diameter: f32,
        color: Color32,
    },
    /// An outlined square, identified by its center and side length.
    SquareOutline {
        center: Pos2,
        side: f32,
        color: Color32,
        width: f32,
    },
}

impl Primitive {
    pub fn color(&self) -> Color32 {
        match self {
            Self::Polyline { color, .. }
            | Self::Ellipse { color, .. }
            | Self::SquareOutline { color, .. } => *color,
        }
    }
}
