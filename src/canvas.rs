use egui::{Color32, Pos2, Vec2};
use image::RgbaImage;

use crate::input::PointerHandler;
use crate::primitive::{Primitive, FIXED_SHAPE_DIAMETER};

/// The currently selected tool, determining what primitive a new gesture
/// produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Freehand,
    Circle,
    Square,
}

impl ShapeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Freehand => "Brush",
            Self::Circle => "Circle",
            Self::Square => "Square",
        }
    }
}

/// Brush settings applied to every primitive begun after they are set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingState {
    pub active_shape: ShapeKind,
    pub brush_color: Color32,
    pub stroke_width: f32,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            active_shape: ShapeKind::Freehand,
            brush_color: Color32::BLACK,
            stroke_width: 2.0,
        }
    }
}

/// Handle to the primitive opened by the current pointer-down gesture.
/// At most one gesture is in progress at a time; the handle is dropped on
/// pointer-up without touching the primitive itself.
#[derive(Debug, Clone, Copy)]
enum ActiveGesture {
    Polyline(usize),
    Square(usize),
}

/// A raster image installed as the base layer of the canvas by Load.
/// The version ticks on every install so the renderer knows when to
/// re-upload its texture.
pub struct Backdrop {
    image: RgbaImage,
    version: u64,
}

impl Backdrop {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

/// The drawing surface: owns the brush state, the list of rendered
/// primitives, the optional backdrop, and the single in-progress gesture.
///
/// This type is deliberately free of toolkit context types; pointer events
/// arrive through [`PointerHandler`] and rendering is done externally from
/// the primitive list.
pub struct CanvasSurface {
    state: DrawingState,
    primitives: Vec<Primitive>,
    gesture: Option<ActiveGesture>,
    backdrop: Option<Backdrop>,
    next_backdrop_version: u64,
    size: Vec2,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self {
            state: DrawingState::default(),
            primitives: Vec::new(),
            gesture: None,
            backdrop: None,
            next_backdrop_version: 1,
            size: Vec2::new(800.0, 540.0),
        }
    }
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.backdrop.as_ref()
    }

    /// Current size of the on-screen surface in canvas units. Updated every
    /// frame by the canvas panel; the export snapshot uses it as the raster
    /// dimensions.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_surface_size(&mut self, size: Vec2) {
        if size.x >= 1.0 && size.y >= 1.0 {
            self.size = size;
        }
    }

    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.state.active_shape = kind;
    }

    /// Takes effect for primitives begun after this call, not retroactively.
    pub fn set_brush_color(&mut self, color: Color32) {
        self.state.brush_color = color;
    }

    /// Applies to line-based primitives only; circles ignore it.
    pub fn set_line_width(&mut self, width: f32) {
        if width > 0.0 {
            self.state.stroke_width = width;
        }
    }

    /// Discards all rendered primitives and the backdrop. Brush settings are
    /// left untouched.
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.backdrop = None;
        self.gesture = None;
    }

    /// Installs `image` as the base layer. The caller clears first when
    /// replacing the whole drawing (the Load flow does).
    pub fn set_backdrop(&mut self, image: RgbaImage) {
        let version = self.next_backdrop_version;
        self.next_backdrop_version += 1;
        self.backdrop = Some(Backdrop { image, version });
    }
}

impl PointerHandler for CanvasSurface {
    fn on_pointer_down(&mut self, pos: Pos2) {
        let DrawingState {
            active_shape,
            brush_color,
            stroke_width,
        } = self.state;

        match active_shape {
            ShapeKind::Freehand => {
                self.primitives.push(Primitive::Polyline {
                    points: vec![pos],
                    color: brush_color,
                    width: stroke_width,
                });
                self.gesture = Some(ActiveGesture::Polyline(self.primitives.len() - 1));
            }
            ShapeKind::Circle => {
                // One-shot: the ellipse is complete at pointer-down and never
                // updated by the rest of the gesture.
                self.primitives.push(Primitive::Ellipse {
                    center: pos,
                    diameter: FIXED_SHAPE_DIAMETER,
                    color: brush_color,
                });
                self.gesture = None;
            }
            ShapeKind::Square => {
                self.primitives.push(Primitive::SquareOutline {
                    center: pos,
                    side: FIXED_SHAPE_DIAMETER,
                    color: brush_color,
                    width: stroke_width,
                });
                self.gesture = Some(ActiveGesture::Square(self.primitives.len() - 1));
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2) {
        match self.gesture {
            Some(ActiveGesture::Polyline(index)) => {
                if let Some(Primitive::Polyline { points, .. }) = self.primitives.get_mut(index) {
                    points.push(pos);
                }
            }
            Some(ActiveGesture::Square(index)) => {
                // Replace, not resize: the previous outline is dropped and a
                // new one is drawn centered at the updated position, keeping
                // the color and width captured at pointer-down.
                if let Some(Primitive::SquareOutline { center, .. }) =
                    self.primitives.get_mut(index)
                {
                    *center = pos;
                }
            }
            None => {}
        }
    }

    fn on_pointer_up(&mut self) {
        // The primitive stays rendered as-is; only the handle is dropped.
        self.gesture = None;
    }
}
