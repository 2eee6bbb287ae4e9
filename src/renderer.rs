use eframe::egui::{self, Color32, Pos2, Rect, Shape, Stroke, TextureHandle, TextureOptions};

use crate::canvas::CanvasSurface;
use crate::primitive::Primitive;

/// Paints a [`CanvasSurface`] onto an egui painter each frame.
///
/// The only retained state is the uploaded backdrop texture, keyed by the
/// backdrop version so a newly loaded image replaces it exactly once.
#[derive(Default)]
pub struct Renderer {
    backdrop_texture: Option<TextureHandle>,
    backdrop_version: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the surface into `rect`. Primitives are stored in canvas-local
    /// coordinates and offset by the rect origin here.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        canvas: &CanvasSurface,
    ) {
        self.paint_backdrop(ctx, painter, rect, canvas);

        let origin = rect.min.to_vec2();
        for primitive in canvas.primitives() {
            match primitive {
                Primitive::Polyline {
                    points,
                    color,
                    width,
                } => {
                    if let [point] = points.as_slice() {
                        // A click without movement still leaves a dot.
                        painter.circle_filled(*point + origin, width / 2.0, *color);
                    } else {
                        let screen: Vec<Pos2> = points.iter().map(|p| *p + origin).collect();
                        painter.add(Shape::line(screen, Stroke::new(*width, *color)));
                    }
                }
                Primitive::Ellipse {
                    center,
                    diameter,
                    color,
                } => {
                    painter.circle_filled(*center + origin, diameter / 2.0, *color);
                }
                Primitive::SquareOutline {
                    center,
                    side,
                    color,
                    width,
                } => {
                    let square =
                        Rect::from_center_size(*center + origin, egui::Vec2::splat(*side));
                    painter.rect_stroke(square, 0.0, Stroke::new(*width, *color));
                }
            }
        }
    }

    fn paint_backdrop(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        canvas: &CanvasSurface,
    ) {
        let Some(backdrop) = canvas.backdrop() else {
            self.backdrop_texture = None;
            return;
        };

        if self.backdrop_texture.is_none() || self.backdrop_version != backdrop.version() {
            let image = backdrop.image();
            let size = [image.width() as usize, image.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            self.backdrop_texture =
                Some(ctx.load_texture("canvas_backdrop", color_image, TextureOptions::LINEAR));
            self.backdrop_version = backdrop.version();
        }

        if let Some(texture) = &self.backdrop_texture {
            // Natural size, anchored at the canvas origin, clipped to the
            // visible surface.
            let size = texture.size_vec2();
            let image_rect = Rect::from_min_size(rect.min, size).intersect(rect);
            let uv = Rect::from_min_max(
                Pos2::ZERO,
                Pos2::new(
                    (image_rect.width() / size.x).min(1.0),
                    (image_rect.height() / size.y).min(1.0),
                ),
            );
            painter.image(texture.id(), image_rect, uv, Color32::WHITE);
        }
    }
}
