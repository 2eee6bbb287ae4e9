use crate::app::EaselApp;
use crate::canvas::ShapeKind;
use crate::dialogs::ActiveModal;

/// Top toolbar row: Clear, Color, Save, Load, the shape selectors, and the
/// stroke-width slider. Sized to a tenth of the window; the canvas panel
/// takes the rest.
pub fn toolbar(app: &mut EaselApp, ctx: &egui::Context) {
    let height = ctx.screen_rect().height() * 0.10;
    egui::TopBottomPanel::top("toolbar")
        .exact_height(height)
        .show(ctx, |ui| {
            let modal_open = app.modal().is_some();
            ui.add_enabled_ui(!modal_open, |ui| {
                ui.horizontal_centered(|ui| {
                    if ui.button("Clear").clicked() {
                        app.canvas_mut().clear();
                    }
                    if ui.button("Color").clicked() {
                        app.open_modal(ActiveModal::ColorPicker);
                    }
                    if ui.button("Save").clicked() {
                        app.open_modal(ActiveModal::Save {
                            selection: String::new(),
                        });
                    }
                    if ui.button("Load").clicked() {
                        app.open_modal(ActiveModal::Load {
                            selection: String::new(),
                        });
                    }

                    ui.separator();

                    let active = app.canvas().state().active_shape;
                    for kind in [ShapeKind::Freehand, ShapeKind::Circle, ShapeKind::Square] {
                        if ui.selectable_label(active == kind, kind.label()).clicked() {
                            log::info!("shape selected from toolbar: {}", kind.label());
                            app.canvas_mut().set_shape(kind);
                        }
                    }

                    ui.separator();

                    ui.label("Width:");
                    let mut width = app.canvas().state().stroke_width;
                    if ui
                        .add(egui::Slider::new(&mut width, 1.0..=20.0))
                        .changed()
                    {
                        app.canvas_mut().set_line_width(width);
                    }
                });
            });
        });
}
