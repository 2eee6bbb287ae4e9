use crate::app::EaselApp;
use crate::input;

/// Central panel: the drawing surface. Pointer drags become gestures on the
/// canvas; the renderer then paints the primitive list on top.
pub fn canvas_panel(app: &mut EaselApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        app.canvas_mut().set_surface_size(response.rect.size());

        // Dialogs are strictly modal: the canvas takes no pointer input
        // while one is open.
        if app.modal().is_none() {
            let events = input::pointer_events(&response);
            input::dispatch(&events, app.canvas_mut());
        }

        app.render_canvas(ctx, &painter, response.rect);
    });
}
