use egui::color_picker::{color_picker_color32, Alpha};

use crate::app::EaselApp;

/// The one modal dialog allowed open at a time. Confirming or cancelling
/// clears the slot; the save/load variants carry the path selection typed or
/// browsed so far.
pub enum ActiveModal {
    ColorPicker,
    Save { selection: String },
    Load { selection: String },
}

/// Shows whichever modal is open. The modal is taken out of the shell for the
/// duration of the frame so the dialog body can freely borrow the app.
pub fn show_active_modal(app: &mut EaselApp, ctx: &egui::Context) {
    let Some(mut modal) = app.take_modal() else {
        return;
    };

    let keep_open = match &mut modal {
        ActiveModal::ColorPicker => show_color_picker(app, ctx),
        ActiveModal::Save { selection } => show_save_dialog(app, ctx, selection),
        ActiveModal::Load { selection } => show_load_dialog(app, ctx, selection),
    };

    if keep_open {
        app.restore_modal(modal);
    }
}

/// Live color picker: every change is applied to the brush immediately, with
/// no separate confirm step.
fn show_color_picker(app: &mut EaselApp, ctx: &egui::Context) -> bool {
    let mut keep_open = true;
    egui::Window::new("Pick a Color")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let mut color = app.canvas().state().brush_color;
            if color_picker_color32(ui, &mut color, Alpha::Opaque) {
                app.canvas_mut().set_brush_color(color);
            }
            ui.separator();
            if ui.button("Close").clicked() {
                keep_open = false;
            }
        });
    keep_open
}

fn show_save_dialog(app: &mut EaselApp, ctx: &egui::Context, selection: &mut String) -> bool {
    let mut keep_open = true;
    egui::Window::new("Save Drawing")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("File:");
                ui.text_edit_singleline(selection);
                if ui.button("Browse…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_title("Save Drawing")
                        .add_filter("Image", &["png", "jpg", "jpeg", "bmp"])
                        .save_file()
                    {
                        *selection = path.display().to_string();
                    }
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() && app.confirm_save(selection) {
                    keep_open = false;
                }
                if ui.button("Cancel").clicked() {
                    keep_open = false;
                }
            });
        });
    keep_open
}

fn show_load_dialog(app: &mut EaselApp, ctx: &egui::Context, selection: &mut String) -> bool {
    let mut keep_open = true;
    egui::Window::new("Load Drawing")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("File:");
                ui.text_edit_singleline(selection);
                if ui.button("Browse…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_title("Load Drawing")
                        .add_filter("Image", &["png", "jpg", "jpeg", "bmp", "gif", "webp"])
                        .pick_file()
                    {
                        *selection = path.display().to_string();
                    }
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Load").clicked() && app.confirm_load(selection) {
                    keep_open = false;
                }
                if ui.button("Cancel").clicked() {
                    keep_open = false;
                }
            });
        });
    keep_open
}
