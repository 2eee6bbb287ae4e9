use std::path::Path;

use crate::canvas::CanvasSurface;
use crate::dialogs::{self, ActiveModal};
use crate::file;
use crate::panels;
use crate::renderer::Renderer;

/// The application shell: owns the canvas surface, the renderer, the single
/// active-modal slot, and the error notice. All interaction is wiring UI
/// events into canvas calls or file operations.
pub struct EaselApp {
    canvas: CanvasSurface,
    renderer: Renderer,
    modal: Option<ActiveModal>,
    notice: Option<String>,
}

impl Default for EaselApp {
    fn default() -> Self {
        Self {
            canvas: CanvasSurface::new(),
            renderer: Renderer::new(),
            modal: None,
            notice: None,
        }
    }
}

impl EaselApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn canvas(&self) -> &CanvasSurface {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasSurface {
        &mut self.canvas
    }

    pub fn modal(&self) -> Option<&ActiveModal> {
        self.modal.as_ref()
    }

    /// Opens a modal dialog. Dialogs are strictly modal: a request while one
    /// is already open is ignored.
    pub fn open_modal(&mut self, modal: ActiveModal) {
        if self.modal.is_some() {
            log::warn!("modal requested while another is open; ignoring");
            return;
        }
        self.modal = Some(modal);
    }

    pub(crate) fn take_modal(&mut self) -> Option<ActiveModal> {
        self.modal.take()
    }

    pub(crate) fn restore_modal(&mut self, modal: ActiveModal) {
        self.modal = Some(modal);
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Confirms the save dialog. Returns true when the dialog should close.
    /// An empty selection is a silent no-op and leaves the dialog open; a
    /// failed export closes it and raises the notice instead.
    pub fn confirm_save(&mut self, selection: &str) -> bool {
        let trimmed = selection.trim();
        if trimmed.is_empty() {
            return false;
        }
        let path = file::ensure_extension(trimmed, file::DEFAULT_EXTENSION);
        if let Err(err) = file::export_snapshot(&self.canvas, &path) {
            log::error!("{err}");
            self.notice = Some(err.to_string());
        }
        true
    }

    /// Confirms the load dialog. Returns true when the dialog should close.
    /// On success the canvas is cleared and the decoded raster becomes the
    /// base layer; on decode failure the drawing is left untouched.
    pub fn confirm_load(&mut self, selection: &str) -> bool {
        let trimmed = selection.trim();
        if trimmed.is_empty() {
            return false;
        }
        match file::load_backdrop(Path::new(trimmed)) {
            Ok(image) => {
                self.canvas.clear();
                self.canvas.set_backdrop(image);
            }
            Err(err) => {
                log::error!("{err}");
                self.notice = Some(err.to_string());
            }
        }
        true
    }

    pub(crate) fn render_canvas(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
    ) {
        self.renderer.render(ctx, painter, rect, &self.canvas);
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };
        egui::Window::new("Something went wrong")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("Dismiss").clicked() {
                    self.notice = None;
                }
            });
    }
}

impl eframe::App for EaselApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::canvas_panel(self, ctx);
        dialogs::show_active_modal(self, ctx);
        self.show_notice(ctx);
    }
}
