pub mod canvas_panel;
pub mod toolbar;

pub use canvas_panel::canvas_panel;
pub use toolbar::toolbar;
