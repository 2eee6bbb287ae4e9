#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod dialogs;
pub mod error;
pub mod file;
pub mod input;
pub mod panels;
pub mod primitive;
pub mod raster;
pub mod renderer;

pub use app::EaselApp;
pub use canvas::{CanvasSurface, DrawingState, ShapeKind};
pub use dialogs::ActiveModal;
pub use error::FileError;
pub use input::{PointerEvent, PointerHandler};
pub use primitive::{Primitive, FIXED_SHAPE_DIAMETER};
pub use renderer::Renderer;
