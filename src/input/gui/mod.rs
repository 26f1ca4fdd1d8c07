//! Windowed host for the chord renderer.
//!
//! winit owns the window and event loop, pixels shows the software canvas and
//! egui draws the form panel on top of it.

pub mod app;
pub mod command;
pub mod errors;

pub use app::ports::presenter::GuiPresenterPort;
pub use command::gui_command::GuiCommand;
pub use command::ports::presenter_factory::GuiPresenterFactoryPort;
pub use errors::GuiError;
