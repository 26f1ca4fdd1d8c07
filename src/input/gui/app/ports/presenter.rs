use egui::Context as EguiContext;

use crate::presenters::canvas::PixelCanvas;

/// Puts the software canvas and the egui overlay on screen.
pub trait GuiPresenterPort {
    fn render(
        &mut self,
        canvas: &PixelCanvas,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
