use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::window::Window;

use crate::input::gui::GuiPresenterPort;
use crate::presenters::canvas::PixelCanvas;
use crate::presenters::pixel_format::copy_rgb_to_rgba;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
        })
    }

    /// Copies the canvas into the framebuffer. A canvas whose size lags behind
    /// the framebuffer is skipped until the next resize catches up.
    fn draw_canvas(&mut self, canvas: &PixelCanvas) {
        let buffer = canvas.pixel_buffer();
        let rect = buffer.pixel_rect();
        if rect.width() != self.width || rect.height() != self.height {
            return;
        }

        if let Err(err) = copy_rgb_to_rgba(buffer.buffer(), self.pixels.frame_mut()) {
            warn!("canvas not presented: {err}");
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        canvas: &PixelCanvas,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.draw_canvas(canvas);

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)
    }
}
