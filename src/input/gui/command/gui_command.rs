use std::marker::PhantomData;
use std::time::Instant;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    command::ports::presenter_factory::GuiPresenterFactoryPort,
    errors::GuiError,
};

pub struct GuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> GuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn run(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Modular Times Tables")
                .with_inner_size(LogicalSize::new(800.0, 800.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window)?;
        let mut app = GuiApp::new(window, &event_loop, presenter)?;
        let mut redraw_pending = true;
        info!("window open");

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (_, egui_repaint) = app.handle_window_event(window, event);
                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.controller.stop();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);
                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            error!("render error: {err}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!("resize failed: {err}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = app.resize(size.width, size.height) {
                            error!("resize failed: {err}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if app.advance_animation() {
                    redraw_pending = true;
                }
                if redraw_pending {
                    window.request_redraw();
                }

                match app.time_until_next_tick() {
                    Some(wait) => elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + wait)),
                    None => elwt.set_control_flow(ControlFlow::Wait),
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
