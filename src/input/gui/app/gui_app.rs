use std::time::{Duration, Instant};

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, warn};
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::animation::{AnimationController, AnimationState};
use crate::controllers::engine::RenderEngine;
use crate::core::data::pixel_rect::MIN_PIXEL_EXTENT;
use crate::core::errors::EngineError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAction, GuiAppState};
use crate::input::gui::errors::GuiError;
use crate::presenters::canvas::{PixelCanvas, PixelSurface};

pub type CanvasController = AnimationController<RenderEngine<PixelCanvas>>;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub controller: CanvasController,
    ui_state: GuiAppState,
    last_advance: Instant,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let engine = RenderEngine::bind(PixelSurface {
            width: size.width,
            height: size.height,
        })?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Ok(Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller: AnimationController::new(engine),
            ui_state: GuiAppState::default(),
            last_advance: Instant::now(),
            egui_ctx,
            egui_state,
        })
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        let canvas = self.controller.renderer().context();
        self.presenter.render(canvas, egui_output, &self.egui_ctx)
    }

    /// Resizes the framebuffer and the canvas, then redraws the last frame.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;

        if width < MIN_PIXEL_EXTENT || height < MIN_PIXEL_EXTENT {
            debug!("skipping resize to {width}x{height}");
            return Ok(());
        }

        self.presenter.resize(width, height)?;

        let engine = self.controller.renderer_mut();
        engine
            .context_mut()
            .resize(width, height)
            .map_err(EngineError::from)?;
        if let Err(err) = engine.calibrate() {
            warn!("redraw after resize failed: {err}");
            self.ui_state.record_result(Err(err));
        }

        Ok(())
    }

    /// Runs every animation frame that fell due since the last call.
    ///
    /// Returns true when the canvas changed.
    pub fn advance_animation(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_advance);
        self.last_advance = now;

        match self.controller.advance(elapsed) {
            Ok(report) => report.ticks_run > 0,
            Err(err) => {
                self.ui_state.record_result(Err(err));
                true
            }
        }
    }

    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.controller.time_until_next_tick()
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let status = self.controller.state();
        let current_table = self.controller.current_table();
        let mut actions = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Modular times tables")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 320.0])
                .show(ctx, |ui| {
                    ui.heading("Fixed table");
                    let form = &mut self.ui_state.fixed_form;
                    labelled_field(ui, "Table:", &mut form.table);
                    labelled_field(ui, "Modulo:", &mut form.modulo);
                    if ui.button("Render").clicked() {
                        actions.push(GuiAction::RenderFixed);
                    }

                    ui.separator();
                    ui.heading("Animated table");
                    let form = &mut self.ui_state.animated_form;
                    labelled_field(ui, "From:", &mut form.table_start);
                    labelled_field(ui, "To:", &mut form.table_end);
                    labelled_field(ui, "Precision:", &mut form.precision);
                    labelled_field(ui, "Modulo:", &mut form.modulo);
                    if ui.button("Animate").clicked() {
                        actions.push(GuiAction::StartAnimation);
                    }

                    ui.horizontal(|ui| {
                        let running = status == AnimationState::Running;
                        if ui.add_enabled(running, egui::Button::new("Pause")).clicked() {
                            actions.push(GuiAction::Pause);
                        }
                        if ui
                            .add_enabled(status == AnimationState::Paused, egui::Button::new("Resume"))
                            .clicked()
                        {
                            actions.push(GuiAction::Resume);
                        }
                        if ui
                            .add_enabled(status != AnimationState::Idle, egui::Button::new("Stop"))
                            .clicked()
                        {
                            actions.push(GuiAction::Stop);
                        }
                    });

                    ui.separator();
                    ui.label(format!("Animation: {status:?}"));
                    if let Some(table) = current_table {
                        ui.label(format!("Current table: {table:.3}"));
                    }
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    if let Some(message) = &self.ui_state.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        for action in actions {
            self.apply(action);
        }

        output
    }

    fn apply(&mut self, action: GuiAction) {
        let result = match action {
            GuiAction::RenderFixed => self
                .ui_state
                .fixed_form
                .submit(self.controller.renderer_mut()),
            GuiAction::StartAnimation => {
                self.last_advance = Instant::now();
                self.ui_state.animated_form.submit(&mut self.controller)
            }
            GuiAction::Pause => {
                self.controller.pause();
                Ok(())
            }
            GuiAction::Resume => {
                self.last_advance = Instant::now();
                self.controller.start()
            }
            GuiAction::Stop => {
                self.controller.stop();
                Ok(())
            }
        };

        self.ui_state.record_result(result);
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}

fn labelled_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(value);
    });
}
