use log::{debug, trace};

use crate::controllers::engine::engine_config::EngineConfig;
use crate::controllers::ports::FrameRenderer;
use crate::core::actions::compute_chords::{Chord, for_each_chord_rayon};
use crate::core::data::modulus::Modulus;
use crate::core::data::point::Point;
use crate::core::errors::EngineError;
use crate::core::geometry::CircleGrid;
use crate::core::ports::{DrawingContext, SurfaceHandle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    fn of<C: DrawingContext>(context: &C) -> Self {
        Self {
            width: context.width(),
            height: context.height(),
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Owns one drawing context and redraws complete frames on it.
pub struct RenderEngine<C: DrawingContext> {
    context: C,
    config: EngineConfig,
    dimensions: Dimensions,
    grid: Option<CircleGrid>,
    last_frame: Option<(f64, Modulus)>,
}

impl<C: DrawingContext> RenderEngine<C> {
    pub fn bind<H>(handle: H) -> Result<Self, EngineError>
    where
        H: SurfaceHandle<Context = C>,
    {
        Self::bind_with_config(handle, EngineConfig::default())
    }

    pub fn bind_with_config<H>(handle: H, config: EngineConfig) -> Result<Self, EngineError>
    where
        H: SurfaceHandle<Context = C>,
    {
        let context = handle.context_2d().ok_or_else(|| {
            EngineError::InvalidSurface("surface did not provide a 2D context".to_owned())
        })?;

        let dimensions = Dimensions::of(&context);
        if !(dimensions.width.is_finite() && dimensions.height.is_finite()) {
            return Err(EngineError::InvalidSurface(format!(
                "surface reports a non-finite size {}x{}",
                dimensions.width, dimensions.height
            )));
        }

        debug!(
            "bound render engine to {}x{} surface",
            dimensions.width, dimensions.height
        );

        let mut engine = Self {
            context,
            config,
            dimensions,
            grid: None,
            last_frame: None,
        };
        engine.context.set_stroke_colour(config.foreground);
        engine.context.set_fill_colour(config.foreground);
        engine.clear();

        Ok(engine)
    }

    #[must_use]
    pub fn current_dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn grid(&self) -> Option<&CircleGrid> {
        self.grid.as_ref()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<(f64, Modulus)> {
        self.last_frame
    }

    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable access for hosts that resize the surface. Call
    /// [`RenderEngine::calibrate`] afterwards.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Re-reads the surface size and redraws the last frame at that size.
    ///
    /// When the last frame no longer fits, the surface is left cleared and the
    /// grid is dropped. The frame is kept for the next calibration.
    pub fn calibrate(&mut self) -> Result<(), EngineError> {
        self.dimensions = Dimensions::of(&self.context);
        debug!(
            "calibrated render engine to {}x{}",
            self.dimensions.width, self.dimensions.height
        );

        let Some((table, modulus)) = self.last_frame else {
            self.clear();
            return Ok(());
        };

        if let Err(err) = self.draw(table, modulus) {
            self.grid = None;
            self.clear();
            return Err(err);
        }

        Ok(())
    }

    /// Clears the surface and draws one full frame.
    ///
    /// Every frame strokes `modulus` chords, streamed in batches of
    /// `CHORD_BATCH_SIZE`, so memory stays flat while time grows linearly.
    /// Moduli above a few million are valid but no longer interactive.
    pub fn render_frame(&mut self, table: f64, modulus: u32) -> Result<(), EngineError> {
        let modulus = Modulus::new(modulus)?;
        let table = EngineError::require_finite("table", table)?;

        self.draw(table, modulus)
    }

    fn draw(&mut self, table: f64, modulus: Modulus) -> Result<(), EngineError> {
        let grid = self.grid_for(modulus)?;
        trace!("rendering frame table={table} modulus={modulus}");

        self.clear();
        grid.draw_outline(&mut self.context);
        let context = &mut self.context;
        for_each_chord_rayon(&grid, table, |chord| stroke_chord(context, chord));
        self.draw_labels(table, modulus);

        self.grid = Some(grid);
        self.last_frame = Some((table, modulus));

        Ok(())
    }

    fn grid_for(&self, modulus: Modulus) -> Result<CircleGrid, EngineError> {
        let Dimensions { width, height } = self.dimensions;
        let radius = width.min(height) / 2.0 - self.config.margin;
        let center = self.dimensions.center();

        match self.grid {
            Some(mut grid) => {
                grid.calibrate(center, radius, modulus)?;
                Ok(grid)
            }
            None => CircleGrid::new(center, radius, modulus),
        }
    }

    fn clear(&mut self) {
        let Dimensions { width, height } = self.dimensions;

        self.context.set_fill_colour(self.config.background);
        self.context.fill_rect(0.0, 0.0, width, height);
        self.context.set_fill_colour(self.config.foreground);
    }

    fn draw_labels(&mut self, table: f64, modulus: Modulus) {
        let height = self.dimensions.height;
        let x = self.config.label_x;

        self.context.fill_text(
            &format!("Table: {table}"),
            Point::new(x, height - self.config.table_label_offset),
        );
        self.context.fill_text(
            &format!("Modulo: {modulus}"),
            Point::new(x, height - self.config.modulo_label_offset),
        );
    }
}

fn stroke_chord<C: DrawingContext>(context: &mut C, chord: Chord) {
    context.begin_path();
    context.move_to(chord.start);
    context.line_to(chord.end);
    context.stroke();
}

impl<C: DrawingContext> FrameRenderer for RenderEngine<C> {
    fn render_frame(&mut self, table: f64, modulus: u32) -> Result<(), EngineError> {
        RenderEngine::render_frame(self, table, modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_chords::CHORD_BATCH_SIZE;
    use crate::core::data::colour::Colour;
    use crate::presenters::canvas::{PixelCanvas, PixelSurface};
    use crate::presenters::recording::{DrawCommand, RecordingCanvas, RecordingSurface};

    fn recording_engine(width: f64, height: f64) -> RenderEngine<RecordingCanvas> {
        RenderEngine::bind(RecordingSurface { width, height }).unwrap()
    }

    #[test]
    fn bind_fails_without_a_context() {
        let result = RenderEngine::bind(RecordingSurface {
            width: 0.0,
            height: 100.0,
        });

        assert!(matches!(result, Err(EngineError::InvalidSurface(_))));
    }

    #[test]
    fn bind_sets_colours_and_clears() {
        let engine = recording_engine(200.0, 100.0);

        assert_eq!(
            engine.context().commands(),
            &[
                DrawCommand::SetStrokeColour(Colour::BLACK),
                DrawCommand::SetFillColour(Colour::BLACK),
                DrawCommand::SetFillColour(Colour::WHITE),
                DrawCommand::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 200.0,
                    height: 100.0,
                    colour: Colour::WHITE,
                },
                DrawCommand::SetFillColour(Colour::BLACK),
            ]
        );
        assert_eq!(
            engine.current_dimensions(),
            Dimensions {
                width: 200.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn frame_has_outline_chords_and_labels() {
        let mut engine = recording_engine(300.0, 200.0);
        engine.context_mut().take_commands();

        engine.render_frame(2.0, 10).unwrap();

        let canvas = engine.context();
        assert_eq!(canvas.stroked_arc_count(), 1);
        assert_eq!(canvas.lines().len(), 10);
        assert_eq!(canvas.texts(), vec!["Table: 2", "Modulo: 10"]);

        let grid = engine.grid().unwrap();
        assert_eq!(grid.center(), Point::new(150.0, 100.0));
        assert_eq!(grid.radius(), 90.0);
    }

    #[test]
    fn chords_follow_index_order() {
        let mut engine = recording_engine(100.0, 100.0);
        engine.render_frame(3.0, 7).unwrap();

        let grid = *engine.grid().unwrap();
        let lines = engine.context().lines();
        for (i, (start, end)) in lines.into_iter().enumerate() {
            let i = i as f64;
            assert_eq!(start, grid.point_for(i));
            assert_eq!(end, grid.point_for(i * 3.0));
        }
    }

    #[test]
    fn labels_sit_above_the_bottom_edge() {
        let mut engine = recording_engine(100.0, 100.0);
        engine.render_frame(1.5, 4).unwrap();

        let positions: Vec<Point> = engine
            .context()
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { position, .. } => Some(*position),
                _ => None,
            })
            .collect();

        assert_eq!(positions, vec![Point::new(10.0, 80.0), Point::new(10.0, 90.0)]);
    }

    #[test]
    fn every_frame_is_a_full_redraw() {
        let mut engine = recording_engine(100.0, 100.0);

        engine.render_frame(2.0, 50).unwrap();
        engine.context_mut().take_commands();
        engine.render_frame(2.0, 5).unwrap();

        let canvas = engine.context();
        assert_eq!(canvas.lines().len(), 5);
        assert_eq!(canvas.stroked_arc_count(), 1);
        assert!(matches!(
            canvas.commands().get(1),
            Some(DrawCommand::FillRect { .. })
        ));
    }

    #[test]
    fn rejects_invalid_frames_without_drawing() {
        let mut engine = recording_engine(100.0, 100.0);
        engine.render_frame(2.0, 10).unwrap();
        engine.context_mut().take_commands();

        assert!(engine.render_frame(2.0, 0).unwrap_err().is_invalid_parameter());
        assert!(engine.render_frame(f64::NAN, 10).unwrap_err().is_invalid_parameter());
        assert!(
            engine
                .render_frame(f64::INFINITY, 10)
                .unwrap_err()
                .is_invalid_parameter()
        );

        assert!(engine.context().commands().is_empty());
        assert_eq!(engine.grid().unwrap().modulus().get(), 10);
        assert_eq!(engine.last_frame().map(|(table, _)| table), Some(2.0));
    }

    #[test]
    fn surface_too_small_for_margin_is_rejected() {
        let mut engine = recording_engine(20.0, 20.0);

        let err = engine.render_frame(2.0, 10).unwrap_err();

        assert!(err.is_invalid_parameter());
        assert!(engine.grid().is_none());
    }

    #[test]
    fn calibrate_redraws_last_frame_at_new_size() {
        let mut engine = recording_engine(100.0, 100.0);
        engine.render_frame(2.0, 12).unwrap();

        engine.context_mut().resize(400.0, 200.0);
        engine.context_mut().take_commands();
        engine.calibrate().unwrap();

        assert_eq!(engine.current_dimensions().width, 400.0);
        let grid = engine.grid().unwrap();
        assert_eq!(grid.center(), Point::new(200.0, 100.0));
        assert_eq!(grid.radius(), 90.0);
        assert_eq!(engine.context().lines().len(), 12);
    }

    #[test]
    fn calibrate_before_any_frame_only_clears() {
        let mut engine = recording_engine(100.0, 100.0);
        engine.context_mut().take_commands();

        engine.calibrate().unwrap();

        assert!(engine.context().lines().is_empty());
        assert!(engine.last_frame().is_none());
    }

    #[test]
    fn calibrate_to_a_surface_too_small_leaves_it_cleared() {
        let mut engine = recording_engine(100.0, 100.0);
        engine.render_frame(2.0, 12).unwrap();

        engine.context_mut().resize(20.0, 20.0);
        engine.context_mut().take_commands();
        let err = engine.calibrate().unwrap_err();

        assert!(err.is_invalid_parameter());
        assert!(engine.grid().is_none());
        assert_eq!(engine.last_frame().map(|(table, _)| table), Some(2.0));
        assert!(engine.context().lines().is_empty());
        assert!(engine.context().commands().contains(&DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 20.0,
            colour: Colour::WHITE,
        }));

        engine.context_mut().resize(100.0, 100.0);
        engine.calibrate().unwrap();
        assert_eq!(engine.context().lines().len(), 12);
    }

    #[test]
    fn failed_calibrate_clears_resized_pixel_canvas_to_background() {
        let mut engine: RenderEngine<PixelCanvas> = RenderEngine::bind(PixelSurface {
            width: 100,
            height: 100,
        })
        .unwrap();
        engine.render_frame(2.0, 30).unwrap();

        engine.context_mut().resize(16, 16).unwrap();
        assert!(engine.calibrate().is_err());

        let buffer = engine.context().pixel_buffer();
        assert_eq!(buffer.count_colour(Colour::WHITE), 16 * 16);
    }

    #[test]
    fn rejected_canvas_resize_is_an_invalid_surface() {
        let mut engine: RenderEngine<PixelCanvas> = RenderEngine::bind(PixelSurface {
            width: 100,
            height: 100,
        })
        .unwrap();

        let err = engine
            .context_mut()
            .resize(1, 100)
            .map_err(EngineError::from)
            .unwrap_err();

        assert!(err.is_invalid_surface());
        assert_eq!(engine.context().pixel_buffer().pixel_rect().width(), 100);
    }

    #[test]
    fn chords_past_one_batch_stay_in_index_order() {
        let modulus = CHORD_BATCH_SIZE + 3;
        let mut engine = recording_engine(100.0, 100.0);

        engine.render_frame(1.5, modulus).unwrap();

        let grid = *engine.grid().unwrap();
        let lines = engine.context().lines();
        assert_eq!(lines.len(), modulus as usize);
        let last = f64::from(modulus - 1);
        assert_eq!(lines[lines.len() - 1], (grid.point_for(last), grid.point_for(last * 1.5)));
    }

    #[test]
    fn custom_config_changes_margin_and_colours() {
        let config = EngineConfig {
            margin: 0.0,
            background: Colour::rgb(10, 20, 30),
            ..EngineConfig::default()
        };
        let mut engine = RenderEngine::bind_with_config(
            RecordingSurface {
                width: 100.0,
                height: 100.0,
            },
            config,
        )
        .unwrap();

        engine.render_frame(2.0, 3).unwrap();

        assert_eq!(engine.grid().unwrap().radius(), 50.0);
        assert!(engine.context().commands().iter().any(|command| matches!(
            command,
            DrawCommand::FillRect { colour, .. } if *colour == Colour::rgb(10, 20, 30)
        )));
    }

    #[test]
    fn renders_into_pixel_canvas() {
        let mut engine: RenderEngine<PixelCanvas> = RenderEngine::bind(PixelSurface {
            width: 120,
            height: 120,
        })
        .unwrap();

        engine.render_frame(2.0, 30).unwrap();

        let buffer = engine.context().pixel_buffer();
        assert!(buffer.count_colour(Colour::BLACK) > 0);
        assert!(buffer.count_colour(Colour::WHITE) > 0);
        // outline passes through the topmost point of the circle
        assert_eq!(buffer.pixel(60, 10), Ok(Colour::BLACK));
    }
}
