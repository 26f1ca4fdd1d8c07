use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::ports::{DrawingContext, SurfaceHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

/// One call issued against the drawing port. Path building calls are folded
/// into the `Stroke` that consumes them.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetStrokeColour(Colour),
    SetFillColour(Colour),
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        colour: Colour,
    },
    Stroke {
        path: Vec<PathSegment>,
        colour: Colour,
    },
    FillText {
        text: String,
        position: Point,
        colour: Colour,
    },
}

impl DrawCommand {
    /// A stroked path made of exactly one straight segment.
    #[must_use]
    pub fn as_line(&self) -> Option<(Point, Point)> {
        match self {
            Self::Stroke { path, .. } => match path.as_slice() {
                [PathSegment::MoveTo(from), PathSegment::LineTo(to)] => Some((*from, *to)),
                _ => None,
            },
            _ => None,
        }
    }

    #[must_use]
    pub fn is_stroked_arc(&self) -> bool {
        matches!(self, Self::Stroke { path, .. }
            if path.iter().any(|segment| matches!(segment, PathSegment::Arc { .. })))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
}

impl SurfaceHandle for RecordingSurface {
    type Context = RecordingCanvas;

    fn context_2d(self) -> Option<RecordingCanvas> {
        let usable = |extent: f64| extent.is_finite() && extent > 0.0;

        (usable(self.width) && usable(self.height))
            .then(|| RecordingCanvas::new(self.width, self.height))
    }
}

/// Keeps every drawing call as a [`DrawCommand`] display list.
///
/// Hosts with their own 2D API replay the list; tests inspect it.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    stroke_colour: Option<Colour>,
    fill_colour: Option<Colour>,
    path: Vec<PathSegment>,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Straight stroked segments in draw order.
    #[must_use]
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands.iter().filter_map(DrawCommand::as_line).collect()
    }

    #[must_use]
    pub fn stroked_arc_count(&self) -> usize {
        self.commands.iter().filter(|command| command.is_stroked_arc()).count()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn stroke_or_black(&self) -> Colour {
        self.stroke_colour.unwrap_or(Colour::BLACK)
    }

    fn fill_or_black(&self) -> Colour {
        self.fill_colour.unwrap_or(Colour::BLACK)
    }
}

impl DrawingContext for RecordingCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_stroke_colour(&mut self, colour: Colour) {
        self.stroke_colour = Some(colour);
        self.commands.push(DrawCommand::SetStrokeColour(colour));
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill_colour = Some(colour);
        self.commands.push(DrawCommand::SetFillColour(colour));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let colour = self.fill_or_black();
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            colour,
        });
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.path.push(PathSegment::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.path.push(PathSegment::LineTo(point));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.path.push(PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        let colour = self.stroke_or_black();
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            colour,
        });
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        let colour = self.fill_or_black();
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            position,
            colour,
        });
    }
}
