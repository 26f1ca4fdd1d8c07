use crate::core::data::colour::Colour;

pub const DEFAULT_MARGIN: f64 = 10.0;
pub const LABEL_X: f64 = 10.0;
pub const TABLE_LABEL_OFFSET: f64 = 20.0;
pub const MODULO_LABEL_OFFSET: f64 = 10.0;

/// Layout and colours used for every frame.
///
/// Label offsets are measured upwards from the bottom edge of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub margin: f64,
    pub foreground: Colour,
    pub background: Colour,
    pub label_x: f64,
    pub table_label_offset: f64,
    pub modulo_label_offset: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            foreground: Colour::BLACK,
            background: Colour::WHITE,
            label_x: LABEL_X,
            table_label_offset: TABLE_LABEL_OFFSET,
            modulo_label_offset: MODULO_LABEL_OFFSET,
        }
    }
}
