use crate::input::forms::{AnimatedRenderForm, FixedRenderForm};

const DEFAULT_TABLE: &str = "2";
const DEFAULT_MODULO: &str = "200";
const DEFAULT_TABLE_END: &str = "10";
const DEFAULT_PRECISION: &str = "100";

/// Buttons pressed during one egui pass, applied after the pass ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiAction {
    RenderFixed,
    StartAnimation,
    Pause,
    Resume,
    Stop,
}

pub struct GuiAppState {
    pub fixed_form: FixedRenderForm,
    pub animated_form: AnimatedRenderForm,
    pub last_error_message: Option<String>,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self {
            fixed_form: FixedRenderForm {
                table: DEFAULT_TABLE.to_owned(),
                modulo: DEFAULT_MODULO.to_owned(),
            },
            animated_form: AnimatedRenderForm {
                table_start: "0".to_owned(),
                table_end: DEFAULT_TABLE_END.to_owned(),
                precision: DEFAULT_PRECISION.to_owned(),
                modulo: DEFAULT_MODULO.to_owned(),
            },
            last_error_message: None,
        }
    }
}

impl GuiAppState {
    pub fn record_result<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        self.last_error_message = result.err().map(|err| err.to_string());
    }
}
