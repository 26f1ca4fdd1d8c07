pub mod gui_command;
pub mod ports;
