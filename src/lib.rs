// Birthday Clock Library
// Exports the widget core for the desktop shell, tests and benches

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
