//! Terminal UI: the event loop and the screens it drives.

mod app;
mod screens;

pub use app::run;
