mod app;
mod logging;
mod page;
mod toast;
mod ui;
mod upload;

pub use app::run_app;
