mod app;
mod effects;
mod object_url;
mod ui;

pub use app::run_app;
