//! Terminal UI for the course.

mod app;
mod screens;

pub use app::run;
