//! Screen rendering and input handling.

mod chat;
mod kubernetes;
mod lesson;
mod nav;

pub use chat::ChatPanel;
pub use kubernetes::{KubernetesScreen, StepAction};
pub use lesson::LessonScreen;
pub use nav::NavDrawer;
