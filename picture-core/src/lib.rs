pub mod answer;
pub mod drafts;
pub mod play_events;
pub mod play_session;
pub mod resolution;
pub mod scoring;

// Re-export main components
pub use answer::*;
pub use drafts::*;
pub use play_events::*;
pub use play_session::*;
pub use resolution::*;
pub use scoring::*;
