pub mod errors;
pub mod game;
pub mod messages;
pub mod play;
pub mod question;
pub mod user;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use messages::*;
pub use play::*;
pub use question::*;
pub use user::*;

pub type GameId = String;
pub type QuestionId = String;
pub type UserId = String;
