pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod source;
pub mod state;
pub mod tui;
pub mod ui;

pub use error::QuizError;
pub use model::{Question, QuizResults, SessionConfig};
pub use session::{QuizSession, SessionStatus};
