pub mod movie;
pub mod session;
pub mod stats;
pub mod user;

pub use movie::{HistoryUpdate, MovieDraft, MovieRecord};
pub use session::{Route, Session};
pub use stats::HistoryStats;
pub use user::User;
