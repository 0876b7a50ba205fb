//! SQLite-backed store for activities, students and their participations.

mod error;
pub mod fixtures;
mod session;
mod store;

pub use error::StoreError;
pub use session::SqliteSession;
pub use store::SqliteActivityStore;
