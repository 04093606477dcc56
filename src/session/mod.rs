//! Sessions, scoring and persisted statistics
//!
//! A [`SessionManager`] wraps one [`Game`](crate::core::Game) per session,
//! times it, scores it by [`GameMode`], and keeps [`Statistics`] in a
//! [`StatsStore`].

mod clock;
mod manager;
mod mode;
mod stats;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{PRACTICE_SCORE, Session, SessionId, SessionManager};
pub use mode::GameMode;
pub use stats::Statistics;
pub use store::{FileStatsStore, MemoryStatsStore, StatsStore};
