//! Conditional metadata refresh: timer gates, per-repository classification,
//! and the makecache operation built on them.

pub mod engine;
pub mod errors;
pub mod handler;
pub mod types;

pub use engine::{TIMER_GATES, TIMER_MAX_MIRROR_TRIES, classify_repo, decide};
pub use errors::RefreshError;
pub use handler::makecache;
pub use types::{AbortReason, Decision, MakecacheOutcome, RepoAction, TriggerMode};
