//! Debounced search sessions.
//!
//! [`Debouncer`] is a cancellable delayed task driven by explicit
//! timestamps; [`SearchSession`] combines two of them (suggestions and
//! filtering) with the matcher in [`crate::filters`].

pub mod debouncer;
pub mod session;

pub use debouncer::{Debouncer, Fired, Ticket};
pub use session::{
    DEFAULT_SUGGESTION_LIMIT, FILTER_DEBOUNCE, Phase, SUGGEST_DEBOUNCE, SearchSession,
    SessionConfig, TickOutcome,
};
