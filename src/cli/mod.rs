pub mod commands;

pub use commands::{Cli, Commands, RequestKind, SuggestTarget, run};
