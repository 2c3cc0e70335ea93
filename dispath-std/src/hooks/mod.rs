//! Standard hook implementations.

mod logging;
mod merge;

pub use logging::LoggingHook;
pub use merge::MergeHook;
