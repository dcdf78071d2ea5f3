//! Command implementations for the qtlview CLI
//!
//! Each command has its own module/file.

pub mod stats;
pub mod validate;
pub mod view;

// Re-export argument types for parser
pub use stats::StatsArgs;
pub use validate::ValidateArgs;
pub use view::ViewArgs;
