//! File loading and saving for trigger sets and the duplication options.

pub mod options;
pub mod triggers;

pub use options::*;
pub use triggers::*;
