//! Payload access, validation vocabulary, and presentation helpers shared by every task.

pub mod format;
pub mod issue;
pub mod palette;
pub mod payload;
