//! Per-task result handling. Each task module validates its slice of the
//! payload into a typed input, builds chart specs from it, and renders them.

pub mod classification;
pub mod clustering;
pub mod regression;
