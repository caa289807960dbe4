//! Binary-side orchestration: turn parsed arguments into a plan and run it.

pub(crate) mod entry;
pub(crate) mod plan;
