pub mod plan;
pub mod tag;
