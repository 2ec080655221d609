pub mod queue;
pub mod query;
