pub mod aggregate_id;
pub mod pagination;

pub use aggregate_id::AggregateId;
