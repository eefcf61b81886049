pub mod aggregate;
pub mod checklist;
pub mod review;
