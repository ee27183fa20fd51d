pub mod block;
pub mod config;
pub mod feasibility;
pub mod plan;
