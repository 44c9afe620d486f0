pub mod graph;
pub mod orchestrator;
pub mod planner;
pub mod traits;
pub mod types;
