//! In-process collaborators for tests and the `epv-sim` binary
//!
//! Each simulated collaborator is a cheap handle over shared state: clone it,
//! hand one copy to the container and keep the other to drive events and
//! inspect what the container did.

mod engine;
mod network;
mod region;
pub mod scenario;

pub use engine::{EngineCommand, SimulatedEngine};
pub use network::SimulatedNetwork;
pub use region::SimulatedRegion;
pub use scenario::{Scenario, ScenarioReport, ScenarioStep};
