//! # protosim-engine
//!
//! Monte-Carlo replay of multi-step laboratory protocols.
//! Components, leaf to root: catalog, step executor, iteration runner,
//! Monte-Carlo aggregator. Statistics and random streams support them.

pub mod aggregator;
pub mod catalog;
pub mod executor;
pub mod rng;
pub mod runner;
pub mod stats;

pub use aggregator::{aggregate, MonteCarloAggregator};
pub use catalog::{ProtocolCatalog, ResolvedTemplate};
pub use executor::StepExecutor;
pub use rng::SimRng;
pub use runner::IterationRunner;
pub use stats::Summary;
