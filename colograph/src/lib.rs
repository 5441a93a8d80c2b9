pub use coloring::*;
pub use config::*;
pub use errors::*;
pub use graph::*;
pub use outcome::*;
pub use role::*;
pub use snapshot::*;
pub use state::*;
pub use turn::*;

#[cfg(test)]
mod arbitrary;
mod coloring;
mod config;
mod errors;
mod graph;
pub mod heuristics;
mod outcome;
mod role;
mod snapshot;
mod state;
mod turn;
