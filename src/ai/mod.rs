//! Computer players: the `Agent` interface, the heuristic evaluator, and
//! the alpha-beta minimax searcher.

mod agent;
pub mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{minimax, MinimaxAgent, WIN_VALUE};
pub use random::RandomAgent;
