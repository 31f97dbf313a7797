//! AI strategies: the common [`Strategy`] trait, the heuristic board
//! evaluator, the minimax [`SearchTree`], and the three players built on
//! top of them (random, one-ply scoring, and tree-caching greedy).

mod greedy;
mod heuristic;
mod random;
mod scoring;
mod strategy;
mod tree;

pub use greedy::GreedyPlayer;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use random::RandomPlayer;
pub use scoring::ScoringPlayer;
pub use strategy::Strategy;
pub use tree::{SearchTree, WIN_SCORE};
