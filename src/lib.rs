//! # Connect Four AI
//!
//! Adversarial search engine for a two-player, perfect-information,
//! gravity-drop connection game on a fixed 7×6 grid (Connect Four rules).
//! Provides an immutable game model and three AI strategies of increasing
//! strength, from uniform-random play up to a depth-limited minimax search
//! that reuses its tree incrementally across plies.
//!
//! The crate exposes no drawing or input handling: a driver turns UI events
//! into [`game::GameState::apply`] and [`ai::Strategy::choose_column`] calls
//! and renders the resulting state itself.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, immutable state transitions
//! - [`ai`] — Strategy trait, heuristic evaluation, search tree, players
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
