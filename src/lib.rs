//! # Connect Four Engine
//!
//! The rules engine and adversarial search agent for Connect Four: board
//! state with exhaustive four-direction win detection, a window-scanning
//! static evaluator, and a depth-limited minimax search with alpha-beta
//! pruning over in-place mutate/undo recursion.
//!
//! The presentation layer stays outside this crate: it feeds chosen columns
//! into [`game::GameSession`] and renders the placed-token events and
//! terminal outcomes it gets back. `src/main.rs` ships a thin terminal
//! front-end in exactly that role.
//!
//! ## Modules
//!
//! - [`game`] — Board, move applier, players, game session
//! - [`ai`] — Agent trait, static evaluator, minimax search engine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
