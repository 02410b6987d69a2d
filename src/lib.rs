//! # Connect Four
//!
//! A Connect Four game for the terminal with a minimax AI opponent.
//! Supports human vs human, human vs AI, and AI vs AI play, with a
//! Ratatui-based board view and in-process mode/difficulty menus.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, modes, game session
//! - [`ai`] — Agent trait, heuristic evaluator, minimax search
//! - [`ui`] — Terminal UI: menus and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
