//! # Shobu
//!
//! Rules engine and computer opponents for Shobu, the two-player game played
//! on four 4×4 boards.
//!
//! ## Modules
//!
//! - [`game`] : Position, move legality, apply/reverse, move enumeration,
//!   move builder and game record
//! - [`ai`] : Strategy trait with random, greedy, heuristic and alpha-beta players
//! - [`arena`] : Game driver and match statistics
//! - [`config`] : TOML configuration loading and validation
//! - [`error`] : Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
