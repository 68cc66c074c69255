//! Game driver
//!
//! This crate provides infrastructure for:
//! - Playing a game between two [`chess_core::Player`]s
//! - Console input for a human player
//! - TOML game configuration and JSON game records
//!
//! # Usage
//!
//! ```bash
//! # Play the game described by a config file
//! cargo run -p match_runner -- play game.toml
//!
//! # Play against the engine from the console
//! cargo run -p match_runner -- human --ai-color black --depth 3
//! ```

mod config;
mod error;
mod human;
mod results;
mod runner;

pub use config::*;
pub use error::*;
pub use human::*;
pub use results::*;
pub use runner::*;
