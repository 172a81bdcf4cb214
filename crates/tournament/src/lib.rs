//! Tournament coordinator
//!
//! This crate provides infrastructure for:
//! - Running an event through regulation and playoff segments
//! - Pairing rounds, recording results and ranking participants
//! - Simulating whole events from a TOML config and reporting on them
//!
//! # Usage
//!
//! ```bash
//! # Simulate an event described in a config file
//! cargo run -p tournament -- run event.toml --seed 7 --json results.json
//!
//! # Print the bracket seed order for an 8-player cut
//! cargo run -p tournament -- seeds 8
//! ```

mod config;
mod error;
mod event;
mod report;
mod round;
mod segment;
mod simulator;

pub use config::*;
pub use error::*;
pub use event::*;
pub use report::*;
pub use round::*;
pub use segment::*;
pub use simulator::*;
