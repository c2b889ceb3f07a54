//! Turn engine for a sliding-tile labyrinth game.
//!
//! Every turn the observed board is read into a [`core::GameState`]. On push
//! turns [`ai::PushAi`] simulates every legal push and keeps the one whose
//! resulting board connects us best to our quest items. On move turns
//! [`ai::MoveAi`] walks the shortest paths to the reachable quest items.

pub mod ai;
pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod state_graph;

#[cfg(test)]
mod test;
