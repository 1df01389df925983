//! Defensive Connect-Four agent and the host-side pieces needed to run it:
//! board, threat scanners, agents, move validation and a match runner, plus
//! the config and logging helpers the arena binary shares.

pub mod config;
pub mod games;
pub mod logger;
