// src/systems/mod.rs

// Week simulator, closed-form baselines and the grid sweep built on them.

pub mod baseline;
pub mod sdk;
pub mod sweep;
pub mod week;
