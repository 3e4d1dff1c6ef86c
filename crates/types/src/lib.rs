//! Shared types for the liquidity toolkit: contract bindings, token and pool
//! descriptions, and the tick conversion math.

pub mod contract_bindings;
pub mod display;
pub mod primitive;
pub mod ticks;
