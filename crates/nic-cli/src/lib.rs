//! CLI library components for the NIC decoder.

pub mod logging;
pub mod pipeline;
