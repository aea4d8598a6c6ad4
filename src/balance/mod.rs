// src/balance/mod.rs

//! Station packing and cycle-time search.
//!
//! - [`station`] is a single workstation with a fixed capacity.
//! - [`packer`] marshals an ordered task sequence onto stations.
//! - [`result`] is the outcome of one packing pass plus its line metrics.
//! - [`search`] grows the cycle time until the station budget is met.

pub mod packer;
pub mod result;
pub mod search;
pub mod station;

pub use packer::pack;
pub use result::Balance;
pub use search::{base_cycle_time, find_cycle_time};
pub use station::{AssignedTask, Station};
