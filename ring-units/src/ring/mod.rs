//! # Exponent Ring Module
//!
//! Provides the [`Ring`] struct for modular exponent arithmetic and the
//! group-ring multiplication/power engine built on top of it.

pub mod element_ops;
pub mod math;

pub use element_ops::{Contribution, PowerStep, multiply, power, power_steps};
pub use math::Ring;
