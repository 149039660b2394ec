//! `fintrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! money values, the time source abstraction and the domain error model.

pub mod clock;
pub mod error;
pub mod money;
pub mod value_object;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::DomainError;
pub use money::Amount;
pub use value_object::ValueObject;
