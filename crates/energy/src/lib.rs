//! Energy quantities as value objects (units, conversions, normalised comparison).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod reading;
pub mod unit;

pub use reading::{COMPARISON_TOLERANCE, Energy, EnergyConversions, EnergyReading, energy};
pub use unit::EnergyUnit;
