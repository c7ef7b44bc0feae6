//! Contact details expressed as value objects.
//!
//! Pure domain logic only: validation and comparison, no IO.

pub mod email;

pub use email::{Email, EmailAddress};
