//! `valuekit-core` — immutable value object building blocks.
//!
//! This crate contains the **value object contract** and nothing else: no concrete
//! domain types, no persistence, no serialization.

pub mod error;
pub mod significance;
pub mod slot;
pub mod value_object;

pub use error::{ValueError, ValueResult};
pub use significance::{Rendered, Significance};
pub use slot::{Lifecycle, ValueSlot};
pub use value_object::{Operand, TotalOrder, Value, ValueKind};
