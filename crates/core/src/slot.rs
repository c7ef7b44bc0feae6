//! Write-once holder for value objects that are built after their owner.
//!
//! `Value<K>` is initialized atomically by its constructor, so its lifecycle is not
//! observable. `ValueSlot<K>` is for the cases where the value only becomes known
//! later (a field filled in by a loader, a lazily computed static): it makes the
//! `Uninitialized -> Initialized` transition explicit and enforces that it happens
//! once.

use std::sync::OnceLock;

use crate::error::{ValueError, ValueResult};
use crate::value_object::{Value, ValueKind};

/// Lifecycle of a [`ValueSlot`]. `Initialized` is terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Initialized,
}

/// A slot that accepts exactly one value object.
///
/// Backed by [`OnceLock`]: a value stored by one thread is fully visible to every
/// reader, and readers never see a partially constructed value.
pub struct ValueSlot<K: ValueKind> {
    cell: OnceLock<Value<K>>,
}

impl<K: ValueKind> ValueSlot<K> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Construct a value from `significance` and store it.
    ///
    /// Fails with [`ValueError::IllegalReconstruction`] once the slot holds a value
    /// (including when another thread won a concurrent initialization). An invalid
    /// significance fails with the kind's validation error and leaves the slot
    /// uninitialized.
    pub fn initialize(&self, significance: K::Significance) -> ValueResult<&Value<K>> {
        if self.cell.get().is_some() {
            return Err(self.rejected());
        }

        let value = Value::construct(significance)?;
        match self.cell.set(value) {
            Ok(()) => self.cell.get().ok_or_else(|| self.rejected()),
            Err(_) => Err(self.rejected()),
        }
    }

    /// The stored value, if initialization has completed.
    pub fn get(&self) -> Option<&Value<K>> {
        self.cell.get()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.cell.get().is_some() {
            Lifecycle::Initialized
        } else {
            Lifecycle::Uninitialized
        }
    }

    pub fn into_inner(self) -> Option<Value<K>> {
        self.cell.into_inner()
    }

    fn rejected(&self) -> ValueError {
        tracing::warn!(kind = K::KIND, "value slot already initialized");
        ValueError::reconstruction(K::KIND)
    }
}

impl<K: ValueKind> Default for ValueSlot<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ValueKind + core::fmt::Debug> core::fmt::Debug for ValueSlot<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValueSlot")
            .field("lifecycle", &self.lifecycle())
            .field("value", &self.cell.get())
            .finish()
    }
}
