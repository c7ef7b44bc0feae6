use core::cmp::Ordering;
use core::fmt;

use valuekit_core::{Value, ValueError, ValueKind, ValueResult};

use crate::unit::EnergyUnit;

pub(crate) const ENERGY_KIND: &str = "energy";

/// Quantities closer than this (in gigacalories) compare equal.
pub const COMPARISON_TOLERANCE: f64 = 0.00001;

/// Quantity of energy value object, built from `(quantity, unit label)`.
///
/// Renders as the bare quantity. Comparison normalises both sides to gigacalories,
/// so `(1, "Gcal.")` equals `(4.1841, "GJ.")`.
///
/// Equality is tolerance-based and therefore not transitive, so `Energy` has no
/// `PartialEq`/`Ord`; use [`Value::compare_to`] or [`Value::compare_to_value`].
///
/// ```compile_fail
/// use valuekit_energy::{energy, EnergyUnit};
///
/// let a = energy(1.0, EnergyUnit::GigaCalorie).unwrap();
/// let _ = a == a;
/// ```
pub type Energy = Value<EnergyReading>;

/// Attributes of an [`Energy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReading {
    quantity: f64,
    unit: EnergyUnit,
}

impl EnergyReading {
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> EnergyUnit {
        self.unit
    }

    pub fn label(&self) -> &'static str {
        self.unit.label()
    }

    pub fn gigacalories(&self) -> f64 {
        self.unit.to_gigacalories(self.quantity)
    }
}

impl ValueKind for EnergyReading {
    type Significance = (f64, String);
    const KIND: &'static str = ENERGY_KIND;

    fn populate(significance: &(f64, String)) -> ValueResult<Self> {
        let (quantity, label) = significance;
        if !quantity.is_finite() {
            return Err(ValueError::invalid(
                Self::KIND,
                format!("quantity must be finite, got {quantity}"),
            ));
        }

        Ok(Self {
            quantity: *quantity,
            unit: label.parse()?,
        })
    }

    fn compare_same(&self, other: &Self) -> Ordering {
        let this = self.gigacalories();
        let that = other.gigacalories();

        if (this - that).abs() < COMPARISON_TOLERANCE {
            Ordering::Equal
        } else if this < that {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    fn render(&self, _significance: &(f64, String), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.quantity, f)
    }
}

/// Unit conversions. Each one returns a new [`Energy`]; the receiver is unchanged.
///
/// A conversion whose result does not fit in an `f64` fails with
/// [`ValueError::InvalidSignificance`] naming the overflow.
pub trait EnergyConversions: Sized {
    fn to_unit(&self, unit: EnergyUnit) -> ValueResult<Self>;

    fn to_giga_calories(&self) -> ValueResult<Self> {
        self.to_unit(EnergyUnit::GigaCalorie)
    }

    fn to_giga_joules(&self) -> ValueResult<Self> {
        self.to_unit(EnergyUnit::GigaJoule)
    }
}

impl EnergyConversions for Energy {
    fn to_unit(&self, unit: EnergyUnit) -> ValueResult<Self> {
        let quantity = if self.unit() == unit {
            self.quantity()
        } else {
            unit.convert_gigacalories(self.gigacalories())
        };
        if !quantity.is_finite() {
            return Err(ValueError::invalid(
                ENERGY_KIND,
                format!(
                    "converting {} {} to {unit} overflows",
                    self.quantity(),
                    self.unit()
                ),
            ));
        }
        tracing::trace!(from = %self.unit(), to = %unit, "converting energy");

        self.change_to((quantity, unit.label().to_string()))
    }
}

/// Shorthand for building an [`Energy`] from a quantity and a unit.
pub fn energy(quantity: f64, unit: EnergyUnit) -> ValueResult<Energy> {
    Energy::construct((quantity, unit.label().to_string()))
}
