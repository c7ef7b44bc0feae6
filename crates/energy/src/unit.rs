//! Units of energy and their conversion table.

use core::fmt;
use core::str::FromStr;

use valuekit_core::ValueError;

use crate::reading::ENERGY_KIND;

/// Supported units. Coefficients are expressed in gigacalories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyUnit {
    GigaCalorie,
    GigaJoule,
    MegawattHour,
}

impl EnergyUnit {
    pub const ALL: [EnergyUnit; 3] = [
        EnergyUnit::GigaCalorie,
        EnergyUnit::GigaJoule,
        EnergyUnit::MegawattHour,
    ];

    /// Label used in significances, e.g. `"Gcal."`.
    pub fn label(self) -> &'static str {
        match self {
            EnergyUnit::GigaCalorie => "Gcal.",
            EnergyUnit::GigaJoule => "GJ.",
            EnergyUnit::MegawattHour => "MWh",
        }
    }

    /// How many gigacalories one unit holds.
    pub fn gigacalories_per_unit(self) -> f64 {
        match self {
            EnergyUnit::GigaCalorie => 1.0,
            EnergyUnit::GigaJoule => 0.239,
            EnergyUnit::MegawattHour => 0.859845,
        }
    }

    pub fn to_gigacalories(self, quantity: f64) -> f64 {
        quantity * self.gigacalories_per_unit()
    }

    pub fn convert_gigacalories(self, gigacalories: f64) -> f64 {
        gigacalories / self.gigacalories_per_unit()
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnergyUnit {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s)
            .ok_or_else(|| ValueError::invalid(ENERGY_KIND, format!("unknown unit '{s}'")))
    }
}
