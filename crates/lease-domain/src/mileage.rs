use serde::{Deserialize, Serialize};

use crate::MileageAllowance;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// Latest odometer snapshot plus the selected allowance tier.
///
/// A new reading replaces the previous one; readings are never accumulated.
pub struct MileageState {
    pub current_mileage: f64,
    pub annual_allowance: MileageAllowance,
}

impl MileageState {
    pub fn new(current_mileage: f64, annual_allowance: MileageAllowance) -> Self {
        Self {
            current_mileage,
            annual_allowance,
        }
    }

    /// True until the user has entered a non-zero reading.
    pub fn is_unset(&self) -> bool {
        self.current_mileage == 0.0
    }
}
