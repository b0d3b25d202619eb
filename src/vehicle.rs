// 🚗 Vehicle - Abstraction
// Start/stop dispatch per variant; fuel status is shared behavior that
// no variant overrides

use serde::{Deserialize, Serialize};

// ============================================================================
// VEHICLE
// ============================================================================

/// Vehicle variants. Fieldless: the variants differ only in behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vehicle {
    Car,
    ElectricScooter,
}

impl Vehicle {
    pub fn name(&self) -> &'static str {
        match self {
            Vehicle::Car => "Car",
            Vehicle::ElectricScooter => "ElectricScooter",
        }
    }

    /// Variant-specific start message
    pub fn start(&self) -> &'static str {
        match self {
            Vehicle::Car => "Car started with key ignition.",
            Vehicle::ElectricScooter => "Scooter started with a power button.",
        }
    }

    /// Variant-specific stop message
    pub fn stop(&self) -> &'static str {
        match self {
            Vehicle::Car => "Car stopped safely.",
            Vehicle::ElectricScooter => "Scooter powered off.",
        }
    }

    /// Shared across all variants, independent of the variant
    pub fn fuel_status(&self) -> &'static str {
        "Fuel level: OK"
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_messages() {
        let car = Vehicle::Car;
        assert_eq!(car.start(), "Car started with key ignition.");
        assert_eq!(car.stop(), "Car stopped safely.");
    }

    #[test]
    fn test_scooter_messages() {
        let scooter = Vehicle::ElectricScooter;
        assert_eq!(scooter.start(), "Scooter started with a power button.");
        assert_eq!(scooter.stop(), "Scooter powered off.");
    }

    #[test]
    fn test_fuel_status_is_shared() {
        // Every variant reports the same fuel status
        for vehicle in [Vehicle::Car, Vehicle::ElectricScooter] {
            assert_eq!(vehicle.fuel_status(), "Fuel level: OK");
        }
    }

    #[test]
    fn test_vehicle_names() {
        assert_eq!(Vehicle::Car.name(), "Car");
        assert_eq!(Vehicle::ElectricScooter.name(), "ElectricScooter");
    }
}
