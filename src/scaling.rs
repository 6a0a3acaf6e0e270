//! Conversion between physical meters and simulation screen units.
//!
//! Astronomical Schwarzschild radii span anything from millimeters to
//! gigameters, so the simulation works in a screen unit system sized so
//! that a fixed number of Schwarzschild radii fill the visible domain.
//! The conversion is cheap and recomputed every tick rather than cached.

/// Mapping from physical distance (meters) to simulation screen units,
/// parameterized by the Schwarzschild radius of the mass source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitScale {
    /// How many Schwarzschild radii span the visible domain.
    pub simulation_scale_factor: f64,
}

impl Default for UnitScale {
    fn default() -> Self {
        Self {
            simulation_scale_factor: 10.0,
        }
    }
}

impl UnitScale {
    /// Physical meters represented by one screen unit.
    pub fn meters_per_screen_unit(&self, rs_meters: f64) -> f64 {
        (rs_meters * self.simulation_scale_factor) / 6.0
    }

    /// Schwarzschild radius expressed in screen units.
    pub fn schwarzschild_screen_radius(&self, rs_meters: f64) -> f64 {
        rs_meters / self.meters_per_screen_unit(rs_meters)
    }

    /// Convert a physical distance to screen units.
    pub fn to_screen(&self, meters: f64, rs_meters: f64) -> f64 {
        meters / self.meters_per_screen_unit(rs_meters)
    }
}
