//! Test utilities for the lensing simulation tests.
//!
//! Fixtures build photons in standard launch configurations; assertions
//! measure the geometric quantities the invariants are stated in.

use bevy::math::DVec2;

use crate::photon::{PhotonState, Trail};

/// Fixtures for creating test photons.
pub mod fixtures {
    use super::*;

    /// A beam ray: launched at (-1, y) traveling in +x, the layout of the
    /// classic lensing demo.
    pub fn beam_photon(y: f64) -> PhotonState {
        PhotonState::new(DVec2::new(-1.0, y), DVec2::X)
    }

    /// A ray at (r, 0) falling straight toward the mass.
    pub fn radial_photon(r: f64) -> PhotonState {
        PhotonState::new(DVec2::new(r, 0.0), DVec2::NEG_X)
    }

    /// A ray launched tangentially at radius r and polar angle `angle`.
    ///
    /// Tangential launches maximize the angular geodesic terms, making
    /// them the worst case for far-field deflection checks.
    pub fn tangential_photon(r: f64, angle: f64) -> PhotonState {
        let position = DVec2::new(r * angle.cos(), r * angle.sin());
        let direction = DVec2::new(-angle.sin(), angle.cos());
        PhotonState::new(position, direction)
    }
}

/// Assertions for verifying geometric invariants.
pub mod assertions {
    use super::*;

    /// Angle in radians between two direction vectors.
    pub fn deflection_angle(before: DVec2, after: DVec2) -> f64 {
        let cos_angle =
            (before.dot(after) / (before.length() * after.length())).clamp(-1.0, 1.0);
        cos_angle.acos()
    }

    /// Assert the trail's ages run uniformly from 0.0 (oldest) to 1.0
    /// (newest).
    ///
    /// # Panics
    /// Panics if any age deviates from `index / (len - 1)`.
    pub fn assert_ages_normalized(trail: &Trail) {
        let len = trail.len();
        assert!(len > 1, "age normalization needs at least two samples");
        for (i, sample) in trail.iter().enumerate() {
            let expected = i as f32 / (len - 1) as f32;
            assert!(
                (sample.age - expected).abs() < 1e-6,
                "sample {i} has age {} expected {expected}",
                sample.age
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_beam_photon_moves_right() {
        let photon = fixtures::beam_photon(0.3);
        assert!(photon.dr.is_finite());
        assert_relative_eq!(photon.position.x, -1.0, epsilon = 1e-15);
        assert_eq!(photon.direction, DVec2::X);
    }

    #[test]
    fn test_radial_photon_has_no_angular_velocity() {
        let photon = fixtures::radial_photon(5.0);
        assert_relative_eq!(photon.dphi, 0.0, epsilon = 1e-15);
        assert_relative_eq!(photon.dr, -1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_tangential_photon_has_no_radial_velocity() {
        let photon = fixtures::tangential_photon(10.0, 0.7);
        assert_relative_eq!(photon.dr, 0.0, epsilon = 1e-12);
        assert_relative_eq!(photon.dphi, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_deflection_angle_of_perpendicular_vectors() {
        let angle = assertions::deflection_angle(DVec2::X, DVec2::Y);
        assert_relative_eq!(angle, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_deflection_angle_of_identical_vectors() {
        let angle = assertions::deflection_angle(DVec2::X, DVec2::X);
        assert_relative_eq!(angle, 0.0, epsilon = 1e-12);
    }
}
