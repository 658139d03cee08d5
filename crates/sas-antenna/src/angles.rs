// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Angle algebra shared by every gain computation.
//!
//! Directions and azimuths are measured in degrees from true north in
//! clockwise direction; vertical angles are positive above the horizon.

use crate::Degrees;
use crate::error::AntennaError;

/// Mechanical downtilt is limited to ±15 degrees.
pub const MAX_MECHANICAL_DOWNTILT: Degrees = 15.0;

/// A horizontal/vertical direction pair in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    /// Horizontal direction, clockwise from true north.
    pub hor: Degrees,
    /// Vertical direction, positive above the horizon.
    pub ver: Degrees,
}

impl Direction {
    /// Creates a new direction from horizontal and vertical angles in degrees.
    pub const fn new(hor: Degrees, ver: Degrees) -> Self {
        Self { hor, ver }
    }
}

/// Folds an angle in degrees into the interval (-180, 180].
pub fn fold180(angle: Degrees) -> Degrees {
    let folded = angle.rem_euclid(360.0);
    if folded > 180.0 { folded - 360.0 } else { folded }
}

/// Clamps a mechanical downtilt to ±[`MAX_MECHANICAL_DOWNTILT`].
pub fn clamp_downtilt(downtilt: Degrees) -> Degrees {
    downtilt.clamp(-MAX_MECHANICAL_DOWNTILT, MAX_MECHANICAL_DOWNTILT)
}

/// Returns the supplementary angle `180 - phi` folded into (-180, 180].
pub fn supplementary(phi: Degrees) -> Degrees {
    fold180(180.0 - phi)
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), AntennaError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AntennaError::InvalidArgument(format!(
            "{name} must be finite but was {value}"
        )))
    }
}

pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<(), AntennaError> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(AntennaError::InvalidArgument(format!(
            "{name} must be non-negative but was {value}"
        )))
    }
}

/// Transforms a direction into boresight-relative coordinates.
///
/// The horizontal angle becomes `θ_r = fold180(hor - azimuth)`. With a
/// downtilt given, the vertical angle becomes
/// `φ_r = ver + downtilt·cos(θ_r·180/π)`; without one it is zero.
///
/// The downtilt weight scales the degree-valued `θ_r` by 180/π before the
/// cosine. Certified reference gains were produced with this exact
/// construct, so it is not interchangeable with `cos(θ_r·π/180)`.
pub fn boresight_relative(
    dirs: Direction,
    azimuth: Degrees,
    downtilt: Option<Degrees>,
) -> Result<Direction, AntennaError> {
    ensure_finite("horizontal direction", dirs.hor)?;
    ensure_finite("vertical direction", dirs.ver)?;
    ensure_finite("antenna azimuth", azimuth)?;

    let theta_r = fold180(dirs.hor - azimuth);
    let phi_r = match downtilt {
        Some(downtilt) => {
            ensure_finite("antenna downtilt", downtilt)?;
            dirs.ver + downtilt * (theta_r * 180.0 / std::f64::consts::PI).cos()
        }
        None => 0.0,
    };

    Ok(Direction::new(theta_r, phi_r))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;
    use sas_test_utils::assert_approx_eq;

    use super::*;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(47.3, 47.3)]
    #[case(190.0, -170.0)]
    #[case(-190.0, 170.0)]
    #[case(180.0, 180.0)]
    #[case(-180.0, 180.0)]
    #[case(360.0, 0.0)]
    #[case(540.0, 180.0)]
    #[case(-540.0, 180.0)]
    #[case(719.5, -0.5)]
    fn test_fold180(#[case] angle: f64, #[case] expected: f64) {
        assert_eq!(fold180(angle), expected);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(14.9, 14.9)]
    #[case(15.0, 15.0)]
    #[case(25.0, 15.0)]
    #[case(-15.0, -15.0)]
    #[case(-40.0, -15.0)]
    fn test_clamp_downtilt(#[case] downtilt: f64, #[case] expected: f64) {
        assert_eq!(clamp_downtilt(downtilt), expected);
    }

    #[rstest]
    #[case(10.5, 169.5)]
    #[case(0.0, 180.0)]
    #[case(-8.5, -171.5)]
    #[case(190.0, -10.0)]
    fn test_supplementary(#[case] phi: f64, #[case] expected: f64) {
        assert_approx_eq!(supplementary(phi), expected, atol <= 1e-12);
    }

    #[test]
    fn test_boresight_relative_no_downtilt() {
        let rel = boresight_relative(Direction::new(20.5, 10.5), 0.0, None).unwrap();
        assert_eq!(rel.hor, 20.5);
        assert_eq!(rel.ver, 0.0);
    }

    #[test]
    fn test_boresight_relative_zero_downtilt() {
        let rel = boresight_relative(Direction::new(20.5, 10.5), 0.0, Some(0.0)).unwrap();
        assert_eq!(rel.hor, 20.5);
        assert_eq!(rel.ver, 10.5);
    }

    #[test]
    fn test_boresight_relative_downtilt_weight() {
        // cos(42·180/π) with the degree-valued angle scaled by 180/π
        let rel = boresight_relative(Direction::new(77.0, -12.5), 35.0, Some(4.0)).unwrap();
        assert_eq!(rel.hor, 42.0);
        assert_approx_eq!(rel.ver, -8.502772287227915, atol <= 1e-12);
    }

    #[rstest]
    #[case(f64::NAN, 0.0, 0.0)]
    #[case(0.0, f64::INFINITY, 0.0)]
    #[case(0.0, 0.0, f64::NEG_INFINITY)]
    fn test_boresight_relative_non_finite(#[case] hor: f64, #[case] ver: f64, #[case] az: f64) {
        let result = boresight_relative(Direction::new(hor, ver), az, Some(0.0));
        assert!(matches!(result, Err(AntennaError::InvalidArgument(_))));
    }

    #[test]
    fn test_boresight_relative_non_finite_downtilt() {
        let result = boresight_relative(Direction::new(0.0, 0.0), 0.0, Some(f64::NAN));
        assert!(matches!(result, Err(AntennaError::InvalidArgument(_))));
    }

    proptest! {
        #[test]
        fn prop_fold180_periodic(angle in -180.0..180.0f64, k in -4i32..4) {
            let shifted = angle + 360.0 * k as f64;
            prop_assert!((fold180(shifted) - fold180(angle)).abs() < 1e-9);
        }

        #[test]
        fn prop_fold180_range(angle in -1e6..1e6f64) {
            let folded = fold180(angle);
            prop_assert!(folded > -180.0 && folded <= 180.0);
        }
    }
}
