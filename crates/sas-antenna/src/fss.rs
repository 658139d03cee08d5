// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! FSS earth-station antenna gain.

use crate::angles::ensure_finite;
use crate::error::AntennaError;
use crate::{Decibels, Degrees};

/// Weights on the GSO tangent- and perpendicular-plane gain components.
///
/// The default protects against the perpendicular component only, which is
/// the standard assumption for FSS earth stations.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FssWeights {
    pub tangent: f64,
    pub perpendicular: f64,
}

impl Default for FssWeights {
    fn default() -> Self {
        Self {
            tangent: 0.0,
            perpendicular: 1.0,
        }
    }
}

/// Returns FSS earth-station gains for an off-axis angle in degrees.
///
/// GSO is the geostationary satellite orbit. Returns the pair
/// `(tangent-plane gain, perpendicular-plane gain)` from the piecewise
/// ITU-style curves, with `nominal_gain` applying inside the main lobe.
pub fn gso_gains(off_axis_angle: Degrees, nominal_gain: Decibels) -> (Decibels, Decibels) {
    let theta = off_axis_angle.abs();

    let perpendicular = if theta <= 3.0 {
        nominal_gain
    } else if theta <= 48.0 {
        32.0 - 25.0 * theta.log10()
    } else {
        -10.0
    };

    let tangent = if theta <= 1.5 {
        nominal_gain
    } else if theta <= 7.0 {
        29.0 - 25.0 * theta.log10()
    } else if theta <= 9.2 {
        8.0
    } else if theta <= 48.0 {
        32.0 - 25.0 * theta.log10()
    } else {
        -10.0
    };

    (tangent, perpendicular)
}

fn off_axis_angle(
    hor_dir: Degrees,
    ver_dir: Degrees,
    pointing_azimuth: Degrees,
    pointing_elevation: Degrees,
) -> Degrees {
    let hor = hor_dir.to_radians();
    let ver = ver_dir.to_radians();
    let azimuth = pointing_azimuth.to_radians();
    let elevation = pointing_elevation.to_radians();

    // R2-SGN-21, iii; the cosine is clamped so that rounding on-axis cannot
    // push it outside the acos domain.
    let cos_theta = ver.cos() * elevation.cos() * (azimuth - hor).cos() + ver.sin() * elevation.sin();
    cos_theta.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Computes the FSS earth-station antenna gain for one incoming ray.
///
/// See R2-SGN-21. Horizontal directions and the pointing azimuth are
/// degrees from true north, clockwise; vertical directions are positive
/// above the horizon. The off-axis angle between the ray and the antenna
/// pointing direction selects the GSO gains, which are mixed by `weights`.
pub fn fss_gain(
    hor_dir: Degrees,
    ver_dir: Degrees,
    pointing_azimuth: Degrees,
    pointing_elevation: Degrees,
    peak_gain: Decibels,
    weights: FssWeights,
) -> Result<Decibels, AntennaError> {
    ensure_finite("horizontal direction", hor_dir)?;
    ensure_finite("vertical direction", ver_dir)?;
    ensure_finite("pointing azimuth", pointing_azimuth)?;
    ensure_finite("pointing elevation", pointing_elevation)?;

    let theta = off_axis_angle(hor_dir, ver_dir, pointing_azimuth, pointing_elevation);
    let (tangent, perpendicular) = gso_gains(theta, peak_gain);
    Ok(weights.tangent * tangent + weights.perpendicular * perpendicular)
}

/// Computes FSS earth-station gains for slices of directions.
///
/// `hor_dirs` and `ver_dirs` must have the same length.
pub fn fss_gains(
    hor_dirs: &[Degrees],
    ver_dirs: &[Degrees],
    pointing_azimuth: Degrees,
    pointing_elevation: Degrees,
    peak_gain: Decibels,
    weights: FssWeights,
) -> Result<Vec<Decibels>, AntennaError> {
    if hor_dirs.len() != ver_dirs.len() {
        return Err(AntennaError::InvalidArgument(format!(
            "direction slices must have the same length but were {} and {}",
            hor_dirs.len(),
            ver_dirs.len()
        )));
    }
    hor_dirs
        .iter()
        .zip(ver_dirs.iter())
        .map(|(&hor, &ver)| {
            fss_gain(
                hor,
                ver,
                pointing_azimuth,
                pointing_elevation,
                peak_gain,
                weights,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use sas_test_utils::assert_approx_eq;

    use super::*;

    #[rstest]
    #[case::main_lobe(1.0, 35.0, 35.0)]
    #[case::tangent_rolloff(5.0, 11.525749891599528, 14.525749891599528)]
    #[case::tangent_plateau(8.0, 8.0, 9.422750325201413)]
    #[case::common_rolloff(20.0, -0.5257498915995313, -0.5257498915995313)]
    #[case::far_side_lobe(60.0, -10.0, -10.0)]
    #[case::negative_angle(-5.0, 11.525749891599528, 14.525749891599528)]
    fn test_gso_gains(
        #[case] theta: f64,
        #[case] expected_tangent: f64,
        #[case] expected_perpendicular: f64,
    ) {
        let (tangent, perpendicular) = gso_gains(theta, 35.0);
        assert_approx_eq!(tangent, expected_tangent, atol <= 1e-12);
        assert_approx_eq!(perpendicular, expected_perpendicular, atol <= 1e-12);
    }

    #[test]
    fn test_gso_boundaries_belong_to_main_lobe() {
        let (tangent, perpendicular) = gso_gains(1.5, 35.0);
        assert_eq!(tangent, 35.0);
        assert_eq!(perpendicular, 35.0);

        let (tangent, perpendicular) = gso_gains(3.0, 35.0);
        assert_approx_eq!(tangent, 29.0 - 25.0 * 3.0f64.log10(), atol <= 1e-12);
        assert_eq!(perpendicular, 35.0);
    }

    #[test]
    fn test_on_axis_gain() {
        let gain = fss_gain(100.0, 10.0, 100.0, 10.0, 35.0, FssWeights::default()).unwrap();
        assert_approx_eq!(gain, 35.0, atol <= 1e-9);
    }

    #[test]
    fn test_off_axis_mixed_weights() {
        let weights = FssWeights {
            tangent: 0.25,
            perpendicular: 0.75,
        };
        let gain = fss_gain(105.0, 10.0, 100.0, 10.0, 35.0, weights).unwrap();
        assert_approx_eq!(gain, 13.942067378242076, atol <= 1e-12);
    }

    #[test]
    fn test_weight_swap_symmetry() {
        // Swapping the weights and the plane gains is a no-op.
        for theta in [0.5, 2.0, 5.0, 8.5, 30.0, 60.0] {
            let (tangent, perpendicular) = gso_gains(theta, 35.0);
            let forward = 0.3 * tangent + 0.7 * perpendicular;
            let swapped = 0.7 * perpendicular + 0.3 * tangent;
            assert_eq!(forward, swapped);
        }
    }

    #[test]
    fn test_shape_preservation() {
        let hor = [100.0, 105.0, 130.0];
        let ver = [10.0, 10.0, 5.0];
        let gains = fss_gains(&hor, &ver, 100.0, 10.0, 35.0, FssWeights::default()).unwrap();
        assert_eq!(gains.len(), 3);
        for ((&h, &v), &gain) in hor.iter().zip(ver.iter()).zip(&gains) {
            let scalar = fss_gain(h, v, 100.0, 10.0, 35.0, FssWeights::default()).unwrap();
            assert_eq!(scalar, gain);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let result = fss_gains(&[0.0, 1.0], &[0.0], 0.0, 0.0, 35.0, FssWeights::default());
        assert!(matches!(result, Err(AntennaError::InvalidArgument(_))));
    }

    #[test]
    fn test_non_finite_input() {
        let result = fss_gain(f64::NAN, 0.0, 0.0, 0.0, 35.0, FssWeights::default());
        assert!(matches!(result, Err(AntennaError::InvalidArgument(_))));
    }
}
