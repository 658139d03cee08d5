// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Synthetic antenna gains derived from declared beamwidths.
//!
//! Uses the standard 3GPP formula for pattern derivation from a 3 dB
//! cutoff beamwidth. The Release 1 variant (R2-SGN-20) clamps the
//! parabolic term at 20 dB; the Release 2 variant floors it by the
//! declared front-to-back ratio.

use crate::angles::fold180;
use crate::error::AntennaError;
use crate::{Decibels, Degrees};

/// Front-to-back ratio applied when the registration does not declare one.
pub const DEFAULT_FRONT_TO_BACK_RATIO: Decibels = 20.0;

/// Attenuation cap of the Release 1 standard gain formula.
const LEGACY_ATTENUATION_CAP: Decibels = 20.0;

fn is_isotropic(beamwidth: Option<Degrees>) -> bool {
    match beamwidth {
        None => true,
        Some(beamwidth) => beamwidth == 0.0 || beamwidth == 360.0,
    }
}

pub(crate) fn parabolic_attenuation(
    angle: Degrees,
    beamwidth: Degrees,
    front_to_back_ratio: Decibels,
) -> Decibels {
    -(12.0 * (angle / beamwidth).powi(2)).min(front_to_back_ratio)
}

/// Computes the Release 1 standard antenna gain in the horizontal plane.
///
/// See R2-SGN-20. Without an azimuth or a usable beamwidth the antenna is
/// isotropic and the peak gain is returned for every direction. Otherwise
/// the parabolic attenuation `12·(θ_r/BW)²` applies, capped at 20 dB.
pub fn standard_gain(
    hor_dir: Degrees,
    azimuth: Option<Degrees>,
    beamwidth: Option<Degrees>,
    peak_gain: Decibels,
) -> Decibels {
    let Some(azimuth) = azimuth else {
        return peak_gain;
    };
    if is_isotropic(beamwidth) {
        return peak_gain;
    }
    let beamwidth = beamwidth.unwrap_or(0.0);
    let bore_angle = fold180(hor_dir - azimuth);
    let attenuation = (-12.0 * (bore_angle / beamwidth).powi(2)).max(-LEGACY_ATTENUATION_CAP);
    attenuation + peak_gain
}

/// Computes the Release 1 standard gains for a slice of directions.
pub fn standard_gains(
    hor_dirs: &[Degrees],
    azimuth: Option<Degrees>,
    beamwidth: Option<Degrees>,
    peak_gain: Decibels,
) -> Vec<Decibels> {
    hor_dirs
        .iter()
        .map(|&hor| standard_gain(hor, azimuth, beamwidth, peak_gain))
        .collect()
}

/// Computes the horizontal half of the Release 2 synthetic gain pair.
///
/// REL2-R3-SGN-52106, step a. The angle is already boresight-relative.
/// Without an azimuth or a usable beamwidth the antenna is isotropic in
/// this plane. The front-to-back ratio defaults to
/// [`DEFAULT_FRONT_TO_BACK_RATIO`].
pub fn standard_horizontal_gain(
    theta_r: Degrees,
    azimuth: Option<Degrees>,
    beamwidth: Option<Degrees>,
    peak_gain: Decibels,
    front_to_back_ratio: Option<Decibels>,
) -> Decibels {
    let fbr = front_to_back_ratio.unwrap_or(DEFAULT_FRONT_TO_BACK_RATIO);
    if azimuth.is_none() || is_isotropic(beamwidth) {
        return peak_gain;
    }
    parabolic_attenuation(theta_r, beamwidth.unwrap_or(0.0), fbr) + peak_gain
}

/// Computes the vertical half of the Release 2 synthetic gain pair.
///
/// REL2-R3-SGN-52106, step a. The vertical plane is isotropic unless both
/// a mechanical downtilt and a usable vertical beamwidth are declared.
pub fn standard_vertical_gain(
    phi_r: Degrees,
    downtilt: Option<Degrees>,
    beamwidth: Option<Degrees>,
    peak_gain: Decibels,
    front_to_back_ratio: Option<Decibels>,
) -> Decibels {
    let fbr = front_to_back_ratio.unwrap_or(DEFAULT_FRONT_TO_BACK_RATIO);
    if downtilt.is_none() || is_isotropic(beamwidth) {
        return peak_gain;
    }
    parabolic_attenuation(phi_r, beamwidth.unwrap_or(0.0), fbr) + peak_gain
}

/// Computes the gain from a normalized 360-value horizontal pattern.
///
/// The pattern is indexed in clockwise 1° increments with index 0 at the
/// antenna boresight; values are gains relative to peak. The gain between
/// bins is linearly interpolated and `extra_gain` is added, to be used
/// when the pattern is normalized and the peak gain is carried separately.
pub fn normalized_pattern_gain(
    hor_dir: Degrees,
    azimuth: Degrees,
    pattern: &[Decibels],
    extra_gain: Decibels,
) -> Result<Decibels, AntennaError> {
    if pattern.len() != 360 {
        return Err(AntennaError::InvalidArgument(format!(
            "normalized pattern must have 360 values but had {}",
            pattern.len()
        )));
    }
    let bore_angle = (hor_dir - azimuth).rem_euclid(360.0);
    let bin = bore_angle.floor();
    let alpha = bore_angle - bin;
    let idx0 = bin as usize % 360;
    let idx1 = (idx0 + 1) % 360;
    Ok((1.0 - alpha) * pattern[idx0] + alpha * pattern[idx1] + extra_gain)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use sas_test_utils::assert_approx_eq;

    use super::*;

    #[rstest]
    #[case::no_beamwidth(0.0, Some(0.0), None, 5.0, 5.0)]
    #[case::no_azimuth(90.0, None, Some(90.0), 5.0, 5.0)]
    #[case::zero_beamwidth(180.0, Some(0.0), Some(0.0), 5.0, 5.0)]
    #[case::full_beamwidth(270.0, Some(0.0), Some(360.0), 5.0, 5.0)]
    #[case::back_lobe(180.0, Some(0.0), Some(120.0), 10.0, -10.0)]
    #[case::at_beamwidth(60.0, Some(0.0), Some(120.0), 10.0, 7.0)]
    #[case::at_beamwidth_wrapped(5.5, Some(50.5), Some(90.0), 10.0, 7.0)]
    #[case::boresight(50.5, Some(50.5), Some(90.0), 10.0, 10.0)]
    #[case::half_beamwidth(25.0, Some(50.0), Some(100.0), 10.0, 9.25)]
    #[case::twice_beamwidth(310.0, Some(50.0), Some(100.0), 10.0, -2.0)]
    fn test_standard_gain(
        #[case] hor_dir: f64,
        #[case] azimuth: Option<f64>,
        #[case] beamwidth: Option<f64>,
        #[case] peak_gain: f64,
        #[case] expected: f64,
    ) {
        assert_approx_eq!(
            standard_gain(hor_dir, azimuth, beamwidth, peak_gain),
            expected,
            atol <= 1e-12
        );
    }

    #[test]
    fn test_standard_gains_matches_scalar() {
        let dirs = [3.5, 47.3, 342.0];
        let gains = standard_gains(&dirs, Some(123.3), Some(90.0), 12.4);
        for (dir, gain) in dirs.iter().zip(&gains) {
            assert_eq!(standard_gain(*dir, Some(123.3), Some(90.0), 12.4), *gain);
        }
        assert_approx_eq!(gains[0], -7.6, atol <= 1e-12);
        assert_approx_eq!(gains[1], 3.8429629629629627, atol <= 1e-12);
        assert_approx_eq!(gains[2], -7.6, atol <= 1e-12);
    }

    #[rstest]
    #[case::boresight(0.0, 10.0)]
    #[case::half_beamwidth(60.0, 7.0)]
    #[case::negative_half_beamwidth(-60.0, 7.0)]
    #[case::floored(180.0, 0.0)]
    fn test_standard_horizontal_gain(#[case] theta_r: f64, #[case] expected: f64) {
        let gain = standard_horizontal_gain(theta_r, Some(20.0), Some(120.0), 10.0, Some(10.0));
        assert_approx_eq!(gain, expected, atol <= 1e-12);
    }

    #[rstest]
    #[case::boresight(0.0, 10.0)]
    #[case::half_beamwidth(30.0, 7.0)]
    #[case::floored(180.0, 0.0)]
    fn test_standard_vertical_gain(#[case] phi_r: f64, #[case] expected: f64) {
        let gain = standard_vertical_gain(phi_r, Some(0.0), Some(60.0), 10.0, Some(10.0));
        assert_approx_eq!(gain, expected, atol <= 1e-12);
    }

    #[test]
    fn test_standard_pair_isotropic_without_drivers() {
        // No azimuth: horizontal plane is isotropic regardless of beamwidth.
        assert_eq!(
            standard_horizontal_gain(90.0, None, Some(90.0), 7.0, None),
            7.0
        );
        // No downtilt: vertical plane is isotropic.
        assert_eq!(
            standard_vertical_gain(45.0, None, Some(30.0), 7.0, None),
            7.0
        );
    }

    #[test]
    fn test_default_front_to_back_ratio() {
        // 12·(60/20)² = 108 floors at the 20 dB default
        let gain = standard_vertical_gain(60.0, Some(5.0), Some(20.0), 0.0, None);
        assert_eq!(gain, -DEFAULT_FRONT_TO_BACK_RATIO);
    }

    #[test]
    fn test_normalized_pattern_gain() {
        let pattern: Vec<f64> = (0..360)
            .map(|i| {
                let folded = crate::angles::fold180(f64::from(i));
                -(12.0 * (folded / 65.0).powi(2)).min(30.0)
            })
            .collect();
        let gain = normalized_pattern_gain(30.3, 20.0, &pattern, 7.0).unwrap();
        assert_approx_eq!(gain, 6.698082840236687, atol <= 1e-12);
    }

    #[test]
    fn test_normalized_pattern_gain_wraps() {
        let mut pattern = vec![0.0; 360];
        pattern[359] = -3.0;
        // bore angle 359.5 interpolates between bins 359 and 0
        let gain = normalized_pattern_gain(-0.5, 0.0, &pattern, 0.0).unwrap();
        assert_approx_eq!(gain, -1.5, atol <= 1e-12);
    }

    #[test]
    fn test_normalized_pattern_gain_wrong_length() {
        let result = normalized_pattern_gain(0.0, 0.0, &[0.0; 100], 0.0);
        assert!(matches!(result, Err(AntennaError::InvalidArgument(_))));
    }
}
