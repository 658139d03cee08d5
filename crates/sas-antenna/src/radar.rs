// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! DPA radar normalized antenna gain.

use crate::angles::{ensure_finite, ensure_non_negative, fold180};
use crate::error::AntennaError;
use crate::{Decibels, Degrees};

/// Radar antenna beamwidth assumed when none is specified (R2-SGN-24).
pub const DEFAULT_RADAR_BEAMWIDTH: Degrees = 3.0;

/// Normalized gain outside the radar main lobe.
const SIDE_LOBE_GAIN: Decibels = -25.0;

/// Computes the DPA radar normalized antenna gain for one direction.
///
/// See R2-SGN-24. The gain is normalized to 0 dBi at boresight; the actual
/// radar antenna gain is implicitly included in the target interference
/// thresholds. A 360° beamwidth means an isotropic radar and yields 0 dB.
pub fn radar_gain(
    hor_dir: Degrees,
    radar_azimuth: Degrees,
    beamwidth: Degrees,
) -> Result<Decibels, AntennaError> {
    ensure_finite("horizontal direction", hor_dir)?;
    ensure_finite("radar azimuth", radar_azimuth)?;
    ensure_non_negative("radar beamwidth", beamwidth)?;

    if beamwidth == 360.0 {
        return Ok(0.0);
    }
    let bore_angle = fold180(hor_dir - radar_azimuth).abs();
    if bore_angle < beamwidth / 2.0 {
        Ok(0.0)
    } else {
        Ok(SIDE_LOBE_GAIN)
    }
}

/// Computes the DPA radar normalized gains for a slice of directions.
pub fn radar_gains(
    hor_dirs: &[Degrees],
    radar_azimuth: Degrees,
    beamwidth: Degrees,
) -> Result<Vec<Decibels>, AntennaError> {
    hor_dirs
        .iter()
        .map(|&hor| radar_gain(hor, radar_azimuth, beamwidth))
        .collect()
}
