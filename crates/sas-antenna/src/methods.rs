// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! CBSD gain methods B1, C, D, E, F and the method dispatcher.
//!
//! The Release 2 Enhanced Antenna Pattern selects one of five calculation
//! methods from the registration parameters:
//!
//! - **B1**: measured horizontal and vertical patterns (REL2-R3-SGN-52105)
//! - **C**: synthetic horizontal and vertical patterns from beamwidths
//!   (REL2-R3-SGN-52106)
//! - **D**: measured horizontal pattern, synthetic vertical pattern
//!   (REL2-R3-SGN-52107)
//! - **E**: measured horizontal pattern only (REL2-R3-SGN-52108)
//! - **F**: the Release 1 standard gain (R2-SGN-20), also the fallback

use std::fmt;

use crate::angles::{Direction, boresight_relative, clamp_downtilt, ensure_finite,
    ensure_non_negative, supplementary};
use crate::combine::two_dimensional_gain;
use crate::error::AntennaError;
use crate::installation::{CbsdInstallation, IncidenceAngles};
use crate::pattern::{PatternLookup, RadiationPattern};
use crate::standard::{standard_gain, standard_horizontal_gain, standard_vertical_gain};
use crate::{Decibels, Degrees};

/// The gain calculation method selected for an installation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodTag {
    B1,
    C,
    D,
    E,
    F,
}

impl fmt::Display for MethodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodTag::B1 => write!(f, "B1"),
            MethodTag::C => write!(f, "C"),
            MethodTag::D => write!(f, "D"),
            MethodTag::E => write!(f, "E"),
            MethodTag::F => write!(f, "F"),
        }
    }
}

/// The dispatch decision with the inputs the selected method needs.
///
/// Building the plan and computing from it are separate steps so that a
/// selected method can never be missing a required field.
enum Plan<'a> {
    B1 {
        azimuth: Degrees,
        downtilt: Degrees,
        hor_id: &'a str,
        ver_id: &'a str,
    },
    D {
        azimuth: Degrees,
        downtilt: Degrees,
        hor_id: &'a str,
        ver_beamwidth: Degrees,
        fbr: Decibels,
    },
    E {
        azimuth: Degrees,
        hor_id: &'a str,
    },
    C {
        azimuth: Degrees,
        downtilt: Degrees,
        hor_beamwidth: Degrees,
        ver_beamwidth: Degrees,
        fbr: Decibels,
    },
    F,
}

impl Plan<'_> {
    fn tag(&self) -> MethodTag {
        match self {
            Plan::B1 { .. } => MethodTag::B1,
            Plan::C { .. } => MethodTag::C,
            Plan::D { .. } => MethodTag::D,
            Plan::E { .. } => MethodTag::E,
            Plan::F => MethodTag::F,
        }
    }
}

/// Treats a declared-but-zero registration value as undeclared.
fn declared(value: Option<f64>) -> Option<f64> {
    value.filter(|&v| v != 0.0)
}

fn plan(installation: &CbsdInstallation) -> Plan<'_> {
    let Some(azimuth) = declared(installation.azimuth) else {
        return Plan::F;
    };
    let fbr = declared(installation.front_to_back_ratio)
        .unwrap_or(crate::standard::DEFAULT_FRONT_TO_BACK_RATIO);

    if let Some(hor_ref) = installation
        .antenna_model
        .as_ref()
        .and_then(|model| model.horizontal_pattern.as_ref())
    {
        let hor_id = hor_ref.antenna_pattern_id.as_str();
        if let Some(downtilt) = declared(installation.antenna_downtilt) {
            if let Some(ver_ref) = installation
                .antenna_model
                .as_ref()
                .and_then(|model| model.vertical_pattern.as_ref())
            {
                return Plan::B1 {
                    azimuth,
                    downtilt,
                    hor_id,
                    ver_id: ver_ref.antenna_pattern_id.as_str(),
                };
            }
            if let Some(ver_beamwidth) = declared(installation.antenna_vertical_beamwidth) {
                return Plan::D {
                    azimuth,
                    downtilt,
                    hor_id,
                    ver_beamwidth,
                    fbr,
                };
            }
        }
        return Plan::E { azimuth, hor_id };
    }

    if let (Some(hor_beamwidth), Some(downtilt), Some(ver_beamwidth)) = (
        declared(installation.antenna_beamwidth),
        declared(installation.antenna_downtilt),
        declared(installation.antenna_vertical_beamwidth),
    ) {
        return Plan::C {
            azimuth,
            downtilt,
            hor_beamwidth,
            ver_beamwidth,
            fbr,
        };
    }

    Plan::F
}

/// Selects the gain calculation method for an installation.
///
/// The decision is purely a function of the registration fields; pattern
/// database contents are not consulted. The first matching method wins:
/// F (no azimuth), B1, D, E, C, then F as the fallback.
pub fn select_method(installation: &CbsdInstallation) -> MethodTag {
    plan(installation).tag()
}

/// Method B1: gain from measured horizontal and vertical patterns.
///
/// REL2-R3-SGN-52105. The boresight-relative vertical angle is derived
/// from the unclamped downtilt; both pattern gains and the supplementary
/// vertical gain are interpolated from the tables and blended with the
/// azimuth-relative horizontal direction as the weight.
pub fn method_b1_gain(
    dirs: Direction,
    azimuth: Degrees,
    peak_gain: Decibels,
    hor_pattern: &RadiationPattern,
    ver_pattern: &RadiationPattern,
    downtilt: Degrees,
) -> Result<Decibels, AntennaError> {
    ensure_finite("peak antenna gain", peak_gain)?;
    let rel = boresight_relative(dirs, azimuth, Some(downtilt))?;

    let hor_gain = hor_pattern.gain_at(rel.hor)?;
    let ver_gain = ver_pattern.gain_at(rel.ver)?;
    let ver_gain_sup = ver_pattern.gain_at(supplementary(rel.ver))?;

    Ok(two_dimensional_gain(
        dirs.hor,
        hor_gain,
        ver_gain,
        ver_gain_sup,
        hor_pattern.boresight_gain(),
        hor_pattern.back_lobe_gain(),
        peak_gain,
    ))
}

/// Method C: gain from synthetic horizontal and vertical patterns.
///
/// REL2-R3-SGN-52106. Step a derives both patterns from the declared
/// beamwidths; the supplementary vertical angle `180 - φ_r` enters the
/// synthetic formula unfolded. The downtilt is clamped to ±15° for the
/// synthetic gains but the vertical angle uses the unclamped value.
pub fn method_c_gain(
    dirs: Direction,
    azimuth: Degrees,
    peak_gain: Decibels,
    downtilt: Degrees,
    hor_beamwidth: Degrees,
    ver_beamwidth: Degrees,
    front_to_back_ratio: Decibels,
) -> Result<Decibels, AntennaError> {
    ensure_finite("peak antenna gain", peak_gain)?;
    ensure_non_negative("horizontal beamwidth", hor_beamwidth)?;
    ensure_non_negative("vertical beamwidth", ver_beamwidth)?;
    let rel = boresight_relative(dirs, azimuth, Some(downtilt))?;
    let downtilt = clamp_downtilt(downtilt);

    let azimuth = Some(azimuth);
    let downtilt = Some(downtilt);
    let hor_beamwidth = Some(hor_beamwidth);
    let ver_beamwidth = Some(ver_beamwidth);
    let fbr = Some(front_to_back_ratio);

    // Step-a gains relative to peak; the blend adds the peak once.
    let hor_gain = standard_horizontal_gain(rel.hor, azimuth, hor_beamwidth, 0.0, fbr);
    let ver_gain = standard_vertical_gain(rel.ver, downtilt, ver_beamwidth, 0.0, fbr);
    let hor_gain_0 = standard_horizontal_gain(0.0, azimuth, hor_beamwidth, 0.0, fbr);
    let hor_gain_180 = standard_horizontal_gain(180.0, azimuth, hor_beamwidth, 0.0, fbr);
    let ver_gain_sup = standard_vertical_gain(180.0 - rel.ver, downtilt, ver_beamwidth, 0.0, fbr);

    Ok(two_dimensional_gain(
        dirs.hor,
        hor_gain,
        ver_gain,
        ver_gain_sup,
        hor_gain_0,
        hor_gain_180,
        peak_gain,
    ))
}

/// Method D: measured horizontal pattern with a synthetic vertical pattern.
///
/// REL2-R3-SGN-52107. The horizontal reference levels `G_H(0)` and
/// `G_H(180)` are the table's boresight and back-lobe samples; the blend
/// weight is the boresight-relative horizontal angle.
pub fn method_d_gain(
    dirs: Direction,
    azimuth: Degrees,
    peak_gain: Decibels,
    hor_pattern: &RadiationPattern,
    downtilt: Degrees,
    ver_beamwidth: Degrees,
    front_to_back_ratio: Decibels,
) -> Result<Decibels, AntennaError> {
    ensure_finite("peak antenna gain", peak_gain)?;
    ensure_non_negative("vertical beamwidth", ver_beamwidth)?;
    let rel = boresight_relative(dirs, azimuth, Some(downtilt))?;
    let downtilt = Some(clamp_downtilt(downtilt));

    let ver_beamwidth = Some(ver_beamwidth);
    let fbr = Some(front_to_back_ratio);

    let hor_gain = hor_pattern.gain_at(rel.hor)?;
    let ver_gain = standard_vertical_gain(rel.ver, downtilt, ver_beamwidth, 0.0, fbr);
    let ver_gain_sup = standard_vertical_gain(180.0 - rel.ver, downtilt, ver_beamwidth, 0.0, fbr);

    Ok(two_dimensional_gain(
        rel.hor,
        hor_gain,
        ver_gain,
        ver_gain_sup,
        hor_pattern.boresight_gain(),
        hor_pattern.back_lobe_gain(),
        peak_gain,
    ))
}

/// Method E: measured horizontal pattern only.
///
/// REL2-R3-SGN-52108. No vertical information is used; both vertical
/// contributions are zero in the blend.
pub fn method_e_gain(
    dirs: Direction,
    azimuth: Degrees,
    peak_gain: Decibels,
    hor_pattern: &RadiationPattern,
) -> Result<Decibels, AntennaError> {
    ensure_finite("peak antenna gain", peak_gain)?;
    let rel = boresight_relative(dirs, azimuth, None)?;

    let hor_gain = hor_pattern.gain_at(rel.hor)?;

    Ok(two_dimensional_gain(
        rel.hor,
        hor_gain,
        0.0,
        0.0,
        hor_pattern.boresight_gain(),
        hor_pattern.back_lobe_gain(),
        peak_gain,
    ))
}

/// Method F: the Release 1 standard gain.
///
/// R2-SGN-20. Without an azimuth or beamwidth the antenna is isotropic
/// and the peak gain applies in every direction.
pub fn method_f_gain(
    dirs: Direction,
    peak_gain: Decibels,
    azimuth: Option<Degrees>,
    hor_beamwidth: Option<Degrees>,
) -> Result<Decibels, AntennaError> {
    ensure_finite("horizontal direction", dirs.hor)?;
    ensure_finite("peak antenna gain", peak_gain)?;
    if let Some(azimuth) = azimuth {
        ensure_finite("antenna azimuth", azimuth)?;
    }
    Ok(standard_gain(dirs.hor, azimuth, hor_beamwidth, peak_gain))
}

/// Computes the realized CBSD antenna gain along one incidence ray.
///
/// Selects the calculation method from the registration fields (see
/// [`select_method`]), resolves referenced patterns through `patterns`,
/// and evaluates the gain in dBi at the given incidence angles.
pub fn cbsd_gain<L: PatternLookup>(
    installation: &CbsdInstallation,
    patterns: &L,
    angles: &IncidenceAngles,
) -> Result<Decibels, AntennaError> {
    let dirs = Direction::new(angles.hor_cbsd, angles.ver_cbsd);
    let peak_gain = installation.antenna_gain;

    match plan(installation) {
        Plan::F => method_f_gain(dirs, peak_gain, None, None),
        Plan::B1 {
            azimuth,
            downtilt,
            hor_id,
            ver_id,
        } => {
            let hor_pattern = patterns
                .horizontal_pattern(hor_id)
                .ok_or_else(|| AntennaError::PatternNotFound(hor_id.to_string()))?;
            let ver_pattern = patterns
                .vertical_pattern(ver_id)
                .ok_or_else(|| AntennaError::PatternNotFound(ver_id.to_string()))?;
            method_b1_gain(dirs, azimuth, peak_gain, hor_pattern, ver_pattern, downtilt)
        }
        Plan::D {
            azimuth,
            downtilt,
            hor_id,
            ver_beamwidth,
            fbr,
        } => {
            let hor_pattern = patterns
                .horizontal_pattern(hor_id)
                .ok_or_else(|| AntennaError::PatternNotFound(hor_id.to_string()))?;
            method_d_gain(
                dirs,
                azimuth,
                peak_gain,
                hor_pattern,
                downtilt,
                ver_beamwidth,
                fbr,
            )
        }
        Plan::E { azimuth, hor_id } => {
            let hor_pattern = patterns
                .horizontal_pattern(hor_id)
                .ok_or_else(|| AntennaError::PatternNotFound(hor_id.to_string()))?;
            method_e_gain(dirs, azimuth, peak_gain, hor_pattern)
        }
        Plan::C {
            azimuth,
            downtilt,
            hor_beamwidth,
            ver_beamwidth,
            fbr,
        } => method_c_gain(
            dirs,
            azimuth,
            peak_gain,
            downtilt,
            hor_beamwidth,
            ver_beamwidth,
            fbr,
        ),
    }
}

/// Computes the realized CBSD antenna gain for a slice of incidence rays.
///
/// Element-wise [`cbsd_gain`]; the output has one gain per input ray.
pub fn cbsd_gains<L: PatternLookup>(
    installation: &CbsdInstallation,
    patterns: &L,
    angles: &[IncidenceAngles],
) -> Result<Vec<Decibels>, AntennaError> {
    angles
        .iter()
        .map(|ray| cbsd_gain(installation, patterns, ray))
        .collect()
}
