// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Registration data consumed by the gain engine.
//!
//! [`CbsdInstallation`] is the snapshot of the CBSD registration's
//! `installationParam` relevant to antenna gain. Serde derives (behind the
//! `serde` feature) use the camelCase field names of the registration
//! JSON, so a record can be taken straight from a registration request.

use crate::{Decibels, Degrees};

/// Reference to a pattern in the antenna pattern database.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PatternRef {
    pub antenna_pattern_id: String,
}

/// Declared antenna model with optional measured pattern references.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AntennaModel {
    pub horizontal_pattern: Option<PatternRef>,
    pub vertical_pattern: Option<PatternRef>,
}

/// The installation parameters of a registered CBSD.
///
/// Optional fields mirror the registration message: a field that was not
/// declared is `None`. For method selection a declared-but-zero value
/// counts as missing, matching the reference SAS behavior.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CbsdInstallation {
    pub latitude: f64,
    pub longitude: f64,
    /// Antenna height in meters (AGL or AMSL per `heightType`).
    pub height: f64,
    pub indoor_deployment: bool,
    /// Peak antenna gain in dBi.
    pub antenna_gain: Decibels,
    /// Boresight azimuth in degrees from true north, clockwise.
    pub azimuth: Option<Degrees>,
    /// Mechanical downtilt in degrees, positive below the horizon.
    pub antenna_downtilt: Option<Degrees>,
    /// 3 dB beamwidth in the horizontal plane.
    pub antenna_beamwidth: Option<Degrees>,
    /// 3 dB beamwidth in the vertical plane.
    pub antenna_vertical_beamwidth: Option<Degrees>,
    /// Front-to-back ratio in dB.
    pub front_to_back_ratio: Option<Decibels>,
    pub antenna_model: Option<AntennaModel>,
}

impl CbsdInstallation {
    /// Creates an isotropic installation at the given location.
    ///
    /// All antenna fields beyond the peak gain are left undeclared.
    pub fn isotropic(latitude: f64, longitude: f64, height: f64, antenna_gain: Decibels) -> Self {
        Self {
            latitude,
            longitude,
            height,
            indoor_deployment: false,
            antenna_gain,
            azimuth: None,
            antenna_downtilt: None,
            antenna_beamwidth: None,
            antenna_vertical_beamwidth: None,
            front_to_back_ratio: None,
            antenna_model: None,
        }
    }
}

/// A protected receiver location.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReceiverPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Receiver height in meters.
    pub height: f64,
}

/// Incidence angles at the transmitter, produced by the propagation model.
///
/// The propagation collaborator (ITM) computes these for the ray from the
/// CBSD to the receiver point; the engine consumes them as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncidenceAngles {
    /// Horizontal departure angle at the CBSD, degrees from true north.
    pub hor_cbsd: Degrees,
    /// Vertical departure angle at the CBSD, positive above the horizon.
    pub ver_cbsd: Degrees,
}

impl From<IncidenceAngles> for crate::angles::Direction {
    fn from(angles: IncidenceAngles) -> Self {
        Self::new(angles.hor_cbsd, angles.ver_cbsd)
    }
}
