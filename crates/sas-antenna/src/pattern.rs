// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Tabulated radiation patterns and one-dimensional interpolation.

use crate::error::AntennaError;
use crate::{Decibels, Degrees};

/// Samples per full revolution in a tabulated pattern.
pub const SAMPLES_PER_REVOLUTION: usize = 360;

/// Index of the boresight sample in a full-revolution table.
///
/// Tables are stored in file order with the back lobe first (-180° at
/// index 0, 0° at index 180). The two-dimensional blend reads its
/// reference levels by index, so the order must never be re-sorted.
const BORESIGHT_INDEX: usize = 180;

/// A tabulated one-dimensional radiation pattern.
///
/// Samples are `(angle, gain)` pairs with gains relative to the peak
/// antenna gain. The table is immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct RadiationPattern {
    angles: Vec<Degrees>,
    gains: Vec<Decibels>,
}

impl RadiationPattern {
    /// Creates a pattern from parallel angle and gain tables.
    ///
    /// The table must hold exactly [`SAMPLES_PER_REVOLUTION`] samples with
    /// finite values, strictly increasing angles, and at least 359° of
    /// angular span.
    pub fn try_new(angles: Vec<Degrees>, gains: Vec<Decibels>) -> Result<Self, AntennaError> {
        if angles.len() != gains.len() {
            return Err(AntennaError::PatternMalformed(format!(
                "angle and gain tables must have the same length but were {} and {}",
                angles.len(),
                gains.len()
            )));
        }
        if angles.len() != SAMPLES_PER_REVOLUTION {
            return Err(AntennaError::PatternIncomplete(format!(
                "expected {} samples but found {}",
                SAMPLES_PER_REVOLUTION,
                angles.len()
            )));
        }
        if angles.iter().chain(gains.iter()).any(|v| !v.is_finite()) {
            return Err(AntennaError::PatternMalformed(
                "table contains a non-finite value".to_string(),
            ));
        }
        if angles.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(AntennaError::PatternMalformed(
                "angles must be strictly increasing".to_string(),
            ));
        }
        let span = angles[angles.len() - 1] - angles[0];
        if span < 359.0 {
            return Err(AntennaError::PatternIncomplete(format!(
                "angular span is {span}° but a full revolution is required"
            )));
        }
        Ok(Self { angles, gains })
    }

    /// Returns the sampled angles in degrees.
    pub fn angles(&self) -> &[Degrees] {
        &self.angles
    }

    /// Returns the sampled gains in dB relative to peak.
    pub fn gains(&self) -> &[Decibels] {
        &self.gains
    }

    /// Returns the gain sample at boresight (0°).
    pub fn boresight_gain(&self) -> Decibels {
        self.gains[BORESIGHT_INDEX]
    }

    /// Returns the gain sample at the back lobe (180°).
    pub fn back_lobe_gain(&self) -> Decibels {
        self.gains[0]
    }

    /// Returns the gain at an arbitrary angle by linear interpolation.
    ///
    /// An exact sample is returned as-is. Angles outside the sampled span
    /// are shifted by whole revolutions into it; an angle that still has no
    /// bracketing pair fails with [`AntennaError::PatternIncomplete`].
    pub fn gain_at(&self, angle: Degrees) -> Result<Decibels, AntennaError> {
        if !angle.is_finite() {
            return Err(AntennaError::InvalidArgument(format!(
                "pattern angle must be finite but was {angle}"
            )));
        }

        let first = self.angles[0];
        let last = self.angles[self.angles.len() - 1];
        let mut angle = angle;
        while angle < first {
            angle += 360.0;
        }
        while angle > last {
            angle -= 360.0;
        }
        if angle < first {
            return Err(AntennaError::PatternIncomplete(format!(
                "no bracketing samples for angle {angle}°"
            )));
        }

        let idx = self.angles.partition_point(|&sample| sample < angle);
        if self.angles[idx] == angle {
            return Ok(self.gains[idx]);
        }

        let (lo, hi) = (self.angles[idx - 1], self.angles[idx]);
        let (gain_lo, gain_hi) = (self.gains[idx - 1], self.gains[idx]);
        Ok(((hi - angle) * gain_lo + (angle - lo) * gain_hi) / (hi - lo))
    }
}

/// Read access to loaded antenna patterns, keyed by `antennaPatternId`.
///
/// The gain engine borrows patterns through this trait; the database
/// behind it is expected to be fully loaded and immutable.
pub trait PatternLookup {
    /// Returns the azimuth-plane pattern for the given id.
    fn horizontal_pattern(&self, id: &str) -> Option<&RadiationPattern>;

    /// Returns the elevation-plane pattern for the given id.
    fn vertical_pattern(&self, id: &str) -> Option<&RadiationPattern>;
}
