// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Enhanced Antenna Pattern gain engine for CBRS Spectrum Access Systems.
//!
//! Implements the WInnForum Release 2 antenna gain methods: realized CBSD
//! gain along an incidence ray ([`cbsd_gain`]), the DPA radar normalized
//! gain ([`radar_gain`]), and FSS earth-station gains ([`fss_gain`]). The
//! engine is a library of pure functions over immutable inputs; measured
//! patterns are borrowed through the [`PatternLookup`] trait from a
//! database that is loaded once and shared read-only.
//!
//! Typical usage:
//!
//! ```
//! use sas_antenna::{CbsdInstallation, IncidenceAngles, cbsd_gain};
//! # use sas_antenna::{PatternLookup, RadiationPattern};
//! # struct NoPatterns;
//! # impl PatternLookup for NoPatterns {
//! #     fn horizontal_pattern(&self, _: &str) -> Option<&RadiationPattern> { None }
//! #     fn vertical_pattern(&self, _: &str) -> Option<&RadiationPattern> { None }
//! # }
//! # let patterns = NoPatterns;
//!
//! let installation = CbsdInstallation::isotropic(39.9, -120.5, 12.0, 10.0);
//! // Incidence angles come from the propagation model.
//! let angles = IncidenceAngles { hor_cbsd: 47.3, ver_cbsd: -30.0 };
//! let gain = cbsd_gain(&installation, &patterns, &angles)?;
//! assert_eq!(gain, 10.0);
//! # Ok::<(), sas_antenna::AntennaError>(())
//! ```

pub mod angles;
pub mod combine;
pub mod error;
pub mod fss;
pub mod installation;
pub mod methods;
pub mod pattern;
pub mod radar;
pub mod standard;

pub use angles::{Direction, boresight_relative, clamp_downtilt, fold180, supplementary};
pub use error::AntennaError;
pub use fss::{FssWeights, fss_gain, fss_gains, gso_gains};
pub use installation::{
    AntennaModel, CbsdInstallation, IncidenceAngles, PatternRef, ReceiverPoint,
};
pub use methods::{
    MethodTag, cbsd_gain, cbsd_gains, method_b1_gain, method_c_gain, method_d_gain,
    method_e_gain, method_f_gain, select_method,
};
pub use pattern::{PatternLookup, RadiationPattern};
pub use radar::{DEFAULT_RADAR_BEAMWIDTH, radar_gain, radar_gains};
pub use standard::DEFAULT_FRONT_TO_BACK_RATIO;

/// Angle in degrees.
pub type Degrees = f64;

/// Gain or attenuation in decibels.
pub type Decibels = f64;

/// Frequency used by the propagation model for incidence angles, in MHz
/// (R2-SGN-04).
pub const FREQ_PROP_MODEL_MHZ: f64 = 3625.0;
