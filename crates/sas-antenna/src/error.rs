// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Error type for the gain engine.

use thiserror::Error;

// String payloads keep the variants cloneable and comparable; the richer
// source errors (csv, io) live in the loader crate and are flattened there.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AntennaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("antenna pattern `{0}` is not in the pattern database")]
    PatternNotFound(String),
    #[error("malformed antenna pattern: {0}")]
    PatternMalformed(String),
    #[error("incomplete antenna pattern: {0}")]
    PatternIncomplete(String),
}
