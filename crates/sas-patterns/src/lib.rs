// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Loader for the CBSD antenna pattern database.
//!
//! The database is a directory holding an index CSV that maps
//! `antennaPatternId` to an azimuth pattern file and, optionally, an
//! elevation pattern file:
//!
//! ```csv
//! antennaPatternId,azimuthRadiationPattern,elevationRadiationPattern
//! ACME-S65-3500,acme_s65_3500_az.csv,acme_s65_3500_el.csv
//! ACME-OMNI-3500,acme_omni_3500_az.csv,
//! ```
//!
//! Pattern files carry two numeric columns `(angle_deg, gain_dB)` in
//! comma- or tab-delimited form; blank rows are skipped. The whole
//! database is loaded eagerly into an immutable [`PatternDatabase`] that
//! implements [`PatternLookup`] for the gain engine.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use sas_antenna::{AntennaError, PatternLookup, RadiationPattern};

/// Conventional file name of the database index.
pub const DEFAULT_INDEX_FILENAME: &str = "antennaPatternDatabase.csv";

// csv::Error and io::Error are not Clone, so they are flattened into
// String-carrying variants to keep the error chain cloneable.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PatternStoreError {
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Csv(String),
    #[error(transparent)]
    Pattern(#[from] AntennaError),
}

impl From<csv::Error> for PatternStoreError {
    fn from(err: csv::Error) -> Self {
        PatternStoreError::Csv(err.to_string())
    }
}

impl From<std::io::Error> for PatternStoreError {
    fn from(err: std::io::Error) -> Self {
        PatternStoreError::Io(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct IndexRecord {
    #[serde(rename = "antennaPatternId")]
    antenna_pattern_id: String,
    #[serde(rename = "azimuthRadiationPattern")]
    azimuth_radiation_pattern: String,
    #[serde(rename = "elevationRadiationPattern", default)]
    elevation_radiation_pattern: Option<String>,
}

/// The loaded patterns of one antenna model.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternEntry {
    horizontal: RadiationPattern,
    vertical: Option<RadiationPattern>,
}

impl PatternEntry {
    /// Returns the azimuth-plane pattern.
    pub fn horizontal(&self) -> &RadiationPattern {
        &self.horizontal
    }

    /// Returns the elevation-plane pattern, if the index declared one.
    pub fn vertical(&self) -> Option<&RadiationPattern> {
        self.vertical.as_ref()
    }
}

/// An immutable antenna pattern database keyed by `antennaPatternId`.
///
/// Load once, read many: the loader is not meant to run concurrently with
/// readers, and nothing can mutate the database after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternDatabase {
    entries: HashMap<String, PatternEntry>,
}

impl PatternDatabase {
    /// Loads a database from an index CSV.
    ///
    /// Pattern file names in the index are resolved relative to the
    /// index's directory. The first occurrence of a duplicated id wins.
    pub fn from_index_csv<P: AsRef<Path>>(path: P) -> Result<Self, PatternStoreError> {
        let path = path.as_ref();
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let mut reader = csv::Reader::from_path(path)?;

        let mut entries = HashMap::new();
        for result in reader.deserialize() {
            let record: IndexRecord = result?;
            let Entry::Vacant(slot) = entries.entry(record.antenna_pattern_id) else {
                continue;
            };

            let horizontal = load_pattern_file(base.join(&record.azimuth_radiation_pattern))?;
            let vertical = record
                .elevation_radiation_pattern
                .filter(|name| !name.is_empty())
                .map(|name| load_pattern_file(base.join(name)))
                .transpose()?;

            slot.insert(PatternEntry {
                horizontal,
                vertical,
            });
        }

        Ok(Self { entries })
    }

    /// Loads a database from a directory using the conventional index name.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, PatternStoreError> {
        Self::from_index_csv(dir.as_ref().join(DEFAULT_INDEX_FILENAME))
    }

    /// Returns the entry for the given `antennaPatternId`.
    pub fn get(&self, id: &str) -> Option<&PatternEntry> {
        self.entries.get(id)
    }

    /// Returns the number of loaded antenna models.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no antenna models were loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the loaded `antennaPatternId`s.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl PatternLookup for PatternDatabase {
    fn horizontal_pattern(&self, id: &str) -> Option<&RadiationPattern> {
        self.get(id).map(PatternEntry::horizontal)
    }

    fn vertical_pattern(&self, id: &str) -> Option<&RadiationPattern> {
        self.get(id).and_then(PatternEntry::vertical)
    }
}

/// Loads a single pattern CSV into a [`RadiationPattern`].
///
/// The delimiter (comma or tab) is detected from the first non-empty
/// line. Blank rows are skipped; a row needs at least two numeric
/// columns and further columns are ignored.
pub fn load_pattern_file<P: AsRef<Path>>(path: P) -> Result<RadiationPattern, PatternStoreError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let name = path.display().to_string();

    let delimiter = match content.lines().find(|line| !line.trim().is_empty()) {
        Some(line) if line.contains('\t') => b'\t',
        _ => b',',
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut angles = Vec::new();
    let mut gains = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        if record.len() < 2 {
            return Err(AntennaError::PatternMalformed(format!(
                "{name}: row {} has fewer than two columns",
                row + 1
            ))
            .into());
        }
        angles.push(parse_field(&record[0], &name, row)?);
        gains.push(parse_field(&record[1], &name, row)?);
    }

    RadiationPattern::try_new(angles, gains).map_err(|err| {
        match err {
            AntennaError::PatternMalformed(msg) => {
                AntennaError::PatternMalformed(format!("{name}: {msg}"))
            }
            AntennaError::PatternIncomplete(msg) => {
                AntennaError::PatternIncomplete(format!("{name}: {msg}"))
            }
            other => other,
        }
        .into()
    })
}

fn parse_field(field: &str, name: &str, row: usize) -> Result<f64, PatternStoreError> {
    field.trim().parse::<f64>().map_err(|_| {
        AntennaError::PatternMalformed(format!(
            "{name}: row {} has non-numeric value `{field}`",
            row + 1
        ))
        .into()
    })
}
