// SPDX-FileCopyrightText: 2026 Helge Eichhorn <git@helgeeichhorn.de>
//
// SPDX-License-Identifier: MPL-2.0

//! Two-dimensional gain combination.

use crate::{Decibels, Degrees};

/// Blends horizontal and vertical gains into a two-dimensional gain.
///
/// REL2-R3-SGN-52105, step b:
///
/// ```text
/// w     = |hor_dir| / 180
/// g_rel = G_H(θ_r) + (1 - w)·(G_V(φ_r) - G_H(0)) + w·(G_V(180-φ_r) - G_H(180))
/// g     = g_rel + peak
/// ```
///
/// All gain inputs are relative to the peak antenna gain; the peak is added
/// exactly once. `hor_dir` is the horizontal direction as used by the
/// calling method: B1 and C weight by the azimuth-relative direction, D and
/// E by the boresight-relative one.
#[allow(clippy::too_many_arguments)]
pub fn two_dimensional_gain(
    hor_dir: Degrees,
    hor_gain: Decibels,
    ver_gain: Decibels,
    ver_gain_sup: Decibels,
    hor_gain_0: Decibels,
    hor_gain_180: Decibels,
    peak_gain: Decibels,
) -> Decibels {
    let weight = hor_dir.abs() / 180.0;
    let relative = hor_gain
        + (1.0 - weight) * (ver_gain - hor_gain_0)
        + weight * (ver_gain_sup - hor_gain_180);
    relative + peak_gain
}
