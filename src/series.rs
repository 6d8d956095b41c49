//! Spectral series: the emission lines that end on a common lower level.

use serde::{Deserialize, Serialize};

use crate::constant::{C, H};
use crate::energy::energy_joule;
use crate::error::{require_above, BohrResult};
use crate::transition::Transition;

/// Named series of hydrogen-like emission lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Series {
    Lyman,
    Balmer,
    Paschen,
    Brackett,
    Pfund,
}

impl Series {
    /// Level on which every line of the series ends.
    pub fn lower_level(&self) -> u32 {
        match self {
            Series::Lyman => 1,
            Series::Balmer => 2,
            Series::Paschen => 3,
            Series::Brackett => 4,
            Series::Pfund => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Series::Lyman => "Lyman",
            Series::Balmer => "Balmer",
            Series::Paschen => "Paschen",
            Series::Brackett => "Brackett",
            Series::Pfund => "Pfund",
        }
    }

    pub fn from_lower_level(n: u32) -> Option<Self> {
        match n {
            1 => Some(Series::Lyman),
            2 => Some(Series::Balmer),
            3 => Some(Series::Paschen),
            4 => Some(Series::Brackett),
            5 => Some(Series::Pfund),
            _ => None,
        }
    }
}

/// One emission line `n_upper -> n_lower`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralLine {
    pub n_upper: u32,
    pub n_lower: u32,
    /// Photon energy in eV
    pub energy_ev: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Wavelength in m
    pub wavelength: f64,
}

/// Emission lines of `series` from every upper level up to and including `max_upper`.
///
/// Lines are ordered by increasing upper level, ie decreasing wavelength.
pub fn lines(series: Series, z: u32, max_upper: u32) -> BohrResult<Vec<SpectralLine>> {
    let n_lower = series.lower_level();
    require_above("max_upper", n_lower, max_upper)?;
    let lines = ((n_lower + 1)..=max_upper)
        .map(|n_upper| {
            let photon = Transition::new(n_upper, n_lower, z).photon()?;
            Ok(SpectralLine {
                n_upper,
                n_lower,
                energy_ev: photon.energy_ev,
                frequency: photon.frequency,
                wavelength: photon.wavelength,
            })
        })
        .collect::<BohrResult<Vec<_>>>()?;
    log::debug!(
        "computed {} {} lines for Z={}",
        lines.len(),
        series.name(),
        z
    );
    Ok(lines)
}

/// Shortest wavelength of `series`, reached as the upper level goes to the ionization limit, in m.
pub fn series_limit(series: Series, z: u32) -> BohrResult<f64> {
    let binding = energy_joule(series.lower_level(), z)?.abs();
    Ok(H * C / binding)
}
