//! Energies of the bound electron levels, in joules and electronvolts.
//!
//! The Bohr level energy for a hydrogen-like atom of nuclear charge `Z` is
//!
//! `E_n = -(m_e e^4 Z^2) / (8 ε0^2 h^2 n^2)`
//!
//! which is negative for every bound level and tends to zero at the ionization limit.

use serde::{Deserialize, Serialize};

use crate::constant::{EPSILON0, E_CHARGE, H, M_ELECTRON};
use crate::error::{require_positive, BohrResult};
use crate::summary::LevelSummary;

/// Atomic number used when none is given, hydrogen.
pub const DEFAULT_ATOMIC_NUMBER: u32 = 1;

/// Energy of a single level in both unit conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyLevel {
    /// Energy in J
    pub joule: f64,
    /// Energy in eV
    pub ev: f64,
}

/// Energy of level `n`, in J.
///
/// # Arguments
///
/// `n`: principal quantum number, `n >= 1`.
///
/// `z`: atomic number, `z >= 1`.
pub fn energy_joule(n: u32, z: u32) -> BohrResult<f64> {
    require_positive("n", n)?;
    require_positive("Z", z)?;
    let z = f64::from(z);
    let n = f64::from(n);
    let energy = -(M_ELECTRON * E_CHARGE.powi(4) * z * z)
        / (8.0 * EPSILON0.powi(2) * H.powi(2) * n * n);
    log::trace!("E(n={}, Z={}) = {:e} J", n, z, energy);
    Ok(energy)
}

/// Energy of level `n`, in eV.
pub fn energy_ev(n: u32, z: u32) -> BohrResult<f64> {
    Ok(energy_joule(n, z)? / E_CHARGE)
}

/// Energy required to free an electron from level `n`, in eV. Always positive.
pub fn ionization_energy_ev(n: u32, z: u32) -> BohrResult<f64> {
    Ok(-energy_ev(n, z)?)
}

/// Energies of levels `1..=max_n`.
pub fn summary(z: u32, max_n: u32) -> BohrResult<LevelSummary<EnergyLevel>> {
    // Report a bad Z before a bad max_n.
    require_positive("Z", z)?;
    LevelSummary::build(z, max_n, |n| {
        let joule = energy_joule(n, z)?;
        Ok(EnergyLevel {
            joule,
            ev: joule / E_CHARGE,
        })
    })
}
