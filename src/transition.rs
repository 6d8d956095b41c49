//! Photons emitted or absorbed when the electron changes level.
//!
//! Only the magnitude of the energy difference reaches the photon quantities. The sign of
//! `E(n_f) - E(n_i)` records the direction: negative for emission, positive for absorption.
//!
//! A transition between a level and itself carries no energy, so its frequency and wavelength
//! are undefined. These functions return [BohrError::DegenerateTransition] in that case rather
//! than a zero frequency or an infinite wavelength.

use serde::{Deserialize, Serialize};

use crate::constant::{C, E_CHARGE, H};
use crate::energy::energy_joule;
use crate::error::{BohrError, BohrResult};

/// Signed energy difference `E(n_f) - E(n_i)`, in J.
pub fn transition_energy_joule(n_initial: u32, n_final: u32, z: u32) -> BohrResult<f64> {
    Ok(energy_joule(n_final, z)? - energy_joule(n_initial, z)?)
}

/// Magnitude of the energy difference, in eV. Zero when both levels are the same.
pub fn transition_energy_ev(n_initial: u32, n_final: u32, z: u32) -> BohrResult<f64> {
    Ok(transition_energy_joule(n_initial, n_final, z)?.abs() / E_CHARGE)
}

/// Frequency of the photon, in Hz.
pub fn frequency(n_initial: u32, n_final: u32, z: u32) -> BohrResult<f64> {
    let delta = transition_energy_joule(n_initial, n_final, z)?;
    if n_initial == n_final {
        return Err(BohrError::DegenerateTransition { level: n_initial });
    }
    Ok(delta.abs() / H)
}

/// Wavelength of the photon, in m.
pub fn wavelength(n_initial: u32, n_final: u32, z: u32) -> BohrResult<f64> {
    Ok(C / frequency(n_initial, n_final, z)?)
}

/// A change of level in a hydrogen-like atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub n_initial: u32,
    pub n_final: u32,
    pub atomic_number: u32,
}

/// Properties of the photon carried by a [Transition].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Photon {
    /// Photon energy in J, non-negative
    pub energy_joule: f64,
    /// Photon energy in eV, non-negative
    pub energy_ev: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Wavelength in m
    pub wavelength: f64,
}

impl Transition {
    pub fn new(n_initial: u32, n_final: u32, atomic_number: u32) -> Self {
        Transition {
            n_initial,
            n_final,
            atomic_number,
        }
    }

    /// True if the electron falls to a lower level, releasing a photon.
    pub fn is_emission(&self) -> bool {
        self.n_initial > self.n_final
    }

    /// True if the electron is lifted to a higher level by absorbing a photon.
    pub fn is_absorption(&self) -> bool {
        self.n_initial < self.n_final
    }

    pub fn energy_joule(&self) -> BohrResult<f64> {
        transition_energy_joule(self.n_initial, self.n_final, self.atomic_number)
    }

    pub fn energy_ev(&self) -> BohrResult<f64> {
        transition_energy_ev(self.n_initial, self.n_final, self.atomic_number)
    }

    pub fn frequency(&self) -> BohrResult<f64> {
        frequency(self.n_initial, self.n_final, self.atomic_number)
    }

    pub fn wavelength(&self) -> BohrResult<f64> {
        wavelength(self.n_initial, self.n_final, self.atomic_number)
    }

    /// Spectroscopic wavenumber `1 / λ`, in 1/m.
    pub fn wavenumber(&self) -> BohrResult<f64> {
        Ok(1.0 / self.wavelength()?)
    }

    /// Evaluates every photon property at once.
    pub fn photon(&self) -> BohrResult<Photon> {
        let energy_joule = self.energy_joule()?.abs();
        let frequency = self.frequency()?;
        Ok(Photon {
            energy_joule,
            energy_ev: energy_joule / E_CHARGE,
            frequency,
            wavelength: C / frequency,
        })
    }
}
