//! Closed-form quantities of the Bohr model for hydrogen-like atoms: level energies, orbit
//! radii, and the photons emitted or absorbed in transitions between levels.
//!
//! All quantities are in SI units, with energies also available in electronvolts.
pub mod configuration;
pub mod constant;
pub mod energy;
pub mod error;
pub mod radius;
pub mod series;
pub mod species;
pub mod summary;
pub mod transition;

#[cfg(test)]
mod integration_tests;

pub use energy::{energy_ev, energy_joule, summary as energy_summary, EnergyLevel};
pub use error::{BohrError, BohrResult};
pub use radius::{bohr_radius, orbit_radius, radius, summary as radius_summary};
pub use summary::LevelSummary;
pub use transition::{
    frequency, transition_energy_ev, transition_energy_joule, wavelength, Photon, Transition,
};
