//! Predefined hydrogen-like species.
//!
//! A hydrogen-like atom has a single electron bound to a nucleus of charge `Z`, so every
//! quantity in this crate applies to it with `Z` fixed. Implementing [HydrogenLike] binds `Z`
//! at the type level.
use crate::energy::{self, EnergyLevel};
use crate::error::BohrResult;
use crate::radius;
use crate::summary::LevelSummary;
use crate::transition::Transition;

/// A single-electron atom or ion with a fixed nuclear charge.
pub trait HydrogenLike {
    /// Nuclear charge `Z`.
    fn atomic_number() -> u32;
    /// Chemical symbol including the ionization state, eg `He+`.
    fn symbol() -> &'static str;

    fn energy_joule(n: u32) -> BohrResult<f64> {
        energy::energy_joule(n, Self::atomic_number())
    }
    fn energy_ev(n: u32) -> BohrResult<f64> {
        energy::energy_ev(n, Self::atomic_number())
    }
    fn ionization_energy_ev(n: u32) -> BohrResult<f64> {
        energy::ionization_energy_ev(n, Self::atomic_number())
    }
    fn radius(n: u32) -> BohrResult<f64> {
        radius::radius(n, Self::atomic_number())
    }
    fn energy_summary(max_n: u32) -> BohrResult<LevelSummary<EnergyLevel>> {
        energy::summary(Self::atomic_number(), max_n)
    }
    fn radius_summary(max_n: u32) -> BohrResult<LevelSummary<f64>> {
        radius::summary(Self::atomic_number(), max_n)
    }
    fn transition(n_initial: u32, n_final: u32) -> Transition {
        Transition::new(n_initial, n_final, Self::atomic_number())
    }
}

/// Declares a unit struct implementing [HydrogenLike].
#[macro_export]
macro_rules! hydrogen_like {
    ($name:ident, $z:expr, $symbol:expr) => {
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
        pub struct $name;
        impl $crate::species::HydrogenLike for $name {
            fn atomic_number() -> u32 {
                $z
            }
            fn symbol() -> &'static str {
                $symbol
            }
        }
    };
}

hydrogen_like!(Hydrogen, 1, "H");
hydrogen_like!(HeliumIon, 2, "He+");
hydrogen_like!(LithiumIon, 3, "Li2+");
hydrogen_like!(BerylliumIon, 4, "Be3+");
