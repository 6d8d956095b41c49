//! Radii of the electron orbits.
//!
//! The orbit radius of a hydrogen-like atom grows with the square of the level and shrinks
//! inversely with the nuclear charge:
//!
//! `r_n = a0 n^2 / Z`
//!
//! where `a0` is the Bohr radius.

use crate::constant::{A0, EPSILON0, E_CHARGE, HBAR, M_ELECTRON, PI};
use crate::error::{require_positive, BohrResult};
use crate::summary::LevelSummary;

/// Radius of orbit `n` for atomic number `z`, in m, using the tabulated [A0].
pub fn radius(n: u32, z: u32) -> BohrResult<f64> {
    require_positive("n", n)?;
    require_positive("Z", z)?;
    let n = f64::from(n);
    Ok(A0 * (n * n / f64::from(z)))
}

/// The Bohr radius derived from fundamental constants, in m.
///
/// `a0 = ħ^2 / (m_e e^2 / (4 π ε0))`
pub fn bohr_radius() -> f64 {
    HBAR.powi(2) / (M_ELECTRON * E_CHARGE.powi(2) / (4.0 * PI * EPSILON0))
}

/// Radius of hydrogen orbit `n`, in m, using [bohr_radius].
pub fn orbit_radius(n: u32) -> BohrResult<f64> {
    require_positive("n", n)?;
    let n = f64::from(n);
    Ok(n * n * bohr_radius())
}

/// Radii of orbits `1..=max_n`.
pub fn summary(z: u32, max_n: u32) -> BohrResult<LevelSummary<f64>> {
    // Report a bad Z before a bad max_n.
    require_positive("Z", z)?;
    LevelSummary::build(z, max_n, |n| radius(n, z))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::error::BohrError;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_hydrogen_ground_state_radius() {
        let r1 = radius(1, 1).unwrap();
        assert!((r1 - 5.29e-11).abs() / 5.29e-11 < 0.01);
        assert_approx_eq!(r1, 5.29177e-11, 1e-15);
    }

    #[test]
    fn test_tabulated_and_derived_radius_agree() {
        assert!((bohr_radius() - A0).abs() / A0 < 1e-9);
        for n in 1..50 {
            let direct = radius(n, 1).unwrap();
            let derived = orbit_radius(n).unwrap();
            assert!(
                (direct - derived).abs() / direct < 1e-9,
                "n={}: {} vs {}",
                n,
                direct,
                derived
            );
        }
    }

    #[test]
    fn test_radius_scaling() {
        let r1 = radius(1, 1).unwrap();
        assert_approx_eq!(radius(2, 1).unwrap(), 4.0 * r1, 1e-22);
        assert_approx_eq!(radius(3, 1).unwrap(), 9.0 * r1, 1e-22);
        assert_approx_eq!(radius(1, 2).unwrap(), r1 / 2.0, 1e-22);
        assert_approx_eq!(radius(2, 4).unwrap(), r1, 1e-22);
    }

    #[test]
    fn test_zero_level_is_invalid() {
        match radius(0, 1) {
            Err(BohrError::InvalidArgument { argument, value }) => {
                assert_eq!(argument, "n");
                assert_eq!(value, 0);
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        assert!(orbit_radius(0).is_err());
        assert!(radius(1, 0).is_err());
    }

    #[test]
    fn test_summary() {
        let summary = summary(2, 5).unwrap();
        assert_eq!(summary.atomic_number, 2);
        assert_eq!(summary.max_n(), 5);
        for (n, r) in summary.iter() {
            assert_approx_eq!(*r, radius(n, 2).unwrap(), 1e-22);
        }
        assert!(matches!(
            super::summary(0, 0),
            Err(BohrError::InvalidArgument { argument: "Z", .. })
        ));
    }
}
