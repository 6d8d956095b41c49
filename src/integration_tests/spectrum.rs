//! Integration tests for the hydrogen spectrum
//!
//! The photon quantities are built from level energies, so these tests check the transition
//! calculator is consistent with the energy calculator, and that both reproduce the measured
//! hydrogen lines.

#[cfg(test)]
pub mod tests {
    use crate::constant::{C, E_CHARGE, H};
    use crate::energy::energy_ev;
    use crate::series::{self, Series};
    use crate::species::{HeliumIon, Hydrogen, HydrogenLike};
    use crate::transition::{transition_energy_ev, wavelength, Transition};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn transition_energy_is_difference_of_levels() {
        for z in 1..4 {
            for n_i in 1..8 {
                for n_f in 1..8 {
                    let expected = (energy_ev(n_f, z).unwrap() - energy_ev(n_i, z).unwrap()).abs();
                    assert_approx_eq!(transition_energy_ev(n_i, n_f, z).unwrap(), expected, 1e-9);
                }
            }
        }
    }

    #[test]
    fn photon_energy_matches_planck_relation() {
        for n_i in 2..10 {
            let photon = Transition::new(n_i, 1, 1).photon().unwrap();
            let energy_from_wavelength = H * C / photon.wavelength / E_CHARGE;
            assert_approx_eq!(energy_from_wavelength, photon.energy_ev, 1e-9);
        }
    }

    #[test]
    fn measured_hydrogen_lines() {
        // Vacuum wavelengths in nm. The Bohr model uses an infinitely heavy nucleus, so it
        // overestimates the line energy by about 0.05%.
        let measured = [
            (2, 1, 121.567),
            (3, 2, 656.461),
            (4, 2, 486.271),
            (4, 3, 1875.613),
        ];
        for &(n_i, n_f, nm) in measured.iter() {
            let lambda = wavelength(n_i, n_f, 1).unwrap() * 1e9;
            assert!((lambda - nm).abs() / nm < 1e-3, "{} -> {}: {} nm", n_i, n_f, lambda);
        }
    }

    #[test]
    fn helium_ion_pickering_line_overlaps_balmer() {
        // He+ 4 -> 2 has the same energy as H 2 -> 1, and He+ 6 -> 4 matches H 3 -> 2.
        assert_approx_eq!(
            HeliumIon::transition(4, 2).energy_ev().unwrap(),
            Hydrogen::transition(2, 1).energy_ev().unwrap(),
            1e-9
        );
        assert_approx_eq!(
            HeliumIon::transition(6, 4).wavelength().unwrap(),
            Hydrogen::transition(3, 2).wavelength().unwrap(),
            1e-15
        );
    }

    #[test]
    fn series_lines_agree_with_transitions() {
        let paschen = series::lines(Series::Paschen, 1, 8).unwrap();
        for line in paschen.iter() {
            assert_approx_eq!(
                line.wavelength,
                wavelength(line.n_upper, line.n_lower, 1).unwrap(),
                1e-15
            );
        }
    }
}
