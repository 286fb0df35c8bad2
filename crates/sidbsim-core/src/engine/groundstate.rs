use super::surface::ChargeDistributionSurface;
use crate::core::physics::constants::POP_STABILITY_ERR;

/// The lowest cached system energy among `surfaces`, or `None` for an empty
/// set. Callers are expected to pass physically valid, freshly recomputed
/// surfaces.
pub fn minimum_energy<'a>(
    surfaces: impl IntoIterator<Item = &'a ChargeDistributionSurface>,
) -> Option<f64> {
    surfaces
        .into_iter()
        .map(ChargeDistributionSurface::get_system_energy)
        .min_by(|a, b| a.total_cmp(b))
}

/// Whether a heuristically found result set reaches the ground state
/// established by an exhaustive one.
///
/// Returns `false` when the exhaustive set is empty. Otherwise the two
/// minimum energies must agree within a relative tolerance of
/// [`POP_STABILITY_ERR`].
pub fn is_ground_state(
    heuristic: &[ChargeDistributionSurface],
    exhaustive: &[ChargeDistributionSurface],
) -> bool {
    let (Some(min_exact), Some(min_heuristic)) =
        (minimum_energy(exhaustive), minimum_energy(heuristic))
    else {
        return false;
    };

    if min_exact.abs() < f64::EPSILON {
        return min_heuristic.abs() < POP_STABILITY_ERR;
    }
    ((min_exact - min_heuristic) / min_exact).abs() < POP_STABILITY_ERR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::cell::SidbCellType;
    use crate::core::models::charge::ChargeState;
    use crate::core::models::coords::SiqadCoord;
    use crate::core::models::layout::SidbLayout;
    use crate::core::physics::params::SimulationParameters;
    use std::sync::Arc;

    fn pair_layout() -> Arc<SidbLayout> {
        let mut layout = SidbLayout::new();
        layout.assign_cell_type(SiqadCoord::new(0, 0, 0), SidbCellType::Normal);
        layout.assign_cell_type(SiqadCoord::new(8, 0, 0), SidbCellType::Normal);
        Arc::new(layout)
    }

    fn recomputed_surface(index: u64) -> ChargeDistributionSurface {
        let mut surface =
            ChargeDistributionSurface::new(pair_layout(), SimulationParameters::default());
        surface.assign_charge_index(index).unwrap();
        surface.update_after_charge_change();
        surface
    }

    #[test]
    fn minimum_energy_of_an_empty_set_is_none() {
        let empty: [ChargeDistributionSurface; 0] = [];
        assert_eq!(minimum_energy(&empty), None);
    }

    #[test]
    fn minimum_energy_picks_the_lowest_assignment() {
        let all_negative = recomputed_surface(0);
        let mut one_neutral =
            ChargeDistributionSurface::new(pair_layout(), SimulationParameters::default());
        one_neutral
            .assign_charge_state(SiqadCoord::new(0, 0, 0), ChargeState::Neutral)
            .unwrap();
        one_neutral.update_after_charge_change();

        let surfaces = [all_negative, one_neutral];
        let min = minimum_energy(&surfaces).unwrap();
        assert!(min <= surfaces[0].get_system_energy());
        assert!(min <= surfaces[1].get_system_energy());
    }

    #[test]
    fn empty_exhaustive_set_never_confirms_a_ground_state() {
        let heuristic = [recomputed_surface(0)];
        assert!(!is_ground_state(&heuristic, &[]));
    }

    #[test]
    fn empty_heuristic_set_never_reaches_the_ground_state() {
        let exhaustive = [recomputed_surface(0)];
        assert!(!is_ground_state(&[], &exhaustive));
    }

    #[test]
    fn identical_result_sets_agree_on_the_ground_state() {
        // index 2 is the negative/positive pair, the lowest-energy assignment
        let heuristic = [recomputed_surface(0), recomputed_surface(2)];
        let exhaustive = [recomputed_surface(0), recomputed_surface(2)];
        assert!(is_ground_state(&heuristic, &exhaustive));
    }

    #[test]
    fn zero_energy_ground_state_is_compared_absolutely() {
        // index 4 is the all-neutral assignment with exactly zero energy
        let heuristic = [recomputed_surface(4)];
        let exhaustive = [recomputed_surface(4)];
        assert!(is_ground_state(&heuristic, &exhaustive));
    }

    #[test]
    fn a_heuristic_that_misses_the_minimum_is_rejected() {
        // the exhaustive set knows the negative/positive assignment with
        // negative interaction energy; the heuristic only found the
        // repulsive all-negative one
        let exhaustive = [recomputed_surface(0), recomputed_surface(2)];
        let heuristic = [recomputed_surface(0)];
        assert!(!is_ground_state(&heuristic, &exhaustive));
    }
}
