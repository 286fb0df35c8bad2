use super::error::SurfaceError;
use crate::core::models::charge::ChargeState;
use crate::core::models::coords::SiqadCoord;
use crate::core::models::layout::SidbLayout;
use crate::core::physics::constants::POP_STABILITY_ERR;
use crate::core::physics::params::SimulationParameters;
use crate::core::physics::potentials::screened_coulomb;
use itertools::Itertools;
use nalgebra::distance;
use std::sync::Arc;
use tracing::{debug, trace};

/// A charge assignment over a fixed SiDB layout together with its cached
/// derived electrostatics.
///
/// The surface binds to exactly one [`SidbLayout`] for its whole lifetime;
/// geometry never changes, so the chargeless pairwise potential matrix is
/// computed once at construction. What does change is the charge assignment:
/// [`assign_charge_state`](Self::assign_charge_state) is a constant-time
/// overwrite that deliberately does **not** touch the derived quantities.
///
/// ## Staleness contract
///
/// Local potentials, the system energy, and the validity verdict are
/// consistent with the charge assignment only immediately after
/// [`update_after_charge_change`](Self::update_after_charge_change). Any
/// charge mutation after that point leaves the cached values stale until the
/// next recomputation; queries always return the last cached value and never
/// recompute as a side effect. This keeps single-site edits O(1) so that an
/// exploration loop can batch mutations and pay the O(n²) sweep once.
///
/// A freshly constructed surface over a non-empty layout reports
/// `is_physically_valid() == false` until the first recomputation; a surface
/// over an empty layout is vacuously valid with zero energy.
#[derive(Debug, Clone)]
pub struct ChargeDistributionSurface {
    layout: Arc<SidbLayout>,
    params: SimulationParameters,
    /// One charge state per site, indexed by site ordinal.
    charge_states: Vec<ChargeState>,
    /// Symmetric chargeless pair potentials in V, flattened row-major.
    pot_matrix: Vec<f64>,
    /// Cached local potential per site in V.
    local_potential: Vec<f64>,
    /// Cached total electrostatic energy in eV.
    system_energy: f64,
    /// Cached physical-validity verdict.
    valid: bool,
}

impl ChargeDistributionSurface {
    /// Binds a surface to `layout`, initializing every site to the baseline
    /// charge state of a dangling bond, `Negative`.
    pub fn new(layout: Arc<SidbLayout>, params: SimulationParameters) -> Self {
        Self::with_uniform_charge_state(layout, params, ChargeState::Negative)
    }

    /// Binds a surface to `layout` with every site set to `state`.
    pub fn with_uniform_charge_state(
        layout: Arc<SidbLayout>,
        params: SimulationParameters,
        state: ChargeState,
    ) -> Self {
        let n = layout.num_sites();
        let pot_matrix = build_potential_matrix(&layout, &params);
        debug!(num_sites = n, "bound charge distribution surface to layout");

        Self {
            charge_states: vec![state; n],
            local_potential: vec![0.0; n],
            system_energy: 0.0,
            valid: n == 0,
            layout,
            params,
            pot_matrix,
        }
    }

    pub fn layout(&self) -> &SidbLayout {
        &self.layout
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn num_sites(&self) -> usize {
        self.charge_states.len()
    }

    /// The current charge state of the site at `coord`.
    pub fn get_charge_state(&self, coord: SiqadCoord) -> Result<ChargeState, SurfaceError> {
        Ok(self.charge_states[self.index_of(coord)?])
    }

    /// Overwrites the charge state of the site at `coord`.
    ///
    /// Constant time; never recomputes. Cached derived quantities become
    /// stale until the next
    /// [`update_after_charge_change`](Self::update_after_charge_change).
    pub fn assign_charge_state(
        &mut self,
        coord: SiqadCoord,
        state: ChargeState,
    ) -> Result<(), SurfaceError> {
        let idx = self.index_of(coord)?;
        self.charge_states[idx] = state;
        Ok(())
    }

    /// Overwrites every site with `state`. Same staleness rule as
    /// [`assign_charge_state`](Self::assign_charge_state).
    pub fn assign_all_charge_states(&mut self, state: ChargeState) {
        self.charge_states.fill(state);
    }

    /// The single explicit recomputation entry point.
    ///
    /// One O(n²) pass rederives the per-site local potentials, the total
    /// system energy, and the physical-validity verdict from the current
    /// charge assignment, fully overwriting the previous cached values.
    pub fn update_after_charge_change(&mut self) {
        self.update_local_potential();
        self.recompute_system_energy();
        self.validity_check();
        trace!(
            energy_ev = self.system_energy,
            valid = self.valid,
            "recomputed derived electrostatics"
        );
    }

    /// The cached total electrostatic energy in eV from the last
    /// recomputation or explicit zeroing. Never recomputes.
    pub fn get_system_energy(&self) -> f64 {
        self.system_energy
    }

    /// Resets the cached energy to exactly zero without touching charge
    /// states, local potentials, or the validity verdict.
    pub fn set_system_energy_to_zero(&mut self) {
        self.system_energy = 0.0;
    }

    /// The cached validity verdict from the last recomputation. Never
    /// recomputes; see the staleness contract on the type.
    pub fn is_physically_valid(&self) -> bool {
        self.valid
    }

    /// The cached local potential in V at the site at `coord`.
    pub fn local_potential(&self, coord: SiqadCoord) -> Result<f64, SurfaceError> {
        Ok(self.local_potential[self.index_of(coord)?])
    }

    /// The chargeless pair potential in V between two sites of the layout.
    pub fn potential_between_sites(
        &self,
        c1: SiqadCoord,
        c2: SiqadCoord,
    ) -> Result<f64, SurfaceError> {
        let i = self.index_of(c1)?;
        let j = self.index_of(c2)?;
        Ok(self.pot_matrix[i * self.charge_states.len() + j])
    }

    /// Encodes the current assignment as a base-`base` integer with the site
    /// of ordinal 0 as the most significant digit (digit = charge sign + 1).
    ///
    /// With `base` 2, surfaces holding positive charges are not
    /// representable.
    pub fn charge_index(&self) -> Result<u64, SurfaceError> {
        let base = u64::from(self.params.base);
        let mut index = 0u64;
        for &state in &self.charge_states {
            let digit = u64::from((state.sign() + 1) as u8);
            index = index
                .checked_mul(base)
                .and_then(|i| i.checked_add(digit))
                .ok_or(SurfaceError::ChargeIndexOverflow {
                    num_sites: self.charge_states.len(),
                    base: self.params.base,
                })?;
        }
        Ok(index)
    }

    /// The largest valid charge index, `base^n - 1`.
    pub fn max_charge_index(&self) -> Result<u64, SurfaceError> {
        let base = u64::from(self.params.base);
        let n = self.charge_states.len();
        base.checked_pow(n as u32)
            .map(|count| count - 1)
            .ok_or(SurfaceError::ChargeIndexOverflow {
                num_sites: n,
                base: self.params.base,
            })
    }

    /// Decodes `index` into the dense charge assignment, the inverse of
    /// [`charge_index`](Self::charge_index). Does not recompute derived
    /// quantities.
    pub fn assign_charge_index(&mut self, index: u64) -> Result<(), SurfaceError> {
        let max = self.max_charge_index()?;
        if index > max {
            return Err(SurfaceError::InvalidChargeIndex { index, max });
        }

        let base = u64::from(self.params.base);
        let mut rest = index;
        for state in self.charge_states.iter_mut().rev() {
            let sign = (rest % base) as i8 - 1;
            rest /= base;
            // sign is always in {-1, 0, 1} for a validated base
            *state = ChargeState::from_sign(sign).unwrap_or(ChargeState::Neutral);
        }
        Ok(())
    }

    fn index_of(&self, coord: SiqadCoord) -> Result<usize, SurfaceError> {
        self.layout
            .site_index(coord)
            .ok_or(SurfaceError::OutOfRange { coord })
    }

    fn update_local_potential(&mut self) {
        let n = self.charge_states.len();
        for i in 0..n {
            let mut collected = 0.0;
            for j in 0..n {
                collected +=
                    self.pot_matrix[i * n + j] * f64::from(self.charge_states[j].sign());
            }
            self.local_potential[i] = collected;
        }
    }

    fn recompute_system_energy(&mut self) {
        // E = 1/2 * sum_i v_i * q_i counts every unordered pair once
        let total: f64 = self
            .local_potential
            .iter()
            .zip(&self.charge_states)
            .map(|(v, state)| v * f64::from(state.sign()))
            .sum();
        self.system_energy = 0.5 * total;
    }

    fn validity_check(&mut self) {
        self.valid = self.population_stable() && self.configuration_stable();
    }

    /// Every site must hold the charge state its local potential selects
    /// under the transition levels mu_minus and mu_plus.
    fn population_stable(&self) -> bool {
        let mu_minus = self.params.mu_minus;
        let mu_plus = self.params.mu_plus();

        self.charge_states
            .iter()
            .zip(&self.local_potential)
            .all(|(&state, &v)| match state {
                ChargeState::Negative => -v + mu_minus < POP_STABILITY_ERR,
                ChargeState::Neutral => {
                    -v + mu_minus > -POP_STABILITY_ERR && -v + mu_plus < POP_STABILITY_ERR
                }
                ChargeState::Positive => -v + mu_plus > -POP_STABILITY_ERR,
            })
    }

    /// No single electron hop from a more negative to a less negative site
    /// may strictly lower the total energy; otherwise the assignment is not a
    /// local minimum.
    fn configuration_stable(&self) -> bool {
        let n = self.charge_states.len();
        for i in 0..n {
            for j in 0..n {
                if self.charge_states[j].sign() > self.charge_states[i].sign() {
                    let hop_energy_delta = self.local_potential[i]
                        - self.local_potential[j]
                        - self.pot_matrix[i * n + j];
                    if hop_energy_delta < -POP_STABILITY_ERR {
                        return false;
                    }
                }
            }
        }
        true
    }
}

fn build_potential_matrix(layout: &SidbLayout, params: &SimulationParameters) -> Vec<f64> {
    let n = layout.num_sites();
    let mut matrix = vec![0.0; n * n];

    for (i, j) in (0..n).tuple_combinations() {
        let d = distance(
            &params.nm_position(layout.sites()[i]),
            &params.nm_position(layout.sites()[j]),
        );
        let v = screened_coulomb(d, params.k(), params.lambda_tf);
        matrix[i * n + j] = v;
        matrix[j * n + i] = v;
    }

    matrix
}
