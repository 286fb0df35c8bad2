use super::constants::ELEMENTARY_CHARGE;

const NM_TO_M: f64 = 1e-9;

/// Chargeless electrostatic potential in V that a unit point charge at
/// distance `dist_nm` exerts, attenuated by Thomas-Fermi screening. Returns 0
/// for coincident positions, which only occur for a site paired with itself.
#[inline]
pub fn screened_coulomb(dist_nm: f64, k: f64, lambda_tf_nm: f64) -> f64 {
    if dist_nm < 1e-12 {
        return 0.0;
    }
    k / (dist_nm * NM_TO_M) * (-dist_nm / lambda_tf_nm).exp() * ELEMENTARY_CHARGE
}
