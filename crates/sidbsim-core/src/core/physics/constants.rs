/// Elementary charge in C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_6208e-19;

/// Vacuum permittivity in F/m.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_8128e-12;

/// Coulomb constant in N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.987_551_792_3e9;

/// Numerical tolerance of the population and configuration stability checks,
/// also used as the relative tolerance when comparing minimum energies of two
/// simulation result sets.
pub const POP_STABILITY_ERR: f64 = 1e-6;
