//! # Engine Module
//!
//! The stateful layer of the library. Its centerpiece is the
//! [`surface::ChargeDistributionSurface`], which binds a charge assignment to
//! a fixed site layout and owns the cached derived quantities (per-site local
//! potentials, total system energy, and the physical-validity verdict) that
//! an outer exploration loop queries between explicit recomputations.
//!
//! ## Key Capabilities
//!
//! - **Explicit recomputation contract**: mutating a charge state is O(1)
//!   and never recomputes; the O(n²) derivation runs only when
//!   `update_after_charge_change` is called, so batches of mutations pay for
//!   a single sweep
//! - **Charge-index bijection**: dense encoding of assignments for
//!   enumeration-style callers
//! - **Exploration helpers**: random layout generation ([`generation`]) and
//!   ground-state comparison ([`groundstate`])
//! - **Engine-specific error types** ([`error`])

pub mod error;
pub mod generation;
pub mod groundstate;
pub mod surface;
