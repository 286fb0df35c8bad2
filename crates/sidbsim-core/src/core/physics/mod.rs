//! # Physics Module
//!
//! The pure physical model of SiDB electrostatics: fixed natural constants
//! ([`constants`]), the configurable parameters of the simulation model
//! ([`params`]), and the screened Coulomb pair potential ([`potentials`]).
//!
//! Everything here is stateless; the cached per-surface quantities derived
//! from these functions live in [`crate::engine::surface`].

pub mod constants;
pub mod params;
pub mod potentials;
