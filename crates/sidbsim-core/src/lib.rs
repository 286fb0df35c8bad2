//! # sidbsim Core Library
//!
//! A simulation library for the electrostatic ground-state behavior of silicon
//! dangling bond (SiDB) logic, the device primitive of field-coupled
//! nanocomputing on the H-Si(100) 2x1 surface.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict two-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`SidbLayout`,
//!   coordinates, cell kinds, charge states, fabrication defects) and the pure
//!   physical model (screened Coulomb potentials, simulation parameters).
//!
//! - **[`engine`]: The Logic Core.** This stateful layer owns the
//!   `ChargeDistributionSurface`: one charge state per site plus the cached
//!   derived quantities (local potentials, system energy, physical validity)
//!   that outer exploration loops query between explicit recomputations. It
//!   also hosts the small utilities those loops build on (random layout
//!   generation, ground-state comparison).
//!
//! Exhaustive or heuristic search over charge assignments deliberately lives
//! *above* this library: callers mutate a surface, trigger one recomputation,
//! and read energy and validity back.

pub mod core;
pub mod engine;
