//! # Core Models Module
//!
//! This module contains the data structures used to represent SiDB
//! arrangements on the H-Si(100) 2x1 surface, providing the foundation for
//! all simulation operations.
//!
//! ## Key Components
//!
//! - [`coords`] - SiQAD coordinates addressing individual dangling bonds
//! - [`cell`] - functional cell kinds (normal, input, output, logic)
//! - [`charge`] - the three-valued SiDB charge state
//! - [`layout`] - an ordered, immutable-by-convention collection of sites
//! - [`defect`] - fabrication defect bookkeeping layered over a layout

pub mod cell;
pub mod charge;
pub mod coords;
pub mod defect;
pub mod layout;
