use super::constants::COULOMB_CONSTANT;
use crate::core::models::coords::SiqadCoord;
use nalgebra::Point2;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Separation between the (-/0) and (0/+) charge transition levels in eV.
const TRANSITION_LEVEL_SEPARATION: f64 = 0.59;

const ANGSTROM_TO_NM: f64 = 0.1;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid charge-state base {base}: only 2 and 3 are physical")]
    InvalidBase { base: u8 },
}

/// The configurable parameters of the electrostatic model.
///
/// Defaults reproduce the commonly simulated H-Si(100) 2x1 technology at
/// liquid-helium temperature. All of these are model parameters rather than
/// natural constants and may be overridden programmatically or via a TOML
/// document (see [`SimulationParameters::load`]).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationParameters {
    /// Number of charge states per site: 2 (negative, neutral) or
    /// 3 (negative, neutral, positive).
    pub base: u8,
    /// Energetic transition level (-/0) in eV.
    pub mu_minus: f64,
    /// Relative permittivity of the substrate.
    pub epsilon_r: f64,
    /// Thomas-Fermi screening length in nm.
    pub lambda_tf: f64,
    /// Lattice constant in Å along the dimer column direction.
    pub lat_a: f64,
    /// Lattice constant in Å along the dimer row direction.
    pub lat_b: f64,
    /// Intra-row spacing in Å between the two dangling bonds of a dimer.
    pub lat_c: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            base: 3,
            mu_minus: -0.32,
            epsilon_r: 5.6,
            lambda_tf: 5.0,
            lat_a: 3.84,
            lat_b: 7.68,
            lat_c: 2.25,
        }
    }
}

impl SimulationParameters {
    /// Loads parameters from a TOML document; keys not present fall back to
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamLoadError> {
        if !(2..=3).contains(&self.base) {
            return Err(ParamLoadError::InvalidBase { base: self.base });
        }
        Ok(())
    }

    /// Energetic transition level (0/+) in eV.
    pub fn mu_plus(&self) -> f64 {
        self.mu_minus - TRANSITION_LEVEL_SEPARATION
    }

    /// Coulomb constant scaled by the substrate permittivity.
    pub fn k(&self) -> f64 {
        COULOMB_CONSTANT / self.epsilon_r
    }

    /// Physical position of a site in nm.
    pub fn nm_position(&self, coord: SiqadCoord) -> Point2<f64> {
        let x = f64::from(coord.x) * self.lat_a * ANGSTROM_TO_NM;
        let y = (f64::from(coord.y) * self.lat_b + f64::from(coord.z) * self.lat_c) * ANGSTROM_TO_NM;
        Point2::new(x, y)
    }
}
