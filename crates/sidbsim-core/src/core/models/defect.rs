use super::coords::SiqadCoord;
use super::layout::SidbLayout;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A fabrication defect type observed on the H-Si(100) 2x1 surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidbDefectType {
    /// A stray dangling bond.
    Db,
    /// A missing silicon atom.
    SiVacancy,
    SingleDihydride,
    /// A missing dimer passivated by hydrogen.
    DihydridePair,
    OneByOne,
    ThreeByOne,
    /// An oxidized dimer.
    Siloxane,
    RaisedSi,
    MissingDimer,
    EtchPit,
    StepEdge,
    /// Residual contamination of unknown composition.
    Gunk,
    Unknown,
}

impl SidbDefectType {
    /// Whether the defect carries a net charge and therefore perturbs SiDBs
    /// far beyond its own footprint.
    pub fn is_charged(self) -> bool {
        matches!(self, SidbDefectType::Db | SidbDefectType::SiVacancy)
    }
}

/// Rectangular influence extents of defects, in surface columns and dimer
/// rows. These are technology parameters, not universal constants, so they
/// stay configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefectExtentParams {
    /// (horizontal, vertical) extent of charged defect types.
    pub charged: (u32, u32),
    /// (horizontal, vertical) extent of neutral defect types.
    pub neutral: (u32, u32),
}

impl Default for DefectExtentParams {
    fn default() -> Self {
        Self {
            charged: (26, 13),
            neutral: (1, 0),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DefectSurfaceParams {
    /// Defect types that are not relevant for the current analysis. Ignored
    /// defects are not stored in the surface instance.
    pub ignore: HashSet<SidbDefectType>,
    pub extent: DefectExtentParams,
}

/// Layers fabrication-defect bookkeeping over a shared [`SidbLayout`].
///
/// The layout itself stays untouched; this surface only records which
/// coordinates are defective and answers which layout sites fall within a
/// defect's influence extent.
#[derive(Debug, Clone)]
pub struct DefectSurface {
    layout: Arc<SidbLayout>,
    params: DefectSurfaceParams,
    defects: HashMap<SiqadCoord, SidbDefectType>,
}

impl DefectSurface {
    pub fn new(layout: Arc<SidbLayout>) -> Self {
        Self::with_params(layout, DefectSurfaceParams::default())
    }

    pub fn with_params(layout: Arc<SidbLayout>, params: DefectSurfaceParams) -> Self {
        Self {
            layout,
            params,
            defects: HashMap::new(),
        }
    }

    pub fn layout(&self) -> &SidbLayout {
        &self.layout
    }

    /// Records a defect at `coord` unless its type is in the ignore set.
    pub fn assign_defect(&mut self, coord: SiqadCoord, defect: SidbDefectType) {
        if !self.params.ignore.contains(&defect) {
            self.defects.insert(coord, defect);
        }
    }

    pub fn clear_defect(&mut self, coord: SiqadCoord) {
        self.defects.remove(&coord);
    }

    pub fn defect(&self, coord: SiqadCoord) -> Option<SidbDefectType> {
        self.defects.get(&coord).copied()
    }

    pub fn num_defects(&self) -> usize {
        self.defects.len()
    }

    pub fn defects(&self) -> impl Iterator<Item = (SiqadCoord, SidbDefectType)> + '_ {
        self.defects.iter().map(|(&c, &d)| (c, d))
    }

    /// All layout sites within the influence extent of the defect at `coord`.
    /// The empty set if `coord` is defect-free.
    pub fn affected_sidbs(&self, coord: SiqadCoord) -> HashSet<SiqadCoord> {
        let Some(defect) = self.defect(coord) else {
            return HashSet::new();
        };

        let (horizontal, vertical) = if defect.is_charged() {
            self.params.extent.charged
        } else {
            self.params.extent.neutral
        };

        self.layout
            .sites()
            .iter()
            .copied()
            .filter(|site| {
                site.x.abs_diff(coord.x) <= horizontal && site.y.abs_diff(coord.y) <= vertical
            })
            .collect()
    }

    /// All layout sites within the influence extent of any defect.
    pub fn all_affected_sidbs(&self) -> HashSet<SiqadCoord> {
        self.defects
            .keys()
            .flat_map(|&coord| self.affected_sidbs(coord))
            .collect()
    }
}
