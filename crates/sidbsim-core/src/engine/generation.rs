use crate::core::models::cell::SidbCellType;
use crate::core::models::coords::SiqadCoord;
use crate::core::models::layout::SidbLayout;
use rand::Rng;
use tracing::warn;

/// Below this offset-space euclidean distance, two SiDBs are so close that a
/// positively charged configuration becomes energetically reachable.
const MIN_NEIGHBOR_DISTANCE: f64 = 3.0;

/// Controls for [`generate_random_layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Largest offset x coordinate (inclusive) of the placement region.
    pub max_x: i32,
    /// Largest offset y coordinate (inclusive) of the placement region.
    pub max_y: i32,
    /// Number of normal SiDBs to place.
    pub num_sidbs: usize,
    /// Reject candidate positions closer than three offset cells to an
    /// existing site, keeping positive charge states out of reach.
    pub prevent_positive_charges: bool,
    /// Upper bound on placement attempts before giving up on a full layout.
    pub max_attempts: u64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_x: 0,
            max_y: 0,
            num_sidbs: 0,
            prevent_positive_charges: true,
            max_attempts: 10_000_000,
        }
    }
}

/// Scatters `num_sidbs` normal cells uniformly over the placement region.
///
/// The layout may come back with fewer sites when the attempt budget runs out
/// before every SiDB found a legal position; callers deciding to retry should
/// check [`SidbLayout::num_sites`].
pub fn generate_random_layout(params: &GenerationParams, rng: &mut impl Rng) -> SidbLayout {
    let mut layout = SidbLayout::new();
    let mut attempts = 0u64;

    while layout.num_sites() < params.num_sidbs && attempts < params.max_attempts {
        attempts += 1;

        let x = rng.gen_range(0..=params.max_x);
        let y = rng.gen_range(0..=params.max_y);
        let candidate = SiqadCoord::from_offset(x, y);

        if params.prevent_positive_charges && violates_spacing(&layout, candidate) {
            continue;
        }
        layout.assign_cell_type(candidate, SidbCellType::Normal);
    }

    if layout.num_sites() < params.num_sidbs {
        warn!(
            placed = layout.num_sites(),
            requested = params.num_sidbs,
            attempts,
            "attempt budget exhausted before the layout was fully populated"
        );
    }

    layout
}

fn violates_spacing(layout: &SidbLayout, candidate: SiqadCoord) -> bool {
    let (cx, cy) = candidate.to_offset();
    layout.sites().iter().any(|site| {
        let (sx, sy) = site.to_offset();
        let dx = f64::from(sx - cx);
        let dy = f64::from(sy - cy);
        (dx * dx + dy * dy).sqrt() < MIN_NEIGHBOR_DISTANCE
    })
}
