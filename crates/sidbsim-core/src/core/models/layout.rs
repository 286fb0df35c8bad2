use super::cell::SidbCellType;
use super::coords::SiqadCoord;
use std::collections::HashMap;

/// An ordered collection of SiDB sites with their functional cell kinds.
///
/// Sites are kept sorted in row-major surface-scan order (see
/// [`SiqadCoord`]'s `Ord` implementation), which gives every site a stable
/// ordinal used as the dense storage index by the simulation engine. Because
/// sites are keyed by coordinate, two distinct sites can never share a
/// position, which keeps zero-distance pairs structurally unreachable in the
/// electrostatic model.
///
/// A layout is mutated while a design is being assembled and is then treated
/// as read-only geometry by every
/// [`ChargeDistributionSurface`](crate::engine::surface::ChargeDistributionSurface)
/// bound to it; sharing one layout across surfaces is done via `Arc`.
#[derive(Debug, Clone, Default)]
pub struct SidbLayout {
    /// Site coordinates in sorted order; position in this vector is the
    /// site's ordinal.
    sites: Vec<SiqadCoord>,
    /// Cell kind per site.
    cell_types: HashMap<SiqadCoord, SidbCellType>,
}

impl SidbLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a site of the given kind, or changes the kind of an existing
    /// site.
    pub fn assign_cell_type(&mut self, coord: SiqadCoord, cell_type: SidbCellType) {
        if self.cell_types.insert(coord, cell_type).is_none() {
            if let Err(idx) = self.sites.binary_search(&coord) {
                self.sites.insert(idx, coord);
            }
        }
    }

    /// Removes the site at `coord`, if any. Site ordinals of later sites
    /// shift; layouts are not meant to be edited once a surface is bound.
    pub fn clear_cell(&mut self, coord: SiqadCoord) {
        if self.cell_types.remove(&coord).is_some() {
            if let Ok(idx) = self.sites.binary_search(&coord) {
                self.sites.remove(idx);
            }
        }
    }

    pub fn cell_type(&self, coord: SiqadCoord) -> Option<SidbCellType> {
        self.cell_types.get(&coord).copied()
    }

    pub fn contains(&self, coord: SiqadCoord) -> bool {
        self.cell_types.contains_key(&coord)
    }

    /// All sites in row-major surface-scan order.
    pub fn sites(&self) -> &[SiqadCoord] {
        &self.sites
    }

    /// The stable ordinal of a site, or `None` for coordinates not in the
    /// layout.
    pub fn site_index(&self, coord: SiqadCoord) -> Option<usize> {
        self.sites.binary_search(&coord).ok()
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_site_layout() -> SidbLayout {
        let mut layout = SidbLayout::new();
        layout.assign_cell_type(SiqadCoord::from_offset(6, 1), SidbCellType::Normal);
        layout.assign_cell_type(SiqadCoord::from_offset(0, 1), SidbCellType::Normal);
        layout.assign_cell_type(SiqadCoord::from_offset(4, 1), SidbCellType::Normal);
        layout
    }

    #[test]
    fn sites_are_ordered_regardless_of_insertion_order() {
        let layout = three_site_layout();
        assert_eq!(
            layout.sites(),
            &[
                SiqadCoord::new(0, 0, 1),
                SiqadCoord::new(4, 0, 1),
                SiqadCoord::new(6, 0, 1),
            ]
        );
    }

    #[test]
    fn site_index_matches_sorted_position() {
        let layout = three_site_layout();
        assert_eq!(layout.site_index(SiqadCoord::new(0, 0, 1)), Some(0));
        assert_eq!(layout.site_index(SiqadCoord::new(4, 0, 1)), Some(1));
        assert_eq!(layout.site_index(SiqadCoord::new(6, 0, 1)), Some(2));
        assert_eq!(layout.site_index(SiqadCoord::new(9, 9, 0)), None);
    }

    #[test]
    fn reassigning_a_kind_does_not_duplicate_the_site() {
        let mut layout = three_site_layout();
        layout.assign_cell_type(SiqadCoord::new(4, 0, 1), SidbCellType::Input);
        assert_eq!(layout.num_sites(), 3);
        assert_eq!(
            layout.cell_type(SiqadCoord::new(4, 0, 1)),
            Some(SidbCellType::Input)
        );
    }

    #[test]
    fn clearing_a_cell_removes_the_site() {
        let mut layout = three_site_layout();
        layout.clear_cell(SiqadCoord::new(4, 0, 1));
        assert_eq!(layout.num_sites(), 2);
        assert!(!layout.contains(SiqadCoord::new(4, 0, 1)));
        assert_eq!(layout.site_index(SiqadCoord::new(6, 0, 1)), Some(1));
    }

    #[test]
    fn clearing_an_unknown_coordinate_is_a_no_op() {
        let mut layout = three_site_layout();
        layout.clear_cell(SiqadCoord::new(9, 9, 0));
        assert_eq!(layout.num_sites(), 3);
    }

    #[test]
    fn empty_layout_reports_no_sites() {
        let layout = SidbLayout::new();
        assert!(layout.is_empty());
        assert_eq!(layout.num_sites(), 0);
        assert!(layout.sites().is_empty());
    }
}
