/// The functional kind of an SiDB cell within a gate design.
///
/// Empty positions are represented by absence from a
/// [`layout::SidbLayout`](super::layout::SidbLayout) rather than by a variant,
/// so every stored cell is a physical dangling bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SidbCellType {
    /// A regular dangling bond with no dedicated gate function.
    #[default]
    Normal,
    /// An input perturber of a gate.
    Input,
    /// An output dangling bond pair of a gate.
    Output,
    /// A dangling bond belonging to the logic area of a gate.
    Logic,
}
