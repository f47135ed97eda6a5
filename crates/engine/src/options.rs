/// Order in which the walker visits directories.
///
/// Only the timing of dispatch differs; final counts never depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    #[default]
    DepthFirst,
    BreadthFirst,
}
