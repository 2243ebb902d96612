#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Height(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellsCount(pub usize);

/// Number of open wall pairs shared by adjacent cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct PassagesCount(pub usize);
