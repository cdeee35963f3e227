#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

/// World units spanned by one grid cell edge.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct CellSize(pub f32);

/// World units between consecutive wall blocks along an edge.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct WallSize(pub f32);
