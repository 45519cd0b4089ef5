//! Marching tetrahedra case table.
//!
//! Node `i` of the cell contributes bit `i` of the case index when its value is above
//! the isolevel. Each row lists up to two triangles as triples of edge indices.

use super::MarchingTable;

/// Triangles per case, as edge indices terminated by `-1`.
#[rustfmt::skip]
pub const TRIANGLE_ID: [[i8; 7]; 16] = [
    [-1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  1, -1, -1, -1, -1],
    [ 0,  3,  4, -1, -1, -1, -1],
    [ 1,  3,  4,  1,  4,  2, -1],
    [ 1,  5,  3, -1, -1, -1, -1],
    [ 0,  2,  5,  0,  5,  3, -1],
    [ 0,  1,  5,  0,  5,  4, -1],
    [ 2,  5,  4, -1, -1, -1, -1],
    [ 2,  4,  5, -1, -1, -1, -1],
    [ 0,  4,  5,  0,  5,  1, -1],
    [ 0,  3,  5,  0,  5,  2, -1],
    [ 1,  3,  5, -1, -1, -1, -1],
    [ 1,  2,  4,  1,  4,  3, -1],
    [ 0,  4,  3, -1, -1, -1, -1],
    [ 0,  1,  2, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1],
];

/// The two cell nodes joined by each edge.
pub const VERTEX_ID: [[usize; 2]; 6] = [
    [0, 1],
    [0, 2],
    [0, 3],
    [1, 2],
    [1, 3],
    [2, 3],
];

/// The table as a [`MarchingTable`].
pub static TABLE: MarchingTable<7> = MarchingTable::new(&TRIANGLE_ID, &VERTEX_ID);
