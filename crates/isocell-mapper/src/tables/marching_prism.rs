//! Marching prism case table.
//!
//! Nodes 0-2 form the bottom triangle and nodes 3-5 the top one. Edges 0-2 run around
//! the bottom, 3-5 around the top, and 6-8 are the vertical edges. Where a quadrilateral
//! face carries four crossings the table cuts off the above corners.

use super::MarchingTable;

/// Triangles per case, as edge indices terminated by `-1`.
#[rustfmt::skip]
pub const TRIANGLE_ID: [[i8; 13]; 64] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  2,  6,  1,  6,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  8,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  8,  0,  8,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  8,  0,  8,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  7,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  6,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  5,  0,  5,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  1,  3,  6,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  2,  5,  1,  5,  3,  1,  3,  7, -1, -1, -1, -1],
    [ 1,  8,  2,  3,  6,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  8,  0,  8,  5,  0,  5,  3, -1, -1, -1, -1],
    [ 0,  7,  8,  0,  8,  2,  3,  6,  5, -1, -1, -1, -1],
    [ 3,  7,  8,  3,  8,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  4,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  6,  3,  4,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  4,  0,  4,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  2,  6,  1,  6,  3,  1,  3,  4, -1, -1, -1, -1],
    [ 1,  8,  2,  3,  4,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  8,  0,  8,  6,  3,  4,  7, -1, -1, -1, -1],
    [ 0,  3,  4,  0,  4,  8,  0,  8,  2, -1, -1, -1, -1],
    [ 3,  4,  8,  3,  8,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  7,  6,  4,  6,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  5,  0,  5,  4,  0,  4,  7, -1, -1, -1, -1],
    [ 0,  6,  5,  0,  5,  4,  0,  4,  1, -1, -1, -1, -1],
    [ 1,  2,  5,  1,  5,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  8,  2,  4,  7,  6,  4,  6,  5, -1, -1, -1, -1],
    [ 0,  1,  8,  0,  8,  5,  0,  5,  4,  0,  4,  7, -1],
    [ 0,  6,  5,  0,  5,  4,  0,  4,  8,  0,  8,  2, -1],
    [ 4,  8,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  5,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  6,  4,  5,  8, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  1,  4,  5,  8, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  2,  6,  1,  6,  7,  4,  5,  8, -1, -1, -1, -1],
    [ 1,  4,  5,  1,  5,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  4,  0,  4,  5,  0,  5,  6, -1, -1, -1, -1],
    [ 0,  7,  4,  0,  4,  5,  0,  5,  2, -1, -1, -1, -1],
    [ 4,  5,  6,  4,  6,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  6,  8,  3,  8,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  8,  0,  8,  4,  0,  4,  3, -1, -1, -1, -1],
    [ 0,  7,  1,  3,  6,  8,  3,  8,  4, -1, -1, -1, -1],
    [ 1,  2,  8,  1,  8,  4,  1,  4,  3,  1,  3,  7, -1],
    [ 1,  4,  3,  1,  3,  6,  1,  6,  2, -1, -1, -1, -1],
    [ 0,  1,  4,  0,  4,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  4,  0,  4,  3,  0,  3,  6,  0,  6,  2, -1],
    [ 3,  7,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  5,  8,  3,  8,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  6,  3,  5,  8,  3,  8,  7, -1, -1, -1, -1],
    [ 0,  3,  5,  0,  5,  8,  0,  8,  1, -1, -1, -1, -1],
    [ 1,  2,  6,  1,  6,  3,  1,  3,  5,  1,  5,  8, -1],
    [ 1,  7,  3,  1,  3,  5,  1,  5,  2, -1, -1, -1, -1],
    [ 0,  1,  7,  0,  7,  3,  0,  3,  5,  0,  5,  6, -1],
    [ 0,  3,  5,  0,  5,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  5,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  8,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  2,  8,  0,  8,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  6,  8,  0,  8,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  2,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  7,  6,  1,  6,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  6,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

/// The two cell nodes joined by each edge.
pub const VERTEX_ID: [[usize; 2]; 9] = [
    [0, 1],
    [1, 2],
    [2, 0],
    [3, 4],
    [4, 5],
    [5, 3],
    [0, 3],
    [1, 4],
    [2, 5],
];

/// The table as a [`MarchingTable`].
pub static TABLE: MarchingTable<13> = MarchingTable::new(&TRIANGLE_ID, &VERTEX_ID);
