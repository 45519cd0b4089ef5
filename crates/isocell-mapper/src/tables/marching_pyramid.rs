//! Marching pyramid case table.
//!
//! Node 0 is the apex and nodes 1-4 walk around the quadrilateral base. Edges 0-3 join
//! the apex to the base, edges 4-7 run around the base. Where a face carries four
//! crossings the table cuts off the above corners.

use super::MarchingTable;

/// Triangles per case, as edge indices terminated by `-1`.
#[rustfmt::skip]
pub const TRIANGLE_ID: [[i8; 13]; 32] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  2,  0,  2,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  4,  7,  1,  7,  3,  1,  3,  2, -1, -1, -1, -1],
    [ 1,  5,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  2,  0,  2,  5,  0,  5,  4, -1, -1, -1, -1],
    [ 0,  1,  5,  0,  5,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  5,  7,  2,  7,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  6,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  6,  0,  6,  5,  0,  5,  1, -1, -1, -1, -1],
    [ 0,  4,  7,  2,  6,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  4,  7,  1,  7,  3,  1,  3,  6,  1,  6,  5, -1],
    [ 1,  2,  6,  1,  6,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  3,  6,  0,  6,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  2,  0,  2,  6,  0,  6,  7, -1, -1, -1, -1],
    [ 3,  6,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  7,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  6,  0,  6,  2,  0,  2,  1, -1, -1, -1, -1],
    [ 0,  4,  6,  0,  6,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  4,  6,  1,  6,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  5,  4,  3,  7,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  6,  0,  6,  2,  0,  2,  5,  0,  5,  4, -1],
    [ 0,  1,  5,  0,  5,  6,  0,  6,  3, -1, -1, -1, -1],
    [ 2,  5,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  3,  7,  2,  7,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  7,  5,  0,  5,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4,  5,  0,  5,  2,  0,  2,  3, -1, -1, -1, -1],
    [ 1,  4,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  2,  3,  1,  3,  7,  1,  7,  4, -1, -1, -1, -1],
    [ 0,  7,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  2,  0,  2,  3, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

/// The two cell nodes joined by each edge.
pub const VERTEX_ID: [[usize; 2]; 8] = [
    [0, 1],
    [0, 2],
    [0, 3],
    [0, 4],
    [1, 2],
    [2, 3],
    [3, 4],
    [4, 1],
];

/// The table as a [`MarchingTable`].
pub static TABLE: MarchingTable<13> = MarchingTable::new(&TRIANGLE_ID, &VERTEX_ID);
