//! Marching cubes case table for structured grids.
//!
//! Corner `c` of a grid cell sits at offset `(c & 1, (c >> 1) & 1, (c >> 2) & 1)` from the
//! cell's lowest node and contributes bit `c` of the case index. Edges 0-3 are parallel
//! to x, 4-7 to y and 8-11 to z.

use super::MarchingTable;

/// Triangles per case, as edge indices terminated by `-1`.
#[rustfmt::skip]
pub const TRIANGLE_ID: [[i8; 16]; 256] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 5,  0,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  9,  5,  4,  8,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1, 10,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  8,  0,  1, 10,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1, 10,  4,  9,  5,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 5,  1, 10,  5, 10,  9,  9, 10,  8, -1, -1, -1, -1, -1, -1, -1],
    [11,  1,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 5, 11,  1,  8,  0,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0, 11,  1,  0,  9, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  4,  8,  1,  8, 11, 11,  8,  9, -1, -1, -1, -1, -1, -1, -1],
    [10,  5, 11, 10,  4,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  5, 11,  0, 11,  8,  8, 11, 10, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  0,  9,  4,  9, 10, 10,  9, 11, -1, -1, -1, -1, -1, -1, -1],
    [ 8, 11, 10,  8,  9, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  8,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  6,  2,  0,  4,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  5,  0,  6,  2,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  9,  5,  2,  5,  6,  6,  5,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  1, 10,  2,  8,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [10,  6,  2, 10,  2,  1,  1,  2,  0, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  9,  5,  8,  6,  2,  1, 10,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  1, 10,  6,  2,  1,  2,  5,  1,  2,  9,  5, -1, -1, -1, -1],
    [ 2,  8,  6,  1,  5, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  0,  4,  6,  2,  0, 11,  1,  5, -1, -1, -1, -1, -1, -1, -1],
    [11,  0,  9, 11,  1,  0,  6,  2,  8, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  6,  1,  6,  2,  9,  1,  6,  9,  1,  9, 11, -1, -1, -1, -1],
    [ 5, 10,  4,  5, 11, 10,  2,  8,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 2, 10,  6,  2,  5, 10,  5, 11, 10,  0,  5,  2, -1, -1, -1, -1],
    [ 2,  8,  6, 10,  9, 11, 10,  4,  9,  4,  0,  9, -1, -1, -1, -1],
    [ 2, 10,  6,  2,  9, 10,  9, 11, 10, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  2,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4,  8,  7,  9,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  5,  0,  2,  7,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  2,  7,  8,  7,  4,  4,  7,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 1, 10,  4,  2,  7,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  8,  0,  1, 10,  8,  7,  9,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  5,  0,  2,  7,  5, 10,  4,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  2,  7,  8,  7,  1,  1,  7,  5, 10,  8,  1, -1, -1, -1, -1],
    [11,  1,  5,  2,  7,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4,  8,  5, 11,  1,  2,  7,  9, -1, -1, -1, -1, -1, -1, -1],
    [ 7, 11,  1,  7,  1,  2,  2,  1,  0, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  8,  2,  4,  2,  1,  1,  2,  7,  1,  7, 11, -1, -1, -1, -1],
    [10,  5, 11, 10,  4,  5,  2,  7,  9, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  9,  2,  8, 11, 10,  8,  0, 11,  0,  5, 11, -1, -1, -1, -1],
    [11, 10,  7, 10,  4,  0,  7, 10,  0,  7,  0,  2, -1, -1, -1, -1],
    [ 7,  8,  2,  7, 11,  8, 11, 10,  8, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  7,  9,  8,  6,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  0,  4,  9,  4,  7,  7,  4,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  8,  6,  0,  6,  5,  5,  6,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  6,  7,  4,  7,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  8,  6,  7,  9,  8,  1, 10,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  9,  6,  6,  1, 10,  9,  1,  6,  9,  0,  1, -1, -1, -1, -1],
    [10,  4,  1,  5,  6,  7,  5,  0,  6,  0,  8,  6, -1, -1, -1, -1],
    [10,  5,  1, 10,  6,  5,  6,  7,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  7,  9,  8,  6,  7,  1,  5, 11, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  5, 11,  7,  4,  6,  7,  9,  4,  9,  0,  4, -1, -1, -1, -1],
    [ 0,  8,  6,  0,  6, 11, 11,  6,  7,  1,  0, 11, -1, -1, -1, -1],
    [ 1,  7, 11,  1,  4,  7,  4,  6,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 4, 11, 10,  4,  5, 11,  6,  9,  8,  6,  7,  9, -1, -1, -1, -1],
    [ 6,  7,  0, 11, 10,  0, 10,  6,  0,  5, 11,  0,  7,  9,  0, -1],
    [11, 10,  0,  6,  7,  0,  7, 11,  0,  8,  6,  0, 10,  4,  0, -1],
    [ 6,  7, 11,  6, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [10,  3,  6,  0,  4,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  6, 10,  0,  9,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  4,  8,  9,  5,  4,  3,  6, 10, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  4,  1,  3,  6,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  8,  0,  6,  0,  3,  3,  0,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  4,  1,  3,  6,  4,  9,  5,  0, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  5,  8,  8,  3,  6,  5,  3,  8,  5,  1,  3, -1, -1, -1, -1],
    [ 3,  6, 10,  5, 11,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  5, 11,  4,  8,  0,  3,  6, 10, -1, -1, -1, -1, -1, -1, -1],
    [ 0, 11,  1,  0,  9, 11,  6, 10,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 6, 10,  3, 11,  8,  9, 11,  1,  8,  1,  4,  8, -1, -1, -1, -1],
    [11,  3,  6, 11,  6,  5,  5,  6,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  3,  6,  8,  0,  3,  0, 11,  3,  0,  5, 11, -1, -1, -1, -1],
    [ 6, 11,  3,  6,  0, 11,  0,  9, 11,  4,  0,  6, -1, -1, -1, -1],
    [ 6, 11,  3,  6,  8, 11,  8,  9, 11, -1, -1, -1, -1, -1, -1, -1],
    [ 2, 10,  3,  2,  8, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4, 10,  3,  4,  3,  0,  0,  3,  2, -1, -1, -1, -1, -1, -1, -1],
    [10,  2,  8, 10,  3,  2,  5,  0,  9, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  4, 10,  3,  9,  4,  9,  5,  4,  2,  9,  3, -1, -1, -1, -1],
    [ 8,  4,  1,  8,  1,  2,  2,  1,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1,  3,  0,  3,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 5,  0,  9,  2,  1,  3,  2,  8,  1,  8,  4,  1, -1, -1, -1, -1],
    [ 5,  2,  9,  5,  1,  2,  1,  3,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 2, 10,  3,  2,  8, 10,  5, 11,  1, -1, -1, -1, -1, -1, -1, -1],
    [11,  1,  5,  0,  3,  2,  0,  4,  3,  4, 10,  3, -1, -1, -1, -1],
    [ 3,  8, 10,  3,  2,  8,  1,  9, 11,  1,  0,  9, -1, -1, -1, -1],
    [ 9, 11,  4,  3,  2,  4,  2,  9,  4, 10,  3,  4, 11,  1,  4, -1],
    [ 5, 11,  4,  4,  2,  8, 11,  2,  4, 11,  3,  2, -1, -1, -1, -1],
    [11,  0,  5, 11,  3,  0,  3,  2,  0, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  2,  4,  9, 11,  4, 11,  3,  4,  0,  9,  4,  2,  8,  4, -1],
    [ 3,  2,  9,  3,  9, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  9,  2, 10,  3,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  7,  9,  6, 10,  3,  0,  4,  8, -1, -1, -1, -1, -1, -1, -1],
    [ 5,  2,  7,  5,  0,  2, 10,  3,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  6, 10,  4,  7,  5,  4,  8,  7,  8,  2,  7, -1, -1, -1, -1],
    [ 4,  3,  6,  4,  1,  3,  9,  2,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  2,  7,  3,  0,  1,  3,  6,  0,  6,  8,  0, -1, -1, -1, -1],
    [ 1,  6,  4,  1,  3,  6,  0,  7,  5,  0,  2,  7, -1, -1, -1, -1],
    [ 1,  3,  8,  7,  5,  8,  5,  1,  8,  2,  7,  8,  3,  6,  8, -1],
    [ 3,  6, 10,  7,  9,  2,  1,  5, 11, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4,  8,  6, 10,  3,  7,  9,  2,  1,  5, 11, -1, -1, -1, -1],
    [10,  3,  6,  2,  1,  0,  2,  7,  1,  7, 11,  1, -1, -1, -1, -1],
    [ 3,  6, 10, 11,  1,  7,  1,  2,  7,  1,  4,  2,  4,  8,  2, -1],
    [ 2,  7,  9,  5,  6,  4,  5, 11,  6, 11,  3,  6, -1, -1, -1, -1],
    [ 2,  7,  9,  8,  0,  6,  0,  3,  6,  0,  5,  3,  5, 11,  3, -1],
    [ 0,  2, 11,  6,  4, 11,  4,  0, 11,  3,  6, 11,  2,  7, 11, -1],
    [ 6,  8,  3,  8, 11,  3,  8,  7, 11,  8,  2,  7, -1, -1, -1, -1],
    [ 3,  7,  9,  3,  9, 10, 10,  9,  8, -1, -1, -1, -1, -1, -1, -1],
    [10,  0,  4, 10,  3,  0,  3,  9,  0,  3,  7,  9, -1, -1, -1, -1],
    [ 8, 10,  0, 10,  3,  7,  0, 10,  7,  0,  7,  5, -1, -1, -1, -1],
    [ 3,  4, 10,  3,  7,  4,  7,  5,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  8,  4,  1,  7,  8,  7,  9,  8,  3,  7,  1, -1, -1, -1, -1],
    [ 9,  3,  7,  9,  0,  3,  0,  1,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  5,  8,  1,  3,  8,  3,  7,  8,  4,  1,  8,  5,  0,  8, -1],
    [ 1,  3,  7,  1,  7,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 5, 11,  1, 10,  9,  8, 10,  3,  9,  3,  7,  9, -1, -1, -1, -1],
    [ 1,  5, 11, 10,  3,  4,  3,  0,  4,  3,  7,  0,  7,  9,  0, -1],
    [ 8, 10,  7,  1,  0,  7,  0,  8,  7, 11,  1,  7, 10,  3,  7, -1],
    [ 3,  7, 10,  7,  4, 10,  7,  1,  4,  7, 11,  1, -1, -1, -1, -1],
    [ 4,  5,  3,  9,  8,  3,  8,  4,  3,  7,  9,  3,  5, 11,  3, -1],
    [ 9,  0,  7,  0,  3,  7,  0, 11,  3,  0,  5, 11, -1, -1, -1, -1],
    [ 0,  8,  4,  3,  7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 7, 11,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4,  8,  3, 11,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 5,  0,  9,  3, 11,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  9,  5,  4,  8,  9,  3, 11,  7, -1, -1, -1, -1, -1, -1, -1],
    [11,  7,  3,  4,  1, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  1, 10,  8,  0,  1,  7,  3, 11, -1, -1, -1, -1, -1, -1, -1],
    [ 1, 10,  4, 11,  7,  3,  0,  9,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 3, 11,  7,  9, 10,  8,  9,  5, 10,  5,  1, 10, -1, -1, -1, -1],
    [ 1,  7,  3,  1,  5,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  1,  5,  7,  3,  1,  8,  0,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  7,  3,  9,  3,  0,  0,  3,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  4,  8,  1,  8,  7,  7,  8,  9,  3,  1,  7, -1, -1, -1, -1],
    [ 3, 10,  4,  3,  4,  7,  7,  4,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  0, 10, 10,  7,  3,  0,  7, 10,  0,  5,  7, -1, -1, -1, -1],
    [10,  4,  0, 10,  0,  3,  3,  0,  9,  3,  9,  7, -1, -1, -1, -1],
    [ 3,  9,  7,  3, 10,  9, 10,  8,  9, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  8,  6, 11,  7,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  6,  2,  0,  4,  6, 11,  7,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  8,  6,  9,  5,  0,  3, 11,  7, -1, -1, -1, -1, -1, -1, -1],
    [11,  7,  3,  6,  5,  4,  6,  2,  5,  2,  9,  5, -1, -1, -1, -1],
    [ 3, 11,  7, 10,  4,  1,  2,  8,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  3, 11,  1,  2,  0,  1, 10,  2, 10,  6,  2, -1, -1, -1, -1],
    [ 1, 10,  4,  8,  6,  2,  9,  5,  0,  3, 11,  7, -1, -1, -1, -1],
    [ 3, 11,  7,  6,  2, 10,  2,  1, 10,  2,  9,  1,  9,  5,  1, -1],
    [ 1,  7,  3,  1,  5,  7,  8,  6,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  4,  6,  2,  0,  4,  3,  5,  7,  3,  1,  5, -1, -1, -1, -1],
    [ 6,  2,  8,  0,  3,  1,  0,  9,  3,  9,  7,  3, -1, -1, -1, -1],
    [ 4,  6,  9,  3,  1,  9,  1,  4,  9,  7,  3,  9,  6,  2,  9, -1],
    [ 8,  6,  2,  7,  4,  5,  7,  3,  4,  3, 10,  4, -1, -1, -1, -1],
    [ 5,  7, 10,  2,  0, 10,  0,  5, 10,  6,  2, 10,  7,  3, 10, -1],
    [ 2,  8,  6,  7,  3,  9,  3,  0,  9,  3, 10,  0, 10,  4,  0, -1],
    [ 2,  9,  6,  9, 10,  6,  9,  3, 10,  9,  7,  3, -1, -1, -1, -1],
    [ 3,  9,  2,  3, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  9,  2,  3, 11,  9,  4,  8,  0, -1, -1, -1, -1, -1, -1, -1],
    [11,  5,  0, 11,  0,  3,  3,  0,  2, -1, -1, -1, -1, -1, -1, -1],
    [ 5,  4, 11,  4,  8,  2, 11,  4,  2, 11,  2,  3, -1, -1, -1, -1],
    [ 9,  3, 11,  9,  2,  3,  4,  1, 10, -1, -1, -1, -1, -1, -1, -1],
    [ 0, 10,  8,  0,  1, 10,  2, 11,  9,  2,  3, 11, -1, -1, -1, -1],
    [ 4,  1, 10,  3,  0,  2,  3, 11,  0, 11,  5,  0, -1, -1, -1, -1],
    [ 2,  3,  5, 10,  8,  5,  8,  2,  5,  1, 10,  5,  3, 11,  5, -1],
    [ 5,  9,  2,  5,  2,  1,  1,  2,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  0,  4,  1,  2,  3,  1,  5,  2,  5,  9,  2, -1, -1, -1, -1],
    [ 0,  3,  1,  0,  2,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  1,  4,  8,  2,  1,  2,  3,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 3, 10,  4,  3,  4,  9,  9,  4,  5,  2,  3,  9, -1, -1, -1, -1],
    [10,  8,  5,  2,  3,  5,  3, 10,  5,  9,  2,  5,  8,  0,  5, -1],
    [ 4,  3, 10,  4,  0,  3,  0,  2,  3, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  3, 10,  2, 10,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  3, 11,  6, 11,  8,  8, 11,  9, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  3, 11,  6, 11,  0,  0, 11,  9,  4,  6,  0, -1, -1, -1, -1],
    [ 8,  6,  3,  8,  3,  0,  0,  3, 11,  0, 11,  5, -1, -1, -1, -1],
    [11,  6,  3, 11,  5,  6,  5,  4,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 1, 10,  4,  8, 11,  9,  8,  6, 11,  6,  3, 11, -1, -1, -1, -1],
    [ 0,  1,  6, 11,  9,  6,  9,  0,  6,  3, 11,  6,  1, 10,  6, -1],
    [ 1, 10,  4,  5,  0, 11,  0,  3, 11,  0,  8,  3,  8,  6,  3, -1],
    [10,  6,  1,  6,  5,  1,  6, 11,  5,  6,  3, 11, -1, -1, -1, -1],
    [ 9,  8,  5,  8,  6,  3,  5,  8,  3,  5,  3,  1, -1, -1, -1, -1],
    [ 3,  1,  9,  4,  6,  9,  6,  3,  9,  0,  4,  9,  1,  5,  9, -1],
    [ 6,  0,  8,  6,  3,  0,  3,  1,  0, -1, -1, -1, -1, -1, -1, -1],
    [ 3,  1,  4,  3,  4,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  8,  3,  4,  5,  3,  5,  9,  3, 10,  4,  3,  8,  6,  3, -1],
    [ 3, 10,  6,  0,  5,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6,  3,  8,  3,  0,  8,  3,  4,  0,  3, 10,  4, -1, -1, -1, -1],
    [ 3, 10,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6, 11,  7,  6, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11,  6, 10, 11,  7,  6,  0,  4,  8, -1, -1, -1, -1, -1, -1, -1],
    [ 6, 11,  7,  6, 10, 11,  0,  9,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  5,  4,  8,  9,  5, 10,  7,  6, 10, 11,  7, -1, -1, -1, -1],
    [ 1, 11,  7,  1,  7,  4,  4,  7,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  6,  8,  0, 11,  6, 11,  7,  6,  1, 11,  0, -1, -1, -1, -1],
    [ 9,  5,  0,  4,  7,  6,  4,  1,  7,  1, 11,  7, -1, -1, -1, -1],
    [ 8,  9,  1,  7,  6,  1,  6,  8,  1, 11,  7,  1,  9,  5,  1, -1],
    [10,  1,  5, 10,  5,  6,  6,  5,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  4,  8,  6,  5,  7,  6, 10,  5, 10,  1,  5, -1, -1, -1, -1],
    [ 7,  6,  9,  6, 10,  1,  9,  6,  1,  9,  1,  0, -1, -1, -1, -1],
    [ 7,  6,  1,  8,  9,  1,  9,  7,  1,  4,  8,  1,  6, 10,  1, -1],
    [ 4,  7,  6,  4,  5,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  6,  8,  0,  5,  6,  5,  7,  6, -1, -1, -1, -1, -1, -1, -1],
    [ 9,  4,  0,  9,  7,  4,  7,  6,  4, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  9,  7,  8,  7,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 7,  2,  8,  7,  8, 11, 11,  8, 10, -1, -1, -1, -1, -1, -1, -1],
    [11,  7, 10, 10,  0,  4,  7,  0, 10,  7,  2,  0, -1, -1, -1, -1],
    [ 0,  9,  5, 11,  8, 10, 11,  7,  8,  7,  2,  8, -1, -1, -1, -1],
    [10, 11,  2,  5,  4,  2,  4, 10,  2,  9,  5,  2, 11,  7,  2, -1],
    [ 4,  2,  8,  4,  1,  2,  1,  7,  2,  1, 11,  7, -1, -1, -1, -1],
    [ 7,  1, 11,  7,  2,  1,  2,  0,  1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  9,  5,  4,  1,  8,  1,  2,  8,  1, 11,  2, 11,  7,  2, -1],
    [ 5,  1,  9,  1,  2,  9,  1,  7,  2,  1, 11,  7, -1, -1, -1, -1],
    [ 8,  7,  2,  8,  1,  7,  1,  5,  7, 10,  1,  8, -1, -1, -1, -1],
    [ 2,  0, 10,  5,  7, 10,  7,  2, 10,  1,  5, 10,  0,  4, 10, -1],
    [ 1,  0,  7,  8, 10,  7, 10,  1,  7,  2,  8,  7,  0,  9,  7, -1],
    [ 1,  4, 10,  2,  9,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  7,  2,  8,  4,  7,  4,  5,  7, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  0,  5,  2,  5,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 8,  4,  2,  4,  7,  2,  4,  9,  7,  4,  0,  9, -1, -1, -1, -1],
    [ 9,  7,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  6, 10,  2, 10,  9,  9, 10, 11, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  8,  0,  9, 10, 11,  9,  2, 10,  2,  6, 10, -1, -1, -1, -1],
    [ 2,  6, 10,  2, 10,  5,  5, 10, 11,  0,  2,  5, -1, -1, -1, -1],
    [ 5,  4,  2, 10, 11,  2, 11,  5,  2,  6, 10,  2,  4,  8,  2, -1],
    [ 4,  1,  6,  6,  9,  2,  1,  9,  6,  1, 11,  9, -1, -1, -1, -1],
    [11,  9,  6,  0,  1,  6,  1, 11,  6,  8,  0,  6,  9,  2,  6, -1],
    [ 6,  4, 11,  0,  2, 11,  2,  6, 11,  5,  0, 11,  4,  1, 11, -1],
    [ 2,  6,  8,  1, 11,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 6, 10,  1,  6,  1,  2,  2,  1,  5,  2,  5,  9, -1, -1, -1, -1],
    [ 0,  4,  8,  9,  2,  5,  2,  1,  5,  2,  6,  1,  6, 10,  1, -1],
    [10,  2,  6, 10,  1,  2,  1,  0,  2, -1, -1, -1, -1, -1, -1, -1],
    [10,  1,  6,  1,  2,  6,  1,  8,  2,  1,  4,  8, -1, -1, -1, -1],
    [ 2,  5,  9,  2,  6,  5,  6,  4,  5, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  5,  8,  5,  6,  8,  5,  2,  6,  5,  9,  2, -1, -1, -1, -1],
    [ 0,  2,  6,  0,  6,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 2,  6,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 8, 10, 11,  8, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  9,  0,  4, 10,  9, 10, 11,  9, -1, -1, -1, -1, -1, -1, -1],
    [ 0, 11,  5,  0,  8, 11,  8, 10, 11, -1, -1, -1, -1, -1, -1, -1],
    [10, 11,  5, 10,  5,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  8,  4,  1, 11,  8, 11,  9,  8, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  1, 11,  0, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1, 11,  4, 11,  8,  4, 11,  0,  8, 11,  5,  0, -1, -1, -1, -1],
    [11,  5,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 5, 10,  1,  5,  9, 10,  9,  8, 10, -1, -1, -1, -1, -1, -1, -1],
    [ 4, 10,  0, 10,  9,  0, 10,  5,  9, 10,  1,  5, -1, -1, -1, -1],
    [ 1,  0,  8,  1,  8, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 1,  4, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 4,  5,  9,  4,  9,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 5,  9,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  8,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

/// Grid offsets of the two ends of each edge.
pub const VERTEX_ID: [[[u32; 3]; 2]; 12] = [
    [[0, 0, 0], [1, 0, 0]],
    [[0, 1, 0], [1, 1, 0]],
    [[0, 0, 1], [1, 0, 1]],
    [[0, 1, 1], [1, 1, 1]],
    [[0, 0, 0], [0, 1, 0]],
    [[1, 0, 0], [1, 1, 0]],
    [[0, 0, 1], [0, 1, 1]],
    [[1, 0, 1], [1, 1, 1]],
    [[0, 0, 0], [0, 0, 1]],
    [[1, 0, 0], [1, 0, 1]],
    [[0, 1, 0], [0, 1, 1]],
    [[1, 1, 0], [1, 1, 1]],
];

/// The two cell corners joined by each edge.
pub const CORNER_ID: [[usize; 2]; 12] = [
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// The table as a [`MarchingTable`] over cell corners.
pub static TABLE: MarchingTable<16> = MarchingTable::new(&TRIANGLE_ID, &CORNER_ID);
