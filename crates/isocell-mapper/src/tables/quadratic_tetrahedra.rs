//! Sub-cell decomposition of the 10-node tetrahedron.
//!
//! The four corner sub-tetrahedra and the four pieces of the inner octahedron (split
//! along the diagonal between nodes 6 and 7) tile the reference cell. Each sub-cell is
//! polygonized with the [`marching_tetrahedra`](super::marching_tetrahedra) table, and
//! the same eight sub-cells provide the sample points of the volume rule.

/// Node indices of the eight linear sub-tetrahedra.
pub const SUBCELLS: [[usize; 4]; 8] = [
    [0, 4, 5, 6],
    [4, 1, 7, 9],
    [5, 7, 2, 8],
    [6, 9, 8, 3],
    [4, 7, 5, 6],
    [4, 9, 7, 6],
    [8, 6, 5, 7],
    [8, 7, 9, 6],
];

/// The two corner nodes each mid-edge node sits between, for nodes 4 through 9.
pub const MIDPOINT_OF: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [2, 3], [1, 3]];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_node_is_used() {
        let mut seen = [false; 10];
        for cell in &SUBCELLS {
            for &n in cell {
                seen[n] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_corners_appear_once() {
        for corner in 0..4 {
            let count = SUBCELLS.iter().filter(|c| c.contains(&corner)).count();
            assert_eq!(count, 1, "corner {corner}");
        }
    }

    #[test]
    fn test_subcells_have_distinct_nodes() {
        for cell in &SUBCELLS {
            for i in 0..4 {
                for j in i + 1..4 {
                    assert_ne!(cell[i], cell[j]);
                }
            }
        }
    }
}
