//! Case tables for marching-style polygonization.
//!
//! Every table is indexed by a case bitmask over the cell's nodes (bit `i` set when
//! node `i` is above the isolevel) and lists the triangles of that case as triples of
//! cell-local edge indices, terminated by `-1`. `VERTEX_ID` maps each edge to its two
//! end nodes.
//!
//! Table triangles are wound so that their normal faces the below side. The isosurface
//! extractor re-orients emitted triangles against the field, so this only matters to
//! callers that walk the tables directly.

pub mod marching_cubes;
pub mod marching_hexahedra;
pub mod marching_prism;
pub mod marching_pyramid;
pub mod marching_tetrahedra;
pub mod quadratic_tetrahedra;

use std::slice::ChunksExact;

/// Uniform read access to a case table.
pub trait CaseTable: Sync {
    /// Returns the number of cases (`2^nodes`).
    fn number_of_cases(&self) -> usize;

    /// Returns the number of edges.
    fn number_of_edges(&self) -> usize;

    /// Returns the two nodes joined by `edge`.
    fn edge(&self, edge: usize) -> [usize; 2];

    /// Returns the raw row of `case`, including the `-1` padding.
    fn row(&self, case: usize) -> &[i8];

    /// Returns the triangles of `case` as edge-index triples.
    fn triangles(&self, case: usize) -> Triangles<'_> {
        Triangles {
            chunks: self.row(case).chunks_exact(3),
        }
    }

    /// Returns the number of nodes covered by the case bitmask.
    fn number_of_nodes(&self) -> usize {
        self.number_of_cases().trailing_zeros() as usize
    }
}

/// Iterator over the triangles of one case.
#[derive(Debug, Clone)]
pub struct Triangles<'a> {
    chunks: ChunksExact<'a, i8>,
}

impl Iterator for Triangles<'_> {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let t = self.chunks.next()?;
        if t[0] < 0 {
            return None;
        }
        #[allow(clippy::cast_sign_loss)]
        Some([t[0] as usize, t[1] as usize, t[2] as usize])
    }
}

/// A case table with rows of width `W`.
#[derive(Debug)]
pub struct MarchingTable<const W: usize> {
    triangle_id: &'static [[i8; W]],
    vertex_id: &'static [[usize; 2]],
}

impl<const W: usize> MarchingTable<W> {
    /// Wraps a triangle table and its edge list.
    pub const fn new(triangle_id: &'static [[i8; W]], vertex_id: &'static [[usize; 2]]) -> Self {
        Self {
            triangle_id,
            vertex_id,
        }
    }
}

impl<const W: usize> CaseTable for MarchingTable<W> {
    fn number_of_cases(&self) -> usize {
        self.triangle_id.len()
    }

    fn number_of_edges(&self) -> usize {
        self.vertex_id.len()
    }

    #[inline]
    fn edge(&self, edge: usize) -> [usize; 2] {
        self.vertex_id[edge]
    }

    #[inline]
    fn row(&self, case: usize) -> &[i8] {
        &self.triangle_id[case]
    }
}

/// Builds the case index from per-node values.
///
/// Bit `i` is set when `values[i]` is strictly greater than `isolevel`.
#[inline]
pub fn case_index(values: impl IntoIterator<Item = f32>, isolevel: f32) -> usize {
    values
        .into_iter()
        .enumerate()
        .fold(0, |case, (i, v)| case | (usize::from(v > isolevel) << i))
}

/// Returns the edges whose two end nodes fall on opposite sides in `case`.
pub fn crossed_edges(table: &dyn CaseTable, case: usize) -> Vec<usize> {
    (0..table.number_of_edges())
        .filter(|&e| {
            let [a, b] = table.edge(e);
            (case >> a) & 1 != (case >> b) & 1
        })
        .collect()
}
