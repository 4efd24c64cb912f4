//! # Triangle Cursor
//!
//! Walks the triangles of a [`RawMesh`] whether it is indexed or a plain
//! triangle soup.

use crate::mesh::RawMesh;

#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    Indexed(&'a [u32]),
    Sequential(usize),
}

/// Yields vertex indices three at a time.
///
/// For a sequential mesh the indices are `0, 1, 2, ...` up to the vertex
/// count. [`reset`](Self::reset) rewinds to the first triangle so the
/// same cursor can serve several passes.
#[derive(Debug, Clone)]
pub struct TriangleCursor<'a> {
    source: Source<'a>,
    position: usize,
}

impl<'a> TriangleCursor<'a> {
    /// Picks the right source for `mesh`.
    pub fn for_mesh(mesh: &'a RawMesh) -> Self {
        match mesh.indices() {
            Some(indices) => Self::indexed(indices),
            None => Self::sequential(mesh.vertex_count()),
        }
    }

    pub fn indexed(indices: &'a [u32]) -> Self {
        Self {
            source: Source::Indexed(indices),
            position: 0,
        }
    }

    pub fn sequential(vertex_count: usize) -> Self {
        Self {
            source: Source::Sequential(vertex_count),
            position: 0,
        }
    }

    /// Total number of corner indices.
    #[inline]
    pub fn len(&self) -> usize {
        match self.source {
            Source::Indexed(indices) => indices.len(),
            Source::Sequential(count) => count,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    /// Rewinds to the first triangle.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Returns the next corner index, or `None` when exhausted.
    pub fn next_index(&mut self) -> Option<u32> {
        if self.position >= self.len() {
            return None;
        }
        let index = match self.source {
            Source::Indexed(indices) => indices[self.position],
            Source::Sequential(_) => self.position as u32,
        };
        self.position += 1;
        Some(index)
    }
}

impl Iterator for TriangleCursor<'_> {
    type Item = [u32; 3];

    fn next(&mut self) -> Option<Self::Item> {
        // A trailing partial triangle is never yielded.
        if self.position + 3 > self.len() {
            self.position = self.len();
            return None;
        }
        Some([self.next_index()?, self.next_index()?, self.next_index()?])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len() - self.position.min(self.len())) / 3;
        (remaining, Some(remaining))
    }
}
