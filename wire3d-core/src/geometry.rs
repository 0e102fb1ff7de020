/// Renderable objects and indexed line lists
use crate::math::Vec3;
use crate::transform::ObjectTransform;

/// How an index list is grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Pairs of indices, one segment each.
    Edges,
    /// Triples of indices, one triangle face each.
    Triangles,
}

impl Topology {
    pub fn group_size(self) -> usize {
        match self {
            Topology::Edges => 2,
            Topology::Triangles => 3,
        }
    }
}

fn check_indices(point_count: usize, indices: &[u32], topology: Topology) {
    let group = topology.group_size();
    assert!(
        indices.len() % group == 0,
        "{} indices do not form groups of {}",
        indices.len(),
        group
    );
    if let Some(bad) = indices.iter().find(|&&i| i as usize >= point_count) {
        panic!("index {} out of range for {} points", bad, point_count);
    }
}

/// Points plus indices describing edges or triangle faces
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedLineList {
    points: Vec<Vec3>,
    indices: Vec<u32>,
    topology: Topology,
}

impl IndexedLineList {
    /// # Panics
    ///
    /// If `indices` does not split evenly into groups for `topology`, or if
    /// any index is out of range for `points`.
    pub fn new(points: Vec<Vec3>, indices: Vec<u32>, topology: Topology) -> Self {
        check_indices(points.len(), &indices, topology);
        Self {
            points,
            indices,
            topology,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of index groups (segments or faces).
    pub fn len(&self) -> usize {
        self.indices.len() / self.topology.group_size()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Endpoint pairs, for edge lists.
    pub fn segments(&self) -> impl Iterator<Item = [&Vec3; 2]> + '_ {
        debug_assert_eq!(self.topology, Topology::Edges);
        self.indices
            .chunks_exact(2)
            .map(|pair| [&self.points[pair[0] as usize], &self.points[pair[1] as usize]])
    }

    /// Corner triples, for triangle lists.
    pub fn triangles(&self) -> impl Iterator<Item = [&Vec3; 3]> + '_ {
        debug_assert_eq!(self.topology, Topology::Triangles);
        self.indices.chunks_exact(3).map(|tri| {
            [
                &self.points[tri[0] as usize],
                &self.points[tri[1] as usize],
                &self.points[tri[2] as usize],
            ]
        })
    }
}

/// Cube corners, indexed as (-,-,+) (-,-,-) (-,+,+) (-,+,-) (+,-,+) (+,-,-) (+,+,+) (+,+,-).
const CUBE_CORNERS: [[f64; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];

#[rustfmt::skip]
const CUBE_EDGES: [u32; 24] = [
    0, 1,  1, 3,  3, 2,  2, 0,
    0, 4,  1, 5,  3, 7,  2, 6,
    4, 5,  5, 7,  7, 6,  6, 4,
];

// Each face is split along a diagonal that is always the third edge of
// both of its triangles.
#[rustfmt::skip]
const CUBE_FACES: [u32; 36] = [
    0, 2, 3,  3, 1, 0, // x-
    4, 5, 7,  7, 6, 4, // x+
    0, 1, 5,  5, 4, 0, // y-
    2, 6, 7,  7, 3, 2, // y+
    0, 4, 6,  6, 2, 0, // z+
    1, 3, 7,  7, 5, 1, // z-
];

/// A polyhedron with a fixed reference shape and mutable transform state
///
/// The base points never change after construction; every call to
/// [`RenderObject::lines`] or [`RenderObject::triangles`] produces a freshly
/// transformed copy.
#[derive(Debug, Clone)]
pub struct RenderObject {
    base_points: Vec<Vec3>,
    edges: Vec<u32>,
    faces: Vec<u32>,
    pub transform: ObjectTransform,
}

impl RenderObject {
    /// # Panics
    ///
    /// If `edges` or `faces` violate the [`IndexedLineList`] invariants.
    pub fn new(base_points: Vec<Vec3>, edges: Vec<u32>, faces: Vec<u32>) -> Self {
        check_indices(base_points.len(), &edges, Topology::Edges);
        check_indices(base_points.len(), &faces, Topology::Triangles);

        Self {
            base_points,
            edges,
            faces,
            transform: ObjectTransform::identity(),
        }
    }

    /// Axis-aligned cube of edge length `size` centered on the origin.
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let points = CUBE_CORNERS
            .iter()
            .map(|c| Vec3::new(c[0] * half, c[1] * half, c[2] * half))
            .collect();

        Self::new(points, CUBE_EDGES.to_vec(), CUBE_FACES.to_vec())
    }

    pub fn base_points(&self) -> &[Vec3] {
        &self.base_points
    }

    /// Base points pushed through the current transform.
    pub fn transformed_points(&self) -> Vec<Vec3> {
        self.transform.apply_all(&self.base_points)
    }

    pub fn lines(&self) -> IndexedLineList {
        IndexedLineList {
            points: self.transformed_points(),
            indices: self.edges.clone(),
            topology: Topology::Edges,
        }
    }

    pub fn triangles(&self) -> IndexedLineList {
        IndexedLineList {
            points: self.transformed_points(),
            indices: self.faces.clone(),
            topology: Topology::Triangles,
        }
    }

    pub fn indexed(&self, topology: Topology) -> IndexedLineList {
        match topology {
            Topology::Edges => self.lines(),
            Topology::Triangles => self.triangles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_topology() {
        let cube = RenderObject::cube(2.0);
        assert_eq!(cube.base_points().len(), 8);
        assert_eq!(cube.lines().len(), 12);
        assert_eq!(cube.triangles().len(), 12);
        assert!(cube
            .base_points()
            .iter()
            .all(|p| p.x.abs() == 1.0 && p.y.abs() == 1.0 && p.z.abs() == 1.0));
    }

    #[test]
    fn test_cube_edges_are_axis_aligned() {
        let cube = RenderObject::cube(25.0);
        for [a, b] in cube.lines().segments() {
            assert!(((a - b).norm() - 25.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cube_open_face_edges_skip_diagonals() {
        let cube = RenderObject::cube(2.0);
        for [a, b, c] in cube.triangles().triangles() {
            assert!(((a - b).norm() - 2.0).abs() < 1e-12);
            assert!(((b - c).norm() - 2.0).abs() < 1e-12);
            assert!(((c - a).norm() - 8.0f64.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_lines_do_not_mutate_base_points() {
        let mut cube = RenderObject::cube(2.0);
        let before = cube.base_points().to_vec();
        cube.transform.rotate_by(&Vec3::new(0.3, 0.2, 0.1));
        cube.transform.translate_by(&Vec3::new(5.0, 0.0, 0.0));

        let lines = cube.lines();
        assert_eq!(cube.base_points(), &before[..]);
        assert_ne!(lines.points(), &before[..]);
    }

    #[test]
    fn test_identity_transform_is_scale_plus_translation() {
        let mut cube = RenderObject::cube(2.0);
        cube.transform.set_scale(Vec3::new(2.0, 3.0, 4.0));
        cube.transform.set_translation(Vec3::new(1.0, 1.0, 1.0));

        let expected: Vec<Vec3> = cube
            .base_points()
            .iter()
            .map(|p| p.component_mul(&Vec3::new(2.0, 3.0, 4.0)) + Vec3::new(1.0, 1.0, 1.0))
            .collect();
        assert_eq!(cube.transformed_points(), expected);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        IndexedLineList::new(vec![Vec3::zeros(); 2], vec![0, 2], Topology::Edges);
    }

    #[test]
    #[should_panic(expected = "groups of 3")]
    fn test_partial_group_panics() {
        IndexedLineList::new(vec![Vec3::zeros(); 3], vec![0, 1, 2, 0], Topology::Triangles);
    }
}
