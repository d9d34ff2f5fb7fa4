/// Geometry primitives for wireframe rendering
use nalgebra::{Point2, Point3};

use crate::error::{Error, Result};

/// A vertex in object space
pub type Point3D = Point3<f32>;

/// A pixel coordinate; may fall outside the image
pub type Point2D = Point2<i32>;

/// A pair of indices into a vertex list
pub type Edge = (usize, usize);

/// A polyhedron described only by its vertices and the edges joining them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Point3D>,
    pub edges: Vec<Edge>,
}

impl Wireframe {
    pub fn new(vertices: Vec<Point3D>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) -> usize {
        self.vertices.push(Point3::new(x, y, z));
        self.vertices.len() - 1
    }

    pub fn add_edge(&mut self, a: usize, b: usize) {
        self.edges.push((a, b));
    }

    /// Check that every edge references an existing vertex.
    ///
    /// The renderer does not do this on its own; call it before rendering
    /// geometry that did not come from trusted code.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (edge, &(a, b)) in self.edges.iter().enumerate() {
            if a >= vertex_count || b >= vertex_count {
                return Err(Error::InvalidEdge {
                    edge,
                    a,
                    b,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Cube with corners at every combination of ±1
    pub fn hexahedron() -> Self {
        let vertices = vec![
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(-1.0, -1.0, 1.0),
            Point3::new(1.0, -1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, 1.0, 1.0),
        ];

        let edges = vec![
            // Back face
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            // Front face
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            // Connecting edges
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];

        Self::new(vertices, edges)
    }

    /// Regular octahedron with its vertices 1.2 units out along each axis
    pub fn octahedron() -> Self {
        let vertices = vec![
            Point3::new(1.2, 0.0, 0.0),
            Point3::new(-1.2, 0.0, 0.0),
            Point3::new(0.0, 1.2, 0.0),
            Point3::new(0.0, -1.2, 0.0),
            Point3::new(0.0, 0.0, 1.2),
            Point3::new(0.0, 0.0, -1.2),
        ];

        let edges = vec![
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 4),
            (4, 3),
            (3, 5),
            (5, 2),
        ];

        Self::new(vertices, edges)
    }
}
