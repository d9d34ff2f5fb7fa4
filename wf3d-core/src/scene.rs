/// Render driver: rotate, project and stroke every edge, then encode
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

use crate::bmp::{self, RowOrder};
use crate::error::{Error, Result};
use crate::geometry::{Edge, Point3D};
use crate::projection::Camera;
use crate::raster::{Canvas, Color};
use crate::transform::{Orientation, Transform};

/// Everything that stays fixed for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    pub camera: Camera,
    pub background: Color,
    pub stroke: Color,
    pub row_order: RowOrder,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_colors(mut self, background: Color, stroke: Color) -> Self {
        self.background = background;
        self.stroke = stroke;
        self
    }

    pub fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    /// Reject sizes that cannot be rendered or stored in a bitmap header
    pub fn validate(&self) -> Result<()> {
        let invalid = Error::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(invalid);
        }
        // Also catches sides beyond i32::MAX and files beyond 4 GiB
        bmp::BmpHeader::for_image(self.width, self.height).map(|_| ())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            orientation: Orientation::default(),
            camera: Camera::default(),
            background: Color::BACKGROUND,
            stroke: Color::STROKE,
            row_order: RowOrder::TopDown,
        }
    }
}

/// Draw every edge of a wireframe into a fresh canvas.
///
/// # Panics
///
/// Panics if an edge references a vertex index outside `vertices`. Use
/// [`Wireframe::validate`](crate::geometry::Wireframe::validate) on
/// untrusted input.
pub fn render(vertices: &[Point3D], edges: &[Edge], config: &RenderConfig) -> Canvas {
    debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        width = config.width,
        height = config.height,
        "rendering wireframe"
    );

    let mut canvas = Canvas::new(config.width, config.height, config.background);
    let rotation = Transform::rotation_matrix(&config.orientation);

    for &(a, b) in edges {
        let from = config
            .camera
            .project(&(rotation * vertices[a]), config.width, config.height);
        let to = config
            .camera
            .project(&(rotation * vertices[b]), config.width, config.height);

        trace!(a, b, ?from, ?to, "edge");
        canvas.draw_line(from, to, config.stroke);
    }

    canvas
}

/// Render and encode to any byte sink
pub fn render_to_writer<W: Write>(
    writer: &mut W,
    vertices: &[Point3D],
    edges: &[Edge],
    config: &RenderConfig,
) -> Result<()> {
    let canvas = render(vertices, edges, config);
    bmp::encode(
        writer,
        canvas.as_bytes(),
        canvas.width(),
        canvas.height(),
        config.row_order,
    )
}

/// Render and write a bitmap file at `path`
pub fn render_to_file<P: AsRef<Path>>(
    path: P,
    vertices: &[Point3D],
    edges: &[Edge],
    config: &RenderConfig,
) -> Result<()> {
    let canvas = render(vertices, edges, config);
    bmp::save(path, &canvas, config.row_order)
}
