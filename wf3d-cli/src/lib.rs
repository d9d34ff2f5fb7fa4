/// Command line front end that renders the built-in polyhedra to bitmaps
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use wf3d_core::{
    render_to_file, Camera, Orientation, RenderConfig, RowOrder, Wireframe, DEFAULT_FOCAL_LENGTH,
    DEFAULT_Z_OFFSET,
};

/// Which shapes to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    All,
    Hexahedron,
    Octahedron,
}

impl Shape {
    /// Output file name and geometry for every shape selected
    fn outputs(self) -> Vec<(&'static str, Wireframe)> {
        let hexahedron = ("volume_hexahedron.bmp", Wireframe::hexahedron());
        let octahedron = ("volume_octahedron.bmp", Wireframe::octahedron());

        match self {
            Shape::All => vec![hexahedron, octahedron],
            Shape::Hexahedron => vec![hexahedron],
            Shape::Octahedron => vec![octahedron],
        }
    }
}

/// Render wireframe polyhedra into 24-bit bitmap files
#[derive(Debug, Parser)]
#[command(name = "wf3d", version, about)]
pub struct Cli {
    /// Directory the bitmaps are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Shapes to render
    #[arg(short, long, value_enum, default_value_t = Shape::All)]
    pub shape: Shape,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Rotation about the vertical axis, in radians
    #[arg(long, default_value_t = 0.6, allow_negative_numbers = true)]
    pub yaw: f32,

    /// Rotation about the horizontal axis, in radians
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub pitch: f32,

    /// Camera focal length in pixels
    #[arg(long, default_value_t = DEFAULT_FOCAL_LENGTH)]
    pub focal_length: f32,

    /// Distance from the camera to the origin
    #[arg(long, default_value_t = DEFAULT_Z_OFFSET)]
    pub z_offset: f32,

    /// Store rows bottom-up, as most bitmap viewers expect
    #[arg(long)]
    pub bottom_up: bool,
}

impl Cli {
    pub fn config(&self) -> RenderConfig {
        let row_order = if self.bottom_up {
            RowOrder::BottomUp
        } else {
            RowOrder::TopDown
        };

        RenderConfig::new(self.width, self.height)
            .with_orientation(Orientation::new(self.yaw, self.pitch))
            .with_camera(Camera::new(self.focal_length, self.z_offset))
            .with_row_order(row_order)
    }
}

/// Render the selected shapes and return the paths written
pub fn run(cli: &Cli) -> Result<Vec<PathBuf>> {
    let config = cli.config();
    config.validate()?;

    let mut written = Vec::new();
    for (file_name, shape) in cli.shape.outputs() {
        shape
            .validate()
            .with_context(|| format!("built-in shape for {}", file_name))?;

        let path = cli.out_dir.join(file_name);
        render_to_file(&path, &shape.vertices, &shape.edges, &config)
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!("File {} created.", path.display());
        written.push(path);
    }

    Ok(written)
}
