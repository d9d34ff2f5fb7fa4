/// Example: render a caller-supplied wireframe with the library API
///
/// Usage: cargo run --example tetrahedron -- [output.bmp]

use anyhow::Result;
use std::env;
use wf3d_core::{render_to_file, Orientation, RenderConfig, Wireframe};

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "tetrahedron.bmp".to_string());

    let mut shape = Wireframe::default();
    let apex = shape.add_vertex(0.0, 1.2, 0.0);
    let base = [
        shape.add_vertex(-1.0, -0.6, -0.6),
        shape.add_vertex(1.0, -0.6, -0.6),
        shape.add_vertex(0.0, -0.6, 1.1),
    ];
    for (i, &corner) in base.iter().enumerate() {
        shape.add_edge(apex, corner);
        shape.add_edge(corner, base[(i + 1) % base.len()]);
    }
    shape.validate()?;

    let config = RenderConfig::new(640, 480).with_orientation(Orientation::new(0.4, 0.3));
    render_to_file(&path, &shape.vertices, &shape.edges, &config)?;

    println!("Wrote {}", path);
    Ok(())
}
