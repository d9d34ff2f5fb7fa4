/// WF3D - Wireframe bitmap renderer
///
/// Renders the built-in hexahedron and octahedron to
/// `volume_hexahedron.bmp` and `volume_octahedron.bmp`.
/// Set `RUST_LOG=debug` for per-render details.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wf3d_cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    wf3d_cli::run(&cli)?;
    Ok(())
}
