//! End-cap detection demo.
//!
//! Builds a straight tube solid, scans it for its two planar end caps,
//! and logs what the host application would report: match count, circle
//! radii, and the cap axes.
//!
//! ```text
//! cargo run --example detect
//! ```

use tracing::info;

use tubecap::math::{Point3, Vector3};
use tubecap::operations::creation::MakeTube;
use tubecap::operations::query::DetectEndFaces;
use tubecap::topology::TopologyStore;

fn main() -> tubecap::Result<()> {
    // Default: INFO for everything, DEBUG for tubecap.
    // Override with the RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .add_directive("tubecap=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = TopologyStore::new();
    let solid = MakeTube::new(Point3::origin(), Vector3::z(), 25.0, 20.0, 100.0)
        .execute(&mut store)?;

    let matches = DetectEndFaces::new(solid).execute(&store)?;
    info!(found = matches.len(), "end face scan");

    for (i, m) in matches.iter().enumerate() {
        let axis = m.outer().axis();
        info!(
            cap = i,
            outer_radius = m.outer().radius(),
            inner_radius = m.inner().radius(),
            center = ?axis.origin(),
            direction = ?axis.direction(),
            "end cap"
        );
    }

    if let [start, end] = matches.as_slice() {
        let span = *end.outer().center() - *start.outer().center();
        info!(length = span.norm(), "start and end caps found");
    } else {
        info!("tube feature not present");
    }

    Ok(())
}
