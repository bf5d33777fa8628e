//! Projection demo: prints a few closest-point queries and an ASCII map of
//! the signed distance field around one curve segment.
//!
//! Usage:
//! ```text
//! cargo run --example project                  # conservative policy
//! cargo run --example project -- threshold     # threshold policy
//! RUST_LOG=bezier_sdf=debug cargo run --example project
//! ```

use bezier_sdf::geometry::QuadraticCurve;
use bezier_sdf::interface::{BezierSdfNode, SocketValue, OUTPUT_SOCKETS};
use bezier_sdf::math::Point3;
use bezier_sdf::operations::query::{ProjectField, ProjectionParams, SegmentPolicy};

const COLUMNS: i32 = 64;
const ROWS: i32 = 24;

fn main() -> bezier_sdf::Result<()> {
    // Default: WARN for everything, INFO for bezier_sdf.
    // Override with RUST_LOG env var (e.g. RUST_LOG=bezier_sdf=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("bezier_sdf=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let policy = match std::env::args().nth(1).as_deref() {
        Some("threshold") => SegmentPolicy::Threshold,
        _ => SegmentPolicy::Conservative,
    };
    let params = ProjectionParams {
        policy,
        ..ProjectionParams::default()
    };

    let mut node = BezierSdfNode::new().with_params(params);
    node.set_input("P0", SocketValue::Point(Point3::new(0.0, 0.0, 0.0)))?;
    node.set_input("P1", SocketValue::Point(Point3::new(1.0, 1.0, 0.0)))?;
    node.set_input("P2", SocketValue::Point(Point3::new(2.0, 0.0, 0.0)))?;

    for query in [
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
    ] {
        node.set_input("Vector", SocketValue::Point(query))?;
        let outputs = node.evaluate();
        println!("query ({:.2}, {:.2}, {:.2})", query.x, query.y, query.z);
        for spec in &OUTPUT_SOCKETS {
            println!("  {:<16} {:?}", spec.name, outputs.get(spec.name)?);
        }
    }

    let curve = QuadraticCurve::new(*node.control_points());
    print_field(&curve, params);
    Ok(())
}

/// Renders the sign of the distance field, with `#` marking samples within
/// one cell of the curve.
fn print_field(curve: &QuadraticCurve, params: ProjectionParams) {
    let (x0, x1, y0, y1) = (-0.5, 2.5, -0.75, 1.25);
    let dx = (x1 - x0) / f64::from(COLUMNS);
    let dy = (y1 - y0) / f64::from(ROWS);
    let points: Vec<Point3> = (0..ROWS)
        .rev()
        .flat_map(|j| {
            let y = y0 + f64::from(j) * dy;
            (0..COLUMNS).map(move |i| Point3::new(x0 + f64::from(i) * dx, y, 0.0))
        })
        .collect();

    let field = ProjectField::new(curve, &points).with_params(params).signed_distances();
    for row in field.chunks(usize::try_from(COLUMNS).unwrap_or(1)) {
        let line: String = row
            .iter()
            .map(|&d| {
                if d.abs() < dy {
                    '#'
                } else if d < 0.0 {
                    '-'
                } else {
                    '+'
                }
            })
            .collect();
        println!("{line}");
    }
}

