//! Demonstration entry point: builds a few vectors and points and prints
//! their debugging reports.

use clap::Parser;
use pathtracer::numerics::{NumericsError, Point2f, Vec2f};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "pathtracer", version, about = "Exercise the pathtracer vector and point types")]
struct Args {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "pathtracer=info")]
    log_level: String,

    /// Skip printing the multi-line reports
    #[arg(long)]
    no_report: bool,
}

fn setup_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<(), NumericsError> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let show = |label: &str, report: String| {
        info!("{label}");
        if !args.no_report {
            print!("{report}");
        }
    };

    let v1 = Vec2f::new([1.0, 1.0]);
    show("v1", v1.report());

    let v2 = Vec2f::from_slice(&[-1.2, -1.3])?;
    show("v2", v2.report());

    let negated = -v1;
    show("-v1", negated.report());

    let sum = v1 + v2;
    show("v1 + v2", sum.report());
    info!(length = sum.length(), length_squared = sum.length_squared(), "norm of v1 + v2");

    let origin = Point2f::zero();
    let moved = origin + sum;
    show("origin + (v1 + v2)", moved.report());
    info!(equal = moved.to_vector() == sum, "point converted back to a vector");

    if let Err(err) = Vec2f::from_slice(&[1.0, 2.0, 3.0]) {
        warn!(%err, "rejected construction");
    }
    if let Err(err) = v1.at(2) {
        warn!(%err, "rejected access");
    }

    Ok(())
}
