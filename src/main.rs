//! Command-line front end: expands a built-in curve and writes an image.

use clap::Parser;
use lindenmayer::interpreter::{PathInterpreter, TraceConfig};
use lindenmayer::presets::Curve;
use lindenmayer::render::{self, OutputFormat};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "lindenmayer", version)]
#[command(about = "Creates fractal curve images from L-Systems")]
struct Cli {
    /// Curve to generate: koch, levic or dragon
    curve: Curve,

    /// Number of rewriting iterations. WARNING: output size explodes with
    /// every iteration, start low
    iterations: u32,

    /// Output file name, without extension
    #[arg(long, default_value = "fractal")]
    out: String,

    /// Output format (svg or png)
    #[arg(long, default_value = "svg")]
    format: OutputFormat,

    /// Distance drawn per forward step
    #[arg(long, default_value = "10")]
    step_size: f32,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lindenmayer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let definition = cli.curve.definition();
    let symbols = definition.expand(cli.iterations);
    info!(
        "expanded {} to {} symbols after {} iterations",
        cli.curve,
        symbols.len(),
        cli.iterations
    );

    let interpreter = PathInterpreter::new(TraceConfig {
        step_size: cli.step_size,
    })
    .with_commands(definition.commands);
    let trace = interpreter.trace(&symbols);
    info!("traced {} points", trace.points.len());

    let output = format!("{}.{}", cli.out, cli.format.extension());
    let result = match cli.format {
        OutputFormat::Svg => render::write_svg(&trace, &output),
        OutputFormat::Png => render::write_png(&trace, &output),
    };

    if let Err(e) = result {
        error!("failed to write {}: {}", output, e);
        std::process::exit(1);
    }

    info!("wrote {}", output);
}
