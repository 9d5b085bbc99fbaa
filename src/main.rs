use std::error::Error;
use std::fs;

use clap::{Parser, ValueEnum};
use dotscan::metrics::ClusterSummary;
use dotscan::pipeline;
use dotscan::{Bounds, Params, RunConfig, Surface, SvgSurface, TextSurface};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Text,
}

#[derive(Parser)]
#[command(name = "dotscan")]
#[command(about = "Scatter random points and cluster them with DBSCAN", long_about = None)]
struct Cli {
    /// Total number of points to generate
    #[arg(short, long, default_value = "100")]
    total: String,

    /// Neighborhood radius (strict distance threshold)
    #[arg(short, long, default_value = "20")]
    radius: String,

    /// Minimum neighbors, not counting the point itself, for a core point
    #[arg(short, long, default_value = "1")]
    min_neighbors: String,

    /// Canvas width
    #[arg(long, default_value_t = 1280)]
    width: i64,

    /// Canvas height
    #[arg(long, default_value_t = 720)]
    height: i64,

    /// Distance kept free along every canvas edge
    #[arg(long, default_value_t = 40)]
    offset: i64,

    /// Seed for a reproducible point set
    #[arg(long)]
    seed: Option<u64>,

    /// Outline every cluster with a bounding box
    #[arg(long)]
    boxes: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the drawing here instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn execute(cli: &Cli) -> dotscan::Result<()> {
    let params = Params::from_fields(&cli.total, &cli.radius, &cli.min_neighbors)?;
    let bounds = Bounds::new(cli.width, cli.height, cli.offset);

    let mut config = RunConfig::new(params).bounds(bounds).draw_boxes(cli.boxes);
    if let Some(seed) = cli.seed {
        config = config.seed(seed);
    }

    let (result, drawing) = match cli.format {
        Format::Svg => {
            let mut surface = SvgSurface::new(cli.width, cli.height);
            let result = pipeline::run(&config, &mut surface as &mut dyn Surface)?;
            (result, surface.to_svg())
        }
        Format::Text => {
            let cols = (cli.width / 16).max(1) as usize;
            let rows = (cli.height / 32).max(1) as usize;
            let mut surface = TextSurface::new(bounds, cols, rows);
            let result = pipeline::run(&config, &mut surface as &mut dyn Surface)?;
            (result, surface.render())
        }
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, drawing)?;
            log::info!("wrote {}", path);
        }
        None => print!("{}", drawing),
    }

    log::info!("{}", ClusterSummary::from_result(&result));
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(error) = execute(&cli) {
        log::error!("Error: {}", error);
        let mut current_source = error.source();
        while let Some(source) = current_source {
            log::error!("Caused by: {}", source);
            current_source = source.source();
        }
        std::process::exit(1);
    }
}
