use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cloudquiz::{config::Config, gallery};

/// Write a static HTML page showing a few randomly chosen images.
#[derive(Parser)]
#[command(name = "random_gallery")]
struct Args {
    /// Image directory to scan (defaults to <base-dir>/img)
    #[arg(long)]
    img_dir: Option<PathBuf>,

    /// How many images to sample
    #[arg(long, short = 'n', default_value_t = gallery::DEFAULT_SAMPLE_COUNT)]
    count: usize,
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if args.img_dir.is_some() {
        config.img_dir = args.img_dir;
    }

    match gallery::build_gallery(&config.img_dir(), args.count)? {
        Some(output) => println!("HTML generated: {}", output.display()),
        None => println!("No images found."),
    }
    Ok(())
}
