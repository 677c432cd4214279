use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cloudquiz::{config::Config, quiz_builder};

/// Build quiz_data.json from a service list and a scanned icon tree.
#[derive(Parser)]
#[command(name = "quiz_data")]
struct Args {
    /// Project root containing the img/ and quiz/ directories
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Image directory to scan (defaults to <base-dir>/img)
    #[arg(long)]
    img_dir: Option<PathBuf>,

    /// Service list JSON (defaults to quiz/aws.json, then data/aws.json)
    #[arg(long)]
    services: Option<PathBuf>,

    /// Output file (defaults to <base-dir>/quiz/quiz_data.json)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(base_dir) = args.base_dir {
        config.base_dir = base_dir;
    }
    if args.img_dir.is_some() {
        config.img_dir = args.img_dir;
    }
    if args.services.is_some() {
        config.services_file = args.services;
    }
    if args.output.is_some() {
        config.output_file = args.output;
    }

    let summary = quiz_builder::build_quiz_data(&config)?;

    println!(
        "Built {} ({} services, {} images scanned)",
        summary.output_file.display(),
        summary.services,
        summary.images
    );
    if summary.icon.is_none() {
        println!("Warning: no app icon was copied");
    }
    Ok(())
}
