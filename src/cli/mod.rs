// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
//
//   1. `extract` - metadata XML → CSV files
//   2. `prepare` - dataset CSV → vocabulary + batch loaders
//
// This is the only layer that prints to stdout.

pub mod commands;

use anyhow::Result;
use burn::prelude::Backend;
use clap::Parser;
use commands::{Commands, DeviceKind, ExtractArgs, PrepareArgs};

use crate::application::{
    extract_use_case::ExtractUseCase,
    prepare_use_case::{PrepareConfig, PrepareUseCase},
};

#[derive(Parser, Debug)]
#[command(
    name = "news-bias-data",
    version,
    about = "Extract AllSides metadata and prepare news-bias datasets for training."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args) => run_extract(args),
            Commands::Prepare(args) => run_prepare(args),
        }
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    tracing::info!("Extracting metadata from '{}'", args.xml.display());

    let report = ExtractUseCase::new(args.into()).execute()?;

    println!("======================== event check ========================");
    println!("event count: {}", report.columns.len());
    println!("event types: {}", report.tally.distinct());
    println!("=============================================================");
    for (event, count) in report.tally.entries() {
        println!("{:>6}  {}", count, event);
    }
    for f in &report.files {
        println!("wrote {}", f.display());
    }
    Ok(())
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    let device = args.device;
    let config: PrepareConfig = args.into();

    match device {
        DeviceKind::Cpu => {
            let dev = burn::backend::ndarray::NdArrayDevice::Cpu;
            prepare_on::<burn::backend::NdArray>(config, &dev)
        }
        DeviceKind::Wgpu => {
            let dev = burn::backend::wgpu::WgpuDevice::default();
            prepare_on::<burn::backend::Wgpu>(config, &dev)
        }
    }
}

fn prepare_on<B: Backend>(config: PrepareConfig, device: &B::Device) -> Result<()> {
    tracing::info!("Using device: {:?}", device);
    let output_dir = config.output_dir.clone();

    let (_bundle, manifest, counts) = PrepareUseCase::new(config).execute::<B>(device)?;

    println!("  - Training data size:   {}", manifest.splits.train);
    println!("  - Validation data size: {}", manifest.splits.valid);
    println!("  - Test data size:       {}", manifest.splits.test);
    println!("  - Vocabulary size:      {}", manifest.vocab_size);
    println!("  - Classes:              {}", manifest.num_class);
    println!(
        "  - Batches (train/valid/test): {}/{}/{}",
        counts.train, counts.valid, counts.test
    );
    for k in &manifest.knowledge {
        println!(
            "  - Knowledge {:<6}: {} entities, {} unique, {:.1}% in vocabulary",
            k.name,
            k.entities,
            k.unique,
            k.coverage * 100.0
        );
    }
    println!("Saved tokenizer.json and manifest.json to '{}'", output_dir.display());
    Ok(())
}
