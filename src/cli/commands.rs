// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `extract` and `prepare`, and all
// their flags. Defaults match the layout of the research data
// directory (data/, kgraphs/pre-trained/).
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::{
    extract_use_case::ExtractConfig,
    prepare_use_case::{LoaderConfig, PrepareConfig},
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the AllSides metadata XML into per-field CSV files
    Extract(ExtractArgs),

    /// Build vocabulary, knowledge indices, and batch loaders for a dataset
    Prepare(PrepareArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Metadata XML with <article> elements
    #[arg(long, default_value = "data/allsides_metadata.xml")]
    pub xml: PathBuf,

    /// Directory the CSV files are written to
    #[arg(long, default_value = "data")]
    pub output_dir: PathBuf,
}

impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            xml_path:   a.xml,
            output_dir: a.output_dir,
        }
    }
}

/// Where the batch tensors are placed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceKind {
    /// NdArray backend on the CPU
    Cpu,
    /// WGPU backend on the default GPU adapter
    Wgpu,
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Dataset identifier: ALLSIDES or SEMEVAL
    #[arg(long, default_value = "ALLSIDES")]
    pub dataset: String,

    /// Directory containing khan_dataset.csv / semeval.csv
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory containing entities_con.dict, entities_lib.dict, entities_yago.dict
    #[arg(long, default_value = "kgraphs/pre-trained")]
    pub kg_dir: PathBuf,

    /// Rows per training batch
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Rows per validation/test batch
    #[arg(long, default_value_t = 32)]
    pub eval_batch_size: usize,

    /// Token length every title and text is padded/truncated to
    #[arg(long, default_value_t = 512)]
    pub max_len: usize,

    /// Share of the training partition held out for validation
    #[arg(long, default_value_t = 0.0)]
    pub val_fraction: f64,

    /// Seed for shuffling the training loader
    #[arg(long, default_value_t = 42)]
    pub shuffle_seed: u64,

    /// Seed for the train/test split (random when omitted)
    #[arg(long)]
    pub split_seed: Option<u64>,

    /// Directory for tokenizer.json and manifest.json
    #[arg(long, default_value = "prepared")]
    pub output_dir: PathBuf,

    /// Compute device for the batch tensors
    #[arg(long, value_enum, default_value_t = DeviceKind::Cpu)]
    pub device: DeviceKind,
}

impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            loader: LoaderConfig {
                dataset:         a.dataset,
                data_dir:        a.data_dir,
                kg_dir:          a.kg_dir,
                batch_size:      a.batch_size,
                eval_batch_size: a.eval_batch_size,
                max_len:         a.max_len,
                val_fraction:    a.val_fraction,
                shuffle_seed:    a.shuffle_seed,
                split_seed:      a.split_seed,
            },
            output_dir: a.output_dir,
        }
    }
}
