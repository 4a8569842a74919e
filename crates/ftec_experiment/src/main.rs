//! `ftec` command line
//!
//! Runs the length sweep (default) or one trial on an explicit gate sequence,
//! writes the result files, and prints a text summary.

use anyhow::{Context, Result};
use clap::Parser;
use ftec_backend::Session;
use ftec_code::{parse_sequence, ParityCheck};
use ftec_experiment::{run_trial_with, ExperimentConfig, Reporter, Sweep};
use ftec_noise::NoiseModel;
use log::info;
use std::path::PathBuf;

/// Fault-tolerance check of a five-qubit error-detecting code
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON experiment configuration; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON noise model attached to the simulator
    #[arg(short, long)]
    noise: Option<PathBuf>,

    /// Sample without noise, ignoring any configured model
    #[arg(long, conflicts_with = "noise")]
    ideal: bool,

    /// Directory for Ts.txt, dpq.txt, dpr.txt, ratios.txt and summary.json
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Seed for gate sequences and sampling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Runs per circuit
    #[arg(short, long)]
    trials: Option<u64>,

    /// Trials averaged per sequence length
    #[arg(short, long)]
    repeats: Option<usize>,

    /// Sweep covers lengths 1..MAX_LENGTH
    #[arg(long)]
    max_length: Option<usize>,

    /// Use this many gates at every sweep point
    #[arg(long)]
    sequence_length: Option<usize>,

    /// Whole-readout parity rule: legacy or even
    #[arg(long)]
    parity_check: Option<ParityCheck>,

    /// Leave out the idle slots after each logical gate
    #[arg(long)]
    no_idle_noise: bool,

    /// Run a single trial on this sequence instead, e.g. "H, Z1, CZ, X0"
    #[arg(short, long)]
    gates: Option<String>,
}

impl Cli {
    /// Merge the configuration file with command-line overrides
    fn to_config(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ExperimentConfig::default(),
        };

        if let Some(path) = &self.noise {
            let noise = NoiseModel::from_file(path)
                .with_context(|| format!("loading noise model {}", path.display()))?;
            config = config.with_noise(noise);
        }
        if self.ideal {
            config.noise = None;
        }
        if let Some(dir) = &self.out {
            config = config.with_output_dir(dir);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(trials) = self.trials {
            config = config.with_trials(trials);
        }
        if let Some(repeats) = self.repeats {
            config = config.with_repeats(repeats);
        }
        if let Some(max_length) = self.max_length {
            config = config.with_max_length(max_length);
        }
        if let Some(length) = self.sequence_length {
            config = config.with_sequence_length(length);
        }
        if let Some(parity) = self.parity_check {
            config = config.with_parity_check(parity);
        }
        if self.no_idle_noise {
            config = config.with_idle_noise(false);
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn run_single(config: &ExperimentConfig, text: &str) -> Result<()> {
    let gates = parse_sequence(text).with_context(|| format!("parsing gates '{}'", text))?;
    let backend = config.to_backend();
    let mut session = Session::open(&backend);

    let trial = run_trial_with(&mut session, &gates, config.trial_options())?;
    let summary = session.close()?;

    println!("p = {}", trial.ideal);
    println!("q = {}", trial.unencoded);
    println!("r = {}", trial.encoded);
    println!("{}", trial);
    println!("{}", summary);
    if !trial.is_fault_tolerant() {
        println!("dpr > dpq: not fault tolerant");
    }
    Ok(())
}

fn run_sweep(config: ExperimentConfig) -> Result<()> {
    let out = config.output_dir.clone();
    let result = Sweep::new(config)?.run().context("sweep failed")?;

    let files = Reporter::write_all(&result, &out)
        .with_context(|| format!("writing results to {}", out.display()))?;
    for file in &files {
        info!("wrote {}", file.display());
    }

    print!("{}", Reporter::to_text(&result));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.to_config()?;

    match &cli.gates {
        Some(text) => run_single(&config, text),
        None => run_sweep(config),
    }
}
