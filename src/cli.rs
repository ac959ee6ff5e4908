// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{JobKind, Politeness, RunOptions};
use crate::core::HttpClient;
use crate::progress::Progress;
use crate::scrape;

#[derive(Debug, Parser)]
#[command(name = "hoops_scrape", version, about = "Resolve logos, colors and positions for the roster")]
pub struct Cli {
    #[command(subcommand)]
    pub job: Job,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Wait after each page load, in milliseconds
    #[arg(long, global = true)]
    pub settle_ms: Option<u64>,

    /// Minimum gap between two requests, in milliseconds
    #[arg(long, global = true)]
    pub spacing_ms: Option<u64>,

    /// Per-request timeout, in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Job {
    /// Team logos → PNG files plus a name → file mapping
    Logos {
        #[command(flatten)]
        io: IoArgs,
        /// Directory the PNGs are written to
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Player positions → name → position mapping
    Positions {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Team colors → schools manifest with colors and logo file names
    Colors {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Debug, Args)]
pub struct IoArgs {
    /// Canonical roster (JSON array of names or of records with `name`)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Output JSON file
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Alias configuration replacing the built-in tables
    #[arg(long)]
    pub aliases: Option<PathBuf>,
}

impl Cli {
    pub fn options(&self) -> RunOptions {
        let (kind, io, assets) = match &self.job {
            Job::Logos { io, assets } => (JobKind::Logos, io, assets.clone()),
            Job::Positions { io } => (JobKind::Positions, io, None),
            Job::Colors { io } => (JobKind::Colors, io, None),
        };

        let mut opts = RunOptions::new(kind);
        opts.input = io.input.clone();
        opts.aliases = io.aliases.clone();
        if let Some(out) = &io.out { opts.out = out.clone(); }
        if let Some(dir) = assets { opts.asset_dir = dir; }
        opts.politeness = self.politeness();
        opts
    }

    fn politeness(&self) -> Politeness {
        let mut p = Politeness::default();
        if let Some(ms) = self.settle_ms { p.settle = Duration::from_millis(ms); }
        if let Some(ms) = self.spacing_ms { p.spacing = Duration::from_millis(ms); }
        if let Some(s) = self.timeout_secs { p.timeout = Duration::from_secs(s); }
        p
    }
}

/// Prints one line per event, like the old scripts did.
#[derive(Default)]
pub struct ConsoleProgress {
    phase: String,
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, phase: &str, total: usize) {
        self.phase = s!(phase);
        self.done = 0;
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn step_done(&mut self, label: &str) {
        self.done += 1;
        println!("[{} {}/{}] {label}", self.phase, self.done, self.total);
    }
    fn resolved(&mut self, name: &str, value: &str) {
        println!("✅ {name} → {value}");
    }
    fn failed(&mut self, name: &str, reason: &str) {
        println!("⚠️ {name}: {reason}");
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.options();
    let client = HttpClient::new(opts.politeness.timeout).wrap_err("building HTTP client")?;
    let mut progress = ConsoleProgress::default();
    let job = opts.job.label();

    match opts.job {
        JobKind::Logos => {
            let res = scrape::collect_logos(&opts, &client, Some(&mut progress))
                .wrap_err_with(|| format!("{job} job failed"))?;
            print!("{res}");
        }
        JobKind::Positions => {
            let res = scrape::collect_positions(&opts, &client, Some(&mut progress))
                .wrap_err_with(|| format!("{job} job failed"))?;
            print!("{res}");
        }
        JobKind::Colors => {
            let manifest = scrape::collect_colors(&opts, &client, Some(&mut progress))
                .wrap_err_with(|| format!("{job} job failed"))?;
            println!("Colors for {} schools", manifest.schools.len());
        }
    }
    println!("Saved to {}", opts.out.display());
    Ok(())
}
