use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use heapmap_core::SubHeap;
use heapmap_layout::ViewConfig;
use tracing_subscriber::EnvFilter;

use crate::error::{HeapmapError, Result};
use crate::render::{RenderOptions, SnapshotReport, render};

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "HEAPMAP_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "heapmap",
    about = "Render GC heap snapshots into segment geometry and transition plans",
    version
)]
pub struct Cli {
    /// Snapshot files (JSON array of sub-heaps), applied in order. Reads one
    /// snapshot from stdin when omitted.
    pub snapshots: Vec<PathBuf>,

    /// View configuration file (.toml or .json). Defaults to the environment.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Scale widths by segment size instead of using buckets.
    #[arg(long)]
    pub real_size: bool,

    /// Include reserved memory in real-size widths and fill ratios.
    #[arg(long)]
    pub show_reserved: bool,

    /// Finish all animations between snapshots.
    #[arg(long)]
    pub settle: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Log filter when HEAPMAP_LOG is unset.
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    pub log: String,
}

impl Cli {
    /// Resolve the view configuration: file or environment, then flags.
    pub fn view_config(&self) -> Result<ViewConfig> {
        let base = match &self.config {
            Some(path) if has_config_extension(path) => ViewConfig::from_file(path)?,
            Some(path) => {
                return Err(HeapmapError::invalid(format!(
                    "config file must end in .toml or .json: {}",
                    path.display()
                )));
            }
            None => ViewConfig::from_env(),
        };
        Ok(base
            .with_real_size(base.real_size || self.real_size)
            .with_show_reserved_memory(base.show_reserved_memory || self.show_reserved))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            settle: self.settle,
        }
    }
}

fn has_config_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml") || ext.eq_ignore_ascii_case("json"))
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.view_config()?;
    tracing::debug!(
        real_size = config.real_size,
        show_reserved_memory = config.show_reserved_memory,
        "view config resolved"
    );

    let snapshots = if cli.snapshots.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        vec![parse_snapshot(&input, Path::new("<stdin>"))?]
    } else {
        cli.snapshots
            .iter()
            .map(|path| read_snapshot(path))
            .collect::<Result<Vec<_>>>()?
    };

    let reports = render(&snapshots, config, cli.render_options())?;
    write_reports(&mut io::stdout().lock(), &reports, cli.pretty)
}

/// Install a stderr subscriber. A subscriber installed earlier wins.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn read_snapshot(path: &Path) -> Result<Vec<SubHeap>> {
    let input = fs::read_to_string(path)?;
    parse_snapshot(&input, path)
}

pub fn parse_snapshot(input: &str, path: &Path) -> Result<Vec<SubHeap>> {
    serde_json::from_str(input).map_err(|source| HeapmapError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_reports(out: &mut impl Write, reports: &[SnapshotReport], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, reports)?;
    } else {
        serde_json::to_writer(&mut *out, reports)?;
    }
    writeln!(out)?;
    Ok(())
}
