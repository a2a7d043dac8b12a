use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use log::debug;
use mst::{DotOptions, Graph, ParseOptions, WEIGHT, read_graph_with};

/// Find the MST of the given graph using Kruskal's or Prim's algorithm
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(group(ArgGroup::new("algorithm").required(true).args(["kruskal", "prim"])))]
struct Options {
    /// Input file: start vertex on the first line, then the weight matrix
    #[arg(short, long)]
    input: PathBuf,

    /// Output file name prefix
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    /// Find the MST using Kruskal's algorithm
    #[arg(short, long)]
    kruskal: bool,

    /// Find the MST using Prim's algorithm
    #[arg(short, long)]
    prim: bool,

    /// Matrix value meaning "no edge"
    #[arg(long, allow_hyphen_values = true)]
    absent_weight: Option<i64>,

    /// Also render the DOT source with Graphviz `dot` into this format (pdf, png, svg, ...)
    #[arg(short, long)]
    format: Option<String>,

    /// Open the output after generation
    #[arg(short, long)]
    view: bool,
}

fn with_extension(prefix: &Path, ext: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn run_dot(source: &Path, format: &str, target: &Path) -> Result<()> {
    let status = Command::new("dot")
        .arg(format!("-T{}", format))
        .arg(source)
        .arg("-o")
        .arg(target)
        .status()
        .context("failed to run Graphviz `dot`")?;
    if !status.success() {
        bail!("`dot` exited with {}", status);
    }
    Ok(())
}

fn open_viewer(path: &Path) -> Result<()> {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };
    Command::new(opener)
        .arg(path)
        .spawn()
        .with_context(|| format!("failed to launch `{}`", opener))?;
    Ok(())
}

fn main() -> Result<()> {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let options = Options::parse();
    debug!("options: {:?}", options);

    let parse_options = ParseOptions {
        absent_weight: options.absent_weight,
    };
    let (start, graph) = read_graph_with(&options.input, parse_options)
        .with_context(|| format!("cannot load graph from {}", options.input.display()))?;
    println!("Starting vertex is {}", start);

    let (tree, source): (Graph, _) = if options.kruskal {
        println!("Starting Kruskal algorithm on graph . . .");
        (graph.kruskal()?, None)
    } else {
        println!("Starting Prim algorithm on graph . . .");
        (graph.prim(start)?, Some(start))
    };
    println!("Total weight: {}", tree.total_weight()?);

    let dot = tree.to_dot(&DotOptions {
        edge_label: Some(WEIGHT.to_string()),
        source,
        ..Default::default()
    });
    let gv_path = with_extension(&options.output, "gv");
    fs::write(&gv_path, dot).with_context(|| format!("cannot write {}", gv_path.display()))?;

    let produced = match &options.format {
        Some(format) => {
            let target = with_extension(&options.output, format);
            run_dot(&gv_path, format, &target)?;
            target
        }
        None => gv_path,
    };
    println!("Output successfully generated at: {}", produced.display());

    if options.view {
        open_viewer(&produced)?;
    }
    Ok(())
}
