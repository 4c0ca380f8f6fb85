use clap::{Parser, ValueEnum};
use issue_graph_layout::highlight::Highlight;
use issue_graph_layout::input::GraphInput;
use issue_graph_layout::layout::{LayoutConfig, LayoutEngine};
use issue_graph_layout::svg::SvgRenderer;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Svg,
}

/// Lay out an issue dependency graph.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with `issues` and `relations`
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// JSON file overriding the layout geometry
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Highlight the relations of this issue key (svg only)
    #[arg(long)]
    highlight: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let source = fs::read_to_string(&cli.input)
        .map_err(|e| format!("Failed to read {}: {}", cli.input.display(), e))?;
    let input = GraphInput::from_json(&source).map_err(|e| e.to_string())?;

    let config = match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            LayoutConfig::from_json(&source).map_err(|e| format!("Invalid config: {}", e))?
        }
        None => LayoutConfig::default(),
    };
    debug!(?config, issues = input.issues.len(), relations = input.relations.len(), "input loaded");

    let layout = LayoutEngine::new(config)
        .run(&input.issues, &input.relations)
        .map_err(|e| e.to_string())?;

    let rendered = match cli.format {
        Format::Json => serde_json::to_string_pretty(&layout).map_err(|e| e.to_string())?,
        Format::Svg => {
            let highlight = cli
                .highlight
                .as_deref()
                .map(|key| Highlight::related_to(key, &input.relations))
                .unwrap_or_default();
            SvgRenderer::default()
                .render(&layout, &highlight)
                .map_err(|e| e.to_string())?
        }
    };

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e)),
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}
