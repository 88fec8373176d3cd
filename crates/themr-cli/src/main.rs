//! `themr` command-line tool: merges theme files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use themr::{ComposeMode, Theme, ThemeProvider, Themed, ThemrConfig, ThemrOptions, ThemrProps};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "themr", version, about = "Merge class-name theme files")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge theme files and print the result
    Merge(MergeArgs),
}

#[derive(Debug, clap::Args)]
struct MergeArgs {
    /// Theme files (JSON, or YAML with a .yaml/.yml extension)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// How the themes are combined: deeply, softly or off
    #[arg(short, long, default_value = "deeply", value_parser = parse_mode)]
    mode: ComposeMode,

    /// Treat the files as provider, local and prop themes of this component
    #[arg(short, long)]
    component: Option<String>,

    /// Keep only keys with this prefix from the prop theme
    #[arg(short, long, requires = "component")]
    namespace: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn parse_mode(value: &str) -> Result<ComposeMode, String> {
    value.parse().map_err(|err: themr::ThemeError| err.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Merge(args) => {
            let theme = merge_files(&args)?;
            render(&theme, args.format)
        }
    }
}

fn merge_files(args: &MergeArgs) -> Result<Theme> {
    let themes = args
        .files
        .iter()
        .map(|path| load_theme(path))
        .collect::<Result<Vec<_>>>()?;

    let Some(identifier) = &args.component else {
        tracing::debug!(files = themes.len(), mode = %args.mode, "folding theme files");
        return fold(&themes, args.mode);
    };

    let mut themes = themes.into_iter();
    let provider = ThemeProvider::new(themes.next().unwrap_or_default());
    let config = ThemrConfig::new(
        identifier.clone(),
        themes.next(),
        ThemrOptions::new().compose(args.mode),
    );
    let props = ThemrProps {
        theme: themes.next().map(Arc::new),
        compose: None,
        namespace: args.namespace.clone(),
    };
    if themes.next().is_some() {
        tracing::warn!("only the first three files are used with --component");
    }

    let themed = Themed::new(&config, Some(&provider), props)
        .with_context(|| format!("cannot compose theme for component '{}'", identifier))?;
    Ok(themed.theme().clone())
}

fn fold(themes: &[Theme], mode: ComposeMode) -> Result<Theme> {
    let theme = match mode {
        ComposeMode::Deeply => themr::merge_all(themes)?,
        ComposeMode::Softly => themes.iter().try_fold(Theme::new(), |acc, theme| {
            ComposeMode::Softly.compose(Some(&acc), None, Some(theme))
        })?,
        ComposeMode::Off => themes.last().cloned().unwrap_or_default(),
    };
    Ok(theme)
}

fn load_theme(path: &Path) -> Result<Theme> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read theme file {}", path.display()))?;
    let theme = if is_yaml(path) {
        Theme::from_yaml(&source)
    } else {
        Theme::from_json(&source)
    };
    theme.with_context(|| format!("cannot parse theme file {}", path.display()))
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}

fn render(theme: &Theme, format: Format) -> Result<String> {
    let output = match format {
        Format::Json => serde_json::to_string_pretty(theme)?,
        Format::Yaml => serde_yaml::to_string(theme)?,
    };
    Ok(output.trim_end().to_string())
}
