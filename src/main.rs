//! omw-tools CLI - Downloads page renderer and named color exporter.

use std::fs;
use std::io::{stdout, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use omw_tools::cli::{
    Cli, ColorKindArg, ColorsSubcommand, Command, DownloadsCheckArgs, DownloadsRenderArgs,
    DownloadsSubcommand, OutputFormat,
};
use omw_tools::colors::{
    rows, write_exports, write_swatches, ColorRow, ColorSelection, ColorTable, SwatchPage,
};
use omw_tools::config::{self, Config};
use omw_tools::downloads::{Diagnostic, PageRenderer, ReleaseCatalog, ReleaseSummary};
use omw_tools::output::Format;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_default(".")?,
    };

    let format = match cli.format {
        Some(OutputFormat::Json) => Format::Json,
        Some(OutputFormat::Markdown) => Format::Markdown,
        Some(OutputFormat::Text) => Format::Text,
        None => match config.output.format {
            config::OutputFormat::Json => Format::Json,
            config::OutputFormat::Markdown => Format::Markdown,
            config::OutputFormat::Text => Format::Text,
        },
    };

    match cli.command {
        Command::Downloads(cmd) => match cmd.subcommand {
            DownloadsSubcommand::Render(args) => render_downloads(args, &config),
            DownloadsSubcommand::Check(args) => check_downloads(args, format),
        },
        Command::Colors(cmd) => {
            let table = ColorTable::with_system_overrides(&config.colors.system)
                .context("invalid [colors.system] override")?;
            match cmd.subcommand {
                ColorsSubcommand::List(args) => {
                    let selection = match args.kind {
                        ColorKindArg::Web => ColorSelection::Web,
                        ColorKindArg::System => ColorSelection::System,
                        ColorKindArg::All => ColorSelection::All,
                    };
                    let colors = table.select(selection);
                    match format {
                        Format::Text => write_swatches(&colors, &mut stdout(), config.output.color)?,
                        _ => format.format(&rows(&colors), &mut stdout())?,
                    }
                }
                ColorsSubcommand::Show(args) => {
                    let color = table
                        .find(&args.name)
                        .with_context(|| format!("unknown color: {}", args.name))?;
                    match format {
                        Format::Text => write_swatches(&[*color], &mut stdout(), config.output.color)?,
                        _ => format.format(&ColorRow::from(color), &mut stdout())?,
                    }
                }
                ColorsSubcommand::Export(args) => {
                    let mut colors_config = config.colors.clone();
                    if let Some(dir) = args.out_dir {
                        colors_config.out_dir = dir;
                    }
                    let (cpp, csv) = write_exports(&table, &colors_config)?;
                    println!("{}", cpp.display());
                    println!("{}", csv.display());
                }
                ColorsSubcommand::Page(args) => {
                    let html = SwatchPage::new()?.render(&table)?;
                    match args.output {
                        Some(path) => {
                            fs::write(&path, html)
                                .with_context(|| format!("failed to write {}", path.display()))?;
                            info!(path = %path.display(), "wrote swatch page");
                        }
                        None => stdout().write_all(html.as_bytes())?,
                    }
                }
            }
            Ok(())
        }
    }
}

fn render_downloads(args: DownloadsRenderArgs, config: &Config) -> anyhow::Result<()> {
    if args.gzip && args.output.is_none() {
        bail!("--gzip requires --output");
    }
    let mut downloads = config.downloads.clone();
    if let Some(id) = args.container {
        downloads.container_id = id;
    }
    downloads.minify |= args.minify;
    downloads.gzip |= args.gzip;

    // The page is only touched once the catalog has loaded.
    let catalog = ReleaseCatalog::load(&args.catalog)
        .with_context(|| format!("failed to load catalog {}", args.catalog.display()))?;
    let host = args
        .page
        .as_ref()
        .map(fs::read_to_string)
        .transpose()
        .context("failed to read host page")?;

    let renderer = PageRenderer::new()?;
    let bytes = renderer.render_page(&catalog, host.as_deref(), &downloads)?;

    match args.output {
        Some(path) => PageRenderer::write_page(&bytes, &path, downloads.gzip)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            if downloads.gzip {
                warn!("gzip companion skipped when writing to stdout");
            }
            stdout().write_all(&bytes)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CheckReport {
    catalog: String,
    releases: Vec<ReleaseSummary>,
    malformed: Vec<Diagnostic>,
}

fn check_downloads(args: DownloadsCheckArgs, format: Format) -> anyhow::Result<()> {
    let catalog = ReleaseCatalog::load(&args.catalog)
        .with_context(|| format!("failed to load catalog {}", args.catalog.display()))?;
    let report = CheckReport {
        catalog: args.catalog.display().to_string(),
        releases: catalog.summaries(),
        malformed: catalog.diagnostics(),
    };
    format.format(&report, &mut stdout())?;

    if args.strict && !report.malformed.is_empty() {
        bail!("{} malformed catalog entries", report.malformed.len());
    }
    Ok(())
}
