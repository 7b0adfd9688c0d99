//! CLI implementation using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// omw-tools - Release downloads page renderer and named color exporter.
#[derive(Parser)]
#[command(name = "omw-tools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for listings and reports (config default if omitted)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render and check the release downloads page
    #[command(alias = "dl")]
    Downloads(DownloadsCommand),

    /// List and export named colors
    Colors(ColorsCommand),
}

#[derive(Args)]
pub struct DownloadsCommand {
    #[command(subcommand)]
    pub subcommand: DownloadsSubcommand,
}

#[derive(Subcommand)]
pub enum DownloadsSubcommand {
    /// Render the release catalog into the downloads page
    Render(DownloadsRenderArgs),

    /// Load the catalog and report malformed entries
    #[command(alias = "lint")]
    Check(DownloadsCheckArgs),
}

#[derive(Args)]
pub struct DownloadsRenderArgs {
    /// Release catalog (JSON, or TOML by extension)
    #[arg(long, default_value = "releases.json")]
    pub catalog: PathBuf,

    /// Host page containing the container element (built-in page if omitted)
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// Output HTML file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Id of the container element receiving the releases
    #[arg(long)]
    pub container: Option<String>,

    /// Minify the written page
    #[arg(long)]
    pub minify: bool,

    /// Also write a .html.gz companion (requires --output)
    #[arg(long)]
    pub gzip: bool,
}

#[derive(Args)]
pub struct DownloadsCheckArgs {
    /// Release catalog (JSON, or TOML by extension)
    #[arg(long, default_value = "releases.json")]
    pub catalog: PathBuf,

    /// Fail when the catalog contains malformed entries
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct ColorsCommand {
    #[command(subcommand)]
    pub subcommand: ColorsSubcommand,
}

#[derive(Subcommand)]
pub enum ColorsSubcommand {
    /// Print colors with their CSS values
    #[command(alias = "ls")]
    List(ColorsListArgs),

    /// Show one color by name (case-insensitive)
    Show(ColorsShowArgs),

    /// Write the C++ constants and the system colors CSV
    Export(ColorsExportArgs),

    /// Render an HTML swatch page
    Page(ColorsPageArgs),
}

#[derive(Args)]
pub struct ColorsListArgs {
    /// Which colors to list
    #[arg(short, long, value_enum, default_value = "all")]
    pub kind: ColorKindArg,
}

#[derive(Args)]
pub struct ColorsShowArgs {
    /// Color name, e.g. CornflowerBlue or highlight
    pub name: String,
}

#[derive(Args)]
pub struct ColorsExportArgs {
    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ColorsPageArgs {
    /// Output HTML file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorKindArg {
    Web,
    System,
    All,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_downloads_render_defaults() {
        let cli = Cli::try_parse_from(["omw-tools", "downloads", "render"]).unwrap();
        let Command::Downloads(cmd) = cli.command else {
            panic!("expected downloads command");
        };
        let DownloadsSubcommand::Render(args) = cmd.subcommand else {
            panic!("expected render subcommand");
        };
        assert_eq!(args.catalog, PathBuf::from("releases.json"));
        assert!(args.page.is_none());
        assert!(args.container.is_none());
        assert!(!args.minify);
    }

    #[test]
    fn test_downloads_render_args() {
        let cli = Cli::try_parse_from([
            "omw-tools",
            "dl",
            "render",
            "--catalog",
            "data.toml",
            "--page",
            "index.html",
            "-o",
            "out.html",
            "--container",
            "files",
            "--gzip",
        ])
        .unwrap();
        let Command::Downloads(cmd) = cli.command else {
            panic!("expected downloads command");
        };
        let DownloadsSubcommand::Render(args) = cmd.subcommand else {
            panic!("expected render subcommand");
        };
        assert_eq!(args.catalog, PathBuf::from("data.toml"));
        assert_eq!(args.page, Some(PathBuf::from("index.html")));
        assert_eq!(args.container.as_deref(), Some("files"));
        assert!(args.gzip);
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["omw-tools", "colors", "list", "-f", "json"]).unwrap();
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }

    #[test]
    fn test_colors_list_kind() {
        let cli = Cli::try_parse_from(["omw-tools", "colors", "ls", "--kind", "system"]).unwrap();
        let Command::Colors(cmd) = cli.command else {
            panic!("expected colors command");
        };
        assert!(matches!(
            cmd.subcommand,
            ColorsSubcommand::List(ColorsListArgs {
                kind: ColorKindArg::System
            })
        ));
    }

    #[test]
    fn test_colors_show_name() {
        let cli = Cli::try_parse_from(["omw-tools", "colors", "show", "AliceBlue"]).unwrap();
        let Command::Colors(cmd) = cli.command else {
            panic!("expected colors command");
        };
        let ColorsSubcommand::Show(args) = cmd.subcommand else {
            panic!("expected show subcommand");
        };
        assert_eq!(args.name, "AliceBlue");
    }

    #[test]
    fn test_check_strict() {
        let cli = Cli::try_parse_from(["omw-tools", "downloads", "lint", "--strict"]).unwrap();
        let Command::Downloads(cmd) = cli.command else {
            panic!("expected downloads command");
        };
        assert!(matches!(
            cmd.subcommand,
            DownloadsSubcommand::Check(DownloadsCheckArgs { strict: true, .. })
        ));
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["omw-tools"]).is_err());
    }
}
