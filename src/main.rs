// ScanShelf - main.rs
//
// Command-line shell over the catalog library. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Listing (table / CSV / JSON) and bulk delete

use clap::{Parser, Subcommand, ValueEnum};
use scanshelf::app::catalog::{Catalog, CatalogSettings, ViewRequest};
use scanshelf::app::delete::shared_token_authorizer;
use scanshelf::app::notify::StdoutNotifier;
use scanshelf::core::columns::Column;
use scanshelf::core::model::{BulkDeleteRequest, Page, SortSpec};
use scanshelf::core::export;
use scanshelf::platform::config::{self, PlatformPaths};
use scanshelf::util::{self, constants};
use std::io::Write;
use std::path::PathBuf;

/// ScanShelf - browse and curate performance-profile scans.
#[derive(Parser, Debug)]
#[command(name = "scanshelf", version, about)]
struct Cli {
    /// Directory holding the profile artifacts (overrides config).
    #[arg(short = 'p', long = "profiles-dir", global = true)]
    profiles_dir: Option<PathBuf>,

    /// Directory containing config.toml (overrides the platform default).
    #[arg(short = 'c', long = "config-dir", global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List scans, sorted and paginated.
    List {
        /// Sort field: name, date, count, filesize. Unknown values sort by name.
        #[arg(short = 's', long = "sort")]
        sort: Option<String>,

        /// Sort direction: asc or desc. Unknown values sort ascending.
        #[arg(short = 'o', long = "order")]
        order: Option<String>,

        /// 1-based page number.
        #[arg(long = "page", default_value_t = 1)]
        page: usize,

        /// Records per page (overrides config).
        #[arg(long = "per-page")]
        per_page: Option<usize>,

        /// Output format.
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Delete one or more scans by filename. Stops at the first failure.
    Delete {
        /// Artifact filenames, e.g. nightly.json.
        #[arg(required = true)]
        filenames: Vec<String>,

        /// Authorization token; must match [delete] token in config.toml.
        #[arg(short = 't', long = "token")]
        token: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let (app_config, config_warnings) = config::load_config(&config_dir);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "ScanShelf starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let mut settings =
        CatalogSettings::from_config(&app_config, &platform_paths.default_profiles_dir());
    if let Some(dir) = cli.profiles_dir {
        settings.profiles_dir = dir;
    }

    let result = match cli.command {
        Command::List {
            sort,
            order,
            page,
            per_page,
            format,
        } => {
            if let Some(per_page) = per_page {
                settings.page_size = per_page.clamp(constants::MIN_PAGE_SIZE, constants::MAX_PAGE_SIZE);
            }
            let catalog = Catalog::new(settings, StdoutNotifier);
            let request = ViewRequest {
                sort: SortSpec::from_request(sort.as_deref(), order.as_deref()),
                page_number: page.max(1),
            };
            run_list(&catalog, request, format)
        }
        Command::Delete { filenames, token } => {
            let catalog = Catalog::new(settings, StdoutNotifier);
            let request = BulkDeleteRequest::new(filenames, token);
            let authorize = shared_token_authorizer(app_config.delete_token.clone());
            catalog.bulk_delete(&request, authorize).map(|_| ())
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_list(
    catalog: &Catalog<StdoutNotifier>,
    request: ViewRequest,
    format: OutputFormat,
) -> util::error::Result<()> {
    let page = catalog.view(request)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Table => print_table(&page, &mut out).map_err(|e| {
            util::error::ScanShelfError::Io {
                path: PathBuf::from("<stdout>"),
                operation: "write",
                source: e,
            }
        })?,
        OutputFormat::Csv => {
            export::export_csv(&page.items, &mut out)?;
        }
        OutputFormat::Json => {
            export::export_json(&page, &mut out)?;
            writeln!(out).ok();
        }
    }
    Ok(())
}

/// Render a page as an aligned plain-text table with a paging footer.
fn print_table<W: Write>(page: &Page, out: &mut W) -> std::io::Result<()> {
    // The checkbox column has no meaning on a terminal.
    let columns: Vec<Column> = Column::all().filter(|c| *c != Column::Checkbox).collect();

    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|record| columns.iter().map(|c| c.value(record)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(c.label().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{:<w$}", c.label(), w = *w))
        .collect();
    writeln!(out, "{}", header.join("  ").trim_end())?;

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell:<w$}", w = *w))
            .collect();
        writeln!(out, "{}", cells.join("  ").trim_end())?;
    }

    let noun = if page.total_items == 1 {
        constants::ITEM_SINGULAR
    } else {
        constants::ITEM_PLURAL
    };
    writeln!(
        out,
        "\nPage {} of {} ({} {noun})",
        page.page_number, page.total_pages, page.total_items
    )
}
