//! vitagraph CLI: incremental faculty-activity loader for VIVO.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use vitagraph::baseline::BaselineStore;
use vitagraph::config::SyncConfig;
use vitagraph::datasets::{DatasetCatalog, DatasetGroup};
use vitagraph::store::SparqlUpdateStore;
use vitagraph::sync::{SyncDriver, SyncOptions, SyncReport};
use vitagraph::vocab::Namespaces;

#[derive(Parser)]
#[command(
    name = "vitagraph",
    version,
    about = "Incremental faculty-activity loader for VIVO"
)]
struct Cli {
    /// Config file (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing the export files.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory where baselines are kept.
    #[arg(long, global = true)]
    graph_dir: Option<PathBuf>,

    /// Cap on accepted records per dataset.
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Cap on the faculty allow-list size.
    #[arg(long, global = true)]
    fac_limit: Option<usize>,

    /// Diff against an empty baseline, re-asserting everything.
    #[arg(long, global = true)]
    full_reload: bool,

    /// Compute diffs without contacting the store.
    #[arg(long, global = true)]
    skip_push: bool,

    /// Push without writing a new baseline.
    #[arg(long, global = true)]
    skip_persist: bool,

    /// Maximum statements per update request.
    #[arg(long, global = true)]
    batch_size: Option<usize>,

    /// Print sync reports as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync faculty profiles.
    Faculty,
    /// Sync the college and department hierarchy.
    Departments,
    /// Sync academic appointments.
    AcademicAppointments,
    /// Sync administrative appointments.
    AdminAppointments,
    /// Sync publications, patents, and other research outputs.
    Research,
    /// Sync degree and non-degree education history.
    Education,
    /// Sync courses taught.
    Courses,
    /// Sync memberships, reviewerships, awards, and presentations.
    Service,
    /// Sync grants.
    Grants,
    /// Sync every dataset group.
    All,
    /// List the dataset groups.
    List,
}

impl Commands {
    fn groups(&self) -> Vec<DatasetGroup> {
        match self {
            Commands::Faculty => vec![DatasetGroup::Faculty],
            Commands::Departments => vec![DatasetGroup::Departments],
            Commands::AcademicAppointments => vec![DatasetGroup::AcademicAppointments],
            Commands::AdminAppointments => vec![DatasetGroup::AdminAppointments],
            Commands::Research => vec![DatasetGroup::Research],
            Commands::Education => vec![DatasetGroup::Education],
            Commands::Courses => vec![DatasetGroup::Courses],
            Commands::Service => vec![DatasetGroup::Service],
            Commands::Grants => vec![DatasetGroup::Grants],
            Commands::All => DatasetGroup::ALL.to_vec(),
            Commands::List => Vec::new(),
        }
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if matches!(cli.command, Commands::List) {
        for group in DatasetGroup::ALL {
            println!("{}", group.name());
        }
        return Ok(());
    }

    let mut config = SyncConfig::load_or_default(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(graph_dir) = cli.graph_dir {
        config.graph_dir = graph_dir;
    }
    if let Some(batch_size) = cli.batch_size {
        config.batch_size = batch_size;
    }

    let catalog = DatasetCatalog::new(&config, cli.limit, cli.fac_limit)?;
    let baselines = BaselineStore::new(&config.graph_dir, Namespaces::standard());
    let store = SparqlUpdateStore::new(
        &config.endpoint,
        &config.email,
        &config.password,
        &config.target_graph,
    );
    let options = SyncOptions {
        full_reload: cli.full_reload,
        skip_push: cli.skip_push,
        skip_persist: cli.skip_persist,
        batch_size: config.batch_size,
    };
    let driver = SyncDriver::new(&baselines, &store, options);

    let mut reports: Vec<SyncReport> = Vec::new();
    for group in cli.command.groups() {
        for mapper in catalog.mappers(group)? {
            let name = mapper.name().to_string();
            match driver.run(&mapper)? {
                Some(report) => reports.push(report),
                None => {
                    if !cli.json {
                        println!("{name}: no records, baseline untouched");
                    }
                }
            }
        }
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).into_diagnostic()?
        );
    } else {
        for report in &reports {
            let baseline = report
                .baseline
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "not persisted".to_string());
            println!(
                "{}: +{} -{} ({} unchanged) [{}]",
                report.dataset, report.added, report.deleted, report.common, baseline
            );
        }
    }

    Ok(())
}
