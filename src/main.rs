use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info, Level};
use yatrachain::config::FilterArgs;
use yatrachain::trips::TripStore;
use yatrachain::{YatraError, YcResult};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Trip records (JSON array). Defaults to the built-in Kerala sample.
    #[arg(global = true, short, long)]
    trips: Option<PathBuf>,

    /// Filter preset (JSON). Flags typed on the command line win over it.
    #[arg(global = true, short, long)]
    preset: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Stats(cmd::stats::StatsArgs),
    List(cmd::list::ListArgs),
    Export(cmd::export::ExportArgs),
    Users(cmd::users::UsersArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> YcResult<()> {
    // Filter flags live inside the subcommand's matches, not the root.
    let (cli_filters, sub_name) = match &cli.command {
        Commands::Stats(args) => (&args.filters, "stats"),
        Commands::List(args) => (&args.filters, "list"),
        Commands::Export(args) => (&args.filters, "export"),
        // The user directory needs neither trip data nor filters.
        Commands::Users(args) => return cmd::users::run(args),
    };

    let store = match &cli.trips {
        Some(path) => {
            info!("📂 Loading trips: {}", path.display());
            TripStore::load_from_file(path)?
        }
        None => TripStore::builtin()?,
    };
    debug!("{} trip patterns in store", store.len());

    let sub_matches = matches
        .subcommand_matches(sub_name)
        .ok_or_else(|| YatraError::Config(format!("missing '{}' arguments", sub_name)))?;

    let filters = match &cli.preset {
        Some(path) => {
            info!("⚙️  Loading filter preset: {}", path.display());
            let mut preset = FilterArgs::load_from_file(path)?;
            preset.merge_from_cli(cli_filters, sub_matches);
            preset
        }
        None => cli_filters.clone(),
    };
    let state = filters.to_filter_state()?;
    debug!("Active filters: {:?}", state);

    match cli.command {
        Commands::Stats(args) => cmd::stats::run(args, &store, &state),
        Commands::List(args) => cmd::list::run(args, &store, &state),
        Commands::Export(args) => cmd::export::run(args, &store, &state),
        Commands::Users(args) => cmd::users::run(&args),
    }
}
