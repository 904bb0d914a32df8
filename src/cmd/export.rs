use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use yatrachain::config::FilterArgs;
use yatrachain::export::{self, ExportFormat};
use yatrachain::filter::FilterState;
use yatrachain::notice::Notice;
use yatrachain::trips::TripStore;
use yatrachain::{YatraError, YcResult};

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Route ids to export (AGG001,AGG003). Only used by the routes-* formats.
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Write the export to stdout instead of a dated file
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}

pub fn run(args: ExportArgs, store: &TripStore, state: &FilterState) -> YcResult<()> {
    let filtered = state.apply(store.trips());

    let rendered = match export::render(args.format, &filtered, &args.select) {
        Err(YatraError::NoDataSelected) => {
            Notice::no_data_selected().emit();
            return Err(YatraError::NoDataSelected);
        }
        other => other?,
    };

    if args.stdout {
        println!("{}", rendered.content);
    } else {
        let filename = export::export_filename(args.format, Utc::now().date_naive());
        let path = export::write_export(&args.out_dir, &filename, &rendered.content)?;
        info!("💾 Saved {}", path.display());
    }

    let ext = args.format.extension();
    let notice = if args.format.is_route_table() {
        Notice::export_successful(rendered.records, ext)
    } else {
        Notice::data_exported(rendered.records, ext)
    };
    notice.emit();
    Ok(())
}
