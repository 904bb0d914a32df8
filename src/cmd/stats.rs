use crate::reports;
use clap::Args;
use yatrachain::config::FilterArgs;
use yatrachain::filter::FilterState;
use yatrachain::notice::Notice;
use yatrachain::stats;
use yatrachain::trips::TripStore;
use yatrachain::YcResult;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Print the summary as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: StatsArgs, store: &TripStore, state: &FilterState) -> YcResult<()> {
    let filtered = state.apply(store.trips());
    let summary = stats::summarize(&filtered);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_summary(&summary, store.cost_bounds());
        reports::print_share_table("Mode", &summary.mode_share);
        reports::print_share_table("Purpose", &summary.purpose_share);
        reports::print_hourly(&summary);
    }

    Notice::filters_applied(summary.trip_patterns, summary.total_trips).emit();
    Ok(())
}
