use crate::reports;
use clap::Args;
use yatrachain::config::FilterArgs;
use yatrachain::filter::FilterState;
use yatrachain::routes;
use yatrachain::trips::TripStore;
use yatrachain::YcResult;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Show the aggregated route table instead of individual trip patterns
    #[arg(long, default_value_t = false)]
    pub routes: bool,
}

pub fn run(args: ListArgs, store: &TripStore, state: &FilterState) -> YcResult<()> {
    let filtered = state.apply(store.trips());

    if args.routes {
        reports::print_route_table(&routes::aggregate_routes(&filtered));
    } else {
        reports::print_trip_table(&filtered);
    }
    Ok(())
}
