//! Check command: load the model and initialize every filter.

use anyhow::Result;
use surftally_filter::Filter;
use tracing::info_span;

use crate::cli::CheckArgs;
use crate::model::Model;

/// Run the check command.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let model = Model::load(&args.config)?;

    for (id, filter) in model.filters() {
        println!(
            "filter {id}: {} with {} bin(s)",
            filter.filter_type(),
            filter.n_bins()
        );
    }
    println!("ok");
    Ok(())
}
