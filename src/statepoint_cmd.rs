//! Statepoint command: write filter checkpoint records.

use anyhow::{Context, Result};
use surftally_statepoint::write_statepoint;
use tracing::{info, info_span};

use crate::cli::StatepointArgs;
use crate::convert;
use crate::model::Model;

/// Run the statepoint command.
pub fn run(args: StatepointArgs) -> Result<()> {
    let _cmd = info_span!("statepoint").entered();
    let model = Model::load(&args.config)?;

    let output = args
        .output
        .as_ref()
        .or(model.statepoint().output.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!("no output path: set [statepoint].output in config or use --output")
        })?;
    let sp_cfg = convert::build_statepoint_config(model.statepoint(), args.overwrite);

    let filters = model.dyn_filters();
    write_statepoint(output, &filters, &sp_cfg)
        .with_context(|| format!("failed to write statepoint: {}", output.display()))?;
    info!(path = %output.display(), n_filters = filters.len(), "statepoint written");
    Ok(())
}
