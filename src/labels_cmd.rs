//! Labels command: print the display label of every bin.

use anyhow::Result;
use surftally_filter::{Filter, SurfaceFilter};
use tracing::info_span;

use crate::cli::LabelsArgs;
use crate::model::Model;

/// Run the labels command.
pub fn run(args: LabelsArgs) -> Result<()> {
    let _cmd = info_span!("labels").entered();
    let model = Model::load(&args.config)?;

    match args.filter {
        Some(id) => print_labels(id, model.filter(id)?),
        None => {
            for (id, filter) in model.filters() {
                print_labels(id, filter);
            }
        }
    }
    Ok(())
}

fn print_labels(id: u32, filter: &SurfaceFilter) {
    println!("filter {id}");
    for line in label_lines(filter) {
        println!("  {line}");
    }
}

fn label_lines(filter: &SurfaceFilter) -> Vec<String> {
    (1..=filter.n_bins())
        .map(|bin| format!("{bin}: {}", filter.text_label(bin)))
        .collect()
}
