//! Match command: show what a filter scores for given crossing indicators.

use anyhow::Result;
use rayon::prelude::*;
use surftally_filter::{Filter, FilterMatch, SurfaceCrossing, SurfaceFilter};
use tracing::{debug, info_span};

use crate::cli::MatchArgs;
use crate::model::Model;

/// Run the match command.
pub fn run(args: MatchArgs) -> Result<()> {
    let _cmd = info_span!("match", filter = args.filter).entered();
    let model = Model::load(&args.config)?;
    let filter = model.filter(args.filter)?;

    let results = match_all(filter, &args.indicators);
    debug!(
        n_indicators = results.len(),
        n_matched = results.iter().filter(|(_, m)| !m.is_empty()).count(),
        "indicators matched"
    );

    for (indicator, matched) in &results {
        println!("{}", format_match(filter, *indicator, matched));
    }
    Ok(())
}

/// Matches every indicator against `filter`, in parallel, keeping input order.
fn match_all(filter: &SurfaceFilter, indicators: &[i32]) -> Vec<(i32, FilterMatch)> {
    indicators
        .par_iter()
        .map(|&indicator| {
            let mut matched = FilterMatch::new();
            filter.get_all_bins(&SurfaceCrossing::from_raw(indicator), &mut matched);
            (indicator, matched)
        })
        .collect()
}

fn format_match(filter: &SurfaceFilter, indicator: i32, matched: &FilterMatch) -> String {
    if matched.is_empty() {
        return format!("{indicator:>6}  no match");
    }
    matched
        .iter()
        .map(|(bin, weight)| {
            format!(
                "{indicator:>6}  bin {bin} weight {weight:+.1} ({})",
                filter.text_label(bin)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model::from_config(
            toml::from_str(
                r#"
                [[surfaces]]
                id = 1
                [[surfaces]]
                id = 2
                [[surfaces]]
                id = 3
                [[filters]]
                id = 1
                bins = [3, 1]
                "#,
            )
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn results_keep_input_order() {
        let m = model();
        let f = m.filter(1).unwrap();
        let results = match_all(f, &[3, -1, 2, 0]);
        let bins: Vec<(i32, Vec<usize>)> = results
            .iter()
            .map(|(i, m)| (*i, m.bins().to_vec()))
            .collect();
        assert_eq!(
            bins,
            vec![(3, vec![1]), (-1, vec![2]), (2, vec![]), (0, vec![])]
        );
    }

    #[test]
    fn format_lines() {
        let m = model();
        let f = m.filter(1).unwrap();
        let results = match_all(f, &[-3, 2]);
        assert_eq!(
            format_match(f, results[0].0, &results[0].1),
            "    -3  bin 1 weight -1.0 (Surface 3)"
        );
        assert_eq!(
            format_match(f, results[1].0, &results[1].1),
            "     2  no match"
        );
    }
}
