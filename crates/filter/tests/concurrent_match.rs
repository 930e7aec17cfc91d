//! Concurrent scoring against one shared filter.

use std::sync::Arc;

use rayon::prelude::*;
use surftally_filter::{
    Direction, FilterMatch, SurfaceCrossing, SurfaceFilter, SurfaceFilterConfig,
};
use surftally_geometry::SurfaceRegistry;

fn shared_filter() -> Arc<SurfaceFilter> {
    let registry = Arc::new(SurfaceRegistry::from_ids(1..=64).unwrap());
    // Every other surface, plus one repeat.
    let mut ids: Vec<i32> = (1..=64).step_by(2).collect();
    ids.push(1);
    let config = SurfaceFilterConfig::new(ids);
    Arc::new(SurfaceFilter::initialize(config, registry).unwrap())
}

/// Crossings of indices 0..70 in both directions, plus "not crossing".
fn indicators() -> Vec<i32> {
    let mut one_pass = vec![SurfaceCrossing::NONE.raw()];
    for index in 0..70 {
        for direction in [Direction::Positive, Direction::Negative] {
            one_pass.push(SurfaceCrossing::new(index, direction).unwrap().raw());
        }
    }
    one_pass.into_iter().cycle().take(50_000).collect()
}

fn match_one(filter: &SurfaceFilter, indicator: i32) -> Vec<(usize, f64)> {
    let mut matched = FilterMatch::new();
    filter.match_crossing(SurfaceCrossing::from_raw(indicator), &mut matched);
    matched.iter().collect()
}

#[test]
fn parallel_results_equal_sequential() {
    let filter = shared_filter();
    let input = indicators();

    let sequential: Vec<_> = input.iter().map(|&i| match_one(&filter, i)).collect();
    let parallel: Vec<_> = input.par_iter().map(|&i| match_one(&filter, i)).collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn scoped_threads_see_unchanged_map() {
    let filter = shared_filter();
    let before: Vec<_> = (0..64).map(|idx| filter.bin_for_surface(idx)).collect();

    std::thread::scope(|s| {
        for t in 0..8 {
            let filter = &filter;
            s.spawn(move || {
                let mut matched = FilterMatch::new();
                for i in indicators().into_iter().skip(t) {
                    matched.clear();
                    filter.match_crossing(SurfaceCrossing::from_raw(i), &mut matched);
                    assert!(matched.len() <= 1);
                }
            });
        }
    });

    let after: Vec<_> = (0..64).map(|idx| filter.bin_for_surface(idx)).collect();
    assert_eq!(before, after);
    // Surface id 1 (index 0) was listed first and last; the last bin wins.
    assert_eq!(filter.bin_for_surface(0), Some(33));
}
