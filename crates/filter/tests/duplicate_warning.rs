//! Warnings emitted when a surface is listed on a filter more than once.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use surftally_filter::{SurfaceFilter, SurfaceFilterConfig};
use surftally_geometry::{SurfaceDirectory, SurfaceRegistry};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts `WARN` events.
#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn warnings_for(ids: &[i32]) -> usize {
    let directory: Arc<dyn SurfaceDirectory> =
        Arc::new(SurfaceRegistry::from_ids([10, 20, 30, 40]).unwrap());
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());

    tracing::subscriber::with_default(subscriber, || {
        SurfaceFilter::initialize(SurfaceFilterConfig::new(ids.to_vec()), directory).unwrap();
    });
    counter.0.load(Ordering::SeqCst)
}

#[test]
fn distinct_surfaces_do_not_warn() {
    assert_eq!(warnings_for(&[40, 10, 30]), 0);
}

#[test]
fn repeated_surface_warns_once() {
    assert_eq!(warnings_for(&[40, 40]), 1);
}

#[test]
fn every_shadowed_bin_warns() {
    assert_eq!(warnings_for(&[40, 10, 40, 40]), 2);
}

#[test]
fn unknown_surface_fails_before_warning() {
    let directory: Arc<dyn SurfaceDirectory> =
        Arc::new(SurfaceRegistry::from_ids([10, 20]).unwrap());
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());

    let result = tracing::subscriber::with_default(subscriber, || {
        SurfaceFilter::initialize(SurfaceFilterConfig::new(vec![10, 10, 99]), directory)
    });
    assert!(result.is_err());
    assert_eq!(counter.0.load(Ordering::SeqCst), 0);
}
