//! Surface-crossing tally filter.
//!
//! A [`SurfaceFilter`] decides which scoring bins a surface-crossing event
//! contributes to, and with which sign. Bins are surfaces in the order the
//! user listed them; crossing in the positive direction scores `+1`, crossing
//! against it scores `-1`, which makes the filter a net-current tally.
//!
//! # Lifecycle
//!
//! ```text
//!  ┌─────────────────────┐  initialize()   ┌────────────────┐
//!  │ SurfaceFilterConfig │────────────────▶│ SurfaceFilter  │──▶ get_all_bins / to_statepoint / text_label
//!  │   (surface ids)     │  resolve ids    │ (indices, map) │    (read-only, shareable across threads)
//!  └─────────────────────┘                 └────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//!
//! use surftally_filter::{Filter, FilterMatch, SurfaceCrossing, SurfaceFilter, SurfaceFilterConfig};
//! use surftally_geometry::SurfaceRegistry;
//!
//! let registry = Arc::new(SurfaceRegistry::from_ids([10, 20, 30]).unwrap());
//! let config = SurfaceFilterConfig::new(vec![30, 10]);
//! let filter = SurfaceFilter::initialize(config, registry).unwrap();
//!
//! // Index of surface 30 is 2, so the crossing indicator is -(2 + 1).
//! let mut matched = FilterMatch::new();
//! filter.get_all_bins(&SurfaceCrossing::from_raw(-3), &mut matched);
//! assert_eq!(matched.bins(), &[1]);
//! assert_eq!(matched.weights(), &[-1.0]);
//! assert_eq!(filter.text_label(1), "Surface 30");
//! ```

pub mod checkpoint;
pub mod config;
pub mod crossing;
pub mod error;
pub mod filter;
pub mod filter_match;
pub mod surface;

pub use checkpoint::{CheckpointRecord, MemoryRecord, RecordValue};
pub use config::SurfaceFilterConfig;
pub use crossing::{Direction, SurfaceCrossing};
pub use error::FilterError;
pub use filter::{Filter, ParticleView, write_filter_header};
pub use filter_match::FilterMatch;
pub use surface::SurfaceFilter;
