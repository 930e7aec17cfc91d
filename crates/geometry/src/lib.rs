//! Surface directory for the tally filters.
//!
//! Surfaces are identified by users with arbitrary positive integers and by
//! the transport engine with their position in a dense array. This crate owns
//! that correspondence.
//!
//! ```text
//!   user id ──resolve()──▶ dense index ──describe()──▶ user id
//! ```
//!
//! The directory is populated once when the geometry is loaded and is
//! read-only afterwards. Consumers receive it as an
//! `Arc<dyn SurfaceDirectory>` rather than reaching for global state.
//!
//! # Quick start
//!
//! ```
//! use surftally_geometry::{SurfaceDirectory, SurfaceRegistry};
//!
//! let registry = SurfaceRegistry::from_ids([10, 20, 5]).unwrap();
//!
//! assert_eq!(registry.resolve(5), Some(2));
//! assert_eq!(registry.describe(2), 5);
//! assert_eq!(registry.resolve(7), None);
//! ```

pub mod directory;
pub mod error;
pub mod registry;
pub mod surface;

pub use directory::SurfaceDirectory;
pub use error::GeometryError;
pub use registry::SurfaceRegistry;
pub use surface::Surface;
