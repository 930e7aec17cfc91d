//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use surftally_filter::SurfaceFilterConfig;
use surftally_geometry::{Surface, SurfaceRegistry};
use surftally_statepoint::StatepointConfig;

/// Builds the surface directory from `[[surfaces]]` tables in file order.
pub fn build_registry(surfaces: &[SurfaceToml]) -> Result<SurfaceRegistry> {
    SurfaceRegistry::from_surfaces(surfaces.iter().map(|s| {
        let surface = Surface::new(s.id);
        match &s.name {
            Some(name) => surface.with_name(name.as_str()),
            None => surface,
        }
    }))
    .context("invalid surface definitions")
}

/// Builds a [`SurfaceFilterConfig`] from a `[[filters]]` table.
///
/// Only `type = "surface"` is handled here.
pub fn build_surface_filter_config(filter: &FilterToml) -> Result<SurfaceFilterConfig> {
    match filter.kind.to_lowercase().as_str() {
        "surface" => Ok(SurfaceFilterConfig::new(filter.bins.clone())),
        other => bail!("unknown filter type {other:?} on filter {}", filter.id),
    }
}

/// Builds a [`StatepointConfig`], letting the command line force overwriting.
pub fn build_statepoint_config(sp: &StatepointToml, force_overwrite: bool) -> StatepointConfig {
    StatepointConfig::default().with_overwrite(sp.overwrite || force_overwrite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use surftally_geometry::SurfaceDirectory;

    fn filter_toml(kind: &str, bins: Vec<i32>) -> FilterToml {
        FilterToml {
            id: 2,
            kind: kind.to_string(),
            bins,
        }
    }

    #[test]
    fn registry_keeps_order_and_names() {
        let reg = build_registry(&[
            SurfaceToml {
                id: 12,
                name: Some("outer".to_string()),
            },
            SurfaceToml { id: 3, name: None },
        ])
        .unwrap();
        assert_eq!(reg.resolve(12), Some(0));
        assert_eq!(reg.resolve(3), Some(1));
        assert_eq!(reg.get(0).and_then(Surface::name), Some("outer"));
    }

    #[test]
    fn registry_rejects_duplicates() {
        let err = build_registry(&[
            SurfaceToml { id: 1, name: None },
            SurfaceToml { id: 1, name: None },
        ])
        .unwrap_err();
        assert!(format!("{err:#}").contains("same unique ID: 1"));
    }

    #[test]
    fn surface_filter_type_case_insensitive() {
        let cfg = build_surface_filter_config(&filter_toml("Surface", vec![4, 4])).unwrap();
        assert_eq!(cfg.bins(), &[4, 4]);
    }

    #[test]
    fn unknown_filter_type() {
        let err = build_surface_filter_config(&filter_toml("energy", vec![])).unwrap_err();
        assert_eq!(err.to_string(), "unknown filter type \"energy\" on filter 2");
    }

    #[test]
    fn statepoint_overwrite_flags() {
        let sp = StatepointToml::default();
        assert!(!build_statepoint_config(&sp, false).overwrite());
        assert!(build_statepoint_config(&sp, true).overwrite());
        let sp = StatepointToml {
            output: None,
            overwrite: true,
        };
        assert!(build_statepoint_config(&sp, false).overwrite());
    }
}
