//! Command implementations behind the `deskplan` binary.
//!
//! Each command loads its input, runs one operation and returns a value the
//! binary serializes; nothing here prints.

use std::path::Path;

use anyhow::{Context, Result};
use deskplan_core::{catalog_entry, LayoutError, ObjectCategory, ObjectId, PlacedObject, Vec3};
use deskplan_designer::routing::{apply_sag, path_from_array, path_to_array};
use deskplan_designer::{generate_connections, Connection, LayoutFile, TidySummary, WorkspaceState};
use deskplan_settings::Config;
use serde::Serialize;

/// Load a layout file into a fresh workspace configured by `config`.
pub fn open_workspace(path: &Path, config: &Config) -> Result<WorkspaceState> {
    let mut state = WorkspaceState::with_options(config.workspace_options());
    state
        .load_layout(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(state)
}

/// Arrange, cable and route the layout at `path`.
pub fn run_tidy(path: &Path, config: &Config) -> Result<(LayoutFile, TidySummary)> {
    let mut state = open_workspace(path, config)?;
    let summary = state.tidy_workspace();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("layout")
        .to_string();
    Ok((state.to_layout_file(name), summary))
}

/// Route one cable between two objects of the layout at `path`.
pub fn run_route(
    path: &Path,
    from: &str,
    to: &str,
    sag: bool,
    config: &Config,
) -> Result<Vec<Vec3>> {
    let state = open_workspace(path, config)?;
    let from = find_object(&state, from)?;
    let to = find_object(&state, to)?;

    let points = state
        .router()
        .find_path(from, to, state.objects(), state.desk());
    let points = path_to_array(&points);
    if !sag {
        return Ok(points);
    }
    Ok(path_to_array(&apply_sag(
        &path_from_array(&points),
        &config.sag_config(),
    )))
}

fn find_object<'a>(state: &'a WorkspaceState, id: &str) -> Result<&'a PlacedObject, LayoutError> {
    state
        .object(&ObjectId::from(id))
        .ok_or_else(|| LayoutError::UnknownObject { id: id.to_string() })
}

/// Default peripheral-to-tower connections for the layout at `path`.
pub fn run_connections(path: &Path) -> Result<Vec<Connection>> {
    let layout = LayoutFile::load_from_file(path)?;
    Ok(generate_connections(&layout.objects))
}

/// One row of the object catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    pub category: ObjectCategory,
    pub name: &'static str,
    pub scale: Vec3,
}

pub fn catalog() -> Vec<CatalogRow> {
    ObjectCategory::ALL
        .iter()
        .map(|&category| {
            let entry = catalog_entry(category);
            CatalogRow {
                category,
                name: entry.name,
                scale: entry.scale,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_layout(dir: &Path, objects: Vec<PlacedObject>) -> std::path::PathBuf {
        let path = dir.join("layout.json");
        let mut layout = LayoutFile::new("test");
        layout.objects = objects;
        layout.save_to_file(&path).unwrap();
        path
    }

    #[test]
    fn test_route_unknown_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_layout(
            dir.path(),
            vec![PlacedObject::new(ObjectCategory::Monitor).with_id("m")],
        );
        let err = run_route(&path, "m", "nope", false, &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LayoutError>(),
            Some(LayoutError::UnknownObject { .. })
        ));
    }

    #[test]
    fn test_route_with_sag_adds_midpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_layout(
            dir.path(),
            vec![
                PlacedObject::new(ObjectCategory::Books)
                    .with_id("a")
                    .with_position([-1.0, 1.0, 0.0]),
                PlacedObject::new(ObjectCategory::Books)
                    .with_id("b")
                    .with_position([1.0, 1.0, 0.0]),
            ],
        );
        let config = Config::default();
        assert_eq!(run_route(&path, "a", "b", false, &config).unwrap().len(), 2);
        let sagged = run_route(&path, "a", "b", true, &config).unwrap();
        assert_eq!(sagged.len(), 3);
        assert!(sagged[1][1] < 1.0);
    }

    #[test]
    fn test_catalog_lists_every_category() {
        let rows = catalog();
        assert_eq!(rows.len(), ObjectCategory::ALL.len());
        assert_eq!(rows[0].category, ObjectCategory::ALL[0]);
    }
}
