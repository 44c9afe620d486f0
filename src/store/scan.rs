use crate::core::traits::ComponentEnumerator;
use crate::core::types::ComponentId;
use crate::error::{PlugctlError, Result};
use crate::store::manifest::MANIFEST_FILE;
use std::path::PathBuf;

/// Directory-scanning component enumerator: every subdirectory of the plugin
/// root that carries a `plugin.json` is a component, named after the
/// directory. Output is sorted so enumeration order is stable.
pub struct FsEnumerator {
    root: PathBuf,
}

impl FsEnumerator {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ComponentEnumerator for FsEnumerator {
    fn list_all(&self) -> Result<Vec<ComponentId>> {
        if !self.root.is_dir() {
            return Err(PlugctlError::RootNotFound {
                path: self.root.clone(),
            });
        }

        let entries = std::fs::read_dir(&self.root).map_err(|e| PlugctlError::IoError {
            path: self.root.clone(),
            source: e,
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PlugctlError::IoError {
                path: self.root.clone(),
                source: e,
            })?;
            let path = entry.path();
            if !path.is_dir() || !path.join(MANIFEST_FILE).is_file() {
                continue;
            }
            // Directory names that are not valid component ids are ignored.
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Ok(id) = name.parse::<ComponentId>() {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn add_component(root: &std::path::Path, name: &str, manifest: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
    }

    #[test]
    fn test_lists_components_sorted() {
        let dir = tempfile::tempdir().unwrap();
        add_component(dir.path(), "zeta.last", "{}");
        add_component(dir.path(), "alpha.first", "{}");

        let ids = FsEnumerator::new(dir.path().to_path_buf())
            .list_all()
            .unwrap();
        let names: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
        assert_eq!(names, vec!["alpha.first", "zeta.last"]);
    }

    #[test]
    fn test_ignores_directories_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        add_component(dir.path(), "core.auth", "{}");
        fs::create_dir_all(dir.path().join("not-a-plugin")).unwrap();
        fs::write(dir.path().join("stray-file.json"), "{}").unwrap();

        let ids = FsEnumerator::new(dir.path().to_path_buf())
            .list_all()
            .unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].as_str(), "core.auth");
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = FsEnumerator::new(PathBuf::from("/nonexistent/plugctl-root"))
            .list_all()
            .unwrap_err();
        assert!(matches!(err, PlugctlError::RootNotFound { .. }));
    }
}
