/// Reading version descriptors and resolving their inheritance chain
use crate::error::{LaunchError, Result};
use crate::game::manifest::merge::{merge_descriptors, validate};
use crate::game::manifest::rewriter::rewrite_libraries;
use crate::game::manifest::types::VersionDescriptor;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Parse a descriptor from its JSON text
pub fn parse_descriptor(text: &str) -> Result<VersionDescriptor> {
    parse_with_origin(text, "<inline>")
}

fn parse_with_origin(text: &str, origin: &str) -> Result<VersionDescriptor> {
    serde_json::from_str(text).map_err(|source| LaunchError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Read and parse a descriptor file
pub async fn load_descriptor(path: &Path) -> Result<VersionDescriptor> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LaunchError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_with_origin(&text, &path.display().to_string())
}

/// Descriptors laid out as `<versions_dir>/<id>/<id>.json`
#[derive(Debug, Clone)]
pub struct DescriptorStore {
    versions_dir: PathBuf,
}

impl DescriptorStore {
    pub fn new(versions_dir: impl Into<PathBuf>) -> Self {
        Self {
            versions_dir: versions_dir.into(),
        }
    }

    /// Store rooted at `<data_dir>/versions`
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("versions"))
    }

    pub fn versions_dir(&self) -> &Path {
        &self.versions_dir
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.versions_dir.join(id).join(format!("{}.json", id))
    }

    /// Client jar a resolved descriptor runs on
    pub fn client_jar_path(&self, descriptor: &VersionDescriptor) -> PathBuf {
        let jar_id = descriptor.client_jar_id();
        self.versions_dir
            .join(jar_id)
            .join(format!("{}.jar", jar_id))
    }

    /// Load a single descriptor without following `inheritsFrom`
    pub async fn load(&self, id: &str) -> Result<VersionDescriptor> {
        let path = self.path_for(id);
        log::debug!("Checking version path for {} -> {:?}", id, path);

        if !path.exists() {
            return Err(LaunchError::DescriptorNotFound {
                id: id.to_string(),
                path,
            });
        }
        load_descriptor(&path).await
    }

    /// Load `id` and every ancestor, merge them root-first, validate the
    /// result and apply the library rewriter to the merged list.
    pub async fn resolve(&self, id: &str) -> Result<VersionDescriptor> {
        let mut chain = vec![self.load(id).await?];
        let mut seen: HashSet<String> = HashSet::from([id.to_string()]);

        while let Some(parent_id) = chain.last().and_then(|d| d.inherits_from.clone()) {
            let child_id = chain.last().map(|d| d.id.clone()).unwrap_or_default();

            if !seen.insert(parent_id.clone()) {
                return Err(LaunchError::invalid(
                    &child_id,
                    format!("inheritance cycle through {}", parent_id),
                ));
            }

            let path = self.path_for(&parent_id);
            if !path.exists() {
                log::error!(
                    "Version {} inherits from {} but {:?} does not exist",
                    child_id,
                    parent_id,
                    path
                );
                return Err(LaunchError::ParentNotFound {
                    child: child_id,
                    parent: parent_id,
                    path,
                });
            }

            log::debug!("Version {} inherits from {}", child_id, parent_id);
            chain.push(load_descriptor(&path).await?);
        }

        let mut resolved = match chain.pop() {
            Some(root) => root,
            None => return Err(LaunchError::invalid(id, "empty inheritance chain")),
        };
        while let Some(child) = chain.pop() {
            resolved = merge_descriptors(resolved, child)?;
        }

        validate(&resolved)?;
        resolved.libraries = rewrite_libraries(resolved.libraries);

        log::info!(
            "Resolved version {} ({} libraries, main class {})",
            resolved.id,
            resolved.libraries.len(),
            resolved.main_class.as_deref().unwrap_or_default()
        );
        Ok(resolved)
    }
}
