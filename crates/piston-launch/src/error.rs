use std::path::PathBuf;

/// Errors produced while resolving descriptors, selecting a runtime or
/// assembling launch arguments. Every variant is fatal for the launch attempt.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Version manifest not found: {id} ({path:?})")]
    DescriptorNotFound { id: String, path: PathBuf },

    #[error("Parent version {parent} of {child} not found at {path:?}")]
    ParentNotFound {
        child: String,
        parent: String,
        path: PathBuf,
    },

    #[error("Invalid version manifest {id}: {reason}")]
    ManifestInvalid { id: String, reason: String },

    #[error("No compatible Java runtime for Java {required}{}", ceiling_suffix(.ceiling))]
    NoCompatibleRuntime { required: u32, ceiling: Option<u32> },

    #[error("Unresolved placeholder ${{{token}}} in argument {template:?}")]
    UnresolvedToken { token: String, template: String },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse version manifest {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

fn ceiling_suffix(ceiling: &Option<u32>) -> String {
    match ceiling {
        Some(max) => format!(" (capped at Java {})", max),
        None => String::new(),
    }
}

impl LaunchError {
    pub(crate) fn invalid(id: &str, reason: impl Into<String>) -> Self {
        LaunchError::ManifestInvalid {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
