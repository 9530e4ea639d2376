/// Installed Java runtimes and the choice between them
pub mod discovery;
pub mod selector;

use crate::game::platform::Arch;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use discovery::{detect_system_runtime, discover_runtimes, find_java_executable};
pub use selector::{required_java_major, select_nearest, RuntimeSelector};

/// A discovered Java installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeRecord {
    /// Directory name under the runtimes root
    pub name: String,
    /// Detected major version, 0 when unknown
    pub major_version: u32,
    pub arch: Option<Arch>,
    /// Whether the runtime can execute on the host architecture
    pub compatible: bool,
    pub home: PathBuf,
}

impl RuntimeRecord {
    pub fn new(name: impl Into<String>, major_version: u32, arch: Arch) -> Self {
        Self {
            name: name.into(),
            major_version,
            arch: Some(arch),
            compatible: true,
            home: PathBuf::new(),
        }
    }

    pub fn java_executable(&self) -> Option<PathBuf> {
        find_java_executable(&self.home)
    }
}
