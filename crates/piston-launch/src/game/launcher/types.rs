/// Core types for argument assembly
use crate::game::manifest::loader::DescriptorStore;
use crate::game::manifest::rules::FeatureSet;
use crate::game::manifest::types::VersionDescriptor;
use crate::game::platform::Platform;
use crate::utils::hardware::host_heap_defaults;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const LAUNCHER_NAME: &str = "piston-launch";
pub const LAUNCHER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The player the game is launched for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Player username
    pub username: String,

    /// Player UUID, hyphenated
    pub uuid: String,

    /// Access token for authentication ("0" when offline)
    pub access_token: String,

    /// User type ("msa" or "legacy")
    pub user_type: String,

    /// Xbox User ID (MSA accounts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xuid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl PlayerProfile {
    /// An account with no session, identified only by its name
    pub fn offline(username: impl Into<String>) -> Self {
        let username = username.into();
        PlayerProfile {
            uuid: offline_uuid(&username).hyphenated().to_string(),
            username,
            access_token: "0".to_string(),
            user_type: "legacy".to_string(),
            xuid: None,
            client_id: None,
        }
    }
}

/// Name-derived UUID for offline players (v3 of `OfflinePlayer:<name>`)
pub fn offline_uuid(username: &str) -> Uuid {
    Uuid::new_v3(
        &Uuid::nil(),
        format!("OfflinePlayer:{}", username).as_bytes(),
    )
}

/// Everything the assembler derives fixed flags and paths from.
///
/// Built once per launch and passed explicitly; nothing here is read from
/// process-wide state.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// Platform rules are evaluated against
    pub platform: Platform,

    /// Launcher features visible to rules
    pub features: FeatureSet,

    /// Working directory of the game
    pub game_dir: PathBuf,

    pub assets_dir: PathBuf,

    pub libraries_dir: PathBuf,

    /// Extracted native libraries for this version
    pub natives_dir: PathBuf,

    /// Appended to `java.library.path` after the natives directory
    pub extra_library_paths: Vec<PathBuf>,

    pub client_jar: PathBuf,

    /// Heap size in MB
    pub min_memory_mb: u32,
    pub max_memory_mb: u32,

    /// Log4j configuration file, when the version ships one
    pub logging_config: Option<PathBuf>,

    /// User JVM arguments, placed before everything else
    pub jvm_args: Vec<String>,

    /// Extra `-D` properties
    pub system_properties: BTreeMap<String, String>,

    pub launcher_name: String,
    pub launcher_version: String,

    /// Put the client jar first on the classpath instead of last
    pub client_first: bool,

    /// Window size, enables the `has_custom_resolution` feature
    pub resolution: Option<(u32, u32)>,
}

impl LaunchContext {
    /// Context using the standard data directory layout:
    /// `libraries/`, `assets/`, `versions/<jar>/<jar>.jar` and
    /// `natives/<version id>/`.
    pub fn for_version(data_dir: &Path, descriptor: &VersionDescriptor, platform: Platform) -> Self {
        let store = DescriptorStore::from_data_dir(data_dir);
        let (min_memory_mb, max_memory_mb) = host_heap_defaults();

        let logging_config = descriptor
            .logging
            .as_ref()
            .and_then(|logging| logging.client.as_ref())
            .map(|client| {
                data_dir
                    .join("assets")
                    .join("log_configs")
                    .join(&client.file.id)
            });

        LaunchContext {
            platform,
            features: FeatureSet::new(),
            game_dir: data_dir.to_path_buf(),
            assets_dir: data_dir.join("assets"),
            libraries_dir: data_dir.join("libraries"),
            natives_dir: data_dir.join("natives").join(&descriptor.id),
            extra_library_paths: Vec::new(),
            client_jar: store.client_jar_path(descriptor),
            min_memory_mb,
            max_memory_mb,
            logging_config,
            jvm_args: Vec::new(),
            system_properties: BTreeMap::new(),
            launcher_name: LAUNCHER_NAME.to_string(),
            launcher_version: LAUNCHER_VERSION.to_string(),
            client_first: false,
            resolution: None,
        }
    }

    pub fn with_game_dir(mut self, game_dir: impl Into<PathBuf>) -> Self {
        self.game_dir = game_dir.into();
        self
    }

    pub fn with_memory(mut self, min_mb: u32, max_mb: u32) -> Self {
        self.min_memory_mb = min_mb;
        self.max_memory_mb = max_mb.max(min_mb);
        self
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = Some((width, height));
        self.features.enable("has_custom_resolution");
        self
    }

    /// Split a user-supplied JVM argument string the way a POSIX shell would
    pub fn with_jvm_args_line(mut self, line: &str) -> Self {
        self.jvm_args = match shlex::split(line) {
            Some(args) => args,
            None => {
                log::warn!("Unbalanced quotes in JVM arguments, splitting on whitespace");
                line.split_whitespace().map(str::to_string).collect()
            }
        };
        self
    }

    /// Value of `java.library.path`
    pub fn library_path(&self) -> String {
        std::iter::once(&self.natives_dir)
            .chain(self.extra_library_paths.iter())
            .map(|path| path.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(self.platform.classpath_separator())
    }
}
