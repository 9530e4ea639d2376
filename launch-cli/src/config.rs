use anyhow::{Context, Result};
use directories::ProjectDirs;
use piston_launch::game::platform::OsType;
use piston_launch::utils::hardware::host_heap_defaults;
use piston_launch::{LaunchContext, Platform, RuntimeSelector, VersionDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Launcher settings, read from a JSON file. Every field is optional in the
/// file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Root holding `versions/`, `libraries/` and `assets/`
    pub data_dir: Option<PathBuf>,
    /// Directory scanned for Java runtimes, `<data_dir>/runtimes` if unset
    pub runtimes_dir: Option<PathBuf>,
    /// Runtime used whenever it satisfies the version's requirement
    pub default_runtime: Option<String>,
    /// Highest Java major version the host can run
    pub java_ceiling: Option<u32>,
    /// Heap size in MB
    pub min_memory: u32,
    pub max_memory: u32,
    /// Extra JVM arguments as one shell-quoted string
    pub jvm_args: String,
    pub system_properties: BTreeMap<String, String>,
    /// Appended to `java.library.path`
    pub extra_library_paths: Vec<PathBuf>,
    pub launcher_name: Option<String>,
    pub launcher_version: Option<String>,
    pub client_first: bool,
    pub window_width: Option<u32>,
    pub window_height: Option<u32>,
    pub debug_logging: bool,
    /// Present the host as this OS to descriptor rules (e.g. "linux")
    pub platform_os: Option<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        let (min_memory, max_memory) = host_heap_defaults();
        Self {
            data_dir: None,
            runtimes_dir: None,
            default_runtime: None,
            java_ceiling: None,
            min_memory,
            max_memory,
            jvm_args: String::new(),
            system_properties: BTreeMap::new(),
            extra_library_paths: Vec::new(),
            launcher_name: None,
            launcher_version: None,
            client_first: false,
            window_width: None,
            window_height: None,
            debug_logging: false,
            platform_os: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "piston", "piston-launch")
}

impl LauncherConfig {
    /// `<config_dir>/config.json`
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match self.data_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .context("Failed to get project directories"),
        }
    }

    pub fn runtimes_dir(&self) -> Result<PathBuf> {
        match self.runtimes_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(self.data_dir()?.join("runtimes")),
        }
    }

    pub fn platform(&self) -> Platform {
        let mut platform = Platform::current();
        if let Some(ref name) = self.platform_os {
            match OsType::from_name(name) {
                Some(os) => platform.os = os,
                None => log::warn!("Unknown platform_os {:?}, using host OS", name),
            }
        }
        platform
    }

    pub fn runtime_selector(&self) -> RuntimeSelector {
        let mut selector = RuntimeSelector::new();
        if let Some(ref name) = self.default_runtime {
            selector = selector.with_default(name.clone());
        }
        if let Some(max) = self.java_ceiling {
            selector = selector.with_ceiling(max);
        }
        selector
    }

    pub fn launch_context(&self, data_dir: &Path, descriptor: &VersionDescriptor) -> LaunchContext {
        let mut ctx = LaunchContext::for_version(data_dir, descriptor, self.platform())
            .with_memory(self.min_memory, self.max_memory)
            .with_jvm_args_line(&self.jvm_args);

        if let (Some(width), Some(height)) = (self.window_width, self.window_height) {
            ctx = ctx.with_resolution(width, height);
        }
        if let Some(ref name) = self.launcher_name {
            ctx.launcher_name = name.clone();
        }
        if let Some(ref version) = self.launcher_version {
            ctx.launcher_version = version.clone();
        }
        ctx.system_properties = self.system_properties.clone();
        ctx.extra_library_paths = self.extra_library_paths.clone();
        ctx.client_first = self.client_first;
        ctx
    }
}
