/// Choosing a Java runtime for a descriptor
use crate::error::{LaunchError, Result};
use crate::game::manifest::types::VersionDescriptor;
use crate::game::runtime::RuntimeRecord;

/// Java major version used when a descriptor does not declare one.
/// Descriptors older than 1.17 predate the `javaVersion` field.
pub const LEGACY_JAVA_MAJOR: u32 = 8;

/// The Java major version a resolved descriptor needs
pub fn required_java_major(descriptor: &VersionDescriptor) -> u32 {
    descriptor
        .java_version
        .as_ref()
        .and_then(|java| java.required_major())
        .unwrap_or(LEGACY_JAVA_MAJOR)
}

/// Smallest runtime whose major version is at least `required`.
///
/// Runtimes with an unknown (zero) version or flagged incompatible are never
/// candidates; on equal versions the earlier record wins.
pub fn select_nearest(required: u32, available: &[RuntimeRecord]) -> Result<&RuntimeRecord> {
    nearest(required, available, None)
}

fn nearest(
    required: u32,
    available: &[RuntimeRecord],
    ceiling: Option<u32>,
) -> Result<&RuntimeRecord> {
    available
        .iter()
        .filter(|runtime| acceptable(runtime, required, ceiling))
        .min_by_key(|runtime| runtime.major_version)
        .ok_or(LaunchError::NoCompatibleRuntime { required, ceiling })
}

fn acceptable(runtime: &RuntimeRecord, required: u32, ceiling: Option<u32>) -> bool {
    runtime.compatible
        && runtime.major_version != 0
        && runtime.major_version >= required
        && ceiling.map_or(true, |max| runtime.major_version <= max)
}

/// Runtime selection policy: a preferred default runtime and an optional
/// ceiling imposed by the host (e.g. no runtime above Java 17).
#[derive(Debug, Clone, Default)]
pub struct RuntimeSelector {
    default_runtime: Option<String>,
    ceiling: Option<u32>,
}

impl RuntimeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.default_runtime = Some(name.into());
        self
    }

    pub fn with_ceiling(mut self, max_major: u32) -> Self {
        self.ceiling = Some(max_major);
        self
    }

    pub fn ceiling(&self) -> Option<u32> {
        self.ceiling
    }

    /// The configured default when it satisfies `required`, otherwise the
    /// nearest acceptable runtime.
    pub fn select<'a>(
        &self,
        required: u32,
        available: &'a [RuntimeRecord],
    ) -> Result<&'a RuntimeRecord> {
        if let Some(ref name) = self.default_runtime {
            if let Some(default) = available.iter().find(|r| &r.name == name) {
                if acceptable(default, required, self.ceiling) {
                    log::debug!("Default runtime {} satisfies Java {}", name, required);
                    return Ok(default);
                }
                log::info!(
                    "Default runtime {} (Java {}) does not satisfy Java {}, searching",
                    name,
                    default.major_version,
                    required
                );
            } else {
                log::warn!("Default runtime {} is not installed", name);
            }
        }

        let selected = nearest(required, available, self.ceiling)?;
        log::info!(
            "Selected runtime {} (Java {}) for Java {}",
            selected.name,
            selected.major_version,
            required
        );
        Ok(selected)
    }

    /// Select a runtime for a resolved descriptor
    pub fn select_for<'a>(
        &self,
        descriptor: &VersionDescriptor,
        available: &'a [RuntimeRecord],
    ) -> Result<&'a RuntimeRecord> {
        self.select(required_java_major(descriptor), available)
    }
}
