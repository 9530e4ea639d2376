/// Classpath construction
use crate::game::launcher::types::LaunchContext;
use crate::game::manifest::rules::rules_allow;
use crate::game::manifest::types::Library;
use std::collections::HashSet;
use std::path::PathBuf;

/// Ordered classpath entries: libraries that apply to the platform, then
/// the client jar (or the client jar first when `client_first` is set).
///
/// Native-only libraries are skipped and each path appears once.
pub fn classpath_entries(libraries: &[Library], ctx: &LaunchContext) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    if ctx.client_first {
        seen.insert(ctx.client_jar.clone());
        entries.push(ctx.client_jar.clone());
    }

    for library in libraries {
        if !rules_allow(library.rules.as_deref(), &ctx.platform, &ctx.features) {
            log::debug!("Library {} excluded by rules", library.name);
            continue;
        }
        if library.is_native_only() {
            continue;
        }

        let Some(relative) = library.artifact_path() else {
            log::warn!("Skipping library with unparseable name: {}", library.name);
            continue;
        };

        let full_path = ctx.libraries_dir.join(relative);
        if seen.insert(full_path.clone()) {
            entries.push(full_path);
        }
    }

    if !ctx.client_first && seen.insert(ctx.client_jar.clone()) {
        entries.push(ctx.client_jar.clone());
    }

    entries
}

/// Build the classpath string from libraries
pub fn build_classpath(libraries: &[Library], ctx: &LaunchContext) -> String {
    classpath_entries(libraries, ctx)
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(ctx.platform.classpath_separator())
}

/// Classpath entries that do not exist on disk
pub fn missing_libraries(libraries: &[Library], ctx: &LaunchContext) -> Vec<PathBuf> {
    classpath_entries(libraries, ctx)
        .into_iter()
        .filter(|path| !path.exists())
        .collect()
}
