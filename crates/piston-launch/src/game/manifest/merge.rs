/// Inheritance merge of a child descriptor into its parent
use crate::error::{LaunchError, Result};
use crate::game::manifest::types::{ArgumentTemplate, Arguments, Library, VersionDescriptor};
use std::collections::HashSet;

/// Merge `child` into `parent`.
///
/// A child without `inheritsFrom` is returned unchanged. Otherwise the result
/// starts from the parent, takes the child's non-empty scalar fields, and
/// merges the library and argument lists. When the merged descriptor is fully
/// resolved (the parent inherits from nothing) it must name a main class and
/// an asset index.
pub fn merge_descriptors(
    parent: VersionDescriptor,
    child: VersionDescriptor,
) -> Result<VersionDescriptor> {
    if child.inherits_from.is_none() {
        return Ok(child);
    }

    log::debug!("Merging version {} into parent {}", child.id, parent.id);

    let parent_id = parent.id.clone();
    let mut merged = parent;

    // Scalar fields: the child wins only when it has a value
    overlay(&mut merged.asset_index, child.asset_index);
    overlay_text(&mut merged.assets, child.assets);
    if !child.id.is_empty() {
        merged.id = child.id;
    }
    overlay_text(&mut merged.main_class, child.main_class);
    overlay_text(&mut merged.minecraft_arguments, child.minecraft_arguments);
    overlay_text(&mut merged.release_time, child.release_time);
    overlay_text(&mut merged.time, child.time);
    overlay_text(&mut merged.version_type, child.version_type);
    overlay(&mut merged.logging, child.logging);

    // A zero java version means the child did not specify one
    if child
        .java_version
        .as_ref()
        .and_then(|java| java.required_major())
        .is_some()
    {
        merged.java_version = child.java_version;
    }

    // The child runs on the parent's client jar unless it names its own
    let parent_jar = merged.jar.take().unwrap_or(parent_id);
    merged.jar = Some(non_empty(child.jar).unwrap_or(parent_jar));

    merged.libraries = merge_libraries(merged.libraries, child.libraries);
    merged.arguments = merge_arguments(merged.arguments.take(), child.arguments);

    if merged.inherits_from.is_none() {
        validate(&merged)?;
    }

    Ok(merged)
}

/// Check the fields a launch cannot proceed without
pub fn validate(descriptor: &VersionDescriptor) -> Result<()> {
    if descriptor.main_class.as_deref().map_or(true, str::is_empty) {
        return Err(LaunchError::invalid(&descriptor.id, "no mainClass after merge"));
    }
    if descriptor.asset_index.is_none() {
        return Err(LaunchError::invalid(&descriptor.id, "no assetIndex after merge"));
    }
    Ok(())
}

fn overlay<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

fn overlay_text(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = non_empty(value) {
        *target = Some(value);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parent libraries not superseded by a child library keep their order,
/// followed by every child library in order.
fn merge_libraries(parent: Vec<Library>, child: Vec<Library>) -> Vec<Library> {
    let child_keys: HashSet<String> = child.iter().map(Library::merge_key).collect();

    let mut merged: Vec<Library> = parent
        .into_iter()
        .filter(|lib| {
            let superseded = child_keys.contains(&lib.merge_key());
            if superseded {
                log::debug!("Library {} superseded by child version", lib.name);
            }
            !superseded
        })
        .collect();

    merged.extend(child);
    merged
}

fn merge_arguments(parent: Option<Arguments>, child: Option<Arguments>) -> Option<Arguments> {
    match (parent, child) {
        (Some(mut parent), Some(child)) => {
            parent.game = merge_game_templates(parent.game, child.game);
            parent.jvm.extend(child.jvm);
            Some(parent)
        }
        (None, Some(child)) => Some(child),
        (parent, None) => parent,
    }
}

/// Append the child's game templates to the parent's.
///
/// A `--flag` token already present in the accumulated list is dropped along
/// with the value token that follows it (if that token is not itself a flag),
/// so the first occurrence of a flag wins. Conditional templates are appended
/// only when no structurally equal template is present.
fn merge_game_templates(
    parent: Vec<ArgumentTemplate>,
    child: Vec<ArgumentTemplate>,
) -> Vec<ArgumentTemplate> {
    let mut merged = parent;
    let mut child = child.into_iter().peekable();

    while let Some(template) = child.next() {
        let Some(token) = template.as_plain() else {
            if !merged.contains(&template) {
                merged.push(template);
            }
            continue;
        };

        let duplicate_flag =
            token.starts_with("--") && merged.iter().any(|t| t.as_plain() == Some(token));
        if !duplicate_flag {
            merged.push(template);
            continue;
        }

        log::debug!("Dropping duplicate argument {}", token);
        let next_is_value = child
            .peek()
            .and_then(ArgumentTemplate::as_plain)
            .is_some_and(|next| !next.starts_with("--"));
        if next_is_value {
            child.next();
        }
    }

    merged
}
