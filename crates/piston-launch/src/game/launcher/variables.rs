/// Standard `${...}` substitution values for a launch
use crate::game::launcher::types::{LaunchContext, PlayerProfile};
use crate::game::manifest::types::VersionDescriptor;
use dunce::canonicalize;
use std::collections::HashMap;
use std::path::Path;

/// Canonical form of `path` when it exists, otherwise the path as given
fn path_string(path: &Path) -> String {
    canonicalize(path)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string())
}

/// Build the substitution map for a player, a context and a resolved
/// descriptor. `classpath` is added by the assembler.
pub fn launch_variables(
    profile: &PlayerProfile,
    ctx: &LaunchContext,
    descriptor: &VersionDescriptor,
) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    // Player
    vars.insert("auth_player_name".to_string(), profile.username.clone());
    vars.insert("auth_uuid".to_string(), profile.uuid.clone());
    vars.insert("auth_access_token".to_string(), profile.access_token.clone());
    // 1.5 and older pass the token as a session id
    vars.insert("auth_session".to_string(), profile.access_token.clone());
    vars.insert("user_type".to_string(), profile.user_type.clone());
    vars.insert(
        "auth_xuid".to_string(),
        profile.xuid.clone().unwrap_or_else(|| "0".to_string()),
    );
    vars.insert(
        "clientid".to_string(),
        profile.client_id.clone().unwrap_or_else(|| "0".to_string()),
    );
    vars.insert("user_properties".to_string(), "{}".to_string());

    // Version
    vars.insert("version_name".to_string(), descriptor.id.clone());
    vars.insert(
        "version_type".to_string(),
        descriptor
            .version_type
            .clone()
            .unwrap_or_else(|| "release".to_string()),
    );
    if let Some(assets_id) = descriptor.assets_id() {
        vars.insert("assets_index_name".to_string(), assets_id.to_string());
    }

    // Directories
    vars.insert("game_directory".to_string(), path_string(&ctx.game_dir));
    let assets_root = path_string(&ctx.assets_dir);
    vars.insert("assets_root".to_string(), assets_root.clone());
    // Legacy versions (1.0 - 1.5) read ${game_assets}
    vars.insert("game_assets".to_string(), assets_root);
    vars.insert(
        "natives_directory".to_string(),
        path_string(&ctx.natives_dir),
    );
    vars.insert(
        "library_directory".to_string(),
        path_string(&ctx.libraries_dir),
    );
    vars.insert(
        "classpath_separator".to_string(),
        ctx.platform.classpath_separator().to_string(),
    );

    // Launcher
    vars.insert("launcher_name".to_string(), ctx.launcher_name.clone());
    vars.insert("launcher_version".to_string(), ctx.launcher_version.clone());

    if let Some((width, height)) = ctx.resolution {
        vars.insert("resolution_width".to_string(), width.to_string());
        vars.insert("resolution_height".to_string(), height.to_string());
    }

    vars
}
