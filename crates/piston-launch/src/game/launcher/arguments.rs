/// Argument assembly for launching a resolved version
use crate::error::{LaunchError, Result};
use crate::game::launcher::classpath::build_classpath;
use crate::game::launcher::types::LaunchContext;
use crate::game::manifest::rules::rules_allow;
use crate::game::manifest::types::{ArgumentTemplate, VersionDescriptor};
use crate::game::runtime::RuntimeRecord;
use std::collections::HashMap;

/// Runtimes above this major version get module flags for loaders that
/// reach into JDK internals.
pub const MODULE_FLAGS_AFTER: u32 = 8;

const LIBRARY_PATH_PREFIX: &str = "-Djava.library.path=";

struct ModuleFlags {
    /// Main class package prefix
    prefix: &'static str,
    flags: &'static [(&'static str, &'static str)],
}

const MODULE_FLAGS: &[ModuleFlags] = &[
    ModuleFlags {
        prefix: "net.minecraft.launchwrapper",
        flags: &[
            ("--add-opens", "java.base/java.lang=ALL-UNNAMED"),
            ("--add-opens", "java.base/java.util=ALL-UNNAMED"),
            ("--add-opens", "java.base/java.net=ALL-UNNAMED"),
        ],
    },
    ModuleFlags {
        prefix: "cpw.mods",
        flags: &[
            ("--add-opens", "java.base/java.util.jar=cpw.mods.securejarhandler"),
            ("--add-opens", "java.base/java.lang.invoke=cpw.mods.securejarhandler"),
            ("--add-exports", "java.base/sun.security.util=cpw.mods.securejarhandler"),
            ("--add-exports", "jdk.naming.dns/com.sun.jndi.dns=java.naming"),
        ],
    },
    ModuleFlags {
        prefix: "net.fabricmc.loader",
        flags: &[("--add-opens", "java.base/java.lang=ALL-UNNAMED")],
    },
    ModuleFlags {
        prefix: "org.quiltmc.loader",
        flags: &[("--add-opens", "java.base/java.lang=ALL-UNNAMED")],
    },
];

/// Builds the JVM command line (without the java executable) for a resolved
/// descriptor.
///
/// The output is, in order: fixed flags from the context, the descriptor's
/// JVM arguments, `-cp <classpath>`, module flags, the main class and the
/// game arguments.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentAssembler<'a> {
    context: &'a LaunchContext,
}

impl<'a> ArgumentAssembler<'a> {
    pub fn new(context: &'a LaunchContext) -> Self {
        Self { context }
    }

    pub fn assemble(
        &self,
        descriptor: &VersionDescriptor,
        runtime: &RuntimeRecord,
        substitutions: &HashMap<String, String>,
    ) -> Result<Vec<String>> {
        let main_class = descriptor
            .main_class
            .as_deref()
            .filter(|class| !class.is_empty())
            .ok_or_else(|| LaunchError::invalid(&descriptor.id, "missing mainClass"))?;

        let classpath = build_classpath(&descriptor.libraries, self.context);
        let variables = self.variables(substitutions, &classpath);

        let descriptor_jvm = self.descriptor_jvm_args(descriptor, &variables)?;
        let mut args = self.fixed_jvm_args(&descriptor_jvm);
        args.extend(descriptor_jvm);

        args.push("-cp".to_string());
        args.push(classpath);

        if runtime.major_version > MODULE_FLAGS_AFTER {
            let flags = module_flags(main_class, &args);
            if !flags.is_empty() {
                log::debug!(
                    "Adding {} module flags for {} on Java {}",
                    flags.len() / 2,
                    main_class,
                    runtime.major_version
                );
            }
            args.extend(flags);
        }

        args.push(main_class.to_string());
        args.extend(self.game_args(descriptor, &variables)?);

        log::debug!(
            "Assembled {} arguments for {} on runtime {}",
            args.len(),
            descriptor.id,
            runtime.name
        );
        Ok(args)
    }

    /// Caller substitutions plus the keys the context owns; caller entries win
    fn variables(
        &self,
        substitutions: &HashMap<String, String>,
        classpath: &str,
    ) -> HashMap<String, String> {
        let ctx = self.context;
        let mut vars = substitutions.clone();
        let context_keys = [
            ("natives_directory", ctx.natives_dir.to_string_lossy().into_owned()),
            ("library_directory", ctx.libraries_dir.to_string_lossy().into_owned()),
            (
                "classpath_separator",
                ctx.platform.classpath_separator().to_string(),
            ),
            ("launcher_name", ctx.launcher_name.clone()),
            ("launcher_version", ctx.launcher_version.clone()),
            ("classpath", classpath.to_string()),
        ];
        for (key, value) in context_keys {
            vars.entry(key.to_string()).or_insert(value);
        }
        vars
    }

    /// Heap, library path, logging config, launcher brand and user properties
    fn fixed_jvm_args(&self, descriptor_jvm: &[String]) -> Vec<String> {
        let ctx = self.context;
        let mut args = ctx.jvm_args.clone();

        // Explicit heap flags in the user's arguments win
        if !args.iter().any(|arg| arg.starts_with("-Xms")) {
            args.push(format!("-Xms{}M", ctx.min_memory_mb));
        }
        if !args.iter().any(|arg| arg.starts_with("-Xmx")) {
            args.push(format!("-Xmx{}M", ctx.max_memory_mb));
        }

        let defaults = [
            ("java.library.path", Some(ctx.library_path())),
            (
                "log4j.configurationFile",
                ctx.logging_config
                    .as_ref()
                    .map(|path| path.to_string_lossy().into_owned()),
            ),
            ("minecraft.launcher.brand", Some(ctx.launcher_name.clone())),
            (
                "minecraft.launcher.version",
                Some(ctx.launcher_version.clone()),
            ),
        ];
        for (key, value) in defaults {
            let Some(value) = value else { continue };
            if ctx.system_properties.contains_key(key) {
                continue;
            }
            push_property(&mut args, descriptor_jvm, key, &value);
        }

        for (key, value) in &ctx.system_properties {
            push_property(&mut args, descriptor_jvm, key, value);
        }

        args
    }

    /// The descriptor's JVM templates, rule-filtered and substituted.
    /// Classpath tokens are dropped since the classpath is added separately.
    fn descriptor_jvm_args(
        &self,
        descriptor: &VersionDescriptor,
        variables: &HashMap<String, String>,
    ) -> Result<Vec<String>> {
        let Some(ref arguments) = descriptor.arguments else {
            return Ok(Vec::new());
        };

        let mut args = Vec::new();
        let mut skip_value = false;
        for token in self.allowed_tokens(&arguments.jvm) {
            if skip_value {
                skip_value = false;
                continue;
            }
            if token == "-cp" || token == "-classpath" {
                skip_value = true;
                continue;
            }
            if token.contains("${classpath}") {
                continue;
            }
            let arg = substitute(token, variables)?;
            args.push(self.with_extra_library_paths(arg));
        }
        Ok(args)
    }

    /// Append the context's extra library paths to a `java.library.path`
    /// set by the descriptor
    fn with_extra_library_paths(&self, mut arg: String) -> String {
        let ctx = self.context;
        if ctx.extra_library_paths.is_empty() || !arg.starts_with(LIBRARY_PATH_PREFIX) {
            return arg;
        }
        for path in &ctx.extra_library_paths {
            arg.push_str(ctx.platform.classpath_separator());
            arg.push_str(&path.to_string_lossy());
        }
        arg
    }

    /// Modern game templates, or the legacy argument string split on whitespace
    fn game_args(
        &self,
        descriptor: &VersionDescriptor,
        variables: &HashMap<String, String>,
    ) -> Result<Vec<String>> {
        let modern = descriptor
            .arguments
            .as_ref()
            .filter(|arguments| !arguments.game.is_empty());

        match modern {
            Some(arguments) => self
                .allowed_tokens(&arguments.game)
                .into_iter()
                .map(|token| substitute(token, variables))
                .collect(),
            None => descriptor
                .minecraft_arguments
                .as_deref()
                .unwrap_or_default()
                .split_whitespace()
                .map(|token| substitute(token, variables))
                .collect(),
        }
    }

    /// Tokens of every template whose rules allow it on this platform
    fn allowed_tokens<'t>(&self, templates: &'t [ArgumentTemplate]) -> Vec<&'t str> {
        let ctx = self.context;
        let mut tokens = Vec::new();
        for template in templates {
            match template {
                ArgumentTemplate::Plain(token) => tokens.push(token.as_str()),
                ArgumentTemplate::Conditional { rules, value } => {
                    if rules_allow(Some(rules.as_slice()), &ctx.platform, &ctx.features) {
                        tokens.extend(value.tokens().iter().map(String::as_str));
                    }
                }
            }
        }
        tokens
    }
}

/// Add `-D<key>=<value>` unless the descriptor or earlier flags already set it
fn push_property(args: &mut Vec<String>, descriptor_jvm: &[String], key: &str, value: &str) {
    if sets_property(descriptor_jvm, key) || sets_property(args, key) {
        log::debug!("JVM property {} already set, skipping", key);
        return;
    }
    args.push(format!("-D{}={}", key, value));
}

fn sets_property(args: &[String], key: &str) -> bool {
    let prefix = format!("-D{}=", key);
    args.iter().any(|arg| arg.starts_with(&prefix))
}

/// Module flags for `main_class` that are not already in `existing`
fn module_flags(main_class: &str, existing: &[String]) -> Vec<String> {
    let Some(entry) = MODULE_FLAGS
        .iter()
        .find(|entry| main_class.starts_with(entry.prefix))
    else {
        return Vec::new();
    };

    let mut flags = Vec::new();
    for (flag, value) in entry.flags {
        if has_flag_pair(existing, flag, value) {
            continue;
        }
        flags.push(flag.to_string());
        flags.push(value.to_string());
    }
    flags
}

fn has_flag_pair(args: &[String], flag: &str, value: &str) -> bool {
    let joined = format!("{}={}", flag, value);
    args.windows(2).any(|pair| pair[0] == flag && pair[1] == value)
        || args.iter().any(|arg| *arg == joined)
}

/// Replace every `${key}` in `template` with its value.
///
/// Substitution is a single pass: inserted values are not scanned again. An
/// unterminated `${` is kept as literal text; a key missing from `variables`
/// is an error.
pub fn substitute(template: &str, variables: &HashMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };

        let key = &after[..end];
        let value = variables
            .get(key)
            .ok_or_else(|| LaunchError::UnresolvedToken {
                token: key.to_string(),
                template: template.to_string(),
            })?;

        out.push_str(&rest[..start]);
        out.push_str(value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::manifest::types::{Arguments, AssetIndex, Library};
    use crate::game::platform::{Arch, OsType, Platform};
    use std::path::Path;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn plain(tokens: &[&str]) -> Vec<ArgumentTemplate> {
        tokens.iter().map(|t| ArgumentTemplate::plain(*t)).collect()
    }

    fn template(json: serde_json::Value) -> ArgumentTemplate {
        serde_json::from_value(json).unwrap()
    }

    fn modern() -> VersionDescriptor {
        let mut jvm = vec![template(serde_json::json!({
            "rules": [{ "action": "allow", "os": { "name": "osx" } }],
            "value": ["-XstartOnFirstThread"]
        }))];
        jvm.extend(plain(&[
            "-Djava.library.path=${natives_directory}",
            "-Dminecraft.launcher.brand=${launcher_name}",
            "-cp",
            "${classpath}",
        ]));

        let mut game = plain(&["--username", "${auth_player_name}", "--version", "${version_name}"]);
        game.push(template(serde_json::json!({
            "rules": [{ "action": "allow", "features": { "has_custom_resolution": true } }],
            "value": ["--width", "${resolution_width}", "--height", "${resolution_height}"]
        })));

        VersionDescriptor {
            id: "1.20.1".to_string(),
            main_class: Some("net.minecraft.client.main.Main".to_string()),
            arguments: Some(Arguments { game, jvm }),
            libraries: vec![
                Library::new("com.mojang:logging:1.1.1"),
                Library::new("org.lwjgl:lwjgl:3.3.1"),
            ],
            asset_index: Some(AssetIndex {
                id: "5".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn context(descriptor: &VersionDescriptor) -> LaunchContext {
        LaunchContext::for_version(
            Path::new("/data"),
            descriptor,
            Platform::new(OsType::Linux, Arch::X64),
        )
        .with_memory(512, 2048)
    }

    fn runtime(major: u32) -> RuntimeRecord {
        RuntimeRecord::new(format!("jre-{}", major), major, Arch::X64)
    }

    fn player() -> HashMap<String, String> {
        vars(&[("auth_player_name", "Steve"), ("version_name", "1.20.1")])
    }

    #[test]
    fn test_substitute_variables() {
        let vars = vars(&[("username", "Player"), ("version", "1.20.1")]);
        let result = substitute("--username=${username}:${version}", &vars).unwrap();
        assert_eq!(result, "--username=Player:1.20.1");
    }

    #[test]
    fn test_substitute_missing_key_is_error() {
        let err = substitute("--username ${username}", &HashMap::new()).unwrap_err();
        match err {
            LaunchError::UnresolvedToken { token, template } => {
                assert_eq!(token, "username");
                assert_eq!(template, "--username ${username}");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_substitute_is_single_pass() {
        let vars = vars(&[("a", "${b}"), ("b", "x")]);
        assert_eq!(substitute("${a}", &vars).unwrap(), "${b}");
    }

    #[test]
    fn test_substitute_unterminated_is_literal() {
        let vars = vars(&[("a", "1")]);
        assert_eq!(substitute("${a}-${broken", &vars).unwrap(), "1-${broken");
        assert_eq!(substitute("no placeholders", &vars).unwrap(), "no placeholders");
    }

    #[test]
    fn assembles_in_order() {
        let descriptor = modern();
        let ctx = context(&descriptor);
        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap();

        let classpath = "/data/libraries/com/mojang/logging/1.1.1/logging-1.1.1.jar:\
                         /data/libraries/org/lwjgl/lwjgl/3.3.1/lwjgl-3.3.1.jar:\
                         /data/versions/1.20.1/1.20.1.jar";
        let version_flag = format!("-Dminecraft.launcher.version={}", ctx.launcher_version);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        assert_eq!(
            args,
            vec![
                "-Xms512M",
                "-Xmx2048M",
                version_flag.as_str(),
                "-Djava.library.path=/data/natives/1.20.1",
                "-Dminecraft.launcher.brand=piston-launch",
                "-cp",
                classpath,
                "net.minecraft.client.main.Main",
                "--username",
                "Steve",
                "--version",
                "1.20.1",
            ]
        );
    }

    #[test]
    fn exactly_one_classpath_and_main_class() {
        let descriptor = modern();
        let ctx = context(&descriptor);
        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap();

        assert_eq!(args.iter().filter(|a| *a == "-cp").count(), 1);
        let cp = args.iter().position(|a| a == "-cp").unwrap();
        assert!(!args[cp + 1].is_empty());
        assert_eq!(
            args.iter()
                .filter(|a| *a == "net.minecraft.client.main.Main")
                .count(),
            1
        );
        assert!(!args.iter().any(|a| a.contains("${")));
    }

    #[test]
    fn fixed_property_skipped_when_descriptor_sets_it() {
        let descriptor = modern();
        let ctx = context(&descriptor);
        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap();

        assert_eq!(
            args.iter()
                .filter(|a| a.starts_with("-Djava.library.path="))
                .count(),
            1
        );
        assert_eq!(
            args.iter()
                .filter(|a| a.starts_with("-Dminecraft.launcher.brand="))
                .count(),
            1
        );
    }

    #[test]
    fn extra_library_paths_extend_descriptor_value() {
        let descriptor = modern();
        let mut ctx = context(&descriptor);
        ctx.extra_library_paths.push("/system/lib64".into());
        ctx.extra_library_paths.push("/vendor/lib64".into());

        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap();
        let library_paths: Vec<&String> = args
            .iter()
            .filter(|a| a.starts_with("-Djava.library.path="))
            .collect();
        assert_eq!(
            library_paths,
            vec!["-Djava.library.path=/data/natives/1.20.1:/system/lib64:/vendor/lib64"]
        );
    }

    #[test]
    fn extra_library_paths_in_fixed_flag() {
        let descriptor = VersionDescriptor {
            id: "1.12.2".to_string(),
            main_class: Some("net.minecraft.client.main.Main".to_string()),
            minecraft_arguments: Some("--username ${auth_player_name}".to_string()),
            ..Default::default()
        };
        let mut ctx = context(&descriptor);
        ctx.extra_library_paths.push("/system/lib64".into());

        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(8), &player())
            .unwrap();
        assert!(args.contains(&"-Djava.library.path=/data/natives/1.12.2:/system/lib64".to_string()));
    }

    #[test]
    fn unresolved_jvm_placeholder_fails() {
        let mut descriptor = modern();
        if let Some(arguments) = descriptor.arguments.as_mut() {
            arguments.jvm.push(ArgumentTemplate::plain("-Dfoo=${missing}"));
        }
        let ctx = context(&descriptor);
        let err = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap_err();
        match err {
            LaunchError::UnresolvedToken { token, template } => {
                assert_eq!(token, "missing");
                assert_eq!(template, "-Dfoo=${missing}");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn dropped_classpath_tokens_are_not_substituted() {
        let mut descriptor = modern();
        if let Some(arguments) = descriptor.arguments.as_mut() {
            arguments.jvm.extend(plain(&[
                "-classpath",
                "${unknown_classpath}",
                "-Dcp=${classpath}",
            ]));
        }
        let ctx = context(&descriptor);
        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap();
        assert!(!args.iter().any(|a| a.contains("${")));
        assert!(!args.iter().any(|a| a == "-classpath" || a.starts_with("-Dcp=")));
        assert_eq!(args.iter().filter(|a| *a == "-cp").count(), 1);
    }

    #[test]
    fn legacy_argument_string() {
        let descriptor = VersionDescriptor {
            id: "1.12.2".to_string(),
            main_class: Some("net.minecraft.client.main.Main".to_string()),
            minecraft_arguments: Some(
                "--username ${auth_player_name}  --version ${version_name} --assetIndex ${assets_index_name}"
                    .to_string(),
            ),
            ..Default::default()
        };
        let ctx = context(&descriptor);
        let mut subs = player();
        subs.insert("assets_index_name".to_string(), "1.12".to_string());

        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(8), &subs)
            .unwrap();
        let main = args
            .iter()
            .position(|a| a == "net.minecraft.client.main.Main")
            .unwrap();
        assert_eq!(
            &args[main + 1..],
            &["--username", "Steve", "--version", "1.20.1", "--assetIndex", "1.12"]
        );
        assert!(args.contains(&"-Djava.library.path=/data/natives/1.12.2".to_string()));
    }

    #[test]
    fn feature_gated_arguments() {
        let descriptor = modern();
        let ctx = context(&descriptor).with_resolution(854, 480);
        let mut subs = player();
        subs.insert("resolution_width".to_string(), "854".to_string());
        subs.insert("resolution_height".to_string(), "480".to_string());

        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &subs)
            .unwrap();
        assert!(args.ends_with(&[
            "--width".to_string(),
            "854".to_string(),
            "--height".to_string(),
            "480".to_string()
        ]));
    }

    #[test]
    fn platform_gated_jvm_arguments() {
        let descriptor = modern();
        let mut ctx = context(&descriptor);
        ctx.platform = Platform::new(OsType::MacOS, Arch::Arm64);

        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap();
        assert!(args.contains(&"-XstartOnFirstThread".to_string()));
    }

    #[test]
    fn unresolved_game_placeholder_fails() {
        let descriptor = modern();
        let ctx = context(&descriptor);
        let err = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &HashMap::new())
            .unwrap_err();
        assert!(matches!(err, LaunchError::UnresolvedToken { .. }));
    }

    #[test]
    fn caller_substitutions_win_over_context() {
        let descriptor = modern();
        let ctx = context(&descriptor);
        let mut subs = player();
        subs.insert("natives_directory".to_string(), "/custom/natives".to_string());

        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &subs)
            .unwrap();
        assert!(args.contains(&"-Djava.library.path=/custom/natives".to_string()));
    }

    #[test]
    fn user_flags_come_first() {
        let descriptor = modern();
        let mut ctx = context(&descriptor).with_jvm_args_line("-Xmx6G -XX:+UseG1GC");
        ctx.system_properties
            .insert("fml.ignoreInvalidMinecraftCertificates".to_string(), "true".to_string());

        let args = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap();
        assert_eq!(&args[..3], &["-Xmx6G", "-XX:+UseG1GC", "-Xms512M"]);
        assert!(!args.contains(&"-Xmx2048M".to_string()));
        assert!(args.contains(&"-Dfml.ignoreInvalidMinecraftCertificates=true".to_string()));
    }

    #[test]
    fn module_flags_only_on_newer_runtimes() {
        let descriptor = VersionDescriptor {
            id: "1.12.2-forge".to_string(),
            main_class: Some("net.minecraft.launchwrapper.Launch".to_string()),
            minecraft_arguments: Some("--username ${auth_player_name}".to_string()),
            ..Default::default()
        };
        let ctx = context(&descriptor);

        let on_8 = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(8), &player())
            .unwrap();
        assert!(!on_8.iter().any(|a| a == "--add-opens"));

        let on_17 = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap();
        let cp = on_17.iter().position(|a| a == "-cp").unwrap();
        let main = on_17
            .iter()
            .position(|a| a == "net.minecraft.launchwrapper.Launch")
            .unwrap();
        assert_eq!(
            &on_17[cp + 2..main],
            &[
                "--add-opens",
                "java.base/java.lang=ALL-UNNAMED",
                "--add-opens",
                "java.base/java.util=ALL-UNNAMED",
                "--add-opens",
                "java.base/java.net=ALL-UNNAMED"
            ]
        );
    }

    #[test]
    fn module_flags_not_duplicated() {
        let existing = vec![
            "--add-opens".to_string(),
            "java.base/java.util.jar=cpw.mods.securejarhandler".to_string(),
            "--add-exports=jdk.naming.dns/com.sun.jndi.dns=java.naming".to_string(),
        ];
        let flags = module_flags("cpw.mods.bootstraplauncher.BootstrapLauncher", &existing);
        assert_eq!(
            flags,
            vec![
                "--add-opens",
                "java.base/java.lang.invoke=cpw.mods.securejarhandler",
                "--add-exports",
                "java.base/sun.security.util=cpw.mods.securejarhandler"
            ]
        );
        assert!(module_flags("net.minecraft.client.main.Main", &[]).is_empty());
    }

    #[test]
    fn missing_main_class_is_invalid() {
        let mut descriptor = modern();
        descriptor.main_class = None;
        let ctx = context(&descriptor);
        let err = ArgumentAssembler::new(&ctx)
            .assemble(&descriptor, &runtime(17), &player())
            .unwrap_err();
        assert!(matches!(err, LaunchError::ManifestInvalid { .. }));
    }

    #[test]
    fn assembly_is_deterministic() {
        let descriptor = modern();
        let ctx = context(&descriptor).with_resolution(800, 600);
        let mut subs = player();
        subs.insert("resolution_width".to_string(), "800".to_string());
        subs.insert("resolution_height".to_string(), "600".to_string());

        let assembler = ArgumentAssembler::new(&ctx);
        let first = assembler.assemble(&descriptor, &runtime(17), &subs).unwrap();
        let second = assembler.assemble(&descriptor, &runtime(17), &subs).unwrap();
        assert_eq!(first, second);
    }
}
