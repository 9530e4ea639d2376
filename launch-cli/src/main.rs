use anyhow::{Context, Result};
use argh::FromArgs;
use piston_launch::game::launcher::{launch_variables, missing_libraries};
use piston_launch::game::runtime::{detect_system_runtime, discover_runtimes};
use piston_launch::{ArgumentAssembler, DescriptorStore, PlayerProfile, RuntimeRecord};
use std::path::PathBuf;

mod config;

use crate::config::LauncherConfig;

/// Resolve Minecraft version manifests and build JVM launch arguments
#[derive(FromArgs)]
struct Cli {
    /// config file (defaults to the platform config directory)
    #[argh(option)]
    config: Option<PathBuf>,

    /// data directory holding versions/, libraries/ and assets/
    #[argh(option)]
    data_dir: Option<PathBuf>,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Resolve(ResolveCmd),
    Args(ArgsCmd),
    Runtimes(RuntimesCmd),
    Version(VersionCmd),
}

/// print the resolved version manifest as JSON
#[derive(FromArgs)]
#[argh(subcommand, name = "resolve")]
struct ResolveCmd {
    #[argh(positional)]
    id: String,
}

/// print the launch command line, one argument per line
#[derive(FromArgs)]
#[argh(subcommand, name = "args")]
struct ArgsCmd {
    #[argh(positional)]
    id: String,
    /// offline player name
    #[argh(option, default = "String::from(\"Player\")")]
    username: String,
}

/// list discovered Java runtimes
#[derive(FromArgs)]
#[argh(subcommand, name = "runtimes")]
struct RuntimesCmd {}

/// print version
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Runtimes under the configured directory, plus the `java` on PATH
fn available_runtimes(config: &LauncherConfig) -> Result<Vec<RuntimeRecord>> {
    let platform = config.platform();
    let mut runtimes = discover_runtimes(&config.runtimes_dir()?, platform.arch);
    if let Some(system) = detect_system_runtime(platform.arch) {
        runtimes.push(system);
    }
    Ok(runtimes)
}

async fn resolve(config: &LauncherConfig, cmd: ResolveCmd) -> Result<()> {
    let store = DescriptorStore::from_data_dir(&config.data_dir()?);
    let resolved = store
        .resolve(&cmd.id)
        .await
        .with_context(|| format!("Failed to resolve version {}", cmd.id))?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

async fn args(config: &LauncherConfig, cmd: ArgsCmd) -> Result<()> {
    let data_dir = config.data_dir()?;
    let store = DescriptorStore::from_data_dir(&data_dir);
    let resolved = store
        .resolve(&cmd.id)
        .await
        .with_context(|| format!("Failed to resolve version {}", cmd.id))?;

    let runtimes = available_runtimes(config)?;
    let runtime = config
        .runtime_selector()
        .select_for(&resolved, &runtimes)?;

    let ctx = config.launch_context(&data_dir, &resolved);
    for path in missing_libraries(&resolved.libraries, &ctx) {
        log::warn!("Missing classpath entry: {}", path.display());
    }

    let profile = PlayerProfile::offline(cmd.username);
    let substitutions = launch_variables(&profile, &ctx, &resolved);
    let argv = ArgumentAssembler::new(&ctx).assemble(&resolved, runtime, &substitutions)?;

    let java = runtime.java_executable().unwrap_or_else(|| {
        log::warn!("No java executable found in {}", runtime.home.display());
        runtime.home.join("bin").join("java")
    });
    println!("{}", java.display());
    for arg in argv {
        println!("{}", arg);
    }
    Ok(())
}

fn runtimes(config: &LauncherConfig) -> Result<()> {
    for runtime in available_runtimes(config)? {
        let arch = runtime.arch.map(|a| a.as_str()).unwrap_or("unknown");
        let status = if runtime.compatible { "" } else { " (incompatible)" };
        println!(
            "{}\tJava {}\t{}\t{}{}",
            runtime.name,
            runtime.major_version,
            arch,
            runtime.home.display(),
            status
        );
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    let mut config = match cli.config.or_else(LauncherConfig::default_path) {
        Some(path) => LauncherConfig::load(&path)?,
        None => LauncherConfig::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    init_logging(config.debug_logging);

    match cli.command {
        Command::Resolve(cmd) => resolve(&config, cmd).await,
        Command::Args(cmd) => args(&config, cmd).await,
        Command::Runtimes(_) => runtimes(&config),
        Command::Version(_) => {
            println!("piston-launch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
