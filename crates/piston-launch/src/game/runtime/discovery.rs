/// Finding installed Java runtimes on disk
use crate::game::platform::Arch;
use crate::game::runtime::RuntimeRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

static VERSION_OUTPUT: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"version\s+?.\s*?(\d+)(\.(\d+))?").ok());

/// Scan `dir` for runtime homes.
///
/// Every subdirectory with a readable `release` file becomes a record. The
/// result is sorted by name.
pub fn discover_runtimes(dir: &Path, host: Arch) -> Vec<RuntimeRecord> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("No runtimes directory at {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    let mut runtimes: Vec<RuntimeRecord> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|home| read_runtime(&home, host))
        .collect();

    runtimes.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("Discovered {} runtimes in {:?}", runtimes.len(), dir);
    runtimes
}

/// Build a record from a runtime home's `release` file
pub fn read_runtime(home: &Path, host: Arch) -> Option<RuntimeRecord> {
    let release = std::fs::read_to_string(home.join("release")).ok()?;
    let fields = parse_release(&release);

    let major_version = fields
        .get("JAVA_VERSION")
        .map(|v| parse_java_version(v))
        .unwrap_or(0);
    let arch = fields.get("OS_ARCH").and_then(|a| Arch::from_name(a));
    // A release file without OS_ARCH was built for the host
    let compatible = arch.map_or(true, |arch| arch == host);

    let name = home
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if major_version == 0 {
        log::warn!("Runtime {} has no recognizable JAVA_VERSION", name);
    }
    if !compatible {
        log::debug!("Runtime {} is built for {:?}, host is {:?}", name, arch, host);
    }

    Some(RuntimeRecord {
        name,
        major_version,
        arch,
        compatible,
        home: home.to_path_buf(),
    })
}

/// `KEY="value"` pairs from a JDK `release` file
pub fn parse_release(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            (
                key.trim().to_string(),
                value.trim().trim_matches('"').to_string(),
            )
        })
        .collect()
}

/// Major version from a `JAVA_VERSION` value, 0 when unrecognized.
///
/// "1.8.0_292" -> 8, "17.0.1" -> 17, "21-ea" -> 21
pub fn parse_java_version(version: &str) -> u32 {
    let mut numbers = version
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u32>().ok());

    match numbers.next().flatten() {
        Some(1) => numbers.next().flatten().unwrap_or(0),
        Some(major) => major,
        None => 0,
    }
}

/// Find the java executable in a runtime home
pub fn find_java_executable(dir: &Path) -> Option<PathBuf> {
    // Common layouts:
    // - jre-17/bin/java
    // - zulu-17/zulu-17.0.9/bin/java
    // - jdk-17/Contents/Home/bin/java (macOS)
    let executable_name = if cfg!(windows) { "java.exe" } else { "java" };

    let direct = dir.join("bin").join(executable_name);
    if direct.exists() {
        return Some(direct);
    }

    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            if entry.path().is_dir() {
                let nested = entry.path().join("bin").join(executable_name);
                if nested.exists() {
                    return Some(nested);
                }

                let macos = entry.path().join("Contents/Home/bin").join(executable_name);
                if macos.exists() {
                    return Some(macos);
                }
            }
        }
    }

    let macos = dir.join("Contents/Home/bin").join(executable_name);
    if macos.exists() {
        return Some(macos);
    }

    None
}

/// The `java` on PATH, described by its `release` file or by running
/// `java -version` when the installation has none.
pub fn detect_system_runtime(host: Arch) -> Option<RuntimeRecord> {
    let java = which::which("java").ok()?;
    let java = dunce::canonicalize(&java).unwrap_or(java);

    // <home>/bin/java
    let home = java.parent().and_then(Path::parent)?.to_path_buf();
    if let Some(mut record) = read_runtime(&home, host) {
        record.name = "system".to_string();
        return Some(record);
    }

    let major_version = probe_java_version(&java)?;
    Some(RuntimeRecord {
        name: "system".to_string(),
        major_version,
        arch: None,
        compatible: true,
        home,
    })
}

fn probe_java_version(java: &Path) -> Option<u32> {
    // java -version writes to stderr
    let output = std::process::Command::new(java)
        .arg("-version")
        .output()
        .map_err(|e| log::warn!("Failed to run {:?} -version: {}", java, e))
        .ok()?;

    parse_major_version(&String::from_utf8_lossy(&output.stderr))
}

/// Major version from `java -version` output such as
/// `openjdk version "17.0.1" 2021-10-19` or `java version "1.8.0_311"`
pub fn parse_major_version(version_output: &str) -> Option<u32> {
    let re = VERSION_OUTPUT.as_ref()?;
    let caps = re.captures(version_output)?;
    let major = caps.get(1)?.as_str().parse::<u32>().ok()?;
    if major == 1 {
        return caps.get(3)?.as_str().parse::<u32>().ok();
    }
    Some(major)
}
