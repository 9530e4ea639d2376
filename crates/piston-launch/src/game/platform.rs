/// Host platform as seen by descriptor rules
use crate::utils::hardware::host_os_version;
use serde::{Deserialize, Serialize};

/// Operating system families named by descriptor rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsType {
    Windows,
    Linux,
    #[serde(rename = "osx")]
    MacOS,
}

impl OsType {
    /// Detect the current OS. Android and the BSDs present themselves as Linux.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OsType::Windows
        } else if cfg!(target_os = "macos") {
            OsType::MacOS
        } else {
            OsType::Linux
        }
    }

    /// Parse an OS name as written in rules or configuration
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "windows" => Some(OsType::Windows),
            "linux" | "android" => Some(OsType::Linux),
            "osx" | "macos" => Some(OsType::MacOS),
            _ => None,
        }
    }

    /// Get the OS name as a string (for rule matching)
    pub fn as_str(&self) -> &'static str {
        match self {
            OsType::Windows => "windows",
            OsType::Linux => "linux",
            OsType::MacOS => "osx",
        }
    }

    /// Get the classpath separator for this OS
    pub fn classpath_separator(&self) -> &'static str {
        match self {
            OsType::Windows => ";",
            _ => ":",
        }
    }
}

/// CPU architectures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86,
    X64,
    Arm32,
    Arm64,
}

impl Arch {
    /// Detect the current architecture
    pub fn current() -> Self {
        Arch::from_name(std::env::consts::ARCH).unwrap_or(Arch::X64)
    }

    /// Normalize the many spellings found in rules and JDK `release` files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "x86" | "i386" | "i486" | "i586" | "i686" => Some(Arch::X86),
            "x64" | "x86_64" | "amd64" => Some(Arch::X64),
            "arm" | "arm32" | "armv7" | "armv7l" | "aarch32" => Some(Arch::Arm32),
            "arm64" | "aarch64" => Some(Arch::Arm64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::X64 => "x86_64",
            Arch::Arm32 => "arm32",
            Arch::Arm64 => "arm64",
        }
    }
}

/// The platform rules are evaluated against.
///
/// Passed explicitly rather than detected at each call so a host can present
/// itself as another OS (an Android device launches the Linux build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: OsType,
    pub arch: Arch,
    /// Matched by `os.version` regexes; empty when unknown
    pub os_version: String,
}

impl Platform {
    pub fn new(os: OsType, arch: Arch) -> Self {
        Platform {
            os,
            arch,
            os_version: String::new(),
        }
    }

    pub fn current() -> Self {
        Platform {
            os: OsType::current(),
            arch: Arch::current(),
            os_version: host_os_version(),
        }
    }

    pub fn classpath_separator(&self) -> &'static str {
        self.os.classpath_separator()
    }
}
