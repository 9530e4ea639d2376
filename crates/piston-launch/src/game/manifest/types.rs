/// Version descriptor types, in the shape of a launcher `version.json`
use crate::game::manifest::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One installable game version, or a loader profile layered on top of one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    /// Version ID (e.g., "1.20.1" or "fabric-loader-0.15.7-1.20.1")
    pub id: String,

    /// Parent version this descriptor overlays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits_from: Option<String>,

    /// Main class to execute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_class: Option<String>,

    /// Templated game and JVM arguments (1.13+)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Arguments>,

    /// Legacy space-delimited game arguments (pre-1.13)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minecraft_arguments: Option<String>,

    #[serde(default)]
    pub libraries: Vec<Library>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_index: Option<AssetIndex>,

    /// Assets version (legacy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_version: Option<JavaVersion>,

    /// Version type (release, snapshot, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub version_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Version whose client jar this descriptor runs on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
}

impl VersionDescriptor {
    /// Whether the client arguments use the templated (1.13+) format
    pub fn has_modern_arguments(&self) -> bool {
        self.arguments.is_some()
    }

    /// Id of the version providing the client jar
    pub fn client_jar_id(&self) -> &str {
        self.jar.as_deref().unwrap_or(&self.id)
    }

    /// The asset index name used for `${assets_index_name}`
    pub fn assets_id(&self) -> Option<&str> {
        self.asset_index
            .as_ref()
            .map(|index| index.id.as_str())
            .or(self.assets.as_deref())
    }
}

/// Game and JVM argument templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub game: Vec<ArgumentTemplate>,

    #[serde(default)]
    pub jvm: Vec<ArgumentTemplate>,
}

/// A single argument template: a bare token or a rule-gated group of tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentTemplate {
    Plain(String),

    Conditional {
        rules: Vec<Rule>,
        value: ArgumentValue,
    },
}

impl ArgumentTemplate {
    pub fn plain(token: impl Into<String>) -> Self {
        ArgumentTemplate::Plain(token.into())
    }

    pub fn as_plain(&self) -> Option<&str> {
        match self {
            ArgumentTemplate::Plain(token) => Some(token),
            ArgumentTemplate::Conditional { .. } => None,
        }
    }
}

/// Value of a conditional argument, either one token or several
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    One(String),
    Many(Vec<String>),
}

impl ArgumentValue {
    pub fn tokens(&self) -> &[String] {
        match self {
            ArgumentValue::One(token) => std::slice::from_ref(token),
            ArgumentValue::Many(tokens) => tokens,
        }
    }
}

/// Platform predicate on a library or argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub action: RuleAction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<OsRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<BTreeMap<String, bool>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Disallow,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Regex matched against the host OS version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
}

/// Library entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    /// Maven coordinates (`group:artifact:version[:classifier][@ext]`)
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<LibraryDownloads>,

    /// Custom Maven repository base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,

    /// Legacy native classifiers keyed by OS name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<ExtractRules>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Library {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::parse(&self.name)
    }

    /// Identity used when a child descriptor supersedes a parent library:
    /// `group:artifact`, or the raw name when it is not a maven coordinate.
    pub fn merge_key(&self) -> String {
        match self.coordinate() {
            Some(coord) => coord.key(),
            None => self.name.clone(),
        }
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.downloads.as_ref().and_then(|d| d.artifact.as_ref())
    }

    /// Path of the main jar relative to the libraries directory
    pub fn artifact_path(&self) -> Option<String> {
        if let Some(path) = self.artifact().and_then(|a| a.path.clone()) {
            return Some(path);
        }
        self.coordinate().map(|coord| coord.to_path())
    }

    /// Libraries that only ship per-OS native archives and have no classes
    /// for the classpath.
    pub fn is_native_only(&self) -> bool {
        if let Some(coord) = self.coordinate() {
            if coord
                .classifier
                .as_deref()
                .is_some_and(|c| c.starts_with("natives-"))
            {
                return true;
            }
        }
        self.natives.is_some() && self.artifact().is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryDownloads {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Artifact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifiers: Option<BTreeMap<String, Artifact>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractRules {
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Asset index reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetIndex {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Java version requirement
///
/// Vanilla descriptors set `majorVersion`; some third-party profiles only set
/// `version`. Zero means unspecified in both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default)]
    pub major_version: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl JavaVersion {
    pub fn major(major_version: u32) -> Self {
        JavaVersion {
            major_version,
            ..Default::default()
        }
    }

    /// The declared major version, or `None` when neither field is set
    pub fn required_major(&self) -> Option<u32> {
        match (self.major_version, self.version) {
            (0, 0) => None,
            (0, version) => Some(version),
            (major, _) => Some(major),
        }
    }
}

/// Log4j configuration shipped with the version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<LoggingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingEntry {
    /// JVM argument template, e.g. `-Dlog4j.configurationFile=${path}`
    pub argument: String,
    pub file: LoggingFile,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingFile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
