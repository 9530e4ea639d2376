use std::fmt;

/// Parsed maven coordinates
/// Format: group:artifact:version[:classifier][@extension]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
    pub extension: String,
}

impl Coordinate {
    /// Returns `None` for names with fewer than three `:`-separated parts.
    pub fn parse(coords: &str) -> Option<Self> {
        let parts: Vec<&str> = coords.split(':').collect();
        if parts.len() < 3 || parts[..3].iter().any(|p| p.is_empty()) {
            return None;
        }

        let mut version = parts[2];
        let mut classifier = None;
        let mut extension = "jar";

        if parts.len() == 3 {
            // group:artifact:version@extension
            if let Some((v, ext)) = version.split_once('@') {
                version = v;
                extension = ext;
            }
        } else {
            // group:artifact:version:classifier[@extension]
            match parts[3].split_once('@') {
                Some((clf, ext)) => {
                    classifier = Some(clf);
                    extension = ext;
                }
                None => classifier = Some(parts[3]),
            }
        }

        Some(Coordinate {
            group: parts[0].to_string(),
            artifact: parts[1].to_string(),
            version: version.to_string(),
            classifier: classifier.filter(|c| !c.is_empty()).map(str::to_string),
            extension: extension.to_string(),
        })
    }

    /// `group:artifact`, the identity of a logical library
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Relative repository path,
    /// e.g. "com.google.guava:guava:21.0" -> "com/google/guava/guava/21.0/guava-21.0.jar"
    pub fn to_path(&self) -> String {
        let filename = match &self.classifier {
            Some(clf) => format!(
                "{}-{}-{}.{}",
                self.artifact, self.version, clf, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact, self.version, self.extension),
        };

        format!(
            "{}/{}/{}/{}",
            self.group.replace('.', "/"),
            self.artifact,
            self.version,
            filename
        )
    }

    pub fn with_version(&self, version: &str) -> Self {
        Coordinate {
            version: version.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(clf) = &self.classifier {
            write!(f, ":{}", clf)?;
        }
        if self.extension != "jar" {
            write!(f, "@{}", self.extension)?;
        }
        Ok(())
    }
}
