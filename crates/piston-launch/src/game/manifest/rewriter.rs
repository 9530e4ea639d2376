/// Pinned upgrades for libraries known to break on ARM/Android-hosted JVMs
use crate::game::manifest::coordinate::Coordinate;
use crate::game::manifest::types::{Artifact, Library, LibraryDownloads};
use crate::utils::version::Version;

const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2/";

/// A library whose versions below `minimum` are replaced by `minimum`
struct PinnedUpgrade {
    group: &'static str,
    artifact: &'static str,
    minimum: &'static str,
    sha1: &'static str,
}

/// jna before 5.13 has no dispatch library for the hosted architectures,
/// oshi 6.2 calls into that jna, and asm-all before 5 cannot read Java 8
/// class files.
const UPGRADES: &[PinnedUpgrade] = &[
    PinnedUpgrade {
        group: "net.java.dev.jna",
        artifact: "jna",
        minimum: "5.13.0",
        sha1: "1200e7ebeedbe0d10062093f32925a912020e747",
    },
    PinnedUpgrade {
        group: "com.github.oshi",
        artifact: "oshi-core",
        minimum: "6.3.0",
        sha1: "9e98cf55be371cafdb9c70c35d04ec2a8c2b42ac",
    },
    PinnedUpgrade {
        group: "org.ow2.asm",
        artifact: "asm-all",
        minimum: "5.0.4",
        sha1: "e6244859997b3d4237a552669279780876228909",
    },
];

/// Apply the pinned upgrade table to one library.
///
/// Pure and idempotent: an upgraded library is at the table's minimum and is
/// returned unchanged on a second pass.
pub fn rewrite_library(lib: Library) -> Library {
    let Some(coord) = lib.coordinate() else {
        return lib;
    };
    // Native classifier jars are versioned with their main artifact
    if coord.classifier.is_some() {
        return lib;
    }

    let Some(upgrade) = UPGRADES
        .iter()
        .find(|u| u.group == coord.group && u.artifact == coord.artifact)
    else {
        return lib;
    };

    if Version::parse(&coord.version) >= Version::parse(upgrade.minimum) {
        return lib;
    }

    log::warn!(
        "Library {} has been changed to version {}",
        lib.name,
        upgrade.minimum
    );
    upgrade.apply(lib, &coord)
}

/// Rewrite every library of a resolved descriptor
pub fn rewrite_libraries(libraries: Vec<Library>) -> Vec<Library> {
    libraries.into_iter().map(rewrite_library).collect()
}

impl PinnedUpgrade {
    fn apply(&self, lib: Library, coord: &Coordinate) -> Library {
        let pinned = coord.with_version(self.minimum);
        let path = pinned.to_path();
        let url = match url::Url::parse(MAVEN_CENTRAL).and_then(|base| base.join(&path)) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", MAVEN_CENTRAL, path),
        };

        let classifiers = lib.downloads.and_then(|d| d.classifiers);
        Library {
            name: pinned.to_string(),
            downloads: Some(LibraryDownloads {
                artifact: Some(Artifact {
                    path: Some(path),
                    url: Some(url),
                    sha1: Some(self.sha1.to_string()),
                    size: None,
                }),
                classifiers,
            }),
            url: None,
            ..lib
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgrades_old_jna() {
        let mut lib = Library::new("net.java.dev.jna:jna:4.4.0");
        lib.url = Some("https://maven.example.org/".to_string());

        let rewritten = rewrite_library(lib);
        assert_eq!(rewritten.name, "net.java.dev.jna:jna:5.13.0");
        assert!(rewritten.url.is_none());

        let artifact = rewritten.artifact().unwrap();
        assert_eq!(
            artifact.path.as_deref(),
            Some("net/java/dev/jna/jna/5.13.0/jna-5.13.0.jar")
        );
        assert_eq!(
            artifact.url.as_deref(),
            Some("https://repo1.maven.org/maven2/net/java/dev/jna/jna/5.13.0/jna-5.13.0.jar")
        );
        assert_eq!(
            artifact.sha1.as_deref(),
            Some("1200e7ebeedbe0d10062093f32925a912020e747")
        );
    }

    #[test]
    fn leaves_new_enough_versions_alone() {
        for name in [
            "net.java.dev.jna:jna:5.13.0",
            "net.java.dev.jna:jna:5.14.0",
            "com.github.oshi:oshi-core:6.4.0",
            "org.ow2.asm:asm-all:5.2",
        ] {
            let lib = Library::new(name);
            assert_eq!(rewrite_library(lib.clone()), lib);
        }
    }

    #[test]
    fn leaves_unrelated_and_native_libraries_alone() {
        let unrelated = Library::new("org.ow2.asm:asm:4.0");
        assert_eq!(rewrite_library(unrelated.clone()), unrelated);

        let natives = Library::new("net.java.dev.jna:jna:4.4.0:natives-linux");
        assert_eq!(rewrite_library(natives.clone()), natives);

        let bogus = Library::new("jna");
        assert_eq!(rewrite_library(bogus.clone()), bogus);
    }

    #[test]
    fn upgrades_old_oshi_and_asm() {
        assert_eq!(
            rewrite_library(Library::new("com.github.oshi:oshi-core:6.2.2")).name,
            "com.github.oshi:oshi-core:6.3.0"
        );
        assert_eq!(
            rewrite_library(Library::new("org.ow2.asm:asm-all:4.1")).name,
            "org.ow2.asm:asm-all:5.0.4"
        );
    }

    #[test]
    fn rewrite_is_idempotent() {
        for name in [
            "net.java.dev.jna:jna:4.4.0",
            "com.github.oshi:oshi-core:6.2.2",
            "org.ow2.asm:asm-all:4.1",
            "com.mojang:logging:1.1.1",
        ] {
            let once = rewrite_library(Library::new(name));
            let twice = rewrite_library(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn keeps_rules_when_rewriting() {
        let mut lib = Library::new("net.java.dev.jna:jna:4.4.0");
        lib.rules = Some(vec![serde_json::from_value(
            serde_json::json!({ "action": "allow", "os": { "name": "linux" } }),
        )
        .unwrap()]);

        let rewritten = rewrite_library(lib.clone());
        assert_eq!(rewritten.rules, lib.rules);
    }
}
