#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub fn write_version(data_dir: &Path, id: &str, json: serde_json::Value) {
    let dir = data_dir.join("versions").join(id);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.json", id)), json.to_string()).unwrap();
}

pub fn write_runtime(runtimes_dir: &Path, name: &str, java_version: &str, arch: &str) {
    let home = runtimes_dir.join(name);
    fs::create_dir_all(home.join("bin")).unwrap();
    fs::write(
        home.join("release"),
        format!(
            "JAVA_VERSION=\"{}\"\nOS_ARCH=\"{}\"\n",
            java_version, arch
        ),
    )
    .unwrap();
}

/// Trimmed 1.20.1 descriptor
pub fn vanilla_1_20_1() -> serde_json::Value {
    serde_json::json!({
        "id": "1.20.1",
        "type": "release",
        "mainClass": "net.minecraft.client.main.Main",
        "assetIndex": { "id": "5", "sha1": "abc", "size": 1, "totalSize": 2, "url": "https://example.com/5.json" },
        "assets": "5",
        "javaVersion": { "component": "java-runtime-gamma", "majorVersion": 17 },
        "arguments": {
            "game": [
                "--username", "${auth_player_name}",
                "--version", "${version_name}",
                "--gameDir", "${game_directory}",
                "--assetsDir", "${assets_root}",
                "--assetIndex", "${assets_index_name}",
                "--uuid", "${auth_uuid}",
                "--accessToken", "${auth_access_token}",
                "--clientId", "${clientid}",
                "--xuid", "${auth_xuid}",
                "--userType", "${user_type}",
                "--versionType", "${version_type}",
                { "rules": [{ "action": "allow", "features": { "is_demo_user": true } }], "value": "--demo" },
                { "rules": [{ "action": "allow", "features": { "has_custom_resolution": true } }],
                  "value": ["--width", "${resolution_width}", "--height", "${resolution_height}"] }
            ],
            "jvm": [
                { "rules": [{ "action": "allow", "os": { "name": "osx" } }], "value": ["-XstartOnFirstThread"] },
                { "rules": [{ "action": "allow", "os": { "arch": "x86" } }], "value": "-Xss1M" },
                "-Djava.library.path=${natives_directory}",
                "-Djna.tmpdir=${natives_directory}",
                "-Dminecraft.launcher.brand=${launcher_name}",
                "-Dminecraft.launcher.version=${launcher_version}",
                "-cp",
                "${classpath}"
            ]
        },
        "libraries": [
            { "name": "com.github.oshi:oshi-core:6.2.2",
              "downloads": { "artifact": { "path": "com/github/oshi/oshi-core/6.2.2/oshi-core-6.2.2.jar", "sha1": "x", "size": 1, "url": "https://libraries.minecraft.net/com/github/oshi/oshi-core/6.2.2/oshi-core-6.2.2.jar" } } },
            { "name": "net.java.dev.jna:jna:5.12.1" },
            { "name": "org.ow2.asm:asm:9.3" },
            { "name": "org.lwjgl:lwjgl:3.3.1" },
            { "name": "org.lwjgl:lwjgl:3.3.1:natives-linux",
              "rules": [{ "action": "allow", "os": { "name": "linux" } }] },
            { "name": "ca.weblite:java-objc-bridge:1.1",
              "rules": [{ "action": "allow", "os": { "name": "osx" } }] }
        ],
        "logging": {
            "client": {
                "argument": "-Dlog4j.configurationFile=${path}",
                "file": { "id": "client-1.12.xml", "sha1": "bd65e7d2e3c237be76cfbef4c2405033d7f91521", "size": 888, "url": "https://example.com/client-1.12.xml" },
                "type": "log4j2-xml"
            }
        }
    })
}

pub fn fabric_1_20_1() -> serde_json::Value {
    serde_json::json!({
        "id": "fabric-loader-0.15.7-1.20.1",
        "inheritsFrom": "1.20.1",
        "type": "release",
        "mainClass": "net.fabricmc.loader.impl.launch.knot.KnotClient",
        "arguments": {
            "game": ["--clientId", "fabric"],
            "jvm": ["-DFabricMcEmu= net.minecraft.client.main.Main "]
        },
        "libraries": [
            { "name": "org.ow2.asm:asm:9.6", "url": "https://maven.fabricmc.net/" },
            { "name": "net.fabricmc:fabric-loader:0.15.7", "url": "https://maven.fabricmc.net/" }
        ]
    })
}
