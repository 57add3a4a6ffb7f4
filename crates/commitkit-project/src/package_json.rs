use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PackageJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<IndexMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub husky: Option<Husky>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<IndexMap<String, String>>,
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
    // Catch-all for other fields to preserve them
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Husky {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks: Option<IndexMap<String, String>>,
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl PackageJson {
    /// Union of `dependencies` and `devDependencies`; dev entries win on
    /// a name collision.
    pub fn get_all_dependencies(&self) -> HashMap<String, String> {
        let mut all_deps = HashMap::new();

        if let Some(deps) = &self.dependencies {
            all_deps.extend(deps.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(dev_deps) = &self.dev_dependencies {
            all_deps.extend(dev_deps.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        all_deps
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dev_dependencies_win_on_collision() {
        let pkg: PackageJson = serde_json::from_str(
            r#"{
                "dependencies": { "commitlint": "^1.0.0", "left-pad": "1.3.0" },
                "devDependencies": { "commitlint": "^2.0.0" }
            }"#,
        )
        .unwrap();

        let all = pkg.get_all_dependencies();
        assert_eq!(all.len(), 2);
        assert_eq!(all.get("commitlint"), Some(&"^2.0.0".to_string()));
        assert_eq!(all.get("left-pad"), Some(&"1.3.0".to_string()));
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = r#"{
            "name": "demo",
            "browserslist": ["defaults"],
            "config": { "port": 8080 },
            "private": true
        }"#;
        let pkg: PackageJson = serde_json::from_str(raw).unwrap();

        assert_eq!(pkg.other.get("private"), Some(&serde_json::json!(true)));

        let written = serde_json::to_string_pretty(&pkg).unwrap();
        let reparsed: PackageJson = serde_json::from_str(&written).unwrap();
        assert_eq!(
            reparsed.other.get("browserslist"),
            Some(&serde_json::json!(["defaults"]))
        );
        assert_eq!(
            reparsed.config.unwrap().get("port"),
            Some(&serde_json::json!(8080))
        );
    }

    #[test]
    fn husky_block_keeps_unknown_keys() {
        let pkg: PackageJson = serde_json::from_str(
            r#"{ "husky": { "skipCI": false, "hooks": { "pre-push": "npm test" } } }"#,
        )
        .unwrap();

        let husky = pkg.husky.unwrap();
        assert_eq!(husky.other.get("skipCI"), Some(&serde_json::json!(false)));
        assert_eq!(
            husky.hooks.unwrap().get("pre-push"),
            Some(&"npm test".to_string())
        );
    }
}
