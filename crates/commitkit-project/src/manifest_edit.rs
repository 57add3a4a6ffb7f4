use crate::package_json::{Husky, PackageJson};
use indexmap::IndexMap;
use serde_json::json;

pub struct ManifestEditor;

impl ManifestEditor {
    /// Point `config.commitizen.path` at the given prompt adapter. An
    /// existing `commitizen` block is replaced wholesale; sibling keys under
    /// `config` are kept.
    pub fn set_commitizen_path(pkg: &mut PackageJson, path: &str) {
        pkg.config
            .get_or_insert_with(IndexMap::new)
            .insert("commitizen".to_string(), json!({ "path": path }));
    }

    /// Set the `commit-msg` hook, keeping every other hook entry and every
    /// other top-level `husky` key.
    pub fn set_commit_msg_hook(pkg: &mut PackageJson, command: &str) {
        pkg.husky
            .get_or_insert_with(Husky::default)
            .hooks
            .get_or_insert_with(IndexMap::new)
            .insert("commit-msg".to_string(), command.to_string());
    }

    /// Add or overwrite a single script entry, keeping the rest.
    pub fn set_script(pkg: &mut PackageJson, name: &str, command: &str) {
        pkg.scripts
            .get_or_insert_with(IndexMap::new)
            .insert(name.to_string(), command.to_string());
    }
}
