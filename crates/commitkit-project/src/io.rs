use crate::package_json::PackageJson;
use std::fs;
use std::path::{Path, PathBuf};

pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join("package.json")
}

pub fn read_package_json(project_dir: &Path) -> anyhow::Result<PackageJson> {
    let content = fs::read_to_string(manifest_path(project_dir))?;
    let parsed: PackageJson = serde_json::from_str(&content)?;
    Ok(parsed)
}

pub fn write_package_json(project_dir: &Path, package_json: &PackageJson) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(package_json)?;
    fs::write(manifest_path(project_dir), content)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = PackageJson {
            name: Some("demo".to_string()),
            ..PackageJson::default()
        };

        write_package_json(dir.path(), &pkg).unwrap();
        let read = read_package_json(dir.path()).unwrap();
        assert_eq!(read.name.as_deref(), Some("demo"));
    }

    #[test]
    fn output_is_two_space_indented() {
        let dir = tempfile::tempdir().unwrap();
        let pkg: PackageJson =
            serde_json::from_str(r#"{ "scripts": { "test": "noop" } }"#).unwrap();

        write_package_json(dir.path(), &pkg).unwrap();
        let text = fs::read_to_string(manifest_path(dir.path())).unwrap();
        assert!(text.contains("  \"scripts\": {"));
        assert!(text.contains("    \"test\": \"noop\""));
    }
}
