use std::path::Path;

use owo_colors::OwoColorize;

use commitkit_constants::{
    COMMITIZEN_PATH, COMMIT_MSG_HOOK, COMMIT_SCRIPT, LOG_SCRIPT, REQUIRED_TOOLS,
};
use commitkit_error::{Result, SetupError};
use commitkit_project::{
    ManifestEditor, PackageJson, manifest_path, read_package_json, write_package_json,
};

use crate::install::InstallManager;
use crate::template;

pub struct SetupManager;

impl SetupManager {
    pub fn new() -> Self {
        SetupManager
    }

    /// The whole scaffolding run: install what is missing, merge the fixed
    /// config blocks, write the manifest back, copy the commitlint template.
    pub fn run(&self, project_dir: &str, force: bool) -> Result<()> {
        let project_path = Path::new(project_dir);
        let manifest = manifest_path(project_path);
        if !manifest.exists() || manifest.is_dir() {
            return Err(SetupError::ManifestNotFound(
                manifest.to_string_lossy().into_owned(),
            ));
        }

        let mut pkg = read_package_json(project_path)?;

        let install_set = compute_install_set(&pkg, force);
        if !install_set.is_empty() {
            match InstallManager::new().install_dev(project_path, &install_set) {
                Ok(()) => {
                    commitkit_logger::success("Commit tooling installed");
                    print_usage_hints();
                }
                // Setup keeps going: the merged config is valid even when
                // the install itself did not finish.
                Err(err) => commitkit_logger::error(&err.to_string()),
            }
        }

        apply_config(&mut pkg);
        write_package_json(project_path, &pkg).map_err(|e| SetupError::Io(e.to_string()))?;
        template::write_template(project_path)?;

        Ok(())
    }
}

/// The required tools that still have to be installed, in the fixed list
/// order. `force` keeps every name regardless of what is already declared.
pub fn compute_install_set(pkg: &PackageJson, force: bool) -> Vec<&'static str> {
    let declared = pkg.get_all_dependencies();
    REQUIRED_TOOLS
        .iter()
        .copied()
        .filter(|tool| force || !declared.contains_key(*tool))
        .collect()
}

/// The three fixed merges. Additive everywhere except the commitizen block,
/// which is replaced as a whole.
pub fn apply_config(pkg: &mut PackageJson) {
    ManifestEditor::set_commitizen_path(pkg, COMMITIZEN_PATH);
    ManifestEditor::set_commit_msg_hook(pkg, COMMIT_MSG_HOOK);
    ManifestEditor::set_script(pkg, "log", LOG_SCRIPT);
    ManifestEditor::set_script(pkg, "commit", COMMIT_SCRIPT);
}

fn print_usage_hints() {
    println!();
    println!("You can now run:");
    println!();
    println!(
        "  {}     {}",
        "npm run log".bright_cyan().bold(),
        "generate CHANGELOG.md".bright_black()
    );
    println!(
        "  {}  {}",
        "npm run commit".bright_cyan().bold(),
        "replaces `git commit`; runs `git add .` and `npm run log` first".bright_black()
    );
    println!();
}
