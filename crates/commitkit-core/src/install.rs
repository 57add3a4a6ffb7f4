use std::path::Path;
use std::process::Command;

use commitkit_constants::NPM_BIN;
use commitkit_error::{Result, SetupError};

pub struct InstallManager;

impl InstallManager {
    pub fn new() -> Self {
        InstallManager
    }

    /// Runs `npm install <packages...> -D` in the project directory and waits
    /// for it to finish. The child inherits the terminal's stdio, so the
    /// user watches npm's own output live; nothing is captured here.
    pub fn install_dev(&self, project_dir: &Path, packages: &[&str]) -> Result<()> {
        let mut args: Vec<&str> = Vec::with_capacity(packages.len() + 2);
        args.push("install");
        args.extend_from_slice(packages);
        args.push("-D");

        commitkit_logger::shell(&format!("{} {}", NPM_BIN, args.join(" ")));

        let status = Command::new(NPM_BIN)
            .args(&args)
            .current_dir(project_dir)
            .status()
            .map_err(|e| SetupError::InstallSpawn(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(SetupError::InstallFailed(status.code().unwrap_or(-1)))
        }
    }
}
