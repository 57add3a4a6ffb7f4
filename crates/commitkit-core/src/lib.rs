pub mod install;
pub mod setup;
pub mod template;

pub use install::InstallManager;
pub use setup::SetupManager;

use commitkit_error::Result;

pub fn run_setup(project_dir: &str, force: bool) -> Result<()> {
    let manager = SetupManager::new();
    manager.run(project_dir, force)
}
