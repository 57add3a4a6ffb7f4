use std::fs;
use std::path::Path;

use commitkit_constants::{COMMITLINT_TEMPLATE, TEMPLATE_FILE};
use commitkit_error::Result;

/// Drops the bundled commitlint config into the project root, overwriting
/// any existing copy.
pub fn write_template(project_dir: &Path) -> Result<()> {
    fs::write(project_dir.join(TEMPLATE_FILE), COMMITLINT_TEMPLATE)?;
    Ok(())
}
