pub mod io;
pub mod manifest_edit;
pub mod package_json;

pub use io::{manifest_path, read_package_json, write_package_json};
pub use manifest_edit::ManifestEditor;
pub use package_json::{Husky, PackageJson};
