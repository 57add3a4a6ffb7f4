use std::fmt;

#[derive(Debug)]
pub enum SetupError {
    ManifestNotFound(String),
    ManifestParse(String),
    InstallSpawn(String),
    InstallFailed(i32),
    Io(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManifestNotFound(path) => {
                write!(f, "package.json not found at {path}")
            }
            Self::ManifestParse(msg) => {
                write!(f, "Failed to parse package.json: {msg}")
            }
            Self::InstallSpawn(msg) => {
                write!(f, "Failed to run npm: {msg}")
            }
            Self::InstallFailed(code) => {
                write!(f, "npm install exited with code {code}")
            }
            Self::Io(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

impl From<anyhow::Error> for SetupError {
    fn from(err: anyhow::Error) -> Self {
        Self::ManifestParse(err.to_string())
    }
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
