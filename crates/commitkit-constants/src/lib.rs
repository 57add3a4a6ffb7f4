pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Sets up conventional-commit linting for a JavaScript project";
pub const REPOSITORY_URL: &str = "https://github.com/commitkit/commitkit";
pub const BIN_NAME: &str = "commitkit";

pub const NPM_BIN: &str = "npm";

/// The dev dependencies every scaffolded project needs, in install order.
pub const REQUIRED_TOOLS: &[&str] = &[
    "git-cz",
    "commitizen",
    "commitlint",
    "conventional-changelog-cli",
    "husky",
];

pub const COMMITIZEN_PATH: &str = "./node_modules/commitlint-cli/lib/cz";
pub const COMMIT_MSG_HOOK: &str = "commitlint -E HUSKY_GIT_PARAMS";
pub const LOG_SCRIPT: &str =
    "conventional-changelog --config ./node_modules/commitlint-cli/lib/log -i CHANGELOG.md -s -r 0";
pub const COMMIT_SCRIPT: &str = "npm run log && git add . && git-cz";

pub const TEMPLATE_FILE: &str = "commitlint.config.js";
pub const COMMITLINT_TEMPLATE: &str = include_str!("../templates/commitlint.config.js");

pub const FLAGS: &[(&str, &str)] = &[
    ("-v, -V, --version", "Print version"),
    ("-h, -H, --help", "Show this help"),
    (
        "--cover",
        "Reinstall the commit tooling even when already declared",
    ),
];

pub const EXAMPLES: &[(&str, &str)] = &[
    ("commitkit", "Set up commit linting in the current project"),
    ("commitkit --cover", "Force-reinstall the tool packages"),
    ("npm run log", "Generate CHANGELOG.md (after setup)"),
    ("npm run commit", "Commit with a guided prompt (after setup)"),
];
