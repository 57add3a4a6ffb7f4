/// What a left-to-right scan of the raw arguments decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    Version,
    Help,
    Setup { force: bool },
}

/// The first recognized flag wins and short-circuits the scan; tokens before
/// it are skipped silently. No recognized flag at all means a plain setup.
pub fn scan_args<S: AsRef<str>>(args: &[S]) -> CliAction {
    for arg in args {
        match arg.as_ref() {
            "-v" | "-V" | "--version" => return CliAction::Version,
            "-h" | "-H" | "--help" => return CliAction::Help,
            "--cover" => return CliAction::Setup { force: true },
            _ => {}
        }
    }

    CliAction::Setup { force: false }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_means_plain_setup() {
        let args: [&str; 0] = [];
        assert_eq!(scan_args(&args), CliAction::Setup { force: false });
    }

    #[test]
    fn every_version_alias_is_recognized() {
        for flag in ["-v", "-V", "--version"] {
            assert_eq!(scan_args(&[flag]), CliAction::Version);
        }
    }

    #[test]
    fn every_help_alias_is_recognized() {
        for flag in ["-h", "-H", "--help"] {
            assert_eq!(scan_args(&[flag]), CliAction::Help);
        }
    }

    #[test]
    fn cover_forces_reinstall() {
        assert_eq!(scan_args(&["--cover"]), CliAction::Setup { force: true });
    }

    #[test]
    fn unrecognized_tokens_are_skipped() {
        assert_eq!(
            scan_args(&["whatever", "--nope", "-V"]),
            CliAction::Version
        );
    }

    #[test]
    fn first_recognized_flag_wins() {
        assert_eq!(scan_args(&["--cover", "-h"]), CliAction::Setup { force: true });
        assert_eq!(scan_args(&["-H", "--version"]), CliAction::Help);
    }

    #[test]
    fn only_unrecognized_tokens_fall_back_to_setup() {
        assert_eq!(
            scan_args(&["--verbose", "extra"]),
            CliAction::Setup { force: false }
        );
    }
}
