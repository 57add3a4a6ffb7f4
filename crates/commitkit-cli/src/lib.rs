pub mod commands;
pub mod handlers;

use commands::CliAction;
use handlers::{HelpHandler, SetupHandler};

pub fn run_cli() -> anyhow::Result<()> {
    commitkit_logger::init_logger(false);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match commands::scan_args(&args) {
        CliAction::Version => HelpHandler::show_version(),
        CliAction::Help => HelpHandler::handle_help(0),
        CliAction::Setup { force } => SetupHandler::run(force)?,
    }

    Ok(())
}
