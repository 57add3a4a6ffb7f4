use anyhow::Result;
use owo_colors::OwoColorize;

pub struct SetupHandler;

impl SetupHandler {
    pub fn run(force: bool) -> Result<()> {
        Self::print_header(force);

        // Every anticipated failure is printed, never propagated; the
        // process still exits cleanly.
        if let Err(err) = commitkit_core::run_setup(".", force) {
            commitkit_logger::error(&err.to_string());
            return Ok(());
        }

        commitkit_logger::finish("Project ready for conventional commits");
        Ok(())
    }

    fn print_header(force: bool) {
        let mode = if force { "setup --cover" } else { "setup" };
        println!(
            "{} {}",
            "commitkit".bright_cyan().bold(),
            mode.bright_white()
        );
        println!();
    }
}
