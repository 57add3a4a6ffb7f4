use owo_colors::OwoColorize;

use commitkit_constants::{BIN_NAME, DESCRIPTION, EXAMPLES, FLAGS, REPOSITORY_URL, VERSION};

pub struct HelpHandler;

impl HelpHandler {
    pub fn show_version() {
        println!("{BIN_NAME} {VERSION}");
    }

    pub fn handle_help(code: i32) -> ! {
        Self::print_usage();
        std::process::exit(code)
    }

    fn print_usage() {
        println!("{}", DESCRIPTION.bright_white().bold());
        println!(
            "{} {}",
            "Version:".bright_white().bold(),
            VERSION.bright_black().bold()
        );
        println!();

        println!("{}", "Usage:".bright_magenta().bold());
        println!(
            "  {} {}",
            BIN_NAME.bright_cyan().bold(),
            "[FLAGS]".bright_black().bold()
        );
        println!();

        println!("{}", "Flags:".bright_magenta().bold());
        let max_flag_width = FLAGS.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);
        for (flag, desc) in FLAGS {
            let colored_flag = flag.bright_cyan().bold().to_string();
            println!(
                "  {:width$}  # {}",
                colored_flag,
                desc.bright_black().bold(),
                width = max_flag_width + (colored_flag.len() - flag.len())
            );
        }
        println!();

        println!("{}", "Examples:".bright_magenta().bold());
        let max_example_width = EXAMPLES.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);
        for (cmd, desc) in EXAMPLES {
            let colored_cmd = cmd.bright_cyan().bold().to_string();
            println!(
                "  {:width$}  # {}",
                colored_cmd,
                desc.bright_black().bold(),
                width = max_example_width + (colored_cmd.len() - cmd.len())
            );
        }
        println!();

        println!(
            "Visit {} for more information",
            REPOSITORY_URL.bright_cyan().underline()
        );
    }
}
