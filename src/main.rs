fn main() -> anyhow::Result<()> {
    commitkit_cli::run_cli()
}
