fn main() -> anyhow::Result<()> {
    fanio_cli::run()
}
