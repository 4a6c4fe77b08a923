fn main() -> anyhow::Result<()> {
    digiguard::cli::run()
}
