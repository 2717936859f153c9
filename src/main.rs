fn main() -> miette::Result<()> {
    logic::cli::run()
}
