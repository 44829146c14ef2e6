use anyhow::Result;

fn main() -> Result<()> {
    lims_cli::cli_main(std::env::args().collect())
}
