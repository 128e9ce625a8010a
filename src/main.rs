use anyhow::Result;
use deeperror::cli::CliApp;

fn main() -> Result<()> {
    CliApp::run()
}
