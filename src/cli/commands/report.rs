use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    ReportLogic::generate(cfg, cli.output.as_deref())?;
    Ok(())
}
