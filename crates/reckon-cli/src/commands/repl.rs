//! `reckon` / `reckon repl`: the interactive session on stdin and stdout.

use std::io;

use tracing::info;

use reckon_core::application::Calculator;

use crate::{
    cli::ReplArgs,
    config::AppConfig,
    error::CliResult,
    repl::{Repl, ReplSettings},
};

pub fn execute(args: ReplArgs, config: &AppConfig, calculator: &Calculator) -> CliResult<()> {
    let settings = ReplSettings {
        prompt: config.repl.prompt.clone(),
        banner: config.repl.banner && !args.no_banner,
    };

    info!("Calculator started");
    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(calculator, stdin.lock(), stdout.lock(), settings).run()?;

    Ok(())
}
