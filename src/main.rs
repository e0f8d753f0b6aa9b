use anyhow::Result;
use bank_ledger::cli::Session;
use bank_ledger::config::BankConfig;
use bank_ledger::engine::{Bank, SystemClock};
use simple_logger::SimpleLogger;
use std::io;
use std::rc::Rc;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    log::debug!("Application started");

    let config = BankConfig::from_env()?;
    log::debug!("Using agency {} with limits {:?}", config.agency, config.limits);

    let mut bank = Bank::new(config, Rc::new(SystemClock));

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut bank, stdin.lock(), stdout.lock()).run()?;

    log::debug!("Application finished");

    Ok(())
}
