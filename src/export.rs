use crate::engine::{Account, StatementRecord};
use std::io::Write;

pub const STATEMENT_HEADER: [&str; 3] = ["timestamp", "type", "amount"];

/// Writes the `timestamp,type,amount` header, then one CSV row per history entry.
/// The header is written even when the history is empty.
pub fn write_statement_csv(account: &Account, writer: impl Write) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(STATEMENT_HEADER)?;

    log::debug!("Starting statement serialisation for account {}", account.number());
    for tx in account.history().entries() {
        let record = StatementRecord::from(tx);
        log::debug!("Serialising statement record: {record:?}");
        wtr.serialize(record)?;
    }

    log::debug!("Statement serialisation done -> Flushing");
    wtr.flush()?;

    Ok(())
}

pub fn write_snapshot_csv(account: &Account, writer: impl Write) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    let snapshot = account.snapshot();

    log::debug!("Serialising account snapshot: {snapshot:?}");
    wtr.serialize(snapshot)?;
    wtr.flush()?;

    Ok(())
}
