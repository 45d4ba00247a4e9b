//! Handler for the `import` command.
//!
//! Copies a flat inventory file into whichever backend is configured. The
//! source file is only read.

use std::io;

use serde_json::json;

use crate::adapter::inbound::cli::command::ImportArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::file;
use crate::application::RecordStore;
use crate::error::{PersistenceError, Result};
use crate::port::PersistenceAdapter;

/// Import every well-formed line of `args.file`.
pub fn execute<A: PersistenceAdapter>(store: &mut RecordStore<A>, args: &ImportArgs) -> Result<()> {
    if !args.file.is_file() {
        return Err(PersistenceError::Io {
            path: args.file.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such inventory file"),
        }
        .into());
    }

    let records = file::read_records(&args.file)?;
    let parsed = records.len();
    let summary = store.import(records)?;

    if output::is_json() {
        output::json_output(
            "import",
            json!({
                "source": args.file.display().to_string(),
                "parsed": parsed,
                "imported": summary.imported,
                "duplicates": summary.duplicates,
                "rejected": summary.rejected,
            }),
        );
        return Ok(());
    }

    output::success(&format!(
        "Imported {} of {} records from {}",
        summary.imported,
        parsed,
        args.file.display()
    ));
    if summary.duplicates > 0 {
        output::warning(&format!(
            "Skipped {} records whose model is already in the inventory",
            summary.duplicates
        ));
    }
    if summary.rejected > 0 {
        output::warning(&format!(
            "Skipped {} records with invalid fields",
            summary.rejected
        ));
    }
    Ok(())
}
