//! Handlers for the add, remove, find and list commands.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::AddArgs;
use crate::adapter::inbound::cli::output;
use crate::application::RecordStore;
use crate::domain::HardwareRecord;
use crate::error::{Error, Result};
use crate::port::PersistenceAdapter;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Quantity")]
    quantity: i32,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&HardwareRecord> for RecordRow {
    fn from(record: &HardwareRecord) -> Self {
        Self {
            kind: record.kind.clone(),
            model: record.model.clone(),
            quantity: record.quantity,
            price: format!("${:.2}", record.price),
        }
    }
}

/// Render records as a table in the given order.
pub fn render_table(records: &[HardwareRecord]) -> String {
    Table::new(records.iter().map(RecordRow::from)).to_string()
}

/// Add a record from command-line arguments.
pub fn add<A: PersistenceAdapter>(store: &mut RecordStore<A>, args: AddArgs) -> Result<()> {
    let record = HardwareRecord::new(args.kind, args.model, args.quantity, args.price);
    let model = record.model.clone();
    store.add(record)?;
    output::success(&format!("Added {model} to the inventory"));
    Ok(())
}

/// Remove a record by exact model.
pub fn remove<A: PersistenceAdapter>(store: &mut RecordStore<A>, model: &str) -> Result<()> {
    store.remove(model)?;
    output::success(&format!("Removed {model} from the inventory"));
    Ok(())
}

/// Search for a model and print the match.
///
/// # Errors
/// [`Error::NotFound`] when nothing matches, so the command exits non-zero.
pub fn find<A: PersistenceAdapter>(store: &RecordStore<A>, model: &str) -> Result<()> {
    let Some(record) = store.find(model)? else {
        return Err(Error::NotFound {
            model: model.to_string(),
        });
    };

    if output::is_json() {
        output::json_output("find", json!({ "record": record }));
        return Ok(());
    }

    output::section("Hardware found in inventory");
    output::field("Type", &record.kind);
    output::field("Model", &record.model);
    output::field("Quantity", record.quantity);
    output::field("Price", format!("${:.2}", record.price));
    Ok(())
}

/// Print the whole inventory sorted by model.
pub fn list<A: PersistenceAdapter>(store: &RecordStore<A>) -> Result<()> {
    let records = store.list_sorted()?;

    if output::is_json() {
        output::json_output("list", json!({ "records": records }));
        return Ok(());
    }

    output::section("Inventory");
    if records.is_empty() {
        output::note("The inventory is empty.");
        return Ok(());
    }
    output::lines(&render_table(&records));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shows_every_record_in_order() {
        let table = render_table(&[
            HardwareRecord::new("GPU", "RTX 3070", 20, 299.99),
            HardwareRecord::new("CPU", "Ryzen 5", 25, 149.5),
        ]);

        assert!(table.contains("Model"));
        assert!(table.contains("$299.99"));
        assert!(table.contains("$149.50"));
        let rtx = table.find("RTX 3070").unwrap();
        let ryzen = table.find("Ryzen 5").unwrap();
        assert!(rtx < ryzen);
    }
}
