//! Interactive menu.
//!
//! Loops over add / remove / search / display until the user exits. A
//! failed operation prints its error and returns to the menu.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::adapter::inbound::cli::{inventory, output};
use crate::application::RecordStore;
use crate::domain::HardwareRecord;
use crate::error::{ConfigError, Error, Result};
use crate::port::PersistenceAdapter;

const MENU: [&str; 5] = [
    "Add hardware",
    "Remove hardware",
    "Search hardware",
    "Display inventory",
    "Exit",
];

/// Run the menu loop.
pub fn execute<A: PersistenceAdapter>(store: &mut RecordStore<A>) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`hwstock shell` is interactive; use the add/remove/find/list commands for scripting"
                .to_string(),
        }
        .into());
    }

    let theme = ColorfulTheme::default();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an action")
            .items(&MENU)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => add(&theme, store),
            1 => remove(&theme, store),
            2 => search(&theme, store),
            3 => inventory::list(store),
            _ => break,
        };

        match outcome {
            Ok(()) => {}
            // The terminal is gone; nothing more can be read.
            Err(e @ Error::Prompt(_)) => return Err(e),
            Err(e) => output::error(&e.to_string()),
        }
    }

    output::note("Exiting...");
    Ok(())
}

fn add<A: PersistenceAdapter>(theme: &ColorfulTheme, store: &mut RecordStore<A>) -> Result<()> {
    let kind: String = Input::with_theme(theme)
        .with_prompt("Hardware type")
        .interact_text()?;
    let model: String = Input::with_theme(theme)
        .with_prompt("Hardware model")
        .interact_text()?;
    let quantity: i32 = Input::with_theme(theme)
        .with_prompt("Quantity")
        .validate_with(|q: &i32| -> std::result::Result<(), &str> {
            if *q >= 0 {
                Ok(())
            } else {
                Err("Enter a non-negative integer for quantity")
            }
        })
        .interact_text()?;
    let price: f64 = Input::with_theme(theme)
        .with_prompt("Price")
        .validate_with(|p: &f64| -> std::result::Result<(), &str> {
            if p.is_finite() && *p >= 0.0 {
                Ok(())
            } else {
                Err("Enter a non-negative value for price")
            }
        })
        .interact_text()?;

    store.add(HardwareRecord::new(kind, model.clone(), quantity, price))?;
    output::success(&format!("Added {model} to the inventory"));
    Ok(())
}

fn remove<A: PersistenceAdapter>(theme: &ColorfulTheme, store: &mut RecordStore<A>) -> Result<()> {
    let model: String = Input::with_theme(theme)
        .with_prompt("Model to remove")
        .interact_text()?;
    inventory::remove(store, &model)
}

fn search<A: PersistenceAdapter>(theme: &ColorfulTheme, store: &RecordStore<A>) -> Result<()> {
    let model: String = Input::with_theme(theme)
        .with_prompt("Model to search")
        .interact_text()?;

    match store.find(&model)? {
        Some(record) => {
            output::section("Hardware found in inventory");
            output::lines(&inventory::render_table(std::slice::from_ref(&record)));
        }
        None => output::warning("Hardware not found in inventory."),
    }
    Ok(())
}
