//! Get command implementation.

use anyhow::{Context, Result};
use kvstash::{Store, Value};
use serde::Serialize;

use crate::OutputFormat;

#[derive(Debug, Serialize, PartialEq)]
struct Entry {
    key: String,
    found: bool,
    value: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct GetOutput {
    entries: Vec<Entry>,
    missing: usize,
}

pub fn run(store: &Store, keys: &[String], format: OutputFormat) -> Result<()> {
    let output = lookup(store, keys)?;

    match format {
        OutputFormat::Text => {
            for entry in &output.entries {
                if entry.found {
                    println!("{}\t{}", entry.key, entry.value);
                } else {
                    println!("{}\t<missing>", entry.key);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn lookup(store: &Store, keys: &[String]) -> Result<GetOutput> {
    let values: Vec<Option<Value>> = store
        .load_many(keys)
        .with_context(|| format!("failed to read {}", store.path().display()))?;

    let entries: Vec<Entry> = keys
        .iter()
        .zip(values)
        .map(|(key, value)| Entry {
            key: key.clone(),
            found: value.is_some(),
            value: value.map_or(serde_json::Value::Null, Into::into),
        })
        .collect();

    Ok(GetOutput {
        missing: entries.iter().filter(|e| !e.found).count(),
        entries,
    })
}
