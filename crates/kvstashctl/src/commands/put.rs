//! Put command implementation.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use kvstash::{Store, StoreError, Value};
use serde::Serialize;

use crate::OutputFormat;

#[derive(Serialize)]
struct PutOutput {
    key: String,
    value_type: &'static str,
}

pub fn run(
    store: &Store,
    key: &str,
    value: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    // Determine value source
    let text = match (value, file) {
        (Some(v), None) => v,
        (None, Some(f)) => fs::read_to_string(&f)
            .with_context(|| format!("failed to read file: {}", f.display()))?,
        (Some(_), Some(_)) => {
            return Err(anyhow!("cannot specify both a value and --file"));
        }
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read from stdin")?;
            buffer
        }
    };

    let value = parse_value(&text)?;
    insert(store, key, &value)?;

    let output = PutOutput {
        key: key.to_string(),
        value_type: value.type_name(),
    };

    match format {
        OutputFormat::Text => {
            println!("Stored '{}' ({})", output.key, output.value_type);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn parse_value(text: &str) -> Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(text.trim()).context("value is not valid JSON")?;
    Ok(Value::from(json))
}

fn insert(store: &Store, key: &str, value: &Value) -> Result<()> {
    match store.store(key, value) {
        Ok(()) => Ok(()),
        Err(StoreError::DuplicateKey { key }) => Err(anyhow!(
            "key '{}' already exists in {} (values are never overwritten)",
            key,
            store.path().display()
        )),
        Err(e) => Err(e).with_context(|| format!("failed to write {}", store.path().display())),
    }
}
