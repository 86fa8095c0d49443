use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use doc_manager::{DocumentStore, IdGenerator};

use crate::cli::Commands;

/// Runs one command against a seeded store, writing JSON to `out`. A `find`
/// with no match writes nothing to `out` and still succeeds.
pub fn run<G: IdGenerator, W: Write>(
    store: &DocumentStore<G>,
    command: Commands,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Find { id } => match store.find_by_id(&id)? {
            Some(document) => write_json(out, document, pretty)?,
            None => {
                tracing::info!("No document with id {}", id);
                eprintln!("No document with id {}", id);
            }
        },
        Commands::Search(args) => {
            let request = args.into_request().context("failed to read search request")?;
            write_json(out, &store.search(&request), pretty)?;
        }
        Commands::List => {
            let documents: Vec<_> = store.iter().collect();
            write_json(out, &documents, pretty)?;
        }
    }

    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
