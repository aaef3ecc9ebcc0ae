//! Export and import of `{match, events, exportedAt}` documents

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::{try_read_to_string, write_string};

use super::common::SessionContext;

pub fn handle_export(session: Option<PathBuf>, file: &Path) -> Result<()> {
    let ctx = SessionContext::open(session)?;
    let json = ctx.store.export_events()?;
    write_string(file, &json).with_context(|| format!("Failed to write {}", file.display()))?;
    println!(
        "✓ Exported {} events to {}",
        ctx.store.event_count(),
        file.display()
    );
    Ok(())
}

/// Import is all-or-nothing: a rejected file leaves the session untouched.
pub fn handle_import(session: Option<PathBuf>, file: &Path) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    let json = try_read_to_string(file)
        .with_context(|| format!("Cannot read import file {}", file.display()))?;
    ctx.store
        .import_events(&json)
        .with_context(|| format!("Rejected import file {}", file.display()))?;
    ctx.save()?;
    println!(
        "✓ Imported {} from {}",
        ctx.store.event_count(),
        file.display()
    );
    Ok(())
}
