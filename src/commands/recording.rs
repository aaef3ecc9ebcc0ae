//! Recording on/off

use std::path::PathBuf;

use anyhow::Result;

use super::common::SessionContext;

pub fn handle_record_start(session: Option<PathBuf>) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    ctx.store.start_recording()?;
    ctx.save()?;
    println!("● Recording");
    Ok(())
}

pub fn handle_record_stop(session: Option<PathBuf>) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    ctx.store.stop_recording();
    ctx.save()?;
    println!("■ Recording stopped");
    Ok(())
}
