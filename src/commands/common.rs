//! Common utilities and helper functions shared across commands.

use crate::{storage::FederationDatabase, Result};
use serde::Serialize;

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub db: FederationDatabase,
}

impl CommandContext {
    /// Open the federation database
    pub fn new() -> Result<Self> {
        let db = FederationDatabase::new()?;
        Ok(Self { db })
    }
}

/// Print any serializable payload as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
