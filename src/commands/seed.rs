//! Sample data command.

use crate::Result;

use super::common::CommandContext;

/// Handle the seed command
pub fn handle_seed(force: bool) -> Result<()> {
    let mut ctx = CommandContext::new()?;

    if ctx.db.has_data()? && !force {
        println!("Database already contains data; pass --force to seed anyway");
        return Ok(());
    }

    let summary = ctx.db.seed_sample_data()?;
    println!(
        "✓ Sample data loaded: {} teams, {} players, {} events, {} matches, {} accounts",
        summary.teams, summary.players, summary.events, summary.matches, summary.users
    );
    Ok(())
}
