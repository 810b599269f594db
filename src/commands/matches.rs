//! Match fixture commands: list, schedule, live, record.

use crate::{
    cli::types::{MatchId, MatchStatus, TeamId},
    core::format::{format_date_time, from_timestamp, parse_date_time},
    core::validate::require_field,
    storage::{MatchCard, NewMatch},
    Result,
};

use super::common::{print_json, CommandContext};

fn print_match_card(card: &MatchCard) {
    let when = format_date_time(from_timestamp(card.scheduled_at));
    match card.status {
        MatchStatus::Upcoming => {
            println!(
                "#{} {} vs {} — {} @ {}",
                card.match_id, card.home.name, card.away.name, when, card.location
            );
        }
        MatchStatus::Live => {
            println!(
                "#{} LIVE {} {} : {} {} ({}) @ {}",
                card.match_id,
                card.home.name,
                card.home.score.unwrap_or(0),
                card.away.score.unwrap_or(0),
                card.away.name,
                card.period.as_deref().unwrap_or("in play"),
                card.location
            );
        }
        MatchStatus::Completed => {
            println!(
                "#{} {} {} : {} {} — {} @ {}",
                card.match_id,
                card.home.name,
                card.home.score.unwrap_or(0),
                card.away.score.unwrap_or(0),
                card.away.name,
                when,
                card.location
            );
            if let Some(summary) = &card.summary {
                println!("    {}", summary);
            }
        }
    }
}

/// Handle the matches list command
pub fn handle_matches_list(status: Option<MatchStatus>, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;
    let cards = ctx.db.get_matches(status)?;

    if as_json {
        return print_json(&cards);
    }

    if cards.is_empty() {
        println!("No matches found");
        return Ok(());
    }

    for card in &cards {
        print_match_card(card);
    }
    Ok(())
}

/// Handle the matches schedule command
pub fn handle_match_schedule(
    home: TeamId,
    away: TeamId,
    at: String,
    location: String,
) -> Result<()> {
    require_field("Location", &location)?;
    let scheduled_at = parse_date_time(&at)?;

    let mut ctx = CommandContext::new()?;
    let match_id = ctx.db.save_match(&NewMatch {
        home_team_id: home,
        away_team_id: away,
        scheduled_at: scheduled_at.timestamp(),
        location,
    })?;

    println!("✓ Fixture scheduled (ID: {})", match_id);
    Ok(())
}

/// Handle the matches live command
pub fn handle_match_live(match_id: MatchId, period: String) -> Result<()> {
    let mut ctx = CommandContext::new()?;
    ctx.db.set_match_live(match_id, &period)?;
    println!("✓ Match {} is live ({})", match_id, period);
    Ok(())
}

/// Handle the matches record command
pub fn handle_match_record(
    match_id: MatchId,
    home_score: u32,
    away_score: u32,
    summary: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new()?;
    ctx.db
        .record_match_result(match_id, home_score, away_score, summary.as_deref())?;
    println!(
        "✓ Result recorded: {} : {} (standings updated)",
        home_score, away_score
    );
    Ok(())
}
