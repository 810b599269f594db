//! Event commands: list tabs, detail view, creation, registration, cancel.

use chrono::Duration;

use crate::{
    cli::types::{EventId, EventStatus, EventTab, TeamId},
    core::format::{
        format_date_time, format_full_date, format_time, from_timestamp, parse_date_time,
    },
    core::validate::require_field,
    error::NhuError,
    storage::{Event, NewEvent},
    Result,
};

use super::{
    common::{print_json, CommandContext},
    resolve_team_id,
};

/// Fields for creating a new event.
#[derive(Debug)]
pub struct CreateEventParams {
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts: String,
    pub ends: Option<String>,
    pub max_teams: u32,
    pub image_url: Option<String>,
}

/// Keep the events belonging on the given list tab.
///
/// Upcoming covers events that are upcoming or currently ongoing; past
/// covers completed and cancelled ones. The mine tab is resolved against
/// the registration table, not here.
pub fn events_matching_tab(events: Vec<Event>, tab: EventTab) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| match tab {
            EventTab::Upcoming => event.status.accepts_registrations(),
            EventTab::Past => event.status.is_past(),
            EventTab::Mine => true,
        })
        .collect()
}

fn print_event_line(event: &Event) {
    println!(
        "#{} {} — {} @ {} [{}] ({}/{} teams)",
        event.event_id,
        event.title,
        format_date_time(from_timestamp(event.start_time)),
        event.location,
        event.status,
        event.registered_teams,
        event.max_teams
    );
}

/// Handle the events list command
pub fn handle_events_list(tab: EventTab, team_id: Option<TeamId>, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;

    let events = match tab {
        EventTab::Mine => {
            let team_id = resolve_team_id(team_id)?;
            ctx.db.get_events_for_team(team_id)?
        }
        _ => events_matching_tab(ctx.db.get_events()?, tab),
    };

    if as_json {
        return print_json(&events);
    }

    if events.is_empty() {
        println!("No events found");
        return Ok(());
    }

    for event in &events {
        print_event_line(event);
    }
    Ok(())
}

/// Handle the events show command
pub fn handle_event_show(event_id: EventId, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;
    let event = ctx
        .db
        .get_event_by_id(event_id)?
        .ok_or(NhuError::EventNotFound {
            id: event_id.as_i64(),
        })?;
    let registered = ctx.db.get_registered_teams_for_event(event_id)?;

    if as_json {
        #[derive(serde::Serialize)]
        struct EventDetails {
            #[serde(flatten)]
            event: Event,
            registered: Vec<crate::storage::Team>,
        }
        return print_json(&EventDetails {
            event,
            registered,
        });
    }

    let start = from_timestamp(event.start_time);
    let end = from_timestamp(event.end_time);

    println!("{} [{}]", event.title, event.status);
    println!("  {}", format_full_date(start));
    println!("  {} - {}", format_time(start), format_time(end));
    println!("  {}", event.location);
    println!(
        "  {} / {} Teams Registered",
        event.registered_teams, event.max_teams
    );
    println!();
    println!("{}", event.description);
    println!();

    if registered.is_empty() {
        println!("No teams registered yet");
    } else {
        println!("Registered Teams:");
        for team in &registered {
            println!("  #{} {} [{}]", team.team_id, team.name, team.division);
        }
    }

    if event.accepts_registrations() {
        println!();
        println!("Registration is open");
    }
    Ok(())
}

/// Handle the events create command
pub fn handle_event_create(params: CreateEventParams) -> Result<()> {
    require_field("Event title", &params.title)?;
    require_field("Event description", &params.description)?;
    require_field("Event location", &params.location)?;

    let start = parse_date_time(&params.starts)?;
    let end = match &params.ends {
        Some(ends) => parse_date_time(ends)?,
        // The creation form's default window: three hours after the start.
        None => start + Duration::hours(3),
    };

    let mut ctx = CommandContext::new()?;
    let event_id = ctx.db.save_event(&NewEvent {
        title: params.title.clone(),
        description: params.description,
        location: params.location,
        start_time: start.timestamp(),
        end_time: end.timestamp(),
        max_teams: params.max_teams,
        image_url: params.image_url,
    })?;

    println!("✓ Event \"{}\" created (ID: {})", params.title, event_id);
    Ok(())
}

/// Handle the events register command
pub fn handle_event_register(event_id: EventId, team_id: Option<TeamId>) -> Result<()> {
    let team_id = resolve_team_id(team_id)?;
    let mut ctx = CommandContext::new()?;

    let team = ctx
        .db
        .get_team_by_id(team_id)?
        .ok_or(NhuError::TeamNotFound {
            id: team_id.as_i64(),
        })?;
    let event = ctx
        .db
        .get_event_by_id(event_id)?
        .ok_or(NhuError::EventNotFound {
            id: event_id.as_i64(),
        })?;

    ctx.db.register_team_for_event(event_id, team_id)?;

    println!(
        "✓ {} has been registered for \"{}\"",
        team.name, event.title
    );
    Ok(())
}

/// Handle the events cancel command
pub fn handle_event_cancel(event_id: EventId) -> Result<()> {
    let mut ctx = CommandContext::new()?;
    let event = ctx
        .db
        .get_event_by_id(event_id)?
        .ok_or(NhuError::EventNotFound {
            id: event_id.as_i64(),
        })?;

    if event.status.is_past() {
        return Err(NhuError::InvalidStatus {
            status: event.status.to_string(),
        });
    }

    ctx.db
        .update_event_status(event_id, EventStatus::Cancelled)?;
    println!("✓ Event \"{}\" cancelled", event.title);
    Ok(())
}
