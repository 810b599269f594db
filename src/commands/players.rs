//! Roster management commands: list, show, register, update, delete.
//!
//! The list command mirrors the roster screen: a substring search over
//! player names and jersey numbers, a position filter, and a stable sort
//! by name, jersey number, or position in either direction.

use chrono::NaiveDate;

use crate::{
    cli::types::{PlayerId, PlayerSortKey, Position, SortOrder, TeamId},
    core::validate::{require_field, validate_email},
    error::NhuError,
    storage::{NewPlayer, Player},
    Result,
};

use super::{
    common::{print_json, CommandContext},
    resolve_team_id,
};

/// Configuration for the roster list command.
#[derive(Debug)]
pub struct PlayerListParams {
    pub team_id: Option<TeamId>,
    pub query: Option<String>,
    pub position: Option<Position>,
    pub sort: PlayerSortKey,
    pub order: SortOrder,
    pub as_json: bool,
}

/// Required fields for registering a new player.
#[derive(Debug)]
pub struct RegisterPlayerParams {
    pub team_id: Option<TeamId>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: u8,
    pub position: Position,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
}

/// Optional field edits for an existing player.
#[derive(Debug, Default)]
pub struct PlayerFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey_number: Option<u8>,
    pub position: Option<Position>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
}

/// Apply the roster screen's search, position filter, and sort.
///
/// The query matches the player's full name or the jersey number string;
/// the sort is stable, so players with equal keys keep their incoming
/// relative order.
pub fn filter_and_sort_players(
    players: Vec<Player>,
    query: Option<&str>,
    position: Option<Position>,
    sort: PlayerSortKey,
    order: SortOrder,
) -> Vec<Player> {
    let query = query.map(|q| q.to_lowercase());

    let mut filtered: Vec<Player> = players
        .into_iter()
        .filter(|player| {
            let matches_search = match &query {
                Some(q) => {
                    player.full_name().to_lowercase().contains(q.as_str())
                        || player.jersey_number.to_string().contains(q.as_str())
                }
                None => true,
            };
            let matches_position = match position {
                Some(pos) => player.position == pos,
                None => true,
            };
            matches_search && matches_position
        })
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = match sort {
            PlayerSortKey::Name => a
                .full_name()
                .to_lowercase()
                .cmp(&b.full_name().to_lowercase()),
            PlayerSortKey::Jersey => a.jersey_number.cmp(&b.jersey_number),
            PlayerSortKey::Position => a.position.to_string().cmp(&b.position.to_string()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    filtered
}

/// Handle the players list command
pub fn handle_players_list(params: PlayerListParams) -> Result<()> {
    let team_id = resolve_team_id(params.team_id)?;
    let ctx = CommandContext::new()?;

    let team = ctx
        .db
        .get_team_by_id(team_id)?
        .ok_or(NhuError::TeamNotFound {
            id: team_id.as_i64(),
        })?;
    let roster = ctx.db.get_players_by_team(team_id)?;
    let players = filter_and_sort_players(
        roster,
        params.query.as_deref(),
        params.position,
        params.sort,
        params.order,
    );

    if params.as_json {
        return print_json(&players);
    }

    if players.is_empty() {
        println!("No players found");
        return Ok(());
    }

    println!("{} Players", team.name);
    for player in players {
        println!(
            "#{:<2} {} — {} (ID: {})",
            player.jersey_number,
            player.full_name(),
            player.position,
            player.player_id
        );
    }
    Ok(())
}

/// Handle the players show command
pub fn handle_player_show(player_id: PlayerId, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;
    let player = ctx
        .db
        .get_player_by_id(player_id)?
        .ok_or(NhuError::PlayerNotFound {
            id: player_id.as_i64(),
        })?;

    if as_json {
        return print_json(&player);
    }

    println!("#{} {} — {}", player.jersey_number, player.full_name(), player.position);
    println!("  Team ID:     {}", player.team_id);
    if let Some(dob) = player.date_of_birth {
        println!("  Born:        {}", dob);
    }
    if let Some(nationality) = &player.nationality {
        println!("  Nationality: {}", nationality);
    }
    if let Some(height) = player.height_cm {
        println!("  Height:      {} cm", height);
    }
    if let Some(weight) = player.weight_kg {
        println!("  Weight:      {} kg", weight);
    }
    if let Some(email) = &player.email {
        println!("  Email:       {}", email);
    }
    if let Some(phone) = &player.phone {
        println!("  Phone:       {}", phone);
    }
    Ok(())
}

/// Handle the players register command
pub fn handle_player_register(params: RegisterPlayerParams) -> Result<()> {
    let team_id = resolve_team_id(params.team_id)?;

    require_field("First name", &params.first_name)?;
    require_field("Last name", &params.last_name)?;
    if let Some(email) = &params.email {
        validate_email(email)?;
    }

    let mut ctx = CommandContext::new()?;
    let player_id = ctx.db.save_player(&NewPlayer {
        team_id,
        first_name: params.first_name.clone(),
        last_name: params.last_name.clone(),
        date_of_birth: params.date_of_birth,
        jersey_number: params.jersey_number,
        position: params.position,
        nationality: params.nationality,
        height_cm: params.height_cm,
        weight_kg: params.weight_kg,
        email: params.email,
        phone: params.phone,
        photo_url: params.photo_url,
    })?;

    println!(
        "✓ Player {} {} registered (ID: {})",
        params.first_name, params.last_name, player_id
    );
    Ok(())
}

/// Handle the players update command
pub fn handle_player_update(player_id: PlayerId, fields: PlayerFields) -> Result<()> {
    let mut ctx = CommandContext::new()?;
    let mut player = ctx
        .db
        .get_player_by_id(player_id)?
        .ok_or(NhuError::PlayerNotFound {
            id: player_id.as_i64(),
        })?;

    if let Some(first_name) = fields.first_name {
        require_field("First name", &first_name)?;
        player.first_name = first_name;
    }
    if let Some(last_name) = fields.last_name {
        require_field("Last name", &last_name)?;
        player.last_name = last_name;
    }
    if let Some(jersey_number) = fields.jersey_number {
        player.jersey_number = jersey_number;
    }
    if let Some(position) = fields.position {
        player.position = position;
    }
    if let Some(date_of_birth) = fields.date_of_birth {
        player.date_of_birth = Some(date_of_birth);
    }
    if let Some(nationality) = fields.nationality {
        player.nationality = Some(nationality);
    }
    if let Some(height_cm) = fields.height_cm {
        player.height_cm = Some(height_cm);
    }
    if let Some(weight_kg) = fields.weight_kg {
        player.weight_kg = Some(weight_kg);
    }
    if let Some(email) = fields.email {
        validate_email(&email)?;
        player.email = Some(email);
    }
    if let Some(phone) = fields.phone {
        player.phone = Some(phone);
    }
    if let Some(photo_url) = fields.photo_url {
        player.photo_url = Some(photo_url);
    }

    ctx.db.update_player(&player)?;
    println!("✓ Player {} updated", player.full_name());
    Ok(())
}

/// Handle the players delete command
pub fn handle_player_delete(player_id: PlayerId) -> Result<()> {
    let mut ctx = CommandContext::new()?;
    let player = ctx
        .db
        .get_player_by_id(player_id)?
        .ok_or(NhuError::PlayerNotFound {
            id: player_id.as_i64(),
        })?;

    ctx.db.delete_player(player_id)?;
    println!("✓ Player {} deleted", player.full_name());
    Ok(())
}
