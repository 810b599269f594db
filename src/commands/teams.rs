//! Team management commands: list, show, register, update, delete.

use crate::{
    cli::types::{Division, DivisionCategory, TeamId},
    core::validate::{require_field, validate_email},
    error::NhuError,
    storage::{NewTeam, TeamOverview},
    Result,
};

use super::common::{print_json, CommandContext};

/// Required fields for registering a new team.
#[derive(Debug)]
pub struct RegisterTeamParams {
    pub name: String,
    pub division: Division,
    pub coach: String,
    pub manager: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub logo_url: Option<String>,
}

/// Optional field edits for an existing team.
#[derive(Debug, Default)]
pub struct TeamFields {
    pub name: Option<String>,
    pub division: Option<Division>,
    pub coach: Option<String>,
    pub manager: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub logo_url: Option<String>,
}

/// Keep the teams whose name or division matches the query and whose
/// division falls in the requested category.
///
/// Both filters compose; an empty query matches everything.
pub fn filter_teams<'a>(
    teams: &'a [TeamOverview],
    query: Option<&str>,
    category: Option<DivisionCategory>,
) -> Vec<&'a TeamOverview> {
    let query = query.map(|q| q.to_lowercase());
    teams
        .iter()
        .filter(|overview| {
            let matches_search = match &query {
                Some(q) => {
                    overview.team.name.to_lowercase().contains(q)
                        || overview.team.division.to_string().to_lowercase().contains(q)
                }
                None => true,
            };
            let matches_category = match category {
                Some(c) => overview.team.division.category() == c,
                None => true,
            };
            matches_search && matches_category
        })
        .collect()
}

/// Handle the teams list command
pub fn handle_teams_list(
    query: Option<String>,
    category: Option<DivisionCategory>,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::new()?;
    let overviews = ctx.db.get_team_overviews()?;
    let filtered = filter_teams(&overviews, query.as_deref(), category);

    if as_json {
        return print_json(&filtered);
    }

    if filtered.is_empty() {
        println!("No teams found");
        return Ok(());
    }

    for overview in filtered {
        let team = &overview.team;
        println!(
            "#{} {} [{}] — {} players, {}W/{}L",
            team.team_id, team.name, team.division, overview.player_count, team.wins, team.losses
        );
    }
    Ok(())
}

/// Handle the teams show command
pub fn handle_team_show(team_id: TeamId, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;
    let team = ctx
        .db
        .get_team_by_id(team_id)?
        .ok_or(NhuError::TeamNotFound {
            id: team_id.as_i64(),
        })?;
    let player_count = ctx.db.count_players(team_id)?;

    if as_json {
        return print_json(&TeamOverview { team, player_count });
    }

    println!("{} [{}]", team.name, team.division);
    println!("  Coach:   {}", team.coach);
    if let Some(manager) = &team.manager {
        println!("  Manager: {}", manager);
    }
    println!("  Email:   {}", team.contact_email);
    println!("  Phone:   {}", team.contact_phone);
    if let Some(logo_url) = &team.logo_url {
        println!("  Logo:    {}", logo_url);
    }
    println!("  Players: {}", player_count);
    println!("  Record:  {} wins, {} losses", team.wins, team.losses);
    Ok(())
}

/// Handle the teams register command
pub fn handle_team_register(params: RegisterTeamParams) -> Result<()> {
    require_field("Team name", &params.name)?;
    require_field("Coach", &params.coach)?;
    require_field("Contact phone", &params.contact_phone)?;
    validate_email(&params.contact_email)?;

    let mut ctx = CommandContext::new()?;
    let team_id = ctx.db.save_team(&NewTeam {
        name: params.name.clone(),
        division: params.division,
        coach: params.coach,
        manager: params.manager,
        contact_email: params.contact_email,
        contact_phone: params.contact_phone,
        logo_url: params.logo_url,
    })?;

    println!("✓ Team \"{}\" registered (ID: {})", params.name, team_id);
    Ok(())
}

/// Handle the teams update command
pub fn handle_team_update(team_id: TeamId, fields: TeamFields) -> Result<()> {
    let mut ctx = CommandContext::new()?;
    let mut team = ctx
        .db
        .get_team_by_id(team_id)?
        .ok_or(NhuError::TeamNotFound {
            id: team_id.as_i64(),
        })?;

    if let Some(name) = fields.name {
        require_field("Team name", &name)?;
        team.name = name;
    }
    if let Some(division) = fields.division {
        team.division = division;
    }
    if let Some(coach) = fields.coach {
        require_field("Coach", &coach)?;
        team.coach = coach;
    }
    if let Some(manager) = fields.manager {
        team.manager = Some(manager);
    }
    if let Some(contact_email) = fields.contact_email {
        validate_email(&contact_email)?;
        team.contact_email = contact_email;
    }
    if let Some(contact_phone) = fields.contact_phone {
        require_field("Contact phone", &contact_phone)?;
        team.contact_phone = contact_phone;
    }
    if let Some(logo_url) = fields.logo_url {
        team.logo_url = Some(logo_url);
    }

    ctx.db.update_team(&team)?;
    println!("✓ Team \"{}\" updated", team.name);
    Ok(())
}

/// Handle the teams delete command
pub fn handle_team_delete(team_id: TeamId) -> Result<()> {
    let mut ctx = CommandContext::new()?;
    let team = ctx
        .db
        .get_team_by_id(team_id)?
        .ok_or(NhuError::TeamNotFound {
            id: team_id.as_i64(),
        })?;

    ctx.db.delete_team(team_id)?;
    println!("✓ Team \"{}\" deleted", team.name);
    Ok(())
}
