//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nhu_cli::{
    cli::{AuthCmd, Commands, EventsCmd, MatchesCmd, Nhu, PlayersCmd, TeamsCmd},
    commands::{
        auth::{handle_login, handle_logout, handle_profile, handle_signup, SignupParams},
        events::{
            handle_event_cancel, handle_event_create, handle_event_register, handle_event_show,
            handle_events_list, CreateEventParams,
        },
        home::handle_home,
        matches::{
            handle_match_live, handle_match_record, handle_match_schedule, handle_matches_list,
        },
        players::{
            handle_player_delete, handle_player_register, handle_player_show,
            handle_player_update, handle_players_list, PlayerFields, PlayerListParams,
            RegisterPlayerParams,
        },
        seed::handle_seed,
        teams::{
            handle_team_delete, handle_team_register, handle_team_show, handle_team_update,
            handle_teams_list, RegisterTeamParams, TeamFields,
        },
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Nhu::parse();

    match app.command {
        Commands::Teams { cmd } => match cmd {
            TeamsCmd::List {
                query,
                category,
                json,
            } => handle_teams_list(query, category, json)?,

            TeamsCmd::Show { id, json } => handle_team_show(id, json)?,

            TeamsCmd::Register {
                name,
                division,
                coach,
                manager,
                contact_email,
                contact_phone,
                logo_url,
            } => handle_team_register(RegisterTeamParams {
                name,
                division,
                coach,
                manager,
                contact_email,
                contact_phone,
                logo_url,
            })?,

            TeamsCmd::Update {
                id,
                name,
                division,
                coach,
                manager,
                contact_email,
                contact_phone,
                logo_url,
            } => handle_team_update(
                id,
                TeamFields {
                    name,
                    division,
                    coach,
                    manager,
                    contact_email,
                    contact_phone,
                    logo_url,
                },
            )?,

            TeamsCmd::Delete { id } => handle_team_delete(id)?,
        },

        Commands::Players { cmd } => match cmd {
            PlayersCmd::List { filters, json } => handle_players_list(PlayerListParams {
                team_id: filters.team_id,
                query: filters.query,
                position: filters.position,
                sort: filters.sort,
                order: filters.order,
                as_json: json,
            })?,

            PlayersCmd::Show { id, json } => handle_player_show(id, json)?,

            PlayersCmd::Register {
                team_id,
                first_name,
                last_name,
                jersey,
                position,
                date_of_birth,
                nationality,
                height_cm,
                weight_kg,
                email,
                phone,
                photo_url,
            } => handle_player_register(RegisterPlayerParams {
                team_id,
                first_name,
                last_name,
                jersey_number: jersey,
                position,
                date_of_birth,
                nationality,
                height_cm,
                weight_kg,
                email,
                phone,
                photo_url,
            })?,

            PlayersCmd::Update {
                id,
                first_name,
                last_name,
                jersey,
                position,
                date_of_birth,
                nationality,
                height_cm,
                weight_kg,
                email,
                phone,
                photo_url,
            } => handle_player_update(
                id,
                PlayerFields {
                    first_name,
                    last_name,
                    jersey_number: jersey,
                    position,
                    date_of_birth,
                    nationality,
                    height_cm,
                    weight_kg,
                    email,
                    phone,
                    photo_url,
                },
            )?,

            PlayersCmd::Delete { id } => handle_player_delete(id)?,
        },

        Commands::Events { cmd } => match cmd {
            EventsCmd::List { tab, team_id, json } => handle_events_list(tab, team_id, json)?,

            EventsCmd::Show { id, json } => handle_event_show(id, json)?,

            EventsCmd::Create {
                title,
                description,
                location,
                starts,
                ends,
                max_teams,
                image_url,
            } => handle_event_create(CreateEventParams {
                title,
                description,
                location,
                starts,
                ends,
                max_teams,
                image_url,
            })?,

            EventsCmd::Register { event_id, team_id } => {
                handle_event_register(event_id, team_id)?
            }

            EventsCmd::Cancel { id } => handle_event_cancel(id)?,
        },

        Commands::Matches { cmd } => match cmd {
            MatchesCmd::List { status, json } => handle_matches_list(status, json)?,

            MatchesCmd::Schedule {
                home,
                away,
                at,
                location,
            } => handle_match_schedule(home, away, at, location)?,

            MatchesCmd::Live { id, period } => handle_match_live(id, period)?,

            MatchesCmd::Record {
                id,
                home_score,
                away_score,
                summary,
            } => handle_match_record(id, home_score, away_score, summary)?,
        },

        Commands::Auth { cmd } => match cmd {
            AuthCmd::Signup {
                username,
                password,
                confirm_password,
                full_name,
                email,
                phone,
            } => handle_signup(SignupParams {
                username,
                password,
                confirm_password,
                full_name,
                email,
                phone,
            })?,

            AuthCmd::Login { username, password } => handle_login(username, password)?,

            AuthCmd::Logout => handle_logout()?,
        },

        Commands::Profile => handle_profile()?,

        Commands::Home { json } => handle_home(json)?,

        Commands::Seed { force } => handle_seed(force)?,
    }

    Ok(())
}
