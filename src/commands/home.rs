//! The home feed: the next upcoming events plus the latest federation news.

use serde::Serialize;

use crate::{
    core::format::{format_date_badge, format_time, from_timestamp},
    storage::Event,
    Result,
};

use super::common::{print_json, CommandContext};

/// How many upcoming events the feed shows.
const FEED_EVENT_LIMIT: u32 = 5;

/// A federation news item.
#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
}

/// The latest federation news shown under the event feed.
pub const LATEST_NEWS: [NewsItem; 2] = [
    NewsItem {
        title: "Namibia National Team Qualifies for World Cup",
        date: "June 15, 2024",
        excerpt: "After an outstanding performance in the African Championships, the Namibia \
                  national hockey team has secured their spot in the upcoming World Cup.",
    },
    NewsItem {
        title: "New Training Facilities Opening in Swakopmund",
        date: "June 12, 2024",
        excerpt: "The Namibia Hockey Union is proud to announce the opening of new \
                  state-of-the-art training facilities in Swakopmund next month.",
    },
];

#[derive(Debug, Serialize)]
struct HomeFeed {
    upcoming_events: Vec<Event>,
    news: Vec<NewsItem>,
}

/// Handle the home command
pub fn handle_home(as_json: bool) -> Result<()> {
    let ctx = CommandContext::new()?;
    let upcoming = ctx.db.upcoming_events(FEED_EVENT_LIMIT)?;

    if as_json {
        return print_json(&HomeFeed {
            upcoming_events: upcoming,
            news: LATEST_NEWS.to_vec(),
        });
    }

    println!("Welcome to Namibia Hockey");
    println!();
    println!("Upcoming Events");
    if upcoming.is_empty() {
        println!("  No upcoming events found");
    } else {
        for event in &upcoming {
            let start = from_timestamp(event.start_time);
            let (day, month) = format_date_badge(start);
            println!(
                "  {} {}  {} — {} ({})",
                day,
                month,
                event.title,
                event.location,
                format_time(start)
            );
        }
    }

    println!();
    println!("Latest News");
    for item in &LATEST_NEWS {
        println!("  {} — {}", item.date, item.title);
        println!("    {}", item.excerpt);
    }
    Ok(())
}
