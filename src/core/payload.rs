//! Renders validated matches into the issue text the league automation parses.
//!
//! The section headings are matched by the repository's issue parsers, so the
//! wording (including the typographic apostrophe) must not drift.

use crate::domain::model::{
    DoublesMatch, IssuePayload, MatchCategory, MatchDate, SetScore, SinglesMatch, Team,
};

const DATE_HEADING: &str = "### Match date (YYYY-MM-DD)";
const PLAYERS_HEADING: &str = "### Players (winner first, comma-separated @handles)";
const TEAMS_HEADING: &str = "### Teams (winner first, comma-separated @handles)";
const SETS_HEADING: &str = "### Sets (one line per set, winner\u{2019}s games first)";

pub fn build_singles_payload(game: &SinglesMatch, date: &MatchDate) -> IssuePayload {
    let title = format!(
        "Singles Match: {} vs {} ({})",
        game.winner, game.loser, date
    );

    let players = format!("{}, {}", game.winner, game.loser);
    let body = render_body(date, PLAYERS_HEADING, &players, &game.sets);

    IssuePayload {
        title,
        body,
        label: MatchCategory::Singles.label().to_string(),
    }
}

pub fn build_doubles_payload(game: &DoublesMatch, date: &MatchDate) -> IssuePayload {
    let winners = render_team(&game.winners);
    let losers = render_team(&game.losers);

    let title = format!("Doubles Match: ({}) vs ({}) ({})", winners, losers, date);

    let teams = format!("{} || {}", winners, losers);
    let body = render_body(date, TEAMS_HEADING, &teams, &game.sets);

    IssuePayload {
        title,
        body,
        label: MatchCategory::Doubles.label().to_string(),
    }
}

fn render_team(team: &Team) -> String {
    format!("{}, {}", team.0, team.1)
}

fn render_body(date: &MatchDate, roster_heading: &str, roster: &str, sets: &[SetScore]) -> String {
    let sets = sets
        .iter()
        .map(SetScore::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}",
        DATE_HEADING, date, roster_heading, roster, SETS_HEADING, sets
    )
}
