use crate::domain::model::{MatchDate, PlayerHandle, SetScore, Team};
use crate::utils::error::{Result, TennisError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

static SET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").expect("set pattern compiles"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts only `YYYY-MM-DD` strings naming a real calendar day.
pub fn validate_date(text: &str) -> Result<MatchDate> {
    if !DATE_PATTERN.is_match(text) {
        return Err(TennisError::validation(format!(
            "invalid date '{}': use YYYY-MM-DD",
            text
        )));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(MatchDate)
        .map_err(|e| TennisError::validation(format!("invalid date '{}': {}", text, e)))
}

/// Splits `"@a, @b"` into exactly two trimmed handles, winner first.
pub fn parse_players(text: &str) -> Result<(PlayerHandle, PlayerHandle)> {
    split_pair(text).ok_or_else(|| {
        TennisError::validation(format!(
            "exactly 2 players required for singles match, got '{}'",
            text
        ))
    })
}

/// Splits `"@a,@b||@c,@d"` into two teams of two, winning team first.
pub fn parse_teams(text: &str) -> Result<(Team, Team)> {
    let parts: Vec<&str> = text.split("||").collect();
    let [first, second] = parts.as_slice() else {
        return Err(TennisError::validation(format!(
            "exactly 2 teams required for doubles match (separated by ||), got '{}'",
            text
        )));
    };

    Ok((parse_team(first)?, parse_team(second)?))
}

fn parse_team(text: &str) -> Result<Team> {
    split_pair(text).ok_or_else(|| {
        TennisError::validation(format!(
            "each team must have exactly 2 players, got '{}'",
            text.trim()
        ))
    })
}

/// Parses `"6-3,4-6,6-4"` into set scores, keeping their order.
pub fn parse_sets(text: &str) -> Result<Vec<SetScore>> {
    if text.trim().is_empty() {
        return Err(TennisError::validation("at least one set is required"));
    }

    let mut sets = Vec::new();

    for token in text.split(',') {
        let token = token.trim();
        let captures = SET_PATTERN.captures(token).ok_or_else(|| invalid_set(token))?;

        let winner_games = captures[1].parse::<u32>().map_err(|_| invalid_set(token))?;
        let loser_games = captures[2].parse::<u32>().map_err(|_| invalid_set(token))?;

        if winner_games < loser_games {
            tracing::warn!(
                "Set '{}' lists fewer games for the winner; recording it as given",
                token
            );
        }

        sets.push(SetScore {
            winner_games,
            loser_games,
        });
    }

    Ok(sets)
}

fn split_pair(text: &str) -> Option<(PlayerHandle, PlayerHandle)> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [first, second] if !first.is_empty() && !second.is_empty() => {
            Some((PlayerHandle::new(*first), PlayerHandle::new(*second)))
        }
        _ => None,
    }
}

fn invalid_set(token: &str) -> TennisError {
    TennisError::validation(format!(
        "invalid set format '{}'. Use format like '6-3'",
        token
    ))
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TennisError::config(format!("{} cannot be empty", field_name)));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TennisError::config(format!(
                "{} '{}': unsupported URL scheme: {}",
                field_name, url_str, scheme
            ))),
        },
        Err(e) => Err(TennisError::config(format!(
            "{} '{}': invalid URL format: {}",
            field_name, url_str, e
        ))),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TennisError::config(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(s: &str) -> PlayerHandle {
        PlayerHandle::new(s)
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("2025-01-15").unwrap().to_string(), "2025-01-15");
        assert!(validate_date("2024-02-29").is_ok());

        assert!(validate_date("2025-02-30").is_err());
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("2025-04-31").is_err());
        assert!(validate_date("2025-13-01").is_err());
        assert!(validate_date("2025-1-15").is_err());
        assert!(validate_date("25-01-15").is_err());
        assert!(validate_date("2025/01/15").is_err());
        assert!(validate_date(" 2025-01-15").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_validate_date_echoes_input() {
        let err = validate_date("2025-02-30").unwrap_err();
        assert!(err.to_string().contains("2025-02-30"));
    }

    #[test]
    fn test_parse_players() {
        assert_eq!(
            parse_players("@a, @b ").unwrap(),
            (handle("@a"), handle("@b"))
        );
        assert!(parse_players("@a,@b,@c").is_err());
        assert!(parse_players("@a").is_err());
        assert!(parse_players("@a,").is_err());
        assert!(parse_players(" , @b").is_err());
    }

    #[test]
    fn test_parse_teams() {
        let (winners, losers) = parse_teams("@a,@b||@c,@d").unwrap();
        assert_eq!(winners, (handle("@a"), handle("@b")));
        assert_eq!(losers, (handle("@c"), handle("@d")));

        let (winners, losers) = parse_teams(" @a , @b || @c , @d ").unwrap();
        assert_eq!(winners, (handle("@a"), handle("@b")));
        assert_eq!(losers, (handle("@c"), handle("@d")));
    }

    #[test]
    fn test_parse_teams_wrong_arity() {
        assert!(parse_teams("@a,@b,@c||@d").is_err());
        assert!(parse_teams("@a,@b||@c").is_err());
        assert!(parse_teams("@a,@b").is_err());
        assert!(parse_teams("@a,@b||@c,@d||@e,@f").is_err());
        assert!(parse_teams("@a,@b|@c,@d").is_err());
    }

    #[test]
    fn test_parse_sets() {
        let sets = parse_sets("6-3,4-6,6-4").unwrap();
        let pairs: Vec<(u32, u32)> = sets
            .iter()
            .map(|s| (s.winner_games, s.loser_games))
            .collect();
        assert_eq!(pairs, vec![(6, 3), (4, 6), (6, 4)]);

        let sets = parse_sets(" 7-6 , 6-0").unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].to_string(), "7-6");
    }

    #[test]
    fn test_parse_sets_reports_offending_token() {
        let err = parse_sets("6-3,bad").unwrap_err();
        assert!(err.to_string().contains("'bad'"));

        for input in ["6-3,-1-6", "6.5-3", "+6-3", "6-3,", "6 - 3", "6-3-1"] {
            assert!(parse_sets(input).is_err(), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_parse_sets_requires_at_least_one_set() {
        for input in ["", "   "] {
            let err = parse_sets(input).unwrap_err();
            assert!(matches!(err, TennisError::ValidationError { .. }));
            assert!(err.to_string().contains("at least one set is required"));
        }
    }

    #[test]
    fn test_parse_sets_accepts_loser_first_scores() {
        let sets = parse_sets("3-6").unwrap();
        assert_eq!(sets[0].winner_games, 3);
        assert_eq!(sets[0].loser_games, 6);
    }

    #[test]
    fn test_parse_sets_rejects_overflow() {
        let err = parse_sets("99999999999-1").unwrap_err();
        assert!(err.to_string().contains("99999999999-1"));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_url", "https://api.github.com").is_ok());
        assert!(validate_url("api_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api_url", "").is_err());
        assert!(validate_url("api_url", "invalid-url").is_err());
        assert!(validate_url("api_url", "ftp://example.com").is_err());
    }
}
