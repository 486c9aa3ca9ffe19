//! Per-leg lifecycle
//!
//! `pending -> live -> {won, lost}`. A leg goes live while its game is being
//! played and settles only once the game is final and the achieved value
//! came from the final box score. Won and lost are never left.

use super::validation::{validate_achieved, validate_game_transition, ValidationError};
use crate::bet::{GameStatus, Leg, LegStatus, LineDirection, StatType};
use crate::calculator;
use crate::upstream::GameDocument;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Whether an achieved value beats the target
pub fn decide_hit(
    stat: StatType,
    line: Option<LineDirection>,
    achieved: Decimal,
    target: Decimal,
) -> bool {
    match stat {
        StatType::Moneyline => achieved > Decimal::ZERO,
        StatType::Spread => achieved + target > Decimal::ZERO,
        _ => match line {
            Some(LineDirection::Under) => achieved < target,
            Some(LineDirection::Over) | None => achieved >= target,
        },
    }
}

/// Treat a game stuck between periods on a past date as over
pub fn repair_stuck_period(status: GameStatus, event_date: NaiveDate, today: NaiveDate) -> GameStatus {
    if status == GameStatus::EndPeriod && event_date < today {
        GameStatus::Final
    } else {
        status
    }
}

/// What a refresh changed on a leg
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshOutcome {
    pub changed: bool,
    /// Previous and new achieved value, when it moved
    pub value_change: Option<(Option<Decimal>, Option<Decimal>)>,
    /// Set when a computed value was rejected as implausible
    pub rejected: Option<ValidationError>,
}

/// Copy the game's state onto a leg and recompute its achieved value.
///
/// `finalize` marks a value computed from a final game as settleable.
/// Settled legs are left untouched. A game status that would move backwards
/// is refused and nothing on the leg changes.
pub fn refresh_leg(
    leg: &mut Leg,
    game: &GameDocument,
    today: NaiveDate,
    finalize: bool,
) -> Result<RefreshOutcome, ValidationError> {
    if leg.status.is_terminal() {
        return Ok(RefreshOutcome::default());
    }

    let status = repair_stuck_period(game.status(), game.event.date, today);
    validate_game_transition(leg.game_status, status)?;

    let before = leg.clone();
    let mut outcome = RefreshOutcome::default();

    leg.game_id = Some(game.id().to_string());
    leg.game_status = status;
    if status.is_in_progress() || status.is_final() {
        leg.home_score = Some(game.home().score);
        leg.away_score = Some(game.away().score);
    }

    if status == GameStatus::Canceled {
        leg.review_note = Some("game canceled".to_string());
    } else if status.is_in_progress() || status.is_final() {
        match calculator::evaluate(leg, game) {
            Some(achieved) => match achieved.leg_value(leg) {
                Some(value) => match validate_achieved(leg.stat_type, value) {
                    Ok(()) => {
                        leg.achieved_value = Some(value);
                        leg.achieved_label = achieved.label().map(str::to_string);
                        leg.review_note = None;
                        if status.is_final() && finalize {
                            leg.value_final = true;
                        }
                    }
                    Err(e) => {
                        leg.review_note = Some(e.to_string());
                        outcome.rejected = Some(e);
                    }
                },
                None => {
                    if status.is_final() {
                        leg.review_note = Some("leg names no team to compare".to_string());
                    }
                }
            },
            None => {
                if status.is_final() {
                    leg.review_note = Some(unresolved_reason(leg).to_string());
                }
            }
        }
    }

    leg.status = next_status(leg);

    if before.achieved_value != leg.achieved_value {
        outcome.value_change = Some((before.achieved_value, leg.achieved_value));
    }
    outcome.changed = before != *leg;
    Ok(outcome)
}

fn unresolved_reason(leg: &Leg) -> &'static str {
    if leg.stat_type.is_team_prop() {
        "team not found in resolved game"
    } else if leg.player_name.as_deref().map_or(true, |p| p.trim().is_empty()) {
        "player prop without a player"
    } else {
        "stat not tracked for this sport"
    }
}

/// Non-terminal status implied by the leg's game
fn next_status(leg: &Leg) -> LegStatus {
    if leg.game_status.is_in_progress() {
        LegStatus::Live
    } else if leg.game_status.is_final() && leg.achieved_value.is_some() && leg.review_note.is_none() {
        // final, waiting for the hit decision
        LegStatus::Live
    } else {
        LegStatus::Pending
    }
}

/// Settle a leg whose game is final and whose value came from the final
/// box score. Returns the new terminal status, or `None` when the leg is
/// already settled or not ready.
pub fn settle_leg(leg: &mut Leg) -> Option<LegStatus> {
    if leg.status.is_terminal()
        || !leg.game_status.is_final()
        || !leg.value_final
        || leg.review_note.is_some()
    {
        return None;
    }
    let achieved = leg.achieved_value?;

    let hit = decide_hit(leg.stat_type, leg.line, achieved, leg.target);
    leg.is_hit = Some(hit);
    leg.status = if hit { LegStatus::Won } else { LegStatus::Lost };
    Some(leg.status)
}

/// Whether the leg needs no further polling: settled, or its game is over
/// and the leg is flagged for review
pub fn is_closed(leg: &Leg) -> bool {
    if leg.status.is_terminal() {
        return true;
    }
    matches!(leg.game_status, GameStatus::Final | GameStatus::Canceled) && leg.review_note.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bet::Sport;
    use crate::boxscore::BoxScore;
    use crate::upstream::{GameSummary, ScheduledEvent, TeamSide};
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 9).unwrap()
    }

    fn game(status: GameStatus, home: u32, away: u32) -> GameDocument {
        let boxscore: BoxScore = serde_json::from_str(
            r#"[{"statistics": [{"name": "passing", "labels": ["C/ATT", "YDS", "TD"],
                "athletes": [{"athlete": {"displayName": "Dak Prescott"}, "stats": ["22/31", "210", "2"]}]}]}]"#,
        )
        .unwrap();
        GameDocument::new(
            ScheduledEvent {
                id: "401".to_string(),
                sport: Sport::Nfl,
                date: date(),
                start_time: None,
                home: TeamSide::new("Philadelphia Eagles", "PHI", home),
                away: TeamSide::new("Dallas Cowboys", "DAL", away),
                status,
                period: 4,
                clock: String::new(),
            },
            GameSummary {
                boxscore,
                scoring_plays: vec![],
            },
        )
    }

    fn passing_leg() -> Leg {
        Leg::new(Sport::Nfl, date(), "Cowboys", "Eagles", StatType::PassingYards, dec!(180))
            .with_player("Dak Prescott", Some("Cowboys"))
            .with_line(LineDirection::Over)
    }

    #[test]
    fn test_decide_hit() {
        assert!(decide_hit(StatType::Moneyline, None, dec!(3), dec!(0)));
        assert!(!decide_hit(StatType::Moneyline, None, dec!(0), dec!(0)));
        assert!(decide_hit(StatType::Spread, None, dec!(4), dec!(-3.5)));
        assert!(!decide_hit(StatType::Spread, None, dec!(3), dec!(-3.5)));
        assert!(decide_hit(StatType::Spread, None, dec!(-2), dec!(2.5)));
        assert!(decide_hit(StatType::Points, None, dec!(25), dec!(25)));
        assert!(!decide_hit(StatType::Points, Some(LineDirection::Under), dec!(25), dec!(25)));
        assert!(decide_hit(StatType::Points, Some(LineDirection::Under), dec!(24), dec!(24.5)));
    }

    #[test]
    fn test_live_then_final_then_settled() {
        let mut leg = passing_leg();
        let today = date();

        refresh_leg(&mut leg, &game(GameStatus::InProgress, 7, 10), today, false).unwrap();
        assert_eq!(leg.status, LegStatus::Live);
        assert_eq!(leg.achieved_value, Some(dec!(210)));
        assert!(!leg.value_final);
        assert_eq!(settle_leg(&mut leg), None);

        refresh_leg(&mut leg, &game(GameStatus::Final, 20, 24), today, true).unwrap();
        assert!(leg.value_final);
        assert_eq!(leg.away_score, Some(24));

        assert_eq!(settle_leg(&mut leg), Some(LegStatus::Won));
        assert_eq!(leg.is_hit, Some(true));
    }

    #[test]
    fn test_settled_leg_is_never_touched() {
        let mut leg = passing_leg();
        refresh_leg(&mut leg, &game(GameStatus::Final, 20, 24), date(), true).unwrap();
        settle_leg(&mut leg);
        let settled = leg.clone();

        let outcome = refresh_leg(&mut leg, &game(GameStatus::Final, 0, 0), date(), true).unwrap();
        assert!(!outcome.changed);
        assert_eq!(settle_leg(&mut leg), None);
        assert_eq!(leg, settled);
    }

    #[test]
    fn test_final_without_final_value_is_not_settled() {
        let mut leg = passing_leg();
        refresh_leg(&mut leg, &game(GameStatus::Final, 20, 24), date(), false).unwrap();
        assert_eq!(leg.status, LegStatus::Live);
        assert_eq!(settle_leg(&mut leg), None);
    }

    #[test]
    fn test_game_status_regression_refused() {
        let mut leg = passing_leg();
        refresh_leg(&mut leg, &game(GameStatus::Final, 20, 24), date(), true).unwrap();
        let before = leg.clone();

        let err = refresh_leg(&mut leg, &game(GameStatus::InProgress, 20, 24), date(), false);
        assert!(err.is_err());
        assert_eq!(leg, before);
    }

    #[test]
    fn test_scheduled_game_has_no_value() {
        let mut leg = passing_leg();
        refresh_leg(&mut leg, &game(GameStatus::Scheduled, 0, 0), date(), false).unwrap();
        assert_eq!(leg.status, LegStatus::Pending);
        assert_eq!(leg.achieved_value, None);
        assert_eq!(leg.game_id.as_deref(), Some("401"));
    }

    #[test]
    fn test_unmatched_team_is_flagged_not_settled() {
        let mut leg = Leg::new(Sport::Nfl, date(), "Cowboys", "Eagles", StatType::Moneyline, dec!(0))
            .with_team("Green Bay Packers");
        refresh_leg(&mut leg, &game(GameStatus::Final, 20, 24), date(), true).unwrap();

        assert_eq!(leg.achieved_value, None);
        assert_eq!(leg.status, LegStatus::Pending);
        assert!(leg.review_note.is_some());
        assert_eq!(settle_leg(&mut leg), None);
        assert!(is_closed(&leg));
    }

    #[test]
    fn test_implausible_value_rejected() {
        let mut leg = Leg::new(Sport::Nfl, date(), "Cowboys", "Eagles", StatType::TotalPoints, dec!(44.5));
        let outcome = refresh_leg(&mut leg, &game(GameStatus::Final, 400, 24), date(), true).unwrap();

        assert!(outcome.rejected.is_some());
        assert_eq!(leg.achieved_value, None);
        assert!(!leg.value_final);
        assert_eq!(settle_leg(&mut leg), None);
    }

    #[test]
    fn test_stuck_period_repair() {
        let yesterday = date();
        let today = date().succ_opt().unwrap();
        assert_eq!(repair_stuck_period(GameStatus::EndPeriod, yesterday, today), GameStatus::Final);
        assert_eq!(repair_stuck_period(GameStatus::EndPeriod, today, today), GameStatus::EndPeriod);
        assert_eq!(repair_stuck_period(GameStatus::InProgress, yesterday, today), GameStatus::InProgress);
    }
}
