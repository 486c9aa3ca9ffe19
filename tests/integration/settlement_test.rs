//! Leg and bet settlement against final box scores

mod common;

use common::{cowboys_at_eagles, cowboys_summary, day};
use parlay_settle::bet::{Bet, BetStatus, GameStatus, Leg, LegStatus, LineDirection, Sport, StatType};
use parlay_settle::calculator::{calculate, Achieved};
use parlay_settle::settlement::{apply_bet_status, is_archivable, refresh_leg, settle_leg};
use parlay_settle::upstream::GameDocument;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Cowboys 24 at Eagles 20
fn final_game() -> GameDocument {
    game(GameStatus::Final, 20, 24)
}

fn game(status: GameStatus, home: u32, away: u32) -> GameDocument {
    let mut event = cowboys_at_eagles("401", day(9), status);
    event.home.score = home;
    event.away.score = away;
    event.period = 4;
    GameDocument::new(event, cowboys_summary())
}

fn leg(stat: StatType, target: Decimal) -> Leg {
    Leg::new(Sport::Nfl, day(9), "Cowboys", "Eagles", stat, target)
}

/// Finalize then settle, as the finalize and hit-status jobs do
fn settle(leg: &mut Leg, game: &GameDocument) -> Option<LegStatus> {
    refresh_leg(leg, game, day(9), true).unwrap();
    settle_leg(leg)
}

#[test]
fn test_spread_cover_wins() {
    let mut spread = leg(StatType::Spread, dec!(-3.5)).with_team("Dallas Cowboys");

    assert_eq!(settle(&mut spread, &final_game()), Some(LegStatus::Won));
    assert_eq!(spread.achieved_value, Some(dec!(4)));
    assert_eq!(spread.is_hit, Some(true));
}

#[test]
fn test_spread_for_underdog_side() {
    let mut spread = leg(StatType::Spread, dec!(4.5)).with_team("Philadelphia Eagles");

    assert_eq!(settle(&mut spread, &final_game()), Some(LegStatus::Won));
    assert_eq!(spread.achieved_value, Some(dec!(-4)));

    let mut short = leg(StatType::Spread, dec!(2.5)).with_team("Eagles");
    assert_eq!(settle(&mut short, &final_game()), Some(LegStatus::Lost));
}

#[test]
fn test_passing_yards_over_wins() {
    let mut yards = leg(StatType::PassingYards, dec!(180))
        .with_player("Dak Prescott", Some("Cowboys"))
        .with_line(LineDirection::Over);

    assert_eq!(settle(&mut yards, &final_game()), Some(LegStatus::Won));
    assert_eq!(yards.achieved_value, Some(dec!(210)));

    let mut under = leg(StatType::PassingYards, dec!(180))
        .with_player("Dak Prescott", Some("Cowboys"))
        .with_line(LineDirection::Under);
    assert_eq!(settle(&mut under, &final_game()), Some(LegStatus::Lost));
}

#[test]
fn test_anytime_touchdown_from_scoring_plays() {
    let mut pollard = leg(StatType::AnytimeTouchdown, dec!(1)).with_player("Tony Pollard", Some("Cowboys"));

    assert_eq!(settle(&mut pollard, &final_game()), Some(LegStatus::Won));
    assert_eq!(pollard.achieved_value, Some(dec!(1)));
}

#[test]
fn test_anytime_touchdown_excludes_passer() {
    let mut prescott = leg(StatType::AnytimeTouchdown, dec!(1)).with_player("Dak Prescott", Some("Cowboys"));
    assert_eq!(settle(&mut prescott, &final_game()), Some(LegStatus::Lost));
    assert_eq!(prescott.achieved_value, Some(dec!(0)));

    let mut lamb = leg(StatType::TwoPlusTouchdowns, dec!(2)).with_player("CeeDee Lamb", Some("Cowboys"));
    assert_eq!(settle(&mut lamb, &final_game()), Some(LegStatus::Won));
}

#[test]
fn test_moneyline_for_team_not_in_game_is_unresolved() {
    let game = final_game();
    let mut packers = leg(StatType::Moneyline, dec!(0)).with_team("Green Bay Packers");

    assert_eq!(calculate(&packers, &game), Achieved::Value(Decimal::ZERO));
    assert_eq!(settle(&mut packers, &game), None);
    assert_eq!(packers.status, LegStatus::Pending);
    assert_eq!(packers.achieved_value, None);
    assert!(packers.review_note.is_some());
}

#[test]
fn test_settlement_is_idempotent() {
    let mut yards = leg(StatType::PassingYards, dec!(180)).with_player("Dak Prescott", Some("Cowboys"));
    settle(&mut yards, &final_game());
    let once = yards.clone();

    assert_eq!(settle(&mut yards, &final_game()), None);
    assert_eq!(yards, once);
}

#[test]
fn test_settled_leg_ignores_later_corrections() {
    let mut spread = leg(StatType::Spread, dec!(-3.5)).with_team("Cowboys");
    settle(&mut spread, &final_game());

    // a stat correction that would flip the result arrives after settlement
    let corrected = game(GameStatus::Final, 23, 24);
    let outcome = refresh_leg(&mut spread, &corrected, day(9), true).unwrap();
    assert!(!outcome.changed);
    assert_eq!(spread.status, LegStatus::Won);
    assert_eq!(spread.achieved_value, Some(dec!(4)));
}

#[test]
fn test_no_settlement_before_final() {
    let mut spread = leg(StatType::Spread, dec!(-3.5)).with_team("Cowboys");

    refresh_leg(&mut spread, &game(GameStatus::InProgress, 3, 0), day(9), false).unwrap();
    assert_eq!(spread.status, LegStatus::Live);
    assert_eq!(settle_leg(&mut spread), None);

    // a final game seen by the live refresh is not yet a final value
    refresh_leg(&mut spread, &final_game(), day(9), false).unwrap();
    assert!(!spread.value_final);
    assert_eq!(settle_leg(&mut spread), None);
}

#[test]
fn test_bet_rollup() {
    let mut won = Bet::new(
        vec![
            leg(StatType::Spread, dec!(-3.5)).with_team("Cowboys"),
            leg(StatType::PassingYards, dec!(180)).with_player("Dak Prescott", Some("Cowboys")),
        ],
        dec!(10),
    );
    for leg in &mut won.legs {
        settle(leg, &final_game());
    }
    assert_eq!(apply_bet_status(&mut won), Some((BetStatus::Pending, BetStatus::Won)));
    assert!(is_archivable(&won));

    let mut lost = Bet::new(
        vec![
            leg(StatType::Spread, dec!(-7.5)).with_team("Cowboys"),
            leg(StatType::PassingYards, dec!(180)).with_player("Dak Prescott", Some("Cowboys")),
        ],
        dec!(10),
    );
    for leg in &mut lost.legs {
        settle(leg, &final_game());
    }
    assert_eq!(apply_bet_status(&mut lost), Some((BetStatus::Pending, BetStatus::Lost)));

    // terminal bet status is never recomputed
    lost.legs[0].status = LegStatus::Won;
    assert_eq!(apply_bet_status(&mut lost), None);
    assert_eq!(lost.status, BetStatus::Lost);
}

#[test]
fn test_bet_with_unresolvable_leg_can_be_archived() {
    let mut bet = Bet::new(
        vec![
            leg(StatType::Spread, dec!(-3.5)).with_team("Cowboys"),
            leg(StatType::Moneyline, dec!(0)).with_team("Green Bay Packers"),
        ],
        dec!(10),
    );
    for leg in &mut bet.legs {
        settle(leg, &final_game());
    }
    apply_bet_status(&mut bet);

    assert_eq!(bet.status, BetStatus::Pending);
    assert!(is_archivable(&bet));
}
