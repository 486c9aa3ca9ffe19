//! Plausibility checks on computed values and game-status moves

use crate::bet::{GameStatus, StatType};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{stat} value {value} outside plausible range {min}..={max}")]
    OutOfRange {
        stat: StatType,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("game status cannot move from {from} to {to}")]
    GameStatusRegression { from: GameStatus, to: GameStatus },
}

/// Inclusive range a single game can produce for a stat
pub fn plausible_range(stat: StatType) -> (i64, i64) {
    use StatType::*;

    match stat {
        PassingYards => (-20, 600),
        RushingYards | ReceivingYards => (-50, 400),
        RushingReceivingYards => (-50, 500),
        PassingRushingYards => (-50, 700),
        LongestPassCompletion | LongestRush | LongestReception => (-20, 99),
        PassingTouchdowns | InterceptionsThrown | RushingTouchdowns | ReceivingTouchdowns => (0, 10),
        AnytimeTouchdown | TwoPlusTouchdowns | ThreePlusTouchdowns => (0, 10),
        FirstTouchdownScorer | LastTouchdownScorer => (0, 1),
        PassingCompletions => (0, 70),
        RushingAttempts => (0, 60),
        Receptions => (0, 30),
        Sacks | FieldGoalsMade => (0, 10),
        TacklesAssists | KickingPoints => (0, 40),

        Points => (0, 100),
        Rebounds => (0, 50),
        OffensiveRebounds | DefensiveRebounds | Assists | FreeThrowsMade => (0, 40),
        Steals => (0, 15),
        Blocks | Turnovers | ThreePointers => (0, 20),
        PlusMinus => (-80, 80),
        PointsReboundsAssists => (0, 150),
        PointsRebounds | PointsAssists => (0, 130),
        ReboundsAssists => (0, 80),
        StealsBlocks => (0, 30),
        DoubleDouble | TripleDouble => (0, 1),

        Hits | HitsAllowed | EarnedRuns | HitsRunsRbis => (0, 30),
        Runs | Walks | StrikeoutsBatter => (0, 10),
        RunsBattedIn => (0, 15),
        HomeRuns => (0, 5),
        StrikeoutsPitcher | ShotsOnGoal => (0, 25),
        WalksAllowed => (0, 20),

        Goals => (0, 10),
        PointsHockey => (0, 15),
        Saves => (0, 80),
        PenaltyMinutes => (0, 60),

        Moneyline | Spread => (-100, 100),
        TotalPoints => (0, 400),
        TeamTotalPoints => (0, 250),
        FirstTeamToScore | LastTeamToScore | WillBeOvertime => (0, 1),
    }
}

/// Reject values no single game could produce
pub fn validate_achieved(stat: StatType, value: Decimal) -> Result<(), ValidationError> {
    let (min, max) = plausible_range(stat);
    let (min, max) = (Decimal::from(min), Decimal::from(max));
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            stat,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// `final` and `canceled` are terminal, and a started game never goes back
/// to scheduled
pub fn validate_game_transition(from: GameStatus, to: GameStatus) -> Result<(), ValidationError> {
    let regression = from != to
        && match from {
            GameStatus::Final | GameStatus::Canceled => true,
            GameStatus::InProgress | GameStatus::Halftime | GameStatus::EndPeriod => {
                matches!(to, GameStatus::Scheduled | GameStatus::Unknown)
            }
            _ => false,
        };

    if regression {
        return Err(ValidationError::GameStatusRegression { from, to });
    }
    Ok(())
}
