//! Every point corresponds to exactly one scored line.

use super::super::game::SosGame;
use super::Invariant;

/// Invariant: the sum of all scores equals the number of distinct scored
/// lines, and every registered id has exactly one record.
pub struct ScoreMatchesLedgerInvariant;

impl Invariant<SosGame> for ScoreMatchesLedgerInvariant {
    fn holds(game: &SosGame) -> bool {
        match (game.roster(), game.ledger()) {
            (Some(roster), Some(ledger)) => {
                let total = roster.total_score() as usize;
                total == ledger.len() && ledger.len() == ledger.lines().len()
            }
            (None, None) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Total score equals the number of scored lines"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_match_holds() {
        let mut game = SosGame::new();
        game.start().unwrap();
        assert!(ScoreMatchesLedgerInvariant::holds(&game));
    }
}
