//! Drives a script through the engine.

use crate::script::Script;
use anyhow::{Context, Result};
use strictly_sos::{Effect, Event, GameError, MatchConfig, Phase, Snapshot, SosGame};
use tracing::{info, instrument, warn};

/// Result of delivering one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The engine accepted the event.
    Applied {
        /// Delivered event.
        event: Event,
        /// What it did.
        effect: Effect,
    },
    /// The engine refused the event under a game rule.
    Refused {
        /// Delivered event.
        event: Event,
        /// Rule that refused it.
        error: GameError,
    },
}

/// Replays `script`, calling `on_step` with the snapshot after every event.
///
/// `config` takes precedence over the script's `[match]` table. If the
/// script does not open with a start event the match is started first.
/// Rule violations are reported and skipped; contract violations abort.
#[instrument(skip_all, fields(events = script.events.len()))]
pub fn run(
    script: &Script,
    config: Option<MatchConfig>,
    mut on_step: impl FnMut(&Step, &Snapshot) -> Result<()>,
) -> Result<Snapshot> {
    let config = config.or(script.setup).unwrap_or_default();
    let mut game = SosGame::with_config(config);

    let opens_with_start = script.engine_events().next() == Some(Event::StartMatch);
    if !opens_with_start {
        game.start().context("Failed to start match")?;
    }

    for event in script.engine_events() {
        let step = match game.handle(event) {
            Ok(effect) => Step::Applied { event, effect },
            Err(error) if error.is_rule_violation() => {
                warn!(%event, %error, "Event refused");
                Step::Refused { event, error }
            }
            Err(error) => {
                return Err(error).with_context(|| format!("Engine rejected '{}'", event));
            }
        };
        on_step(&step, &game.snapshot())?;
    }

    let snapshot = game.snapshot();
    match snapshot.outcome.filter(|_| snapshot.phase == Phase::GameOver) {
        Some(outcome) => info!(
            winner = ?outcome.winner(),
            draw = outcome.is_draw(),
            "Replay finished with match over"
        ),
        None => info!(phase = %snapshot.phase, "Replay finished"),
    }
    Ok(snapshot)
}
