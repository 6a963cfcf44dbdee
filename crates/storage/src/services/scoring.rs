//! Score entry and verification: the calculator, the score table, the
//! handicap adjuster and the completion tracker wired together.

use uuid::Uuid;
use validator::Validate;

use super::completion::refresh_completion;
use super::handicap::adjust_handicap;
use super::notification::{NotificationSink, ScoreEvent};
use super::stableford::{is_round_complete, score_round};
use crate::dto::score::{HoleStrokes, SaveScoreRequest, ScorePreviewResponse, VerifyScoreResponse};
use crate::error::{Result, StorageError};
use crate::models::{Game, HoleInfo, Player, Score};
use crate::repository::memory::now;
use crate::repository::{CourseData, GameStore, PlayerStore, ScoreStore};

/// Live points for a card in progress. Nothing is stored.
pub fn preview_score<S, C>(
    store: &S,
    course: &C,
    game_id: Uuid,
    req: &SaveScoreRequest,
) -> Result<ScorePreviewResponse>
where
    S: GameStore + PlayerStore,
    C: CourseData,
{
    let (game, player) = load_entry(store, game_id, req.player_id)?;
    let holes = course.holes(game.course_side);
    check_entries(holes, &req.holes)?;

    let round = score_round(player.handicap, holes, &req.holes);

    Ok(ScorePreviewResponse {
        player_id: player.player_id,
        holes: round.holes,
        totals: round.totals,
        is_round_complete: is_round_complete(holes, &req.holes),
    })
}

/// Creates or overwrites the player's card for the game.
///
/// Points are worked out from the player's current handicap. An existing card
/// keeps its id and creation time; a verified card cannot be changed.
pub fn save_score<S, C, N>(
    store: &mut S,
    course: &C,
    sink: &mut N,
    game_id: Uuid,
    req: &SaveScoreRequest,
) -> Result<Score>
where
    S: GameStore + PlayerStore + ScoreStore,
    C: CourseData,
    N: NotificationSink,
{
    let (game, player) = load_entry(store, game_id, req.player_id)?;
    let holes = course.holes(game.course_side);
    check_entries(holes, &req.holes)?;

    let round = score_round(player.handicap, holes, &req.holes);
    let timestamp = now();

    let score = match store.find_score(game_id, player.player_id) {
        Some(existing) if existing.is_verified => {
            return Err(StorageError::AlreadyVerified(existing.score_id));
        }
        Some(existing) => Score {
            holes: round.holes,
            total_strokes: round.totals.total_strokes,
            total_net_strokes: round.totals.total_net_strokes,
            total_stableford_points: round.totals.total_stableford_points,
            updated_at: timestamp,
            ..existing
        },
        None => Score {
            score_id: Uuid::new_v4(),
            game_id,
            player_id: player.player_id,
            holes: round.holes,
            total_strokes: round.totals.total_strokes,
            total_net_strokes: round.totals.total_net_strokes,
            total_stableford_points: round.totals.total_stableford_points,
            is_verified: false,
            created_at: timestamp,
            updated_at: timestamp,
        },
    };

    let saved = store.upsert(score);
    tracing::info!(
        score_id = %saved.score_id,
        %game_id,
        player_id = %player.player_id,
        points = saved.total_stableford_points,
        "Score saved"
    );
    sink.notify(ScoreEvent::Saved {
        player_name: player.name,
        points: saved.total_stableford_points,
    });

    Ok(saved)
}

/// Marks a card verified, then adjusts the player's handicap and re-evaluates
/// the game's completion. Verifying twice is rejected.
pub fn verify_score<S, N>(store: &mut S, sink: &mut N, score_id: Uuid) -> Result<VerifyScoreResponse>
where
    S: GameStore + PlayerStore + ScoreStore,
    N: NotificationSink,
{
    let score = store.find_score_by_id(score_id)?;
    if score.is_verified {
        return Err(StorageError::AlreadyVerified(score_id));
    }
    let player = store.get_player(score.player_id)?;
    store.get_game(score.game_id)?;

    let score = store.mark_verified(score_id)?;
    tracing::info!(%score_id, player_id = %player.player_id, "Score verified");
    sink.notify(ScoreEvent::Verified {
        player_name: player.name.clone(),
        points: score.total_stableford_points,
    });

    let handicap_change = adjust_handicap(store, player.player_id)?;
    if let Some(change) = &handicap_change {
        sink.notify(ScoreEvent::HandicapChanged {
            player_name: player.name,
            previous: change.previous,
            new: change.new,
        });
    }

    let game = refresh_completion(store, score.game_id)?;

    Ok(VerifyScoreResponse {
        score,
        handicap_change,
        game_completed: game.is_complete && game.is_verified,
    })
}

fn load_entry<S>(store: &S, game_id: Uuid, player_id: Uuid) -> Result<(Game, Player)>
where
    S: GameStore + PlayerStore,
{
    let game = store.get_game(game_id)?;
    let player = store.get_player(player_id)?;

    if !game.has_player(player_id) {
        return Err(StorageError::ConstraintViolation(
            "Player is not entered in this game".to_string(),
        ));
    }
    Ok((game, player))
}

fn check_entries(holes: &[HoleInfo], entries: &[HoleStrokes]) -> Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|e| StorageError::Validation(format!("Hole {}: {e}", entry.hole_number)))?;
        if !holes.iter().any(|h| h.hole_number == entry.hole_number) {
            return Err(StorageError::Validation(format!(
                "Hole {} is not played on this side",
                entry.hole_number
            )));
        }
        if entries[..i].iter().any(|e| e.hole_number == entry.hole_number) {
            return Err(StorageError::Validation(format!(
                "Hole {} entered more than once",
                entry.hole_number
            )));
        }
    }
    Ok(())
}
