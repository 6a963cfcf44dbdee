use uuid::Uuid;

use crate::error::Result;
use crate::models::Game;
use crate::repository::{GameStore, ScoreStore};

/// Re-derives a game's completion flags after one of its scores is verified.
///
/// The flags only ever move to `true` here: once every registered player has
/// a card and every card is verified, the game is complete and verified.
/// Anything short of that leaves the game untouched.
pub fn refresh_completion<S>(store: &mut S, game_id: Uuid) -> Result<Game>
where
    S: GameStore + ScoreStore,
{
    let game = store.get_game(game_id)?;
    let scores = store.find_scores_by_game(game_id);

    let all_players_scored = game
        .players
        .iter()
        .all(|player_id| scores.iter().any(|s| s.player_id == *player_id));
    if !all_players_scored {
        return Ok(game);
    }

    let all_verified = scores.iter().all(|s| s.is_verified);
    if !all_verified || (game.is_complete && game.is_verified) {
        return Ok(game);
    }

    tracing::info!(%game_id, "All scores verified, marking game complete");
    store.set_completion_flags(game_id, true, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::game::{CreateGameRequest, UpdateGameRequest};
    use crate::dto::player::CreatePlayerRequest;
    use crate::models::{CourseSide, Gender, Score, TeeColor};
    use crate::repository::MemoryStore;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use rust_decimal::Decimal;

    fn setup() -> (MemoryStore, Uuid, Uuid) {
        let mut store = MemoryStore::new();
        let player = store
            .create_player(&CreatePlayerRequest {
                name: "Colin".to_string(),
                email: "colin@example.com".to_string(),
                gender: Gender::Male,
                handicap: Decimal::new(12, 0),
                preferred_tee: TeeColor::White,
            })
            .unwrap()
            .player_id;
        let game = store
            .create_game(&CreateGameRequest {
                date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                course_side: CourseSide::Back9,
                tee_time: NaiveTime::from_hms_opt(7, 50, 0).unwrap(),
                players: vec![player],
            })
            .unwrap()
            .game_id;
        (store, game, player)
    }

    fn card(game_id: Uuid, player_id: Uuid, is_verified: bool) -> Score {
        let timestamp = Utc::now().naive_utc();
        Score {
            score_id: Uuid::new_v4(),
            game_id,
            player_id,
            holes: Vec::new(),
            total_strokes: 0,
            total_net_strokes: 0,
            total_stableford_points: 17,
            is_verified,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn test_no_cards_leaves_game_open() {
        let (mut store, game, _) = setup();
        let state = refresh_completion(&mut store, game).unwrap();
        assert!(!state.is_complete);
    }

    #[test]
    fn test_unverified_card_leaves_game_open() {
        let (mut store, game, player) = setup();
        store.upsert(card(game, player, false));
        assert!(!refresh_completion(&mut store, game).unwrap().is_verified);
    }

    #[test]
    fn test_all_verified_closes_game() {
        let (mut store, game, player) = setup();
        store.upsert(card(game, player, true));
        let state = refresh_completion(&mut store, game).unwrap();
        assert!(state.is_complete && state.is_verified);
    }

    #[test]
    fn test_flags_are_never_cleared() {
        let (mut store, game, player) = setup();
        store
            .update_game(
                game,
                &UpdateGameRequest {
                    is_complete: Some(true),
                    is_verified: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        store.upsert(card(game, player, false));

        let state = refresh_completion(&mut store, game).unwrap();
        assert!(state.is_complete && state.is_verified);
    }

    #[test]
    fn test_unknown_game() {
        let (mut store, _, _) = setup();
        assert!(refresh_completion(&mut store, Uuid::new_v4()).unwrap_err().is_not_found());
    }
}
