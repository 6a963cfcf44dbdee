use std::cmp::Reverse;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::memory::MemoryStore;
use super::{GameStore, ScoreStore};
use crate::dto::leaderboard::{GameLeaderboardEntry, LeaderboardEntry};
use crate::error::Result;
use crate::services::handicap::round_to_tenth;

impl MemoryStore {
    /// Season standings over verified scores.
    ///
    /// Ordered by average points, then best round, then name. Players level on
    /// both numbers share a rank.
    pub fn season_leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .players
            .iter()
            .filter_map(|player| {
                let points: Vec<u32> = self
                    .find_scores_by_player(player.player_id, true)
                    .iter()
                    .map(|s| s.total_stableford_points)
                    .collect();
                if points.is_empty() {
                    return None;
                }

                let total_points: u32 = points.iter().sum();
                let average = Decimal::from(total_points) / Decimal::from(points.len() as u32);

                Some(LeaderboardEntry {
                    rank: 0,
                    player_id: player.player_id,
                    name: player.name.clone(),
                    handicap: player.handicap,
                    rounds_played: points.len(),
                    total_points,
                    average_points: round_to_tenth(average),
                    best_points: points.iter().copied().max().unwrap_or(0),
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.average_points
                .cmp(&a.average_points)
                .then(b.best_points.cmp(&a.best_points))
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        let mut previous: Option<(Decimal, u32, usize)> = None;
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = match previous {
                Some((avg, best, rank)) if avg == entry.average_points && best == entry.best_points => {
                    rank
                }
                _ => i + 1,
            };
            previous = Some((entry.average_points, entry.best_points, entry.rank));
        }

        entries
    }

    /// Every card in a game, best points first, lower net strokes breaking ties
    pub fn game_leaderboard(&self, game_id: Uuid) -> Result<Vec<GameLeaderboardEntry>> {
        self.get_game(game_id)?;

        let mut scores = self.find_scores_by_game(game_id);
        scores.sort_by_key(|s| (Reverse(s.total_stableford_points), s.total_net_strokes));

        let mut entries: Vec<GameLeaderboardEntry> = Vec::with_capacity(scores.len());
        for (i, score) in scores.iter().enumerate() {
            let rank = match entries.last() {
                Some(prev)
                    if prev.total_stableford_points == score.total_stableford_points
                        && prev.total_net_strokes == score.total_net_strokes =>
                {
                    prev.rank
                }
                _ => i + 1,
            };
            let name = self
                .players
                .iter()
                .find(|p| p.player_id == score.player_id)
                .map(|p| p.name.clone())
                .unwrap_or_default();

            entries.push(GameLeaderboardEntry {
                rank,
                player_id: score.player_id,
                name,
                total_strokes: score.total_strokes,
                total_net_strokes: score.total_net_strokes,
                total_stableford_points: score.total_stableford_points,
                is_verified: score.is_verified,
            });
        }

        Ok(entries)
    }
}
