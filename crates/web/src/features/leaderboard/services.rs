use storage::{
    Database,
    dto::{common::PaginationParams, leaderboard::LeaderboardEntry},
};

/// Season standings, one page at a time. Returns the page and the total count.
pub async fn season_leaderboard(
    db: &Database,
    pagination: &PaginationParams,
) -> (Vec<LeaderboardEntry>, usize) {
    let entries = db.read().await.store.season_leaderboard();
    let total_items = entries.len();

    (pagination.apply(entries), total_items)
}
