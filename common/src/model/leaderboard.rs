use serde::{Deserialize, Serialize};

/// One row of the public leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub hours: f64,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub tasks: u32,
    #[serde(default)]
    pub rating: f64,
}

/// Fills in missing ranks from server order (1-based). Ranks the server
/// supplied are kept.
pub fn rank_entries(entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, mut entry)| {
            if entry.rank.is_none() {
                entry.rank = Some(index as u32 + 1);
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, rank: Option<u32>) -> LeaderboardEntry {
        LeaderboardEntry {
            id,
            name: format!("Volunteer {id}"),
            hours: 10.0,
            rank,
            tasks: 1,
            rating: 4.5,
        }
    }

    #[test]
    fn missing_ranks_follow_server_order() {
        let ranked = rank_entries(vec![entry(9, None), entry(4, Some(7)), entry(2, None)]);
        let ranks: Vec<_> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![Some(1), Some(7), Some(3)]);
    }
}
