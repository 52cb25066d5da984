use std::collections::HashMap;

use crate::dto::consensus::ConsensusEntry;
use crate::repository::ballots::ScoredEntryRow;

/// Maximum ballot depth the scoring formula accounts for. A rank-1 vote
/// is worth `SCORING_DEPTH` points, the deepest stored rank is worth 1.
pub const SCORING_DEPTH: i32 = 25;

/// Points one entry contributes: `SCORING_DEPTH + 1 - rank`. Stored
/// ranks never exceed the depth (ballots are truncated at submit), so
/// this is always >= 1 for persisted entries.
pub fn points_for_rank(rank: i32) -> i64 {
    (SCORING_DEPTH + 1 - rank) as i64
}

/// Tally entries into a consensus ranking: sum points per team, sort
/// descending by points. Ties break ascending by team name so repeated
/// queries over the same ballots produce identical output. Teams with
/// no entries are simply absent.
pub fn tally(entries: &[ScoredEntryRow]) -> Vec<ConsensusEntry> {
    let mut points: HashMap<&str, i64> = HashMap::new();
    for entry in entries {
        *points.entry(entry.team_name.as_str()).or_insert(0) += points_for_rank(entry.rank);
    }

    let mut ranking: Vec<ConsensusEntry> = points
        .into_iter()
        .map(|(team, points)| ConsensusEntry {
            team: team.to_string(),
            points,
        })
        .collect();

    ranking.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.team.cmp(&b.team)));

    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(team: &str, rank: i32) -> ScoredEntryRow {
        ScoredEntryRow {
            team_name: team.to_string(),
            rank,
        }
    }

    #[test]
    fn test_rank_one_is_worth_full_depth() {
        assert_eq!(points_for_rank(1), 25);
    }

    #[test]
    fn test_deepest_rank_is_worth_one_point() {
        assert_eq!(points_for_rank(SCORING_DEPTH), 1);
    }

    #[test]
    fn test_single_ballot_scores_by_position() {
        let entries = vec![entry("Georgia", 1), entry("Michigan", 2), entry("Texas", 3)];

        let ranking = tally(&entries);

        assert_eq!(
            ranking,
            vec![
                ConsensusEntry {
                    team: "Georgia".to_string(),
                    points: 25
                },
                ConsensusEntry {
                    team: "Michigan".to_string(),
                    points: 24
                },
                ConsensusEntry {
                    team: "Texas".to_string(),
                    points: 23
                },
            ]
        );
    }

    #[test]
    fn test_points_accumulate_across_voters() {
        // Two rank-1 votes for Georgia beat a single rank-1 vote for Ohio State.
        let entries = vec![entry("Georgia", 1), entry("Georgia", 1), entry("Ohio State", 1)];

        let ranking = tally(&entries);

        assert_eq!(ranking[0].team, "Georgia");
        assert_eq!(ranking[0].points, 50);
        assert_eq!(ranking[1].team, "Ohio State");
        assert_eq!(ranking[1].points, 25);
        assert!(ranking[0].points > ranking[1].points);
    }

    #[test]
    fn test_unmentioned_teams_are_absent() {
        let entries = vec![entry("Alabama", 1)];

        let ranking = tally(&entries);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].team, "Alabama");
    }

    #[test]
    fn test_empty_scope_yields_empty_ranking() {
        assert!(tally(&[]).is_empty());
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let entries = vec![entry("Oregon", 5), entry("Notre Dame", 5)];

        let ranking = tally(&entries);

        assert_eq!(ranking[0].team, "Notre Dame");
        assert_eq!(ranking[1].team, "Oregon");
        assert_eq!(ranking[0].points, ranking[1].points);
    }
}
