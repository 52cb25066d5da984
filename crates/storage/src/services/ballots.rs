use std::collections::{BTreeMap, HashMap, HashSet};

use uuid::Uuid;

use crate::dto::consensus::{RankedTeam, VoterBallot};
use crate::models::BallotEntry;
use crate::repository::ballots::{UserBallotRow, WeekBallotRow};
use crate::services::scoring::SCORING_DEPTH;

/// Turn a submitted name list into the ballot entries to store.
///
/// Three normalization steps, in order:
/// 1. names not in the directory are silently dropped (tolerance for
///    retired or misspelled teams; the submission still succeeds),
/// 2. a team listed twice keeps its first position only,
/// 3. the result is truncated to `SCORING_DEPTH` entries so every
///    stored rank scores at least one point.
///
/// Ranks are assigned by position in the surviving list, so they stay
/// contiguous from 1 no matter how many names were dropped.
pub fn build_ballot(
    user_id: Uuid,
    week: i32,
    rankings: &[String],
    directory: &HashMap<String, Uuid>,
) -> Vec<BallotEntry> {
    let mut seen: HashSet<Uuid> = HashSet::new();

    rankings
        .iter()
        .filter_map(|name| directory.get(name).copied())
        .filter(|team_id| seen.insert(*team_id))
        .take(SCORING_DEPTH as usize)
        .zip(1..)
        .map(|(team_id, rank)| BallotEntry {
            entry_id: Uuid::new_v4(),
            user_id,
            week,
            team_id,
            rank,
        })
        .collect()
}

/// Group one user's entry rows into per-week ordered ballots. Rows are
/// already sorted by (week, rank), so push order is ballot order.
pub fn group_by_week(rows: Vec<UserBallotRow>) -> BTreeMap<i32, Vec<String>> {
    let mut ballots: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for row in rows {
        ballots.entry(row.week).or_default().push(row.team_name);
    }
    ballots
}

/// Group one week's entries into per-voter ballots. Rows arrive sorted
/// by (username, rank); voter order in the output follows that sort.
pub fn group_by_voter(rows: Vec<WeekBallotRow>) -> Vec<VoterBallot> {
    let mut ballots: Vec<VoterBallot> = Vec::new();
    for row in rows {
        let ranked = RankedTeam {
            team: row.team_name,
            rank: row.rank,
        };
        match ballots.last_mut() {
            Some(ballot) if ballot.username == row.username => ballot.rankings.push(ranked),
            _ => ballots.push(VoterBallot {
                username: row.username,
                rankings: vec![ranked],
            }),
        }
    }
    ballots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(names: &[&str]) -> HashMap<String, Uuid> {
        names
            .iter()
            .map(|name| (name.to_string(), Uuid::new_v4()))
            .collect()
    }

    fn submitted(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn voter() -> Uuid {
        Uuid::new_v4()
    }

    fn ranked_teams(entries: &[BallotEntry]) -> Vec<(Uuid, i32)> {
        entries.iter().map(|e| (e.team_id, e.rank)).collect()
    }

    #[test]
    fn test_known_names_get_positional_ranks() {
        let dir = directory(&["Georgia", "Michigan", "Texas"]);
        let entries = build_ballot(voter(), 1, &submitted(&["Texas", "Georgia", "Michigan"]), &dir);

        assert_eq!(
            ranked_teams(&entries),
            vec![(dir["Texas"], 1), (dir["Georgia"], 2), (dir["Michigan"], 3)]
        );
    }

    #[test]
    fn test_entries_carry_their_user_and_week() {
        let dir = directory(&["Georgia"]);
        let user_id = voter();
        let entries = build_ballot(user_id, 7, &submitted(&["Georgia"]), &dir);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, user_id);
        assert_eq!(entries[0].week, 7);
    }

    #[test]
    fn test_unknown_names_are_skipped_and_ranks_compact() {
        let dir = directory(&["Georgia", "Texas"]);
        let entries = build_ballot(voter(), 1, &submitted(&["Georgia", "Hogwarts", "Texas"]), &dir);

        assert_eq!(
            ranked_teams(&entries),
            vec![(dir["Georgia"], 1), (dir["Texas"], 2)]
        );
    }

    #[test]
    fn test_duplicate_team_keeps_first_position() {
        let dir = directory(&["Georgia", "Texas"]);
        let entries = build_ballot(voter(), 1, &submitted(&["Georgia", "Texas", "Georgia"]), &dir);

        assert_eq!(
            ranked_teams(&entries),
            vec![(dir["Georgia"], 1), (dir["Texas"], 2)]
        );
    }

    #[test]
    fn test_ballot_truncates_at_scoring_depth() {
        let names: Vec<String> = (0..30).map(|i| format!("Team {i:02}")).collect();
        let dir: HashMap<String, Uuid> = names
            .iter()
            .map(|name| (name.clone(), Uuid::new_v4()))
            .collect();

        let entries = build_ballot(voter(), 1, &names, &dir);

        assert_eq!(entries.len(), SCORING_DEPTH as usize);
        assert_eq!(entries.last().unwrap().rank, SCORING_DEPTH);
    }

    #[test]
    fn test_resubmission_is_deterministic() {
        // Same names, same directory: the stored (team, rank) pairs are
        // identical, so replacing a ballot with itself is a no-op from
        // the reader's point of view.
        let dir = directory(&["Georgia", "Texas", "Michigan"]);
        let names = submitted(&["Michigan", "Georgia", "Texas"]);
        let user_id = voter();

        let first = build_ballot(user_id, 2, &names, &dir);
        let second = build_ballot(user_id, 2, &names, &dir);

        assert_eq!(ranked_teams(&first), ranked_teams(&second));
    }

    #[test]
    fn test_all_unknown_yields_empty_ballot() {
        let dir = directory(&["Georgia"]);
        let entries = build_ballot(voter(), 1, &submitted(&["Narnia", "Hogwarts"]), &dir);

        assert!(entries.is_empty());
    }

    #[test]
    fn test_group_by_week_orders_within_and_across_weeks() {
        let rows = vec![
            UserBallotRow {
                week: 1,
                rank: 1,
                team_name: "Georgia".to_string(),
            },
            UserBallotRow {
                week: 1,
                rank: 2,
                team_name: "Texas".to_string(),
            },
            UserBallotRow {
                week: 3,
                rank: 1,
                team_name: "Michigan".to_string(),
            },
        ];

        let ballots = group_by_week(rows);

        assert_eq!(ballots.len(), 2);
        assert_eq!(ballots[&1], vec!["Georgia", "Texas"]);
        assert_eq!(ballots[&3], vec!["Michigan"]);
    }

    #[test]
    fn test_group_by_voter_keeps_voters_disjoint() {
        let rows = vec![
            WeekBallotRow {
                username: "alice".to_string(),
                team_name: "Georgia".to_string(),
                rank: 1,
            },
            WeekBallotRow {
                username: "alice".to_string(),
                team_name: "Texas".to_string(),
                rank: 2,
            },
            WeekBallotRow {
                username: "bob".to_string(),
                team_name: "Michigan".to_string(),
                rank: 1,
            },
        ];

        let ballots = group_by_voter(rows);

        assert_eq!(ballots.len(), 2);
        assert_eq!(ballots[0].username, "alice");
        assert_eq!(ballots[0].rankings.len(), 2);
        assert_eq!(ballots[1].username, "bob");
        assert_eq!(ballots[1].rankings.len(), 1);
    }
}
