//! Integration tests for standings export (CSV and banner columns).

use pubg_tournament_web::{aggregate, split_columns, standings_to_csv, Match, MatchResult, Team};
use uuid::Uuid;

fn ranked(n: usize) -> Vec<pubg_tournament_web::TeamStanding> {
    let roster: Vec<Team> = (0..n).map(|i| Team::new(format!("Team {i}"))).collect();
    let mut m = Match::new("Match 1", Uuid::nil(), Uuid::nil());
    for (i, team) in roster.iter().enumerate() {
        m.upsert_result(MatchResult::new(team.id, i as u32 + 1, 0));
    }
    aggregate(&roster, [&m])
}

#[test]
fn csv_has_header_and_one_row_per_team() {
    let roster = vec![Team::new("Alpha, Inc").with_flag("IN"), Team::new("Bravo")];
    let mut m = Match::new("Match 1", Uuid::nil(), Uuid::nil());
    m.upsert_result(MatchResult::new(roster[1].id, 1, 4));
    m.upsert_result(MatchResult::new(roster[0].id, 2, 2));
    let standings = aggregate(&roster, [&m]);

    let csv = standings_to_csv(&standings).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "rank,team,flag,wwcd,placement_points,kills,total_points");
    assert_eq!(lines[1], "1,Bravo,,1,10,4,14");
    // Names containing commas are quoted
    assert_eq!(lines[2], "2,\"Alpha, Inc\",IN,0,7,2,9");
}

#[test]
fn csv_of_empty_standings_is_just_the_header() {
    let csv = standings_to_csv(&[]).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn columns_split_in_rank_order_left_heavy() {
    let standings = ranked(5);
    let (left, right) = split_columns(&standings);
    assert_eq!(left.iter().map(|s| s.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(right.iter().map(|s| s.rank).collect::<Vec<_>>(), vec![4, 5]);

    let standings = ranked(16);
    let (left, right) = split_columns(&standings);
    assert_eq!(left.len(), 8);
    assert_eq!(right.len(), 8);
    assert_eq!(right[0].rank, 9);
}

#[test]
fn columns_of_empty_standings_are_empty() {
    let (left, right) = split_columns(&[]);
    assert!(left.is_empty());
    assert!(right.is_empty());
}
