//! Integration tests for the point scoring rule.

use proptest::prelude::*;
use pubg_tournament_web::{kill_points, placement_points, total_points, MatchResult, ResultEntry};
use uuid::Uuid;

#[test]
fn placement_table_is_exact() {
    let expected = [0, 10, 7, 6, 4, 3, 2, 2, 1, 1, 1, 0];
    for (placement, points) in expected.iter().enumerate() {
        assert_eq!(
            placement_points(placement as i64),
            *points,
            "placement {placement}"
        );
    }
}

#[test]
fn out_of_table_placements_score_zero() {
    for placement in [-1, -10, i64::MIN, 11, 16, 100, i64::MAX] {
        assert_eq!(placement_points(placement), 0, "placement {placement}");
    }
}

#[test]
fn kill_points_are_one_per_kill() {
    assert_eq!(kill_points(0), 0);
    assert_eq!(kill_points(1), 1);
    assert_eq!(kill_points(23), 23);
}

#[test]
fn match_result_derives_points_from_placement_and_kills() {
    let r = MatchResult::new(Uuid::new_v4(), 3, 4);
    assert_eq!(r.placement_points, 6);
    assert_eq!(r.kill_points, 4);
    assert_eq!(r.total_points, 10);
    assert!(!r.is_wwcd());
    assert!(MatchResult::new(Uuid::new_v4(), 1, 0).is_wwcd());
}

#[test]
fn unrecorded_placement_still_counts_kills() {
    let r = MatchResult::new(Uuid::new_v4(), 0, 2);
    assert_eq!(r.placement_points, 0);
    assert_eq!(r.total_points, 2);
}

#[test]
fn deserializing_a_result_recomputes_points() {
    let team_id = Uuid::new_v4();
    let json = serde_json::json!({
        "team_id": team_id,
        "placement": 1,
        "kills": 5,
        "placement_points": 99,
        "kill_points": 99,
        "total_points": 99,
    });
    let r: MatchResult = serde_json::from_value(json).unwrap();
    assert_eq!(r, MatchResult::new(team_id, 1, 5));
    assert_eq!(r.total_points, 15);
}

#[test]
fn result_entry_round_trips_through_match_result() {
    let entry = ResultEntry {
        team_id: Uuid::new_v4(),
        placement: 7,
        kills: 3,
    };
    assert_eq!(MatchResult::from(entry).entry(), entry);
}

#[test]
fn total_saturates_on_huge_kill_counts() {
    assert_eq!(total_points(10, u32::MAX), u32::MAX);
    assert_eq!(total_points(7, u32::MAX - 7), u32::MAX);
    let r = MatchResult::new(Uuid::new_v4(), 1, u32::MAX);
    assert_eq!(r.kill_points, u32::MAX);
    assert_eq!(r.total_points, u32::MAX);
}

proptest! {
    #[test]
    fn total_is_placement_points_plus_kills(p in any::<i64>(), k in any::<u32>()) {
        let pp = placement_points(p);
        let total = total_points(pp, kill_points(k));
        prop_assert_eq!(u64::from(total), (u64::from(pp) + u64::from(k)).min(u64::from(u32::MAX)));
        if k <= u32::MAX - 10 {
            prop_assert_eq!(total, pp + k);
        }
    }

    #[test]
    fn placement_points_never_exceed_ten(p in any::<i64>()) {
        prop_assert!(placement_points(p) <= 10);
    }
}
