//! Integration tests for the standings table.

use league_organizer_web::{
    classify, compute_standings, generate_schedule, league_table, sort_standings, standings_csv,
    Fixture, Round, SortDirection, SortKey, StandingsRow, Team,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn teams(names: &[&str]) -> Vec<Team> {
    names.iter().map(|n| Team::new(*n)).collect()
}

fn played(home: &Team, away: &Team, home_score: u32, away_score: u32) -> Fixture {
    Fixture {
        home_score: Some(home_score),
        away_score: Some(away_score),
        ..Fixture::new(home.id, away.id)
    }
}

fn round(number: u32, matches: Vec<Fixture>) -> Round {
    Round { number, matches }
}

fn row<'a>(rows: &'a [StandingsRow], name: &str) -> &'a StandingsRow {
    rows.iter().find(|r| r.team_name == name).unwrap()
}

fn names(rows: &[StandingsRow]) -> Vec<&str> {
    rows.iter().map(|r| r.team_name.as_str()).collect()
}

#[test]
fn win_and_draw_scenario() {
    let t = teams(&["A", "B", "C"]);
    let rounds = vec![
        round(1, vec![played(&t[0], &t[1], 2, 0)]),
        round(2, vec![played(&t[1], &t[2], 1, 1)]),
    ];
    let rows = compute_standings(&t, &rounds);

    let a = row(&rows, "A");
    assert_eq!((a.played, a.won, a.points, a.goal_difference), (1, 1, 3, 2));
    let b = row(&rows, "B");
    assert_eq!(
        (b.played, b.won, b.drawn, b.lost, b.points, b.goal_difference),
        (2, 0, 1, 1, 1, -2)
    );
    let c = row(&rows, "C");
    assert_eq!((c.played, c.drawn, c.points, c.goal_difference), (1, 1, 1, 0));

    assert_eq!(names(&rows), vec!["A", "C", "B"]);
}

#[test]
fn huge_scores_accumulate_without_overflow() {
    let t = teams(&["A", "B", "C"]);
    let rounds = vec![
        round(1, vec![played(&t[0], &t[1], 3_000_000_000, 0)]),
        round(2, vec![played(&t[2], &t[0], 0, 3_000_000_000)]),
    ];
    let rows = compute_standings(&t, &rounds);
    let a = row(&rows, "A");
    assert_eq!((a.won, a.points), (2, 6));
    assert_eq!(a.goals_for, 6_000_000_000);
    assert_eq!(a.goal_difference, 6_000_000_000);
    assert_eq!(row(&rows, "B").goal_difference, -3_000_000_000);
    assert_eq!(names(&rows), vec!["A", "B", "C"]);
}

#[test]
fn no_results_orders_by_name() {
    let t = teams(&["delta", "Bravo", "alpha", "Charlie"]);
    let rows = compute_standings(&t, &generate_schedule(&t, true));
    assert!(rows.iter().all(|r| r.played == 0 && r.points == 0));
    assert_eq!(names(&rows), vec!["alpha", "Bravo", "Charlie", "delta"]);
}

#[test]
fn unplayed_and_half_scored_fixtures_are_skipped() {
    let t = teams(&["A", "B"]);
    let half = Fixture {
        home_score: Some(3),
        ..Fixture::new(t[0].id, t[1].id)
    };
    let rounds = vec![round(1, vec![Fixture::new(t[0].id, t[1].id), half])];
    let rows = compute_standings(&t, &rounds);
    assert!(rows.iter().all(|r| r.played == 0 && r.goals_for == 0));
}

#[test]
fn fixture_with_unknown_team_is_skipped() {
    let t = teams(&["A", "B"]);
    let stranger = Team::new("Stranger");
    let rounds = vec![round(
        1,
        vec![played(&t[0], &stranger, 5, 0), played(&t[0], &t[1], 1, 0)],
    )];
    let rows = compute_standings(&t, &rounds);
    assert_eq!(rows.len(), 2);
    let a = row(&rows, "A");
    assert_eq!((a.played, a.goals_for, a.points), (1, 1, 3));
}

#[test]
fn tie_break_precedence() {
    let t = teams(&["A", "B", "C", "D", "E", "F"]);
    let (a, b, c, d, e, f) = (&t[0], &t[1], &t[2], &t[3], &t[4], &t[5]);
    // B, D, E: 3 pts from one win, gd +1; D scored most, B ahead of E by name.
    // C: 3 pts from three draws, behind on wins.
    let rounds = vec![
        round(1, vec![played(b, a, 1, 0), played(c, a, 0, 0)]),
        round(2, vec![played(c, f, 2, 2), played(c, a, 1, 1)]),
        round(3, vec![played(d, f, 3, 2), played(e, f, 1, 0)]),
    ];
    let rows = compute_standings(&t, &rounds);
    let order = names(&rows);
    assert_eq!(order, vec!["D", "B", "E", "C", "A", "F"]);
}

#[test]
fn full_tie_falls_back_to_name() {
    let t = teams(&["Zulu", "Yankee", "Xray", "Whiskey"]);
    let rounds = vec![round(
        1,
        vec![played(&t[0], &t[1], 1, 1), played(&t[2], &t[3], 1, 1)],
    )];
    let rows = compute_standings(&t, &rounds);
    assert_eq!(names(&rows), vec!["Whiskey", "Xray", "Yankee", "Zulu"]);
}

#[test]
fn fold_is_order_independent_and_conserves_points() {
    let t: Vec<Team> = (0..8).map(|i| Team::new(format!("T{i}"))).collect();
    let mut rounds = generate_schedule(&t, true);
    let mut decisive = 0;
    let mut drawn = 0;
    for (i, m) in rounds.iter_mut().flat_map(|r| r.matches.iter_mut()).enumerate() {
        if i % 5 == 4 {
            continue;
        }
        let home = (i * 7 % 4) as u32;
        let away = (i * 3 % 3) as u32;
        if home == away {
            drawn += 1;
        } else {
            decisive += 1;
        }
        m.home_score = Some(home);
        m.away_score = Some(away);
    }
    let baseline = compute_standings(&t, &rounds);

    let total_points: u32 = baseline.iter().map(|r| r.points).sum();
    assert_eq!(total_points, 3 * decisive + 2 * drawn);
    let total_played: u32 = baseline.iter().map(|r| r.played).sum();
    assert_eq!(total_played, 2 * (decisive + drawn));
    let total_gd: i64 = baseline.iter().map(|r| r.goal_difference).sum();
    assert_eq!(total_gd, 0);

    let mut rng = StdRng::seed_from_u64(7);
    let mut all: Vec<Fixture> = rounds.iter().flat_map(|r| r.matches.clone()).collect();
    for _ in 0..10 {
        all.shuffle(&mut rng);
        let shuffled: Vec<Round> = all
            .chunks(3)
            .enumerate()
            .map(|(i, c)| round(i as u32 + 1, c.to_vec()))
            .collect();
        let mut reordered_teams = t.clone();
        reordered_teams.shuffle(&mut rng);
        assert_eq!(compute_standings(&reordered_teams, &shuffled), baseline);
    }
}

#[test]
fn efficiency_is_zero_without_games() {
    let t = teams(&["A", "B"]);
    let rows = compute_standings(&t, &[round(1, vec![played(&t[0], &t[1], 1, 1)])]);
    assert!((row(&rows, "A").efficiency() - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(StandingsRow::new(t[0].id, "A").efficiency(), 0.0);
}

#[test]
fn classify_marks_leader_and_relegation_zone() {
    let t = teams(&["A", "B", "C", "D", "E"]);
    let rows = compute_standings(&t, &[]);
    let table = classify(rows.clone(), 2);
    let positions: Vec<usize> = table.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    let flags: Vec<(bool, bool)> = table.iter().map(|r| (r.leader, r.relegation)).collect();
    assert_eq!(
        flags,
        vec![
            (true, false),
            (false, false),
            (false, false),
            (false, true),
            (false, true)
        ]
    );

    assert!(classify(rows, 0).iter().all(|r| !r.relegation));
}

#[test]
fn sort_by_other_key_falls_back_to_ranking() {
    let t = teams(&["A", "B", "C"]);
    let rounds = vec![
        round(1, vec![played(&t[0], &t[1], 3, 1)]),
        round(2, vec![played(&t[2], &t[1], 2, 0)]),
    ];
    let mut rows = compute_standings(&t, &rounds);
    // A and C both played 1; C concedes 0, A concedes 1; B played 2.
    sort_standings(&mut rows, SortKey::Played, SortDirection::Asc);
    assert_eq!(names(&rows), vec!["A", "C", "B"]);

    sort_standings(&mut rows, SortKey::GoalsAgainst, SortDirection::Asc);
    assert_eq!(names(&rows), vec!["C", "A", "B"]);

    sort_standings(&mut rows, SortKey::Name, SortDirection::Desc);
    assert_eq!(names(&rows), vec!["C", "B", "A"]);

    sort_standings(&mut rows, SortKey::Efficiency, SortDirection::Desc);
    assert_eq!(names(&rows), vec!["A", "C", "B"]);
}

#[test]
fn league_table_keeps_ranking_positions_when_resorted() {
    let t = teams(&["A", "B", "C"]);
    let rounds = vec![round(1, vec![played(&t[0], &t[1], 2, 0)])];
    let table = league_table(&t, &rounds, 1, SortKey::Name, SortDirection::Desc);
    let view: Vec<(&str, usize, bool)> = table
        .iter()
        .map(|r| (r.row.team_name.as_str(), r.position, r.relegation))
        .collect();
    assert_eq!(view, vec![("C", 2, false), ("B", 3, true), ("A", 1, false)]);
    assert!(table.iter().find(|r| r.position == 1).unwrap().leader);
}

#[test]
fn csv_export_has_header_and_rows() {
    let t = teams(&["A", "B"]);
    let rounds = vec![round(1, vec![played(&t[0], &t[1], 2, 1)])];
    let table = league_table(&t, &rounds, 0, SortKey::Points, SortDirection::Desc);
    let csv = standings_csv(&table).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "position,team,points,played,won,drawn,lost,goals_for,goals_against,goal_difference,efficiency"
    );
    assert_eq!(lines[1], "1,A,3,1,1,0,0,2,1,1,100.0");
    assert_eq!(lines[2], "2,B,0,1,0,0,1,1,2,-1,0.0");
}
