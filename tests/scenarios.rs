//! Worked scenarios for the balance and assignment engines.

use dragonseat::assign::{
    derive_pool, move_athlete, AssignmentState, Destination, MoveOutcome, SlotAddr, SlotRef, Tier,
};
use dragonseat::balance::{
    compute_center_of_gravity, compute_left_right_distribution, compute_seat_moments_for_lineup,
    BalanceStatus,
};
use dragonseat::boat::{generate_layout, Athlete, AthleteId, LayoutParams, Lineup, Roster, SeatKey};
use dragonseat::protocol::PersistedLineup;

fn seat(key: SeatKey) -> Destination {
    Destination::Seat(SlotRef::seat(key))
}

fn ids<'a>(athletes: impl IntoIterator<Item = &'a Athlete>) -> Vec<String> {
    athletes.into_iter().map(|a| a.id.0.clone()).collect()
}

#[test]
fn eviction_to_pool_when_seat_is_full() {
    let roster = Roster::new(vec![
        Athlete::new("x", "X", 70.0),
        Athlete::new("y", "Y", 71.0),
        Athlete::new("z", "Z", 72.0),
    ]);
    let mut state = AssignmentState::new(10);
    let s = SeatKey::Starboard(3);

    move_athlete(&mut state, &roster, "x", seat(s));
    move_athlete(&mut state, &roster, "y", seat(s));
    assert!(derive_pool(&state, &roster).iter().all(|a| a.id.as_str() == "z"));

    let outcome = move_athlete(&mut state, &roster, "z", seat(s));
    assert_eq!(
        outcome,
        MoveOutcome::Placed {
            slot: SlotAddr::new(s, Tier::Secondary),
            from: None,
            evicted: Some(AthleteId::from("y")),
        }
    );
    assert_eq!(state.get(SlotAddr::new(s, Tier::Primary)).map(|a| a.as_str()), Some("x"));
    assert_eq!(state.get(SlotAddr::new(s, Tier::Secondary)).map(|a| a.as_str()), Some("z"));
    assert_eq!(ids(derive_pool(&state, &roster)), ["y"]);
}

#[test]
fn worked_balance_example() {
    let layout = generate_layout(&LayoutParams::small());
    let x = |id: &str| layout.seat(id).map(|s| s.x);
    assert_eq!(x("port-0"), Some(-2.0));
    assert_eq!(x("starboard-0"), Some(-2.0));
    assert_eq!(x("drummer"), Some(-3.0));
    assert_eq!(x("steer"), Some(3.0));

    let roster = Roster::new(vec![
        Athlete::new("d", "Drummer", 60.0),
        Athlete::new("p", "Port", 78.0),
        Athlete::new("s", "Starboard", 65.0),
        Athlete::new("t", "Steer", 55.0),
    ]);
    let mut state = AssignmentState::for_layout(&layout);
    for (athlete, key) in [
        ("d", SeatKey::Drummer),
        ("p", SeatKey::Port(0)),
        ("s", SeatKey::Starboard(0)),
        ("t", SeatKey::Steer),
    ] {
        move_athlete(&mut state, &roster, athlete, seat(key));
    }
    let lineup = state.primary_lineup(&layout.id);

    let cg = compute_center_of_gravity(&layout, &roster, &lineup);
    assert_eq!(cg.total_weight, 258.0);
    assert!((cg.x_cg - (-301.0 / 258.0)).abs() < 1e-12);

    let dist = compute_left_right_distribution(&layout, &roster, &lineup);
    assert_eq!(dist.port_weight, 78.0);
    assert_eq!(dist.starboard_weight, 65.0);
    assert!((dist.port_ratio - 54.545_454).abs() < 1e-4);
    assert!((dist.diff - 9.0909).abs() < 1e-3);
    assert_eq!(dist.status, BalanceStatus::PortHeavy);
    assert_eq!(dist.status.to_string(), "Port heavy");

    let moments = compute_seat_moments_for_lineup(&layout, &roster, &lineup);
    let max = moments
        .iter()
        .map(|m| m.moment_normalized)
        .fold(0.0, f64::max);
    assert!((max - 1.0).abs() < 1e-12);
    // drummer: 60 * 3 = 180 is the longest lever.
    let drummer = moments.iter().find(|m| m.seat_id == "drummer").unwrap();
    assert!((drummer.moment_normalized - 1.0).abs() < 1e-12);
}

#[test]
fn resize_only_evicts_dropped_rows() {
    let roster = Roster::new(
        (0..14)
            .map(|i| Athlete::new(format!("a{}", i).as_str(), "A", 70.0))
            .collect(),
    );
    let mut state = AssignmentState::new(10);
    for row in 0..7 {
        move_athlete(&mut state, &roster, &format!("a{}", 2 * row), seat(SeatKey::Port(row)));
        move_athlete(
            &mut state,
            &roster,
            &format!("a{}", 2 * row + 1),
            seat(SeatKey::Starboard(row)),
        );
    }
    let before = state.clone();

    let mut evicted: Vec<String> = state.resize_rows(5).into_iter().map(|a| a.0).collect();
    evicted.sort();
    assert_eq!(evicted, ["a10", "a11", "a12", "a13"]);
    for row in 0..5 {
        for key in [SeatKey::Port(row), SeatKey::Starboard(row)] {
            let addr = SlotAddr::primary(key);
            assert_eq!(state.get(addr), before.get(addr));
        }
    }
    let mut pool = ids(derive_pool(&state, &roster));
    pool.sort();
    assert_eq!(pool, ["a10", "a11", "a12", "a13"]);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn stored_lineup_round_trip() {
    let layout = generate_layout(&LayoutParams::standard());
    let roster = Roster::new(
        ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|id| Athlete::new(*id, id.to_uppercase(), 70.0))
            .collect(),
    );
    let mut state = AssignmentState::for_layout(&layout);
    move_athlete(&mut state, &roster, "a", seat(SeatKey::Drummer));
    move_athlete(&mut state, &roster, "b", seat(SeatKey::Drummer));
    move_athlete(&mut state, &roster, "c", seat(SeatKey::Port(9)));
    move_athlete(&mut state, &roster, "d", seat(SeatKey::Starboard(2)));
    move_athlete(
        &mut state,
        &roster,
        "e",
        Destination::Seat(SlotRef::with_tier(SeatKey::Steer, Tier::Secondary)),
    );
    move_athlete(&mut state, &roster, "f", seat(SeatKey::Alternate(3)));

    let json = PersistedLineup::from_state(&state).to_json().unwrap();
    let reloaded = PersistedLineup::from_json(&json)
        .unwrap()
        .to_state(layout.row_count());

    assert_eq!(reloaded, state);
    let mapping: Vec<_> = reloaded.occupied().map(|(addr, id)| (addr, id.clone())).collect();
    let original: Vec<_> = state.occupied().map(|(addr, id)| (addr, id.clone())).collect();
    assert_eq!(mapping, original);
}

#[test]
fn empty_lineup_on_every_layout() {
    for rows in [1, 5, 10, 22] {
        for (drummer, steer) in [(false, false), (true, false), (true, true)] {
            let layout = generate_layout(&LayoutParams {
                num_rows: rows,
                row_spacing: 1.0,
                include_drummer: drummer,
                include_steer: steer,
            });
            let roster = Roster::default();
            let lineup = Lineup::empty(layout.id.clone());
            let cg = compute_center_of_gravity(&layout, &roster, &lineup);
            assert_eq!((cg.x_cg, cg.total_weight), (0.0, 0.0));
            let dist = compute_left_right_distribution(&layout, &roster, &lineup);
            assert_eq!((dist.port_ratio, dist.starboard_ratio), (50.0, 50.0));
            assert_eq!(dist.status, BalanceStatus::Balanced);
        }
    }
}
