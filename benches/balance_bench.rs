use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dragonseat::assign::{move_athlete, AssignmentState, Destination, SlotRef};
use dragonseat::balance::{evaluate, evaluate_batch, evaluate_tiers};
use dragonseat::boat::{generate_layout, Athlete, BoatLayout, LayoutParams, Lineup, Roster, SeatKey};

/// A 24-athlete roster with weights spread over 52..98 kg.
fn roster() -> Roster {
    Roster::new(
        (0..24)
            .map(|i| {
                let weight = 52.0 + (i * 2) as f64;
                Athlete::new(format!("a{}", i), format!("Athlete {}", i), weight)
            })
            .collect(),
    )
}

/// Fills every paddler row, both tiers, plus drummer and steer.
fn full_state(layout: &BoatLayout, roster: &Roster) -> AssignmentState {
    let mut state = AssignmentState::for_layout(layout);
    let mut ids = roster.athletes().iter().map(|a| a.id.as_str());
    let mut keys = vec![SeatKey::Drummer, SeatKey::Steer];
    for row in 0..state.rows() {
        keys.push(SeatKey::Port(row));
        keys.push(SeatKey::Starboard(row));
    }
    for key in keys {
        for _ in 0..2 {
            if let Some(id) = ids.next() {
                move_athlete(&mut state, roster, id, Destination::Seat(SlotRef::seat(key)));
            }
        }
    }
    state
}

fn bench_evaluate(c: &mut Criterion) {
    let layout = generate_layout(&LayoutParams::standard());
    let roster = roster();
    let state = full_state(&layout, &roster);
    let lineup = state.primary_lineup(&layout.id);
    c.bench_function("evaluate_full_boat", |b| {
        b.iter(|| evaluate(black_box(&layout), black_box(&roster), black_box(&lineup)))
    });
}

fn bench_evaluate_tiers(c: &mut Criterion) {
    let layout = generate_layout(&LayoutParams::standard());
    let roster = roster();
    let state = full_state(&layout, &roster);
    c.bench_function("evaluate_tiers", |b| {
        b.iter(|| evaluate_tiers(black_box(&layout), black_box(&roster), black_box(&state)))
    });
}

fn bench_evaluate_batch(c: &mut Criterion) {
    let layout = generate_layout(&LayoutParams::standard());
    let roster = roster();
    let state = full_state(&layout, &roster);
    let lineups: Vec<Lineup> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                state.primary_lineup(&layout.id)
            } else {
                state.comparison_lineup(&layout.id)
            }
        })
        .collect();
    c.bench_function("evaluate_batch_64", |b| {
        b.iter(|| evaluate_batch(black_box(&layout), black_box(&roster), black_box(&lineups)))
    });
}

fn bench_move_athlete(c: &mut Criterion) {
    let layout = generate_layout(&LayoutParams::standard());
    let roster = roster();
    let state = full_state(&layout, &roster);
    c.bench_function("move_with_eviction", |b| {
        b.iter(|| {
            let mut s = state.clone();
            move_athlete(
                &mut s,
                &roster,
                black_box("a0"),
                Destination::Seat(SlotRef::seat(SeatKey::Starboard(9))),
            )
        })
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let layout = generate_layout(&LayoutParams::standard());
    let roster = roster();
    let state = full_state(&layout, &roster);
    c.bench_function("assignment_state_clone", |b| {
        b.iter(|| black_box(&state).clone())
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_evaluate_tiers,
    bench_evaluate_batch,
    bench_move_athlete,
    bench_state_clone,
);
criterion_main!(benches);
