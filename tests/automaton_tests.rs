//! Integration tests for the automaton rule and stepper

use tui_cells::core::{Automaton, RandomSource, RuleConfig, SimpleRng};
use tui_cells::types::NEIGHBOR_OFFSETS;

fn filled(width: usize, height: usize, config: RuleConfig, health: i32) -> Automaton {
    let mut a = Automaton::new(width, height, config);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            a.set(x, y, health);
        }
    }
    a
}

fn noisy_config(seed: u32) -> RuleConfig {
    RuleConfig::random(&mut SimpleRng::new(seed))
}

#[test]
fn all_dead_grid_has_no_active_neighbours() {
    let a = Automaton::new(6, 5, RuleConfig::default());
    for y in 0..5 {
        for x in 0..6 {
            assert_eq!(a.neighbor_active_count(x, y), 0, "cell ({x},{y})");
        }
    }
}

#[test]
fn full_grid_counts_interior_edge_and_corner() {
    let config = RuleConfig {
        max_health: 10,
        active_threshold: 1,
        ..RuleConfig::default()
    };
    let a = filled(5, 5, config, 10);

    assert_eq!(a.neighbor_active_count(2, 2), 8);
    for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
        assert_eq!(a.neighbor_active_count(x, y), 3, "corner ({x},{y})");
    }
    for (x, y) in [(2, 0), (0, 2), (4, 2), (2, 4)] {
        assert_eq!(a.neighbor_active_count(x, y), 5, "edge ({x},{y})");
    }
}

#[test]
fn lone_cell_decays_by_one() {
    let mut config = RuleConfig {
        max_health: 10,
        active_threshold: 5,
        ..RuleConfig::default()
    };
    config.live_crowd_effect[0] = -1;

    let mut a = Automaton::new(3, 3, config);
    a.set(1, 1, 10);
    a.tick();

    for y in 0..3 {
        for x in 0..3 {
            let expected = if (x, y) == (1, 1) { 9 } else { 0 };
            assert_eq!(a.get(x, y), Some(expected), "cell ({x},{y})");
        }
    }
    assert_eq!(a.generation(), 1);
}

#[test]
fn each_neighbour_slot_hits_its_own_personal_entry() {
    let mut config = RuleConfig {
        max_health: 1_000,
        active_threshold: 1,
        ..RuleConfig::default()
    };
    for slot in 0..8 {
        config.dead_personal_effect[slot] = 1 << slot;
    }

    for (slot, &(dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        let mut a = Automaton::new(3, 3, config);
        a.set(1 + dx, 1 + dy, 5);
        assert_eq!(a.personal_delta(1, 1), 1 << slot, "slot {slot}");
    }
}

#[test]
fn health_stays_in_range_over_many_ticks() {
    for seed in 1..6 {
        let config = noisy_config(seed);
        let mut a = Automaton::new(24, 16, config);
        a.randomize(&mut SimpleRng::new(seed * 31));
        for _ in 0..40 {
            a.tick();
            assert!(a
                .current()
                .cells()
                .iter()
                .all(|&h| (0..=config.max_health).contains(&h)));
        }
    }
}

#[test]
fn extreme_tables_saturate_instead_of_overflowing() {
    let config = RuleConfig {
        max_health: i32::MAX,
        active_threshold: 1,
        live_crowd_effect: [i32::MAX; 9],
        live_personal_effect: [i32::MAX; 8],
        dead_crowd_effect: [i32::MIN; 9],
        dead_personal_effect: [i32::MIN; 8],
    };
    let mut a = filled(4, 4, config, i32::MAX - 1);
    a.set(0, 0, 0);
    a.tick();
    assert_eq!(a.get(1, 1), Some(i32::MAX));
    assert_eq!(a.get(0, 0), Some(0));
}

#[test]
fn identical_state_produces_identical_next_generation() {
    let config = noisy_config(9);
    let mut a = Automaton::new(32, 32, config);
    a.randomize(&mut SimpleRng::new(77));
    let mut b = a.clone();

    for _ in 0..10 {
        a.tick();
        b.tick();
    }
    assert_eq!(a, b);
}

#[test]
fn tick_reads_a_frozen_snapshot() {
    // Slot 4 is the right neighbour and slot 3 the left one. The left cell
    // dies from its right neighbour while the middle cell feeds on its left
    // neighbour. Updating in place would starve the middle cell.
    let mut config = RuleConfig {
        max_health: 10,
        active_threshold: 5,
        ..RuleConfig::default()
    };
    config.live_personal_effect[4] = -10;
    config.live_personal_effect[3] = 2;

    let mut a = Automaton::new(3, 1, config);
    a.set(0, 0, 5);
    a.set(1, 0, 5);

    a.tick();
    assert_eq!(a.get(0, 0), Some(0));
    assert_eq!(a.get(1, 0), Some(7));
    assert_eq!(a.get(2, 0), Some(0));
}

#[test]
fn randomize_is_reproducible_per_seed() {
    let config = noisy_config(3);
    let mut a = Automaton::new(10, 10, config);
    let mut b = Automaton::new(10, 10, config);
    a.randomize(&mut SimpleRng::new(5));
    b.randomize(&mut SimpleRng::new(5));
    assert_eq!(a.current(), b.current());

    let mut rng = SimpleRng::new(6);
    rng.next_u32();
    b.randomize(&mut rng);
    assert_ne!(a.current(), b.current());
}

#[test]
fn std_rng_drives_randomize_too() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let config = noisy_config(4);
    let mut a = Automaton::new(16, 16, config);
    a.randomize(&mut StdRng::seed_from_u64(1));
    assert!(a
        .current()
        .cells()
        .iter()
        .all(|&h| (0..=config.max_health).contains(&h)));
}
