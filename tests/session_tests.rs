//! Session behaviour that touches the file system

use tui_cells::core::{Automaton, RuleConfig, SimpleRng};
use tui_cells::engine::{ActionOutcome, Session};
use tui_cells::types::SimAction;

fn rule() -> RuleConfig {
    let mut config = RuleConfig {
        max_health: 40,
        active_threshold: 10,
        ..RuleConfig::default()
    };
    config.live_crowd_effect[3] = 4;
    config.dead_personal_effect[6] = -2;
    config
}

fn session() -> Session<SimpleRng> {
    Session::new(Automaton::new(8, 8, rule()), SimpleRng::new(11))
}

#[test]
fn save_writes_current_rule_and_sets_status() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.txt");
    let mut s = session().with_save_path(&path);

    assert!(s.apply_action(SimAction::SaveConfig).is_applied());
    assert_eq!(RuleConfig::load(&path).unwrap(), rule());
    assert!(s.status().unwrap().starts_with("saved"));
}

#[test]
fn save_to_unwritable_path_fails_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/config.txt");
    let mut s = session().with_save_path(&path);

    assert!(matches!(
        s.apply_action(SimAction::SaveConfig),
        ActionOutcome::Failed(_)
    ));
    assert_eq!(*s.config(), rule());
    assert!(s.status().unwrap().starts_with("save failed"));
}

#[test]
fn reload_picks_up_edited_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.txt");
    rule().save(&path).unwrap();

    let mut s = session().with_config_path(&path);
    let mut edited = rule();
    edited.max_health = 20;
    edited.dead_crowd_effect[0] = 1;
    edited.save(&path).unwrap();

    assert!(s.apply_action(SimAction::ReloadConfig).is_applied());
    assert_eq!(*s.config(), edited);
}

#[test]
fn reload_clamps_cells_to_the_new_ceiling() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.txt");
    let mut s = session().with_config_path(&path);
    s.automaton_mut().set(2, 2, 40);

    let mut smaller = rule();
    smaller.max_health = 15;
    smaller.save(&path).unwrap();

    assert!(s.apply_action(SimAction::ReloadConfig).is_applied());
    assert_eq!(s.automaton().get(2, 2), Some(15));
}

#[test]
fn failed_reload_keeps_previous_rule() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.txt");
    std::fs::write(&path, "40\n10\n1 2 3\n").unwrap();

    let mut s = session().with_config_path(&path);
    assert!(matches!(
        s.apply_action(SimAction::ReloadConfig),
        ActionOutcome::Failed(_)
    ));
    assert_eq!(*s.config(), rule());
    assert!(s.status().unwrap().starts_with("reload failed"));
}

#[test]
fn save_then_reload_round_trips_a_regenerated_rule() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.txt");
    let mut s = session().with_save_path(&path).with_config_path(&path);

    s.apply_action(SimAction::RegenerateConfig);
    let generated = *s.config();
    s.apply_action(SimAction::SaveConfig);
    s.apply_action(SimAction::RegenerateConfig);
    assert!(s.apply_action(SimAction::ReloadConfig).is_applied());
    assert_eq!(*s.config(), generated);
}

#[test]
fn pacing_steps_floor_of_elapsed_over_interval() {
    let mut s = session().with_tick_interval_ms(40);
    let mut total = 0;
    for elapsed in [10, 30, 85, 5, 40] {
        total += s.tick(elapsed);
    }
    // 170ms at 40ms per step
    assert_eq!(total, 4);
    assert_eq!(s.automaton().generation(), 4);
    assert_eq!(s.ms_until_next_tick(), 30);
}
