//! Alice should find her way to Antioch and then rest.

use antioch_sim::{Narration, SearchConfig, Simulation, ANTIOCH};

#[test]
fn test_alice_walks_north_then_rests() {
    let mut sim = Simulation::alice_in_antioch(SearchConfig::default()).unwrap();
    let narration = sim.run(4).unwrap();
    let lines: Vec<String> = narration.iter().map(ToString::to_string).collect();

    assert_eq!(
        lines,
        [
            "Selecting: Go north then wait",
            "Alice (in the desert, south of Antioch) goes north",
            "Alice (in Antioch) waits",
            "Alice (in Antioch) waits",
            "Alice (in Antioch) waits",
        ]
    );
    assert_eq!(sim.world().location_of("Alice").unwrap().name, ANTIOCH);
}

#[test]
fn test_policy_chosen_once_when_nothing_surprises() {
    let mut sim = Simulation::alice_in_antioch(SearchConfig {
        search_breadth: 300,
        ..SearchConfig::default()
    })
    .unwrap();
    let narration = sim.run(10).unwrap();

    let selections = narration
        .iter()
        .filter(|n| matches!(n, Narration::PolicySelected { .. }))
        .count();
    assert_eq!(selections, 1);
    assert_eq!(sim.mind().recent_policies.len(), 1);
    assert!((sim.world().body("Alice").unwrap().fatigue - 0.1).abs() < 1e-9);
}

#[test]
fn test_runs_are_reproducible() {
    let config = SearchConfig {
        seed: 42,
        ..SearchConfig::default()
    };
    let mut a = Simulation::alice_in_antioch(config.clone()).unwrap();
    let mut b = Simulation::alice_in_antioch(config).unwrap();

    assert_eq!(a.run(6).unwrap(), b.run(6).unwrap());
}
