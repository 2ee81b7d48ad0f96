use proptest::prelude::*;
use vote_jar::consts::*;
use vote_jar::{Jar, JarConfig};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn tokens_never_end_a_tick_outside_the_walls(
        seed in any::<u64>(),
        width in 150.0f32..1200.0,
        height in 150.0f32..1200.0,
        spawns in 1usize..120,
        ticks in 1usize..200,
    ) {
        let mut jar = Jar::with_seed(JarConfig::default(), width, height, seed);
        let walls = jar.bounds().interior(WALL_INSET);
        for i in 0..ticks {
            if i < spawns {
                jar.spawn_random(None);
            }
            let frame = jar.tick();
            for t in &frame.tokens {
                prop_assert!(
                    walls.contains_circle(glam::Vec2::new(t.x, t.y), t.radius),
                    "token at ({}, {}) escaped {:?}", t.x, t.y, walls
                );
            }
        }
    }

    #[test]
    fn population_never_exceeds_cap(
        seed in any::<u64>(),
        cap in 1usize..50,
        spawns in 0usize..200,
    ) {
        let config = JarConfig { population_cap: cap, ..Default::default() };
        let mut jar = Jar::with_seed(config, 480.0, 720.0, seed);
        for _ in 0..spawns {
            jar.spawn(None, None);
            prop_assert!(jar.len() <= cap);
        }
        prop_assert_eq!(jar.len(), spawns.min(cap));
    }

    #[test]
    fn eviction_is_first_in_first_out(
        seed in any::<u64>(),
        cap in 1usize..40,
        extra in 0usize..80,
    ) {
        let config = JarConfig { population_cap: cap, ..Default::default() };
        let mut jar = Jar::with_seed(config, 480.0, 720.0, seed);
        let total = cap + extra;
        for i in 0..total {
            jar.spawn(Some(&format!("v{i}")), None);
        }
        let labels: Vec<String> = jar.tokens().map(|t| t.label.clone()).collect();
        let expected: Vec<String> = (extra..total).map(|i| format!("v{i}")).collect();
        prop_assert_eq!(labels, expected);
    }
}

#[test]
fn default_cap_holds_under_a_burst() {
    let mut jar = Jar::with_seed(JarConfig::default(), 480.0, 720.0, 5);
    let total = POPULATION_CAP + 250;
    for i in 0..total {
        jar.spawn(Some(&format!("v{i}")), None);
        assert!(jar.len() <= POPULATION_CAP);
    }
    // None of the oldest (total - cap) labels survive
    let oldest_kept = format!("v{}", total - POPULATION_CAP);
    assert_eq!(jar.tokens().next().map(|t| t.label.clone()), Some(oldest_kept));
    assert!(jar.tokens().all(|t| t.label[1..].parse::<usize>().unwrap() >= 250));
}
