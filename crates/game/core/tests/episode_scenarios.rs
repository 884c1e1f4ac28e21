use gridworld_core::engine::{NoPacing, NoopRenderer};
use gridworld_core::scenario::corner_to_corner;
use gridworld_core::{
    EntityKind, EpisodeEngine, Grid, Outcome, Position, Reward, SimConfig, TerminationMode,
    evaluate_reward, run_episode,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The default 6x6 corner-to-corner layout is solved inside the default
/// 1000-tick budget. The seeds are fixed; each one reaches the target by
/// tick 352.
#[test]
fn default_layout_is_won_within_default_budget() {
    for seed in [0, 1, 7, 42, 2024] {
        let config = SimConfig::default();
        assert_eq!(config.num_steps, 1000);
        let mut grid = corner_to_corner(&config).expect("default layout is valid");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let report = run_episode(&mut grid, config.num_steps, &mut rng);

        assert_eq!(report.outcome, Outcome::Win, "seed {seed} did not win");
        assert_eq!(report.rewards.last(), Some(&Reward::REACHED));
        assert!(
            report.rewards[..report.rewards.len() - 1]
                .iter()
                .all(|reward| !reward.is_reached()),
            "trace must stop at the first win"
        );
        assert_eq!(report.ticks_elapsed, config.num_steps);

        let target = grid.target().unwrap().position();
        assert_eq!(target, Position::new(5, 5));
        assert_eq!(evaluate_reward(&grid), Reward::REACHED);
    }
}

#[test]
fn same_seed_replays_identically() {
    let config = SimConfig::default().with_dimensions(8, 5);

    let run = |seed: u64| {
        let mut grid = corner_to_corner(&config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let report = run_episode(&mut grid, 300, &mut rng);
        (report, grid)
    };

    let (first, first_grid) = run(99);
    let (second, second_grid) = run(99);
    assert_eq!(first, second);
    assert_eq!(first_grid, second_grid);
}

#[test]
fn target_without_actor_never_wins() {
    let mut grid = Grid::new(4, 4).unwrap();
    grid.spawn(EntityKind::Target, Position::new(2, 2)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let report = run_episode(&mut grid, 25, &mut rng);

    assert_eq!(report.outcome, Outcome::Lose);
    assert_eq!(report.rewards.len(), 25);
    assert!(report.rewards.iter().all(|reward| *reward == Reward::NONE));
}

#[test]
fn zero_step_budget_is_an_immediate_loss() {
    let mut grid = corner_to_corner(&SimConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let report = run_episode(&mut grid, 0, &mut rng);

    assert_eq!(report.outcome, Outcome::Lose);
    assert!(report.rewards.is_empty());
}

#[test]
fn termination_modes_agree_on_trace() {
    let config = SimConfig::default();

    let run = |termination: TerminationMode| {
        let mut grid = corner_to_corner(&config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        EpisodeEngine::new(&mut grid)
            .with_termination(termination)
            .run(
                config.num_steps,
                &mut rng,
                &mut NoopRenderer,
                &mut NoPacing,
            )
    };

    let frozen = run(TerminationMode::FreezeOnWin);
    let stopped = run(TerminationMode::StopOnWin);

    assert_eq!(frozen.rewards, stopped.rewards);
    assert_eq!(frozen.outcome, stopped.outcome);
    assert_eq!(frozen.ticks_elapsed, config.num_steps);
    assert_eq!(stopped.ticks_elapsed, stopped.rewards.len() as u64);
}
