use mixing::{Color, MixingSim, Paint};
use rl::{Env, VecEnv, VecEnvError};

fn short_sim(max_steps: usize) -> MixingSim {
    MixingSim::new(
        vec![Paint::new(Color::RED, 100.0), Paint::new(Color::BLUE, 100.0)],
        Paint::new(Color::new(255, 0, 255), 200.0),
        max_steps,
    )
    .unwrap()
}

#[test]
fn members_are_independent() {
    let mut envs = VecEnv::new_with(3, || short_sim(10));
    let obs = envs.reset_all();
    assert_eq!(obs.len(), 3);

    let step = envs
        .step(&[vec![0, 1, 50], vec![0, 0, 0], vec![1, 0, 99]])
        .unwrap();

    assert_eq!(step.observations[0].row(0).unwrap().amount, 50.0);
    assert_eq!(step.observations[1].row(0).unwrap().amount, 100.0);
    assert_eq!(step.observations[2].row(1).unwrap().amount, 1.0);
    assert_eq!(envs.envs()[1].beakers(), envs.envs()[1].initial_beakers());
}

#[test]
fn finished_members_reset_and_keep_terminal_observation() {
    let mut envs = VecEnv::from_envs(vec![short_sim(1), short_sim(2)]);
    envs.reset_all();

    let step = envs.step(&[vec![0, 1, 50], vec![0, 1, 50]]).unwrap();
    assert_eq!(step.dones, vec![true, false]);
    assert_eq!(step.truncateds, vec![false, false]);

    let terminal = step.terminal_observations[0].as_ref().unwrap();
    assert_eq!(terminal.row(0).unwrap().amount, 50.0);
    // member 0 was reset, member 1 still carries its transfer
    assert_eq!(step.observations[0].row(0).unwrap().amount, 100.0);
    assert_eq!(step.observations[1].row(0).unwrap().amount, 50.0);
    assert!(step.terminal_observations[1].is_none());
    assert_eq!(envs.envs()[0].step_count(), 0);
}

#[test]
fn rejects_wrong_action_count() {
    let mut envs = VecEnv::new_with(2, || short_sim(5));
    let err = envs.step(&[vec![0, 1, 10]]).unwrap_err();
    assert!(matches!(err, VecEnvError::ActionCount { expected: 2, got: 1 }));
}

#[test]
fn invalid_action_leaves_every_member_untouched() {
    let mut envs = VecEnv::new_with(2, || short_sim(5));
    envs.reset_all();
    let err = envs.step(&[vec![0, 1, 10], vec![2, 0, 10]]).unwrap_err();
    assert!(matches!(err, VecEnvError::InvalidAction { index: 1, .. }));
    assert!(envs.envs().iter().all(|e| e.step_count() == 0));
    assert_eq!(envs.envs()[0].observe(), Env::observe(&short_sim(5)));
}
