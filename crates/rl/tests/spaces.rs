use rl::{BoxSpace, MultiDiscrete};

#[test]
fn multi_discrete_contains_checks_length_and_bounds() {
    let space = MultiDiscrete::new(vec![3, 3, 100]);
    assert!(space.contains(&[0, 2, 99]));
    assert!(!space.contains(&[3, 0, 0]));
    assert!(!space.contains(&[0, 0, 100]));
    assert!(!space.contains(&[0, 0]));
    assert!(!space.contains(&[0, 0, 0, 0]));
}

#[test]
fn multi_discrete_enumerates_every_action_once() {
    let space = MultiDiscrete::new(vec![2, 3, 4]);
    let all: Vec<Vec<usize>> = space.iter().collect();
    assert_eq!(all.len(), space.cardinality());
    assert_eq!(all.first().unwrap(), &vec![0, 0, 0]);
    assert_eq!(all[1], vec![0, 0, 1]);
    assert_eq!(all.last().unwrap(), &vec![1, 2, 3]);

    let mut dedup = all.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), all.len());
    assert!(all.iter().all(|a| space.contains(a)));
}

#[test]
fn empty_dimension_has_no_actions() {
    let space = MultiDiscrete::new(vec![3, 0]);
    assert_eq!(space.iter().count(), 0);
}

#[test]
fn samples_stay_in_bounds() {
    let rng = fastrand::Rng::with_seed(4);
    let space = MultiDiscrete::new(vec![5, 5, 100]);
    for _ in 0..1000 {
        assert!(space.contains(&space.sample(&rng)));
    }
}

#[test]
fn box_space_broadcasts_column_bounds() {
    let space = BoxSpace::from_columns(2, &[0.0, 0.0], &[255.0, 10.0]);
    assert_eq!(space.shape, vec![2, 2]);
    assert_eq!(space.len(), 4);
    assert!(space.contains(&[255.0, 10.0, 0.0, 3.0]));
    assert!(!space.contains(&[255.0, 10.5, 0.0, 3.0]));
    assert!(!space.contains(&[-1.0, 0.0, 0.0, 0.0]));
    assert!(!space.contains(&[0.0, 0.0]));
}
