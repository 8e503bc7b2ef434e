//! Cross-solver properties on random instances.

use proptest::prelude::*;
use u_numflow::random::create_rng;

use crate::aco::{AcoConfig, AcoRunner};
use crate::brute::BruteForce;
use crate::held_karp::HeldKarp;
use crate::matrix::DistanceMatrix;
use crate::nearest::NearestNeighbor;
use crate::tour::{is_valid_route, tour_length, Tour};

fn matrix_strategy(max_nodes: usize) -> impl Strategy<Value = DistanceMatrix> {
    (1..=max_nodes).prop_flat_map(|n| {
        prop::collection::vec(0.5f64..100.0, n * n)
            .prop_map(move |data| DistanceMatrix::from_data(n, data).expect("n*n entries"))
    })
}

fn symmetric_strategy(max_nodes: usize) -> impl Strategy<Value = DistanceMatrix> {
    (2..=max_nodes).prop_flat_map(|n| {
        prop::collection::vec(1u32..50, n * n).prop_map(move |data| {
            DistanceMatrix::symmetric(n, |i, j| f64::from(data[i * n + j])).expect("non-empty")
        })
    })
}

fn small_aco() -> AcoConfig {
    AcoConfig::default().with_num_ants(6).with_num_iterations(6)
}

fn assert_consistent(tour: &Tour, dm: &DistanceMatrix) -> Result<(), TestCaseError> {
    prop_assert!(
        is_valid_route(&tour.route, dm.size()),
        "invalid route {:?}",
        tour.route
    );
    prop_assert_eq!(tour.length, tour_length(&tour.route, dm));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every solver returns a closed permutation whose length re-evaluates
    /// to the reported value.
    #[test]
    fn prop_routes_valid_and_lengths_consistent(dm in matrix_strategy(7), seed in any::<u64>()) {
        assert_consistent(&NearestNeighbor::run(&dm), &dm)?;
        assert_consistent(&BruteForce::run(&dm).tour, &dm)?;
        assert_consistent(&HeldKarp::run(&dm).expect("small instance"), &dm)?;

        let mut rng = create_rng(seed);
        let aco = AcoRunner::run_with_rng(&dm, &small_aco(), &mut rng).expect("valid config");
        assert_consistent(&aco.best, &dm)?;
    }

    /// The two exact solvers agree on the optimum.
    #[test]
    fn prop_held_karp_matches_brute_force(dm in matrix_strategy(8)) {
        let exact = HeldKarp::run(&dm).expect("small instance");
        let brute = BruteForce::run(&dm);
        let tol = 1e-9 * brute.tour.length.max(1.0);
        prop_assert!(
            (exact.length - brute.tour.length).abs() <= tol,
            "held-karp {} vs brute force {}",
            exact.length,
            brute.tour.length
        );
    }

    /// Integer symmetric costs: the exact solvers agree bit for bit.
    #[test]
    fn prop_exact_solvers_agree_on_integers(dm in symmetric_strategy(7)) {
        let exact = HeldKarp::run(&dm).expect("small instance");
        let brute = BruteForce::run(&dm);
        prop_assert_eq!(exact.length, brute.tour.length);
    }

    /// Heuristics never beat the optimum.
    #[test]
    fn prop_heuristics_bounded_by_optimum(dm in matrix_strategy(7), seed in any::<u64>()) {
        let optimum = HeldKarp::run(&dm).expect("small instance").length;
        let tol = 1e-9 * optimum.max(1.0);

        let greedy = NearestNeighbor::run(&dm);
        prop_assert!(greedy.length >= optimum - tol);

        let mut rng = create_rng(seed);
        let aco = AcoRunner::run_with_rng(&dm, &small_aco(), &mut rng).expect("valid config");
        prop_assert!(aco.best.length >= optimum - tol);
    }

    /// ACO's best-so-far never gets worse from one iteration to the next.
    #[test]
    fn prop_aco_history_non_increasing(dm in matrix_strategy(9), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let config = small_aco().with_num_iterations(12);
        let result = AcoRunner::run_with_rng(&dm, &config, &mut rng).expect("valid config");

        prop_assert_eq!(result.best_history.len(), 12);
        for window in result.best_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
        prop_assert_eq!(result.best_history[11], result.best.length);
    }

    /// Same seed, same colony.
    #[test]
    fn prop_aco_deterministic(dm in matrix_strategy(6), seed in any::<u64>()) {
        let mut rng1 = create_rng(seed);
        let mut rng2 = create_rng(seed);
        let a = AcoRunner::run_with_rng(&dm, &small_aco(), &mut rng1).expect("valid config");
        let b = AcoRunner::run_with_rng(&dm, &small_aco(), &mut rng2).expect("valid config");
        prop_assert_eq!(a.best, b.best);
    }
}

#[test]
fn test_single_node_every_solver() {
    let dm = DistanceMatrix::from_rows(vec![vec![123.0]]).expect("square");
    let mut rng = create_rng(0);

    let tours = [
        NearestNeighbor::run(&dm),
        BruteForce::run(&dm).tour,
        HeldKarp::run(&dm).expect("single node"),
        AcoRunner::run_with_rng(&dm, &small_aco(), &mut rng)
            .expect("valid config")
            .best,
    ];
    for tour in tours {
        assert_eq!(tour.route, vec![0, 0]);
        assert_eq!(tour.length, 0.0);
    }
}

#[test]
fn test_classic_instance_every_solver() {
    let dm = DistanceMatrix::from_rows(vec![
        vec![0.0, 10.0, 15.0, 20.0],
        vec![10.0, 0.0, 35.0, 25.0],
        vec![15.0, 35.0, 0.0, 30.0],
        vec![20.0, 25.0, 30.0, 0.0],
    ])
    .expect("square");

    assert_eq!(BruteForce::run(&dm).tour.length, 80.0);
    assert_eq!(HeldKarp::run(&dm).expect("small instance").length, 80.0);

    // The greedy walk 0 -> 1 -> 3 -> 2 happens to be optimal here; the
    // lexicographically first tour 0 -> 1 -> 2 -> 3 costs 95.
    let greedy = NearestNeighbor::run(&dm);
    assert_eq!(greedy.route, vec![0, 1, 3, 2, 0]);
    assert_eq!(greedy.length, 80.0);
    assert_eq!(tour_length(&[0, 1, 2, 3, 0], &dm), 95.0);
}
