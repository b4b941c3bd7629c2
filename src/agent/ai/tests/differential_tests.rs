// Differential tests: memoized and pruned engines against exhaustive negamax
//
// Single-bound pruning is only sound because scores live in {-1, 0, 1}. These
// tests check it over every reachable position of seeded random trees and of
// small subtract-a-square games rather than taking it on faith.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::ai::{
    best_entry, negamax, negamax_memoized, negamax_pruned, pick, Score, ScoreMap, SearchStats,
    TranspositionTable,
};
use crate::game_repr::{Canonical, GameTree, PlayerId, Position, SubtractSquare, TreeNode};

const OUTCOMES: [f64; 3] = [-1.0, 0.0, 1.0];

fn random_tree(rng: &mut StdRng, depth: u32) -> Rc<TreeNode> {
    let fan_out = if depth == 0 { 0 } else { rng.gen_range(0..=4) };
    if fan_out == 0 {
        return TreeNode::leaf(OUTCOMES[rng.gen_range(0..3)]);
    }
    TreeNode::branch((0..fan_out).map(|_| random_tree(rng, depth - 1)).collect())
}

/// Every position reachable from `root`, root included
fn reachable<P: Position>(root: &P) -> Vec<P> {
    let mut found = vec![root.clone()];
    let mut next = 0;
    while let Some(pos) = found.get(next).cloned() {
        found.extend(pos.legal_moves().iter().map(|mv| pos.apply_move(mv)));
        next += 1;
    }
    found
}

fn assert_values_in_domain(map: &ScoreMap) {
    for (_, score) in map.iter() {
        assert!([-1.0, 0.0, 1.0].contains(&score.as_f64()));
        assert!(score.as_f64().is_sign_positive() || score == Score::Loss);
    }
}

/// Compare all three engines on every reachable position of `root`
fn check_agreement<P>(root: &P) -> (SearchStats, SearchStats)
where
    P: Canonical,
    P::Move: PartialEq,
{
    let mut plain_stats = SearchStats::new();
    let mut pruned_stats = SearchStats::new();
    let mut memo_stats = SearchStats::new();
    // One table for the whole run, as a session would hold it
    let mut table = TranspositionTable::new();

    for pos in reachable(root) {
        let plain = negamax(&pos, &mut plain_stats).unwrap();
        let pruned = negamax_pruned(&pos, Score::WORST, &mut pruned_stats).unwrap();
        let memo = negamax_memoized(&pos, &mut table, &mut memo_stats).unwrap();

        assert_values_in_domain(&plain);
        assert_values_in_domain(&pruned);
        assert_eq!(plain.len(), pos.legal_moves().len().max(1));

        assert_eq!(best_entry(&plain), best_entry(&pruned), "pruned at {:?}", pos.canonical_key());
        assert_eq!(plain.max(), memo.max(), "memoized at {:?}", pos.canonical_key());

        let moves = pos.legal_moves();
        if !moves.is_empty() {
            assert_eq!(pick(&plain, &moves), pick(&memo, &moves));
        }
    }

    (plain_stats, pruned_stats)
}

#[test]
fn test_random_trees_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut total_cutoffs = 0;

    for round in 0..200 {
        let root = random_tree(&mut rng, 6);
        let player = if round % 2 == 0 { PlayerId::One } else { PlayerId::Two };
        let (plain, pruned) = check_agreement(&GameTree::new(root, player));

        assert!(pruned.nodes_searched <= plain.nodes_searched);
        total_cutoffs += pruned.cutoffs;
    }

    assert!(total_cutoffs > 0);
}

#[test]
fn test_subtract_square_positions_agree() {
    for value in 0..=22 {
        check_agreement(&SubtractSquare::new(value, PlayerId::One));
    }
}

#[test]
fn test_pruned_with_raised_bound_never_invents_a_better_move() {
    // A caller-supplied bound may only hide moves, never upgrade them
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let pos = GameTree::new(random_tree(&mut rng, 5), PlayerId::One);
        let mut stats = SearchStats::new();
        let exact = negamax(&pos, &mut stats).unwrap();
        let bounded = negamax_pruned(&pos, Score::Draw, &mut stats).unwrap();

        assert!(bounded.max() <= exact.max());
    }
}

#[test]
fn test_fresh_sessions_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..50 {
        let root = random_tree(&mut rng, 5);
        let pos = GameTree::new(root, PlayerId::One);
        let moves = pos.legal_moves();
        if moves.is_empty() {
            continue;
        }

        let first = negamax(&pos, &mut SearchStats::new()).unwrap();
        let second = negamax(&pos, &mut SearchStats::new()).unwrap();
        assert_eq!(first, second);
        assert_eq!(pick(&first, &moves), pick(&second, &moves));

        let mut table_a = TranspositionTable::new();
        let mut table_b = TranspositionTable::new();
        assert_eq!(
            negamax_memoized(&pos, &mut table_a, &mut SearchStats::new()),
            negamax_memoized(&pos, &mut table_b, &mut SearchStats::new())
        );
    }
}
