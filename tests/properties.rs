//! Property tests comparing the exact solvers with brute-force enumeration.

use np_exact::cap::{Cap, CapSolver};
use np_exact::greedy::greedy_fill;
use np_exact::knapsack::{Item, Knapsack, KnapsackSolver};
use np_exact::matrix::NO_EDGE;
use np_exact::reduce::{fill_to_tour, tour_kp_cost, tsp_to_kp};
use np_exact::search::SearchConfig;
use np_exact::tsp::{Tsp, TspSolver};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

/// Square matrix with integer off-diagonal weights and `NO_EDGE` diagonal.
fn complete_matrix(min_size: usize, max_size: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (min_size..=max_size).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0u32..50, n), n).prop_map(|cells| {
            cells
                .into_iter()
                .enumerate()
                .map(|(i, row)| {
                    row.into_iter()
                        .enumerate()
                        .map(|(j, w)| if i == j { NO_EDGE } else { f64::from(w) })
                        .collect()
                })
                .collect()
        })
    })
}

/// Every closed tour from 0 in lexicographic order.
fn all_tours(n: usize) -> Vec<Vec<usize>> {
    fn extend(path: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if path.len() == used.len() {
            let mut tour = path.clone();
            tour.push(0);
            out.push(tour);
            return;
        }
        for v in 1..used.len() {
            if !used[v] {
                used[v] = true;
                path.push(v);
                extend(path, used, out);
                path.pop();
                used[v] = false;
            }
        }
    }

    let mut out = Vec::new();
    let mut used = vec![false; n];
    used[0] = true;
    extend(&mut vec![0], &mut used, &mut out);
    out
}

fn tour_cost(rows: &[Vec<f64>], tour: &[usize]) -> f64 {
    tour.windows(2).map(|e| rows[e[0]][e[1]]).sum()
}

/// Best total cost over every non-empty multiset that fits.
fn brute_force_knapsack(kp: &Knapsack) -> Option<f64> {
    fn walk(items: &[Item], i: usize, room: u32, cost: f64, picked: bool, best: &mut Option<f64>) {
        if i == items.len() {
            if picked && best.map_or(true, |b| cost > b) {
                *best = Some(cost);
            }
            return;
        }
        let item = &items[i];
        for copies in 0..=item.count {
            let weight = item.weight * copies;
            if weight > room {
                break;
            }
            walk(
                items,
                i + 1,
                room - weight,
                cost + item.cost * f64::from(copies),
                picked || copies > 0,
                best,
            );
        }
    }

    let mut best = None;
    walk(kp.items(), 0, kp.max_weight(), 0.0, false, &mut best);
    best
}

fn knapsack_instance() -> impl Strategy<Value = Knapsack> {
    (
        5u32..=12,
        prop::collection::vec((1u32..=5, 0u32..20, 1u32..=3), 1..=4),
    )
        .prop_map(|(max_weight, specs)| {
            let items = specs
                .into_iter()
                .enumerate()
                .map(|(i, (weight, cost, count))| {
                    Item::new(format!("i{i}"), weight, f64::from(cost), count)
                })
                .collect();
            Knapsack::new(max_weight, items).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_tsp_matches_brute_force(rows in complete_matrix(2, 6)) {
        let n = rows.len();
        let expected = all_tours(n)
            .iter()
            .map(|t| tour_cost(&rows, t))
            .fold(f64::INFINITY, f64::min);

        let tsp = Tsp::new(rows.clone()).unwrap();
        let solution = TspSolver::solve(&tsp, &SearchConfig::default()).unwrap();

        let cost = solution.min_cost().unwrap();
        prop_assert!((cost - expected).abs() < EPS, "exact {} vs brute {}", cost, expected);

        let path = solution.min_path().unwrap();
        prop_assert_eq!(path.len(), n + 1);
        prop_assert_eq!(path[0], 0);
        prop_assert_eq!(path[n], 0);
        prop_assert!((tour_cost(&rows, path) - cost).abs() < EPS);

        if let Some(greedy) = &solution.greedy {
            prop_assert!(cost <= greedy.cost + EPS);
        }
    }

    #[test]
    fn test_bound_pruning_agrees(rows in complete_matrix(3, 6)) {
        let tsp = Tsp::new(rows).unwrap();
        let full = TspSolver::solve(&tsp, &SearchConfig::default()).unwrap();
        let pruned = TspSolver::solve(
            &tsp,
            &SearchConfig::default().with_bound_pruning(true),
        )
        .unwrap();
        prop_assert!(pruned.nodes_visited <= full.nodes_visited);
        let (a, b) = (full.min_cost().unwrap(), pruned.min_cost().unwrap());
        prop_assert!((a - b).abs() < EPS);
    }

    #[test]
    fn test_knapsack_matches_brute_force(kp in knapsack_instance()) {
        let solution = KnapsackSolver::solve(&kp, &SearchConfig::default()).unwrap();
        let fill = solution.fill.as_ref().unwrap();

        prop_assert!(fill.weight <= u64::from(kp.max_weight()));
        for (i, item) in kp.items().iter().enumerate() {
            let used = fill.picks.iter().filter(|&&p| p == i).count();
            prop_assert!(used <= item.count as usize);
        }

        let greedy = greedy_fill(&kp);
        prop_assert!(fill.cost + EPS >= greedy.cost);

        let expected = brute_force_knapsack(&kp).unwrap();
        prop_assert!((fill.cost - expected).abs() < EPS, "exact {} vs brute {}", fill.cost, expected);
    }

    #[test]
    fn test_tsp_to_kp_round_trip(rows in complete_matrix(3, 5)) {
        let n = rows.len();
        let tsp = Tsp::new(rows.clone()).unwrap();
        let tour = TspSolver::solve(&tsp, &SearchConfig::default()).unwrap();
        let tour_path = tour.min_path().unwrap();

        let kp = tsp_to_kp(&tsp);
        let solution = KnapsackSolver::solve(&kp, &SearchConfig::default()).unwrap();
        let fill = solution.fill.as_ref().unwrap();

        prop_assert_eq!(fill.picks.len(), n);
        prop_assert!((fill.cost - tour_kp_cost(&tsp, tour_path)).abs() < EPS);

        let back = fill_to_tour(&kp, fill).unwrap();
        prop_assert!((tour_cost(&rows, &back) - tour.min_cost().unwrap()).abs() < EPS);
    }

    #[test]
    fn test_cap_picks_first_cheapest_salary_tie(costs in complete_matrix(3, 5)) {
        let n = costs.len();
        let costs: Vec<Vec<f64>> = costs
            .iter()
            .map(|row| row.iter().map(|w| if w.is_finite() { *w } else { 0.0 }).collect())
            .collect();
        let salaries = vec![vec![1.0; n]; n];

        let mut expected: Option<(f64, Vec<usize>)> = None;
        for tour in all_tours(n) {
            let cost = tour_cost(&costs, &tour);
            if expected.as_ref().map_or(true, |(best, _)| cost < *best) {
                expected = Some((cost, tour));
            }
        }
        let (expected_cost, expected_path) = expected.unwrap();

        let cap = Cap::new(costs, salaries).unwrap();
        let solution = CapSolver::solve(&cap, &SearchConfig::default()).unwrap();

        prop_assert_eq!(solution.min_salary(), Some(n as f64));
        prop_assert_eq!(solution.min_cost(), Some(expected_cost));
        prop_assert_eq!(solution.path(), Some(expected_path.as_slice()));
    }
}
