//! Text rendering.

use crate::cap::Cap;
use crate::knapsack::Knapsack;
use crate::matrix::WeightMatrix;
use crate::tsp::Tsp;

use super::INF_TOKEN;

fn write_matrix(out: &mut String, matrix: &WeightMatrix) {
    for i in 0..matrix.size() {
        let row: Vec<String> = matrix
            .row(i)
            .iter()
            .map(|&w| {
                if w.is_finite() {
                    w.to_string()
                } else {
                    INF_TOKEN.to_string()
                }
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
}

/// Renders a TSP matrix in the format read by
/// [`parse_tsp`](super::parse_tsp).
pub fn write_tsp(tsp: &Tsp) -> String {
    let mut out = String::new();
    write_matrix(&mut out, tsp.matrix());
    out
}

/// Renders cost and salary matrices separated by a blank line.
pub fn write_cap(cap: &Cap) -> String {
    let mut out = String::new();
    write_matrix(&mut out, cap.costs());
    out.push('\n');
    write_matrix(&mut out, cap.salaries());
    out
}

/// Renders the capacity, a blank line and the item lines. A fragile
/// instance carries its vertex count after the capacity.
pub fn write_knapsack(kp: &Knapsack) -> String {
    let mut out = match kp.fragile_size() {
        Some(size) => format!("{} {}\n\n", kp.max_weight(), size),
        None => format!("{}\n\n", kp.max_weight()),
    };
    for item in kp.items() {
        out.push_str(&format!(
            "{} {} {} {}\n",
            item.id, item.weight, item.cost, item.count
        ));
    }
    out
}
