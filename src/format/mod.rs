//! Plain-text instance format.
//!
//! Numbers are whitespace separated. Matrices are one row per line with
//! `inf` marking a missing edge; sections are separated by a blank line.
//!
//! ```text
//! # tsp            # cap             # knapsack
//! inf 10 15        0 1               10
//! 10 inf 35        2 0
//! 15 35 inf                          a 3 4.5 2
//!                  5 6               b 5 7 1
//!                  7 8
//! ```
//!
//! A fragile knapsack adds its vertex count to the header line (`10 4`) and
//! names items `start_finish`.
//!
//! Parse errors carry the 1-based line number of the offending token.

mod parse;
mod write;

pub use parse::{parse_cap, parse_knapsack, parse_tsp};
pub use write::{write_cap, write_knapsack, write_tsp};

/// Token for [`NO_EDGE`](crate::matrix::NO_EDGE).
pub const INF_TOKEN: &str = "inf";
