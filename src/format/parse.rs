//! Text parsing.

use crate::cap::Cap;
use crate::error::ValidationError;
use crate::knapsack::{Item, Knapsack};
use crate::matrix::NO_EDGE;
use crate::tsp::Tsp;

use super::INF_TOKEN;

/// A line with its 1-based number.
type Line<'a> = (usize, &'a str);

/// Splits text into blocks of non-blank lines separated by blank lines.
fn blocks(text: &str) -> Vec<Vec<Line<'_>>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push((i + 1, line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn expect_blocks<'a>(
    text: &'a str,
    count: usize,
    what: &str,
) -> Result<Vec<Vec<Line<'a>>>, ValidationError> {
    let blocks = blocks(text);
    if blocks.len() < count {
        return Err(ValidationError::InsufficientData(format!(
            "{what}: expected {count} block(s), found {}",
            blocks.len()
        )));
    }
    if let Some(&(line, content)) = blocks.get(count).and_then(|b| b.first()) {
        return Err(ValidationError::MalformedToken {
            line,
            token: first_token(content),
        });
    }
    Ok(blocks)
}

fn first_token(line: &str) -> String {
    line.split_whitespace().next().unwrap_or_default().to_string()
}

fn parse_weight(token: &str, line: usize) -> Result<f64, ValidationError> {
    if token.eq_ignore_ascii_case(INF_TOKEN) {
        return Ok(NO_EDGE);
    }
    token
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| malformed(token, line))
}

fn parse_token<T: std::str::FromStr>(token: &str, line: usize) -> Result<T, ValidationError> {
    token.parse().map_err(|_| malformed(token, line))
}

fn malformed(token: &str, line: usize) -> ValidationError {
    ValidationError::MalformedToken {
        line,
        token: token.to_string(),
    }
}

fn parse_matrix(block: &[Line<'_>]) -> Result<Vec<Vec<f64>>, ValidationError> {
    block
        .iter()
        .map(|&(line, text)| {
            text.split_whitespace()
                .map(|token| parse_weight(token, line))
                .collect()
        })
        .collect()
}

/// Reads a TSP matrix: one row per line, `inf` for a missing edge.
pub fn parse_tsp(text: &str) -> Result<Tsp, ValidationError> {
    let blocks = expect_blocks(text, 1, "tsp")?;
    Tsp::new(parse_matrix(&blocks[0])?)
}

/// Reads an assignment instance: the cost matrix, a blank line, then the
/// salary matrix.
pub fn parse_cap(text: &str) -> Result<Cap, ValidationError> {
    let blocks = expect_blocks(text, 2, "cap")?;
    Cap::new(parse_matrix(&blocks[0])?, parse_matrix(&blocks[1])?)
}

/// Reads a knapsack: the capacity, a blank line, then one
/// `id weight cost count` line per item. A second header number makes the
/// instance fragile over that many vertices.
pub fn parse_knapsack(text: &str) -> Result<Knapsack, ValidationError> {
    let blocks = expect_blocks(text, 2, "knapsack")?;

    let (line, header) = blocks[0][0];
    let mut tokens = header.split_whitespace();
    let max_weight: u32 = parse_token(tokens.next().unwrap_or_default(), line)?;
    let fragile_size: Option<usize> = tokens
        .next()
        .map(|token| parse_token(token, line))
        .transpose()?;
    if let Some(extra) = tokens.next() {
        return Err(malformed(extra, line));
    }
    if let Some(&(line, text)) = blocks[0].get(1) {
        return Err(malformed(&first_token(text), line));
    }

    let items = blocks[1]
        .iter()
        .map(|&(line, text)| parse_item(text, line))
        .collect::<Result<Vec<_>, _>>()?;

    match fragile_size {
        Some(size) => Knapsack::with_fragile(max_weight, items, size),
        None => Knapsack::new(max_weight, items),
    }
}

fn parse_item(text: &str, line: usize) -> Result<Item, ValidationError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [id, weight, cost, count] => {
            let cost: f64 = parse_token(cost, line)?;
            if !cost.is_finite() {
                return Err(malformed(tokens[2], line));
            }
            Ok(Item::new(
                *id,
                parse_token(weight, line)?,
                cost,
                parse_token(count, line)?,
            ))
        }
        [_, _, _, _, extra, ..] => Err(malformed(extra, line)),
        _ => Err(ValidationError::InsufficientData(format!(
            "line {line}: expected `id weight cost count`"
        ))),
    }
}
