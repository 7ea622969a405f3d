//! Knapsack instances and fills.

use std::collections::HashSet;

use crate::error::ValidationError;

/// A knapsack item type with bounded multiplicity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique id. Fragile instances encode an arc as `"start_finish"`.
    pub id: String,

    /// Weight of one copy, at least 1.
    pub weight: u32,

    /// Value of one copy, finite and non-negative.
    pub cost: f64,

    /// How many copies may be packed.
    pub count: u32,
}

impl Item {
    pub fn new(id: impl Into<String>, weight: u32, cost: f64, count: u32) -> Self {
        Self {
            id: id.into(),
            weight,
            cost,
            count,
        }
    }

    /// Value per unit of weight.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.cost / self.weight as f64
    }
}

/// A directed step between two vertices, decoded from a fragile item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FragileArc {
    pub start: usize,
    pub finish: usize,
}

impl FragileArc {
    /// Decodes an id of the form `"start_finish"`.
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedToken {
            line: 0,
            token: id.to_string(),
        };
        let (start, finish) = id.split_once('_').ok_or_else(malformed)?;
        Ok(Self {
            start: start.parse().map_err(|_| malformed())?,
            finish: finish.parse().map_err(|_| malformed())?,
        })
    }

    /// The id this arc is encoded as.
    pub fn id(&self) -> String {
        format!("{}_{}", self.start, self.finish)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct FragileLayout {
    size: usize,
    // arcs[i] belongs to items[i]
    arcs: Vec<FragileArc>,
}

/// A validated bounded knapsack instance, optionally fragile.
///
/// Standard instances store items by weight descending (ties by id).
/// Fragile instances store items by id and carry one [`FragileArc`] per
/// item plus the number of vertices the arcs range over.
///
/// # Examples
///
/// ```
/// use np_exact::knapsack::{Item, Knapsack};
///
/// let kp = Knapsack::new(10, vec![
///     Item::new("a", 3, 6.0, 2),
///     Item::new("b", 5, 11.0, 1),
/// ])
/// .unwrap();
/// assert_eq!(kp.items()[0].id, "b");
/// assert!(!kp.is_fragile());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    max_weight: u32,
    items: Vec<Item>,
    fragile: Option<FragileLayout>,
}

impl Knapsack {
    /// Builds a standard instance.
    pub fn new(max_weight: u32, mut items: Vec<Item>) -> Result<Self, ValidationError> {
        validate_items(max_weight, &items)?;
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items.sort_by(|a, b| b.weight.cmp(&a.weight));
        Ok(Self {
            max_weight,
            items,
            fragile: None,
        })
    }

    /// Builds a fragile instance over `fragile_size` vertices.
    ///
    /// Every id must decode as a [`FragileArc`] with both ends below
    /// `fragile_size`, and the arcs together must touch every vertex.
    pub fn with_fragile(
        max_weight: u32,
        mut items: Vec<Item>,
        fragile_size: usize,
    ) -> Result<Self, ValidationError> {
        validate_items(max_weight, &items)?;
        items.sort_by(|a, b| a.id.cmp(&b.id));

        let arcs = items
            .iter()
            .map(|item| FragileArc::parse(&item.id))
            .collect::<Result<Vec<_>, _>>()?;

        let mut vertices = HashSet::new();
        for arc in &arcs {
            for v in [arc.start, arc.finish] {
                if v >= fragile_size {
                    return Err(ValidationError::out_of_range(
                        "fragile vertex",
                        v as f64,
                        format!("< {fragile_size}"),
                    ));
                }
                vertices.insert(v);
            }
        }
        if vertices.len() != fragile_size {
            return Err(ValidationError::shape(
                "fragile vertex set",
                fragile_size,
                vertices.len(),
            ));
        }

        Ok(Self {
            max_weight,
            items,
            fragile: Some(FragileLayout {
                size: fragile_size,
                arcs,
            }),
        })
    }

    /// Builds a fragile instance whose items and arcs are valid by
    /// construction.
    pub(crate) fn fragile_unchecked(
        max_weight: u32,
        mut items: Vec<Item>,
        fragile_size: usize,
    ) -> Self {
        items.sort_by(|a, b| a.id.cmp(&b.id));
        let arcs = items
            .iter()
            .filter_map(|item| FragileArc::parse(&item.id).ok())
            .collect();
        Self {
            max_weight,
            items,
            fragile: Some(FragileLayout {
                size: fragile_size,
                arcs,
            }),
        }
    }

    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_fragile(&self) -> bool {
        self.fragile.is_some()
    }

    /// Number of vertices of a fragile instance.
    pub fn fragile_size(&self) -> Option<usize> {
        self.fragile.as_ref().map(|f| f.size)
    }

    /// Arcs of a fragile instance, index-aligned with [`Knapsack::items`].
    pub fn arcs(&self) -> Option<&[FragileArc]> {
        self.fragile.as_ref().map(|f| f.arcs.as_slice())
    }
}

fn validate_items(max_weight: u32, items: &[Item]) -> Result<(), ValidationError> {
    if max_weight < 1 {
        return Err(ValidationError::out_of_range("max_weight", max_weight, ">= 1"));
    }
    if items.is_empty() {
        return Err(ValidationError::InsufficientData(
            "knapsack has no items".into(),
        ));
    }

    let mut ids = HashSet::new();
    for item in items {
        if item.id.is_empty() || item.id.contains(char::is_whitespace) {
            return Err(ValidationError::MalformedToken {
                line: 0,
                token: item.id.clone(),
            });
        }
        if !ids.insert(item.id.as_str()) {
            return Err(ValidationError::DuplicateIdentifier(item.id.clone()));
        }
        if item.weight < 1 {
            return Err(ValidationError::out_of_range(
                format!("weight of `{}`", item.id),
                item.weight,
                ">= 1",
            ));
        }
        if !item.cost.is_finite() || item.cost < 0.0 {
            return Err(ValidationError::out_of_range(
                format!("cost of `{}`", item.id),
                item.cost,
                "finite and >= 0",
            ));
        }
    }

    let lightest = items.iter().map(|item| item.weight).min().unwrap_or(0);
    if max_weight < lightest {
        return Err(ValidationError::out_of_range(
            "max_weight",
            max_weight,
            format!(">= lightest item weight {lightest}"),
        ));
    }
    Ok(())
}

/// A multiset of packed items in pick order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackFill {
    /// Item indices into [`Knapsack::items`], one entry per copy.
    pub picks: Vec<usize>,

    /// Ids matching `picks`.
    pub ids: Vec<String>,

    /// Total weight.
    pub weight: u64,

    /// Total value.
    pub cost: f64,
}

impl KnapsackFill {
    /// Resolves item indices against an instance.
    pub fn from_picks(knapsack: &Knapsack, picks: Vec<usize>) -> Self {
        let items = knapsack.items();
        let mut fill = Self {
            ids: Vec::with_capacity(picks.len()),
            ..Self::default()
        };
        for &i in &picks {
            fill.ids.push(items[i].id.clone());
            fill.weight += u64::from(items[i].weight);
            fill.cost += items[i].cost;
        }
        fill.picks = picks;
        fill
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order_weight_desc_then_id() {
        let kp = Knapsack::new(
            10,
            vec![
                Item::new("c", 2, 1.0, 1),
                Item::new("b", 5, 1.0, 1),
                Item::new("a", 2, 1.0, 1),
            ],
        )
        .unwrap();
        let ids: Vec<&str> = kp.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Knapsack::new(5, vec![Item::new("x", 1, 1.0, 1), Item::new("x", 2, 1.0, 1)])
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateIdentifier("x".into()));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Knapsack::new(0, vec![Item::new("a", 1, 1.0, 1)]).is_err());
        assert!(Knapsack::new(5, vec![]).is_err());
        assert!(Knapsack::new(5, vec![Item::new("a", 0, 1.0, 1)]).is_err());
        assert!(Knapsack::new(5, vec![Item::new("a", 1, -1.0, 1)]).is_err());
        assert!(Knapsack::new(5, vec![Item::new("a", 1, f64::NAN, 1)]).is_err());
        assert!(Knapsack::new(2, vec![Item::new("a", 3, 1.0, 1)]).is_err());
        assert!(Knapsack::new(2, vec![Item::new("a b", 1, 1.0, 1)]).is_err());
        assert!(Knapsack::new(2, vec![Item::new("", 1, 1.0, 1)]).is_err());
    }

    #[test]
    fn test_fragile_arcs_follow_id_order() {
        let kp = Knapsack::with_fragile(
            3,
            vec![
                Item::new("2_0", 1, 0.5, 1),
                Item::new("0_1", 1, 0.5, 1),
                Item::new("1_2", 1, 0.5, 1),
            ],
            3,
        )
        .unwrap();
        assert_eq!(kp.fragile_size(), Some(3));
        let arcs = kp.arcs().unwrap();
        assert_eq!(arcs[0], FragileArc { start: 0, finish: 1 });
        assert_eq!(arcs[2], FragileArc { start: 2, finish: 0 });
        assert_eq!(kp.items()[2].id, "2_0");
    }

    #[test]
    fn test_fragile_rejects_bad_ids() {
        let err = Knapsack::with_fragile(2, vec![Item::new("01", 1, 1.0, 1)], 2).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedToken { .. }));

        let err = Knapsack::with_fragile(2, vec![Item::new("0_5", 1, 1.0, 1)], 2).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));

        let err = Knapsack::with_fragile(3, vec![Item::new("0_1", 1, 1.0, 1)], 3).unwrap_err();
        assert_eq!(err, ValidationError::shape("fragile vertex set", 3, 2));
    }

    #[test]
    fn test_fill_from_picks() {
        let kp = Knapsack::new(10, vec![Item::new("a", 3, 6.0, 2), Item::new("b", 5, 11.0, 1)])
            .unwrap();
        let fill = KnapsackFill::from_picks(&kp, vec![0, 1, 1]);
        assert_eq!(fill.ids, vec!["b", "a", "a"]);
        assert_eq!(fill.weight, 11);
        assert_eq!(fill.cost, 23.0);
    }

    #[test]
    fn test_arc_id_round_trip() {
        let arc = FragileArc::parse("12_3").unwrap();
        assert_eq!(arc, FragileArc { start: 12, finish: 3 });
        assert_eq!(arc.id(), "12_3");
        assert!(FragileArc::parse("a_1").is_err());
    }
}
