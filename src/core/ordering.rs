//! Rarity classification, natural ordering and duplication of binder items.
//!
//! Cards of the "doubled" rarity tiers are owned twice (normal print and
//! reverse holo), so they occupy two adjacent pockets. The output is the
//! doubled group followed by every other card, each group sorted by local id.

use crate::core::natural::natural_cmp;
use crate::domain::ports::BinderItem;
use std::collections::BTreeSet;

/// Rarity tiers owned in two copies by default (TCGdex French names).
pub const DEFAULT_DOUBLED_RARITIES: [&str; 3] = ["commune", "peu commune", "rare"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityPolicy {
    doubled: BTreeSet<String>,
    doubled_first: bool,
}

impl Default for RarityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLED_RARITIES)
    }
}

impl RarityPolicy {
    pub fn new<I, S>(doubled_rarities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            doubled: doubled_rarities
                .into_iter()
                .map(|r| normalize_rarity(Some(r.as_ref())))
                .collect(),
            doubled_first: true,
        }
    }

    pub fn with_doubled_first(mut self, doubled_first: bool) -> Self {
        self.doubled_first = doubled_first;
        self
    }

    pub fn doubled_first(&self) -> bool {
        self.doubled_first
    }

    /// Absent and unknown rarities are never doubled.
    pub fn is_doubled(&self, rarity: Option<&str>) -> bool {
        self.doubled.contains(&normalize_rarity(rarity))
    }
}

pub fn normalize_rarity(rarity: Option<&str>) -> String {
    rarity.unwrap_or_default().trim().to_lowercase()
}

fn by_local_id<T: BinderItem>(a: &&T, b: &&T) -> std::cmp::Ordering {
    natural_cmp(a.local_id().unwrap_or_default(), b.local_id().unwrap_or_default())
}

/// Classify, sort and expand `items` into binder order.
///
/// Every doubled item shows up twice in a row, every other item once, so the
/// result has `2 * |doubled| + |others|` entries. `sort_by` is stable, ties on
/// local id keep their input order.
pub fn order_items<'a, T: BinderItem>(items: &'a [T], policy: &RarityPolicy) -> Vec<&'a T> {
    let (mut doubled, mut others): (Vec<&T>, Vec<&T>) =
        items.iter().partition(|item| policy.is_doubled(item.rarity()));

    doubled.sort_by(by_local_id);
    others.sort_by(by_local_id);

    tracing::debug!(
        "Ordering {} items: {} doubled, {} single",
        items.len(),
        doubled.len(),
        others.len()
    );

    let doubled = doubled.into_iter().flat_map(|item| [item, item]);
    if policy.doubled_first {
        doubled.chain(others).collect()
    } else {
        others.into_iter().chain(doubled).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CardRecord;

    fn card(id: &str, local_id: &str, rarity: &str) -> CardRecord {
        CardRecord::new(id)
            .with_local_id(local_id)
            .with_rarity(rarity)
    }

    fn local_ids(ordered: &[&CardRecord]) -> Vec<String> {
        ordered
            .iter()
            .map(|c| c.local_id.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_rare_cards_are_doubled_before_others() {
        let cards = vec![
            card("a", "2", "Rare"),
            card("b", "1", "Rare"),
            card("c", "3", "Rare"),
            card("d", "5", "Double Rare"),
        ];

        let ordered = order_items(&cards, &RarityPolicy::default());

        assert_eq!(local_ids(&ordered), vec!["1", "1", "2", "2", "3", "3", "5"]);
    }

    #[test]
    fn test_rarity_is_trimmed_and_case_insensitive() {
        let policy = RarityPolicy::default();
        assert!(policy.is_doubled(Some("  Peu Commune ")));
        assert!(policy.is_doubled(Some("COMMUNE")));
        assert!(!policy.is_doubled(Some("Ultra Rare")));
        assert!(!policy.is_doubled(Some("")));
        assert!(!policy.is_doubled(None));
    }

    #[test]
    fn test_missing_fields_fall_back_to_empty() {
        let cards = vec![
            card("a", "3", "Commune"),
            CardRecord::new("no-rarity").with_local_id("1"),
            CardRecord::new("nothing"),
            CardRecord::new("no-local").with_rarity("Commune"),
        ];

        let ordered = order_items(&cards, &RarityPolicy::default());
        let ids: Vec<&str> = ordered.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["no-local", "no-local", "a", "a", "nothing", "no-rarity"]
        );
    }

    #[test]
    fn test_numeric_aware_sort() {
        let cards: Vec<CardRecord> = ["11", "9", "10", "100", "1"]
            .iter()
            .map(|l| card(l, l, "Illustration rare"))
            .collect();

        let ordered = order_items(&cards, &RarityPolicy::default());

        assert_eq!(local_ids(&ordered), vec!["1", "9", "10", "11", "100"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let cards = vec![
            card("first", "001", "Commune"),
            card("second", "1", "Commune"),
            card("third", "01", "Commune"),
        ];

        let ordered = order_items(&cards, &RarityPolicy::default());
        let ids: Vec<&str> = ordered.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["first", "first", "second", "second", "third", "third"]
        );
    }

    #[test]
    fn test_custom_policy_others_first() {
        let cards = vec![
            card("a", "1", "Commune"),
            card("b", "2", "Holo"),
            card("c", "3", "Holo"),
        ];
        let policy = RarityPolicy::new(["holo"]).with_doubled_first(false);

        let ordered = order_items(&cards, &policy);
        let ids: Vec<&str> = ordered.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b", "b", "c", "c"]);
    }

    #[test]
    fn test_empty_input() {
        let cards: Vec<CardRecord> = Vec::new();
        assert!(order_items(&cards, &RarityPolicy::default()).is_empty());
    }
}
