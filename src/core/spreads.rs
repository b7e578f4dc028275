use crate::domain::model::{Page, Spread};

/// Pair pages into facing spreads, left page always even-indexed.
pub fn pair_spreads(pages: Vec<Page>) -> Vec<Spread> {
    let mut pages = pages.into_iter();
    let mut spreads = Vec::with_capacity(pages.len().div_ceil(2));

    while let Some(left) = pages.next() {
        spreads.push(Spread {
            index: spreads.len(),
            left,
            right: pages.next(),
        });
    }

    spreads
}
