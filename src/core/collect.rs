use crate::domain::model::CardRecord;
use crate::domain::ports::CardSource;
use crate::utils::error::Result;
use futures::stream::{self, StreamExt, TryStreamExt};

/// Fetch every card of a set, at most `concurrency` requests in flight.
///
/// Cards come back in listing order. The first failing request aborts the whole
/// fetch, so callers never see a partial set.
pub async fn fetch_full_set<S: CardSource>(
    source: &S,
    set_id: &str,
    concurrency: usize,
) -> Result<Vec<CardRecord>> {
    let summaries = source.fetch_collection(set_id).await?;
    tracing::info!("📋 Set {} lists {} cards", set_id, summaries.len());

    let requests: Vec<_> = summaries.iter().map(|s| source.resolve_full(s)).collect();
    let cards: Vec<CardRecord> = stream::iter(requests)
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    tracing::debug!("Resolved {} full cards for {}", cards.len(), set_id);
    Ok(cards)
}
