use crate::core::Pipeline;
use crate::domain::model::LayoutSummary;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub layout: LayoutSummary,
    pub written_files: Vec<String>,
    pub elapsed: Duration,
}

pub struct BinderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BinderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!("Starting binder build...");

        // Extract
        tracing::info!("📡 Fetching cards...");
        let cards = self.pipeline.extract().await?;
        tracing::info!("Fetched {} cards", cards.len());

        // Transform
        tracing::info!("🗂️ Laying out binder pages...");
        let layout = self.pipeline.transform(cards).await?;
        let summary = layout.summary();
        tracing::info!(
            "Laid out {} slots on {} pages ({} spreads)",
            summary.occupied_slots,
            summary.pages,
            summary.spreads
        );

        // Load
        tracing::info!("💾 Writing outputs...");
        let written_files = self.pipeline.load(layout).await?;
        for file in &written_files {
            tracing::info!("Output saved to: {}", file);
        }

        Ok(RunSummary {
            layout: summary,
            written_files,
            elapsed: started.elapsed(),
        })
    }
}
