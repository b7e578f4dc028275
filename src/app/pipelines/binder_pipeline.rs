use crate::adapters::images::CardImageResolver;
use crate::app::export;
use crate::core::collect::fetch_full_set;
use crate::core::layout::{build_layout, LayoutOptions};
use crate::core::{BinderLayout, CardRecord, CardSource, ConfigProvider, Pipeline, Storage};
use crate::utils::error::{BinderError, Result};
use std::path::Path;

/// Fetch a set from `source`, lay it out, and write the configured formats to `storage`.
pub struct BinderPipeline<Src: CardSource, S: Storage, C: ConfigProvider> {
    pub(crate) source: Src,
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<Src: CardSource, S: Storage, C: ConfigProvider> BinderPipeline<Src, S, C> {
    pub fn new(source: Src, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    fn output_file(&self, extension: &str) -> String {
        format!("{}.{}", self.config.file_stem(), extension)
    }
}

#[async_trait::async_trait]
impl<Src: CardSource, S: Storage, C: ConfigProvider> Pipeline for BinderPipeline<Src, S, C> {
    async fn extract(&self) -> Result<Vec<CardRecord>> {
        tracing::info!("🚀 Fetching set {}", self.config.set_id());
        fetch_full_set(
            &self.source,
            self.config.set_id(),
            self.config.concurrent_requests(),
        )
        .await
    }

    async fn transform(&self, cards: Vec<CardRecord>) -> Result<BinderLayout> {
        let options = LayoutOptions::from_config(&self.config);
        let resolver = CardImageResolver::new(self.config.image_quality(), self.config.image_format());

        tracing::debug!(
            "Layout options: {} pockets per page, doubled rarities {:?}",
            options.page_capacity,
            self.config.doubled_rarities()
        );

        Ok(build_layout(&cards, &options, &resolver))
    }

    async fn load(&self, layout: BinderLayout) -> Result<Vec<String>> {
        let set_id = self.config.set_id();

        // 先渲染全部格式，任何一種失敗都不會留下部分輸出
        let mut rendered = Vec::new();
        for format in self.config.output_formats() {
            let extension = format.to_lowercase();
            let contents = match extension.as_str() {
                "json" => export::to_json(set_id, &layout, chrono::Utc::now())?,
                "csv" => export::to_csv(&layout)?,
                "txt" => export::to_text(set_id, &layout),
                other => {
                    return Err(BinderError::InvalidConfigValueError {
                        field: "output.formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported output format".to_string(),
                    })
                }
            };
            rendered.push((self.output_file(&extension), contents));
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (file_name, contents) in rendered {
            tracing::debug!("Writing {} ({} bytes)", file_name, contents.len());
            self.storage.write_file(&file_name, contents.as_bytes()).await?;

            written.push(
                Path::new(self.config.output_path())
                    .join(&file_name)
                    .display()
                    .to_string(),
            );
        }

        Ok(written)
    }
}
