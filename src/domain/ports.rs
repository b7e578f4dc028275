use crate::domain::model::{BinderLayout, CardRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Capabilities every card must expose to be laid out in a binder.
pub trait BinderItem {
    fn id(&self) -> &str;
    fn local_id(&self) -> Option<&str>;
    fn rarity(&self) -> Option<&str>;
    /// Artwork URL for the given quality (`high` / `low`) and format (`png` / `jpg` / `webp`).
    fn image_url(&self, quality: &str, format: &str) -> Option<String>;
}

impl BinderItem for CardRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn local_id(&self) -> Option<&str> {
        self.local_id.as_deref()
    }

    fn rarity(&self) -> Option<&str> {
        self.rarity.as_deref()
    }

    fn image_url(&self, quality: &str, format: &str) -> Option<String> {
        self.image_base
            .as_deref()
            .map(|base| format!("{}/{}.{}", base.trim_end_matches('/'), quality, format))
    }
}

pub trait ImageResolver: Send + Sync {
    fn resolve(&self, item: &dyn BinderItem) -> Option<String>;
}

impl<F> ImageResolver for F
where
    F: Fn(&dyn BinderItem) -> Option<String> + Send + Sync,
{
    fn resolve(&self, item: &dyn BinderItem) -> Option<String> {
        self(item)
    }
}

/// Remote card catalogue. Errors are handed back to the caller untouched.
#[async_trait]
pub trait CardSource: Send + Sync {
    type Summary: Send + Sync;

    async fn fetch_collection(&self, set_id: &str) -> Result<Vec<Self::Summary>>;
    async fn resolve_full(&self, summary: &Self::Summary) -> Result<CardRecord>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn set_id(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
    fn page_capacity(&self) -> usize;
    fn doubled_rarities(&self) -> &[String];
    fn doubled_first(&self) -> bool;
    fn image_quality(&self) -> &str;
    fn image_format(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn file_stem(&self) -> String;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CardRecord>>;
    async fn transform(&self, cards: Vec<CardRecord>) -> Result<BinderLayout>;
    async fn load(&self, layout: BinderLayout) -> Result<Vec<String>>;
}
