pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{images::CardImageResolver, storage::LocalStorage, tcgdex::TcgdexClient};
pub use app::pipelines::BinderPipeline;
pub use config::toml_config::BinderConfig;
pub use crate::core::{engine::BinderEngine, layout::build_layout, layout::LayoutOptions};
pub use utils::error::{BinderError, Result};
