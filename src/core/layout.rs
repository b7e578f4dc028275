use crate::core::ordering::{order_items, RarityPolicy};
use crate::core::pages::assemble_pages;
use crate::core::spreads::pair_spreads;
use crate::domain::model::BinderLayout;
use crate::domain::ports::{BinderItem, ConfigProvider, ImageResolver};

/// Layout settings: pockets per page and which rarities are doubled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub page_capacity: usize,
    pub policy: RarityPolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_capacity: crate::core::pages::PAGE_CAPACITY,
            policy: RarityPolicy::default(),
        }
    }
}

impl LayoutOptions {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            page_capacity: config.page_capacity(),
            policy: RarityPolicy::new(config.doubled_rarities())
                .with_doubled_first(config.doubled_first()),
        }
    }
}

/// Order, paginate and pair `items` into a binder. Pure apart from the resolver calls.
pub fn build_layout<T: BinderItem>(
    items: &[T],
    options: &LayoutOptions,
    resolver: &dyn ImageResolver,
) -> BinderLayout {
    let ordered = order_items(items, &options.policy);
    let pages = assemble_pages(&ordered, options.page_capacity, resolver);
    let spreads = pair_spreads(pages);

    BinderLayout {
        card_count: items.len(),
        page_capacity: options.page_capacity.max(1),
        spreads,
    }
}
