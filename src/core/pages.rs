use crate::domain::model::{Finish, Page, Slot, SlotContent};
use crate::domain::ports::{BinderItem, ImageResolver};
use std::collections::HashMap;

/// Pockets per binder page (3 rows of 4).
pub const PAGE_CAPACITY: usize = 12;

/// Key of an occupied pocket: item id plus how many times that id was seen before.
/// The suffix after the last `#` is always all digits.
pub fn item_slot_key(item_id: &str, occurrence: usize) -> String {
    format!("{}#{}", item_id, occurrence)
}

/// Key of a padding pocket. The `p..s..` suffix is never all digits, so it
/// cannot collide with an item key.
pub fn empty_slot_key(page_index: usize, slot_index: usize) -> String {
    format!("empty#p{}s{}", page_index, slot_index)
}

/// Split the ordered items into pages of `capacity` pockets.
///
/// The last page is padded with empty pockets. No items means no pages.
pub fn assemble_pages<T: BinderItem>(
    items: &[&T],
    capacity: usize,
    resolver: &dyn ImageResolver,
) -> Vec<Page> {
    let capacity = capacity.max(1);
    let mut occurrences: HashMap<String, usize> = HashMap::new();

    items
        .chunks(capacity)
        .enumerate()
        .map(|(page_index, run)| {
            let mut slots = Vec::with_capacity(capacity);

            for item in run {
                let seen = occurrences.entry(item.id().to_string()).or_insert(0);
                let occurrence = *seen;
                *seen += 1;

                let image = resolver.resolve(*item);
                if image.is_none() {
                    tracing::debug!("No image for {}, leaving a blank pocket", item.id());
                }

                slots.push(Slot {
                    key: item_slot_key(item.id(), occurrence),
                    content: SlotContent::Occupied {
                        item_id: item.id().to_string(),
                        local_id: item.local_id().map(str::to_string),
                        finish: Finish::for_occurrence(occurrence),
                        image,
                    },
                });
            }

            // 補滿最後一頁
            for slot_index in run.len()..capacity {
                slots.push(Slot {
                    key: empty_slot_key(page_index, slot_index),
                    content: SlotContent::Empty,
                });
            }

            Page {
                index: page_index,
                slots,
            }
        })
        .collect()
}
