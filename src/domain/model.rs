use serde::{Deserialize, Serialize};

/// One card as fetched from the source. Never mutated after fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub local_id: Option<String>,
    pub name: Option<String>,
    pub rarity: Option<String>,
    /// Base URL of the card artwork, without quality/extension suffix.
    pub image_base: Option<String>,
}

impl CardRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            local_id: None,
            name: None,
            rarity: None,
            image_base: None,
        }
    }

    pub fn with_local_id(mut self, local_id: impl Into<String>) -> Self {
        self.local_id = Some(local_id.into());
        self
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = Some(image_base.into());
        self
    }
}

/// Print of a physical copy. The second copy of a doubled card is its reverse holo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Normal,
    Reverse,
}

impl Finish {
    pub fn for_occurrence(occurrence: usize) -> Self {
        if occurrence == 0 {
            Finish::Normal
        } else {
            Finish::Reverse
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Finish::Normal => "N",
            Finish::Reverse => "Rv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SlotContent {
    /// Padding pocket after the last card of the final page.
    Empty,
    /// A card copy. `image` is `None` when the resolver had nothing for it.
    Occupied {
        item_id: String,
        local_id: Option<String>,
        finish: Finish,
        image: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub key: String,
    #[serde(flatten)]
    pub content: SlotContent,
}

impl Slot {
    pub fn is_occupied(&self) -> bool {
        matches!(self.content, SlotContent::Occupied { .. })
    }

    pub fn item_id(&self) -> Option<&str> {
        match &self.content {
            SlotContent::Occupied { item_id, .. } => Some(item_id),
            SlotContent::Empty => None,
        }
    }

    pub fn image(&self) -> Option<&str> {
        match &self.content {
            SlotContent::Occupied { image, .. } => image.as_deref(),
            SlotContent::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 0-based position in the binder.
    pub index: usize,
    pub slots: Vec<Slot>,
}

impl Page {
    /// 1-based page number as printed in the binder.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    pub index: usize,
    pub left: Page,
    /// `None` only for the dangling last page of an odd page count.
    pub right: Option<Page>,
}

impl Spread {
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        std::iter::once(&self.left).chain(self.right.as_ref())
    }

    /// Page number the right-hand side would carry, present or not.
    pub fn right_page_number(&self) -> usize {
        self.left.number() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub cards: usize,
    pub occupied_slots: usize,
    pub empty_slots: usize,
    pub pages: usize,
    pub spreads: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinderLayout {
    /// Distinct cards fed into the layout, before doubling.
    pub card_count: usize,
    pub page_capacity: usize,
    pub spreads: Vec<Spread>,
}

impl BinderLayout {
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.spreads.iter().flat_map(Spread::pages)
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.pages().flat_map(|p| p.slots.iter())
    }

    pub fn page_count(&self) -> usize {
        self.pages().count()
    }

    pub fn summary(&self) -> LayoutSummary {
        let occupied_slots = self.slots().filter(|s| s.is_occupied()).count();
        let total_slots = self.page_count() * self.page_capacity;
        LayoutSummary {
            cards: self.card_count,
            occupied_slots,
            empty_slots: total_slots - occupied_slots,
            pages: self.page_count(),
            spreads: self.spreads.len(),
        }
    }
}
