pub mod collect;
pub mod engine;
pub mod layout;
pub mod natural;
pub mod ordering;
pub mod pages;
pub mod spreads;

pub use crate::domain::model::{BinderLayout, CardRecord, Page, Slot, SlotContent, Spread};
pub use crate::domain::ports::{
    BinderItem, CardSource, ConfigProvider, ImageResolver, Pipeline, Storage,
};
pub use crate::utils::error::Result;
