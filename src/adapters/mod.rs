// Adapters layer: concrete implementations for external systems (card API, images, storage).

pub mod images;
pub mod storage;
pub mod tcgdex;
