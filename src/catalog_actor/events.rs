use crate::domain::Product;

/// Notifications delivered to every subscribed listener.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// The fetch succeeded and the snapshot now holds these products.
    CatalogReady(Vec<Product>),
    /// The fetch failed. Carries the failure's display text.
    Error(String),
    /// A selected amount changed. Listeners re-read what they need.
    AmountChanged,
}

/// Where the session is in its single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}
