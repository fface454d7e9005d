use serde::{Deserialize, Serialize};

/// A priced link. `price` is the business key: the store enforces that no
/// two links share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub link: String,
    pub price: f64,
}
