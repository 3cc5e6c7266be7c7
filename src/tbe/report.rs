use serde::{Deserialize, Serialize};

/// One accepted purchase, as reported by the batch binary
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PurchaseReport {
    pub account: u64,
    pub total_price: u32,
    pub seats_reserved: u32,
}
