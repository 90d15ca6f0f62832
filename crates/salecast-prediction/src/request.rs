use serde::{Deserialize, Serialize};

use salecast_core::errors::{SalecastError, SalecastResult};

/// One forecast request: the four user inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub year: i32,
    pub month: u32,
    pub store_id: String,
    pub product_id: String,
}

impl ForecastRequest {
    /// Reject impossible months before any encoding or inference.
    pub fn validate(&self) -> SalecastResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(SalecastError::InvalidMonth { month: self.month });
        }
        Ok(())
    }
}
