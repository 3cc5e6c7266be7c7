use crate::ids::AccountId;
use crate::models::{PurchaseRequest, TicketType, TicketTypeRequest};
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// Represents one input row that a string would deserialize into: a single
/// purchase as per-type ticket counts
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    pub account: Option<u64>,

    pub adult: Option<u32>,
    pub child: Option<u32>,
    pub infant: Option<u32>,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input record: account value missing: {0:?}")]
    NoAccount(InputRecord),
}

impl InputRecord {
    /// Omitted count columns read as zero and produce no request line. An
    /// all-zero row still parses; the service rejects it as empty.
    pub fn parse_purchase_request(self) -> Result<PurchaseRequest> {
        let account = self
            .account
            .ok_or_else(|| InputParseError::NoAccount(self.clone()))?;

        let lines = [
            (self.adult, TicketType::Adult),
            (self.child, TicketType::Child),
            (self.infant, TicketType::Infant),
        ];

        let requests = lines
            .into_iter()
            .filter_map(|(count, ticket_type)| match count {
                Some(count) if count > 0 => Some(TicketTypeRequest::new(count, ticket_type)),
                _ => None,
            })
            .collect();

        return Ok(PurchaseRequest {
            account_id: AccountId(account),
            requests,
        });
    }
}
