use crate::ids::AccountId;

/// Closed set of passenger categories, each with a fixed fare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Fare per ticket in whole currency units. Infants travel free on an
    /// adult's lap and occupy no seat.
    pub fn unit_price(&self) -> u32 {
        match self {
            TicketType::Adult => 20,
            TicketType::Child => 10,
            TicketType::Infant => 0,
        }
    }
}

/// One request line: how many tickets of a single type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    pub count: u32,
    pub ticket_type: TicketType,
}

impl TicketTypeRequest {
    pub fn new(count: u32, ticket_type: TicketType) -> Self {
        return Self { count, ticket_type };
    }
}

/// A full purchase: who is paying, and the ordered request lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub account_id: AccountId,
    pub requests: Vec<TicketTypeRequest>,
}
