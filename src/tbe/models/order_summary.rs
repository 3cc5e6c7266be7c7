use super::{TicketType, TicketTypeRequest};

/// Aggregated view of one purchase: totals per type, total fare, and how
/// many physical seats the purchase needs. Built fresh for every call and
/// discarded with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderSummary {
    pub total_tickets: u32,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub total_price: u32,
}

impl OrderSummary {
    /// Counts saturate rather than wrap: any total past the purchase
    /// ceiling fails validation, so in-range purchases stay exact.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let mut summary = Self::default();

        for request in requests {
            summary.total_tickets = summary.total_tickets.saturating_add(request.count);

            let line_price = request.count.saturating_mul(request.ticket_type.unit_price());
            summary.total_price = summary.total_price.saturating_add(line_price);

            match request.ticket_type {
                TicketType::Adult => summary.adults = summary.adults.saturating_add(request.count),
                TicketType::Child => {
                    summary.children = summary.children.saturating_add(request.count)
                }
                TicketType::Infant => {
                    summary.infants = summary.infants.saturating_add(request.count)
                }
            }
        }

        return summary;
    }

    /// Infants sit on an adult's lap and do not occupy a seat
    pub fn seats_to_reserve(&self) -> u32 {
        return self.total_tickets.saturating_sub(self.infants);
    }
}
