mod ticket;
mod order_summary;

pub use ticket::{PurchaseRequest, TicketType, TicketTypeRequest};
pub use order_summary::OrderSummary;
