mod payment_service;
mod seat_reservation_service;
mod ticket_service;

pub use payment_service::{LoggingPaymentGateway, PaymentService};
pub use seat_reservation_service::{LoggingSeatReservationGateway, SeatReservationService};
pub use ticket_service::{
    InvalidPurchaseError, TicketService, TicketServiceError, MAX_TICKETS_PER_PURCHASE,
};
