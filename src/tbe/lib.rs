pub mod ids;
pub mod input;
pub mod models;
mod report;
mod result;
pub mod services;

pub use report::PurchaseReport;
pub use result::Result;

use services::{LoggingPaymentGateway, LoggingSeatReservationGateway, TicketService};

pub fn build_ticket_service(
) -> TicketService<LoggingPaymentGateway, LoggingSeatReservationGateway> {
    let payment_service = LoggingPaymentGateway::new();
    let seat_reservation_service = LoggingSeatReservationGateway::new();
    let ticket_service = TicketService::new(payment_service, seat_reservation_service);

    return ticket_service;
}
