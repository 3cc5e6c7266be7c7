use super::{PaymentService, SeatReservationService};

use crate::ids::AccountId;
use crate::models::{OrderSummary, TicketTypeRequest};
use crate::Result;

use thiserror::Error;

pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Contract violations at the call boundary. These signal a caller bug,
/// never a rejected-but-well-formed purchase.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TicketServiceError {
    #[error("Account id must be a valid (non-zero) identifier: {0}")]
    InvalidAccountId(AccountId),

    #[error("A purchase must contain at least one ticket request")]
    EmptyTicketRequests,

    #[error("Ticket request counts must be positive: {0:?}")]
    ZeroTicketCount(TicketTypeRequest),
}

/// Business-rule rejections. Raised before any payment or reservation call,
/// so a rejected purchase has no side effects.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    #[error("Maximum ticket limit exceeded: {requested} requested, limit is {limit}")]
    MaxTicketsExceeded { requested: u32, limit: u32 },

    #[error("Infants cannot exceed adults: {infants} infant(s) for {adults} adult(s)")]
    InfantsExceedAdults { infants: u32, adults: u32 },

    #[error("Child/infant tickets require an accompanying adult ticket")]
    NoAccompanyingAdult,
}

pub struct TicketService<P, S>
where
    P: PaymentService,
    S: SeatReservationService,
{
    payment_service: P,
    seat_reservation_service: S,
}

impl<P, S> TicketService<P, S>
where
    P: PaymentService,
    S: SeatReservationService,
{
    pub fn new(payment_service: P, seat_reservation_service: S) -> Self {
        return Self {
            payment_service,
            seat_reservation_service,
        };
    }

    /// Aggregate, validate, then pay and reserve, in that order. Either
    /// gateway failing propagates unchanged; no compensation is attempted
    /// for the other call.
    pub fn purchase_tickets(
        &mut self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<OrderSummary> {
        check_call_contract(account_id, requests)?;

        let summary = OrderSummary::from_requests(requests);
        log::debug!("Aggregated purchase for {account_id}: {summary:?}");

        validate_purchase(&summary)?;

        self.payment_service
            .make_payment(account_id, summary.total_price)?;

        let seats = summary.seats_to_reserve();
        log::debug!("Payment made, reserving {seats} seat(s) for {account_id}");

        self.seat_reservation_service.reserve_seat(account_id, seats)?;

        return Ok(summary);
    }
}

fn check_call_contract(account_id: AccountId, requests: &[TicketTypeRequest]) -> Result {
    if !account_id.is_valid() {
        Err(TicketServiceError::InvalidAccountId(account_id))?
    }

    if requests.is_empty() {
        Err(TicketServiceError::EmptyTicketRequests)?
    }

    if let Some(request) = requests.iter().find(|request| request.count == 0) {
        Err(TicketServiceError::ZeroTicketCount(*request))?
    }

    return Ok(());
}

/// Rules are checked fail-fast in a fixed order: ticket ceiling, then the
/// infant/adult ratio, then the accompanying-adult requirement.
fn validate_purchase(summary: &OrderSummary) -> Result {
    if summary.total_tickets > MAX_TICKETS_PER_PURCHASE {
        Err(InvalidPurchaseError::MaxTicketsExceeded {
            requested: summary.total_tickets,
            limit: MAX_TICKETS_PER_PURCHASE,
        })?
    }

    if summary.infants > summary.adults {
        Err(InvalidPurchaseError::InfantsExceedAdults {
            infants: summary.infants,
            adults: summary.adults,
        })?
    }

    if (summary.children > 0 || summary.infants > 0) && summary.adults == 0 {
        Err(InvalidPurchaseError::NoAccompanyingAdult)?
    }

    return Ok(());
}
