use crate::ids::AccountId;
use crate::Result;

/// External seat-booking capability. Seat counts exclude infants, who do
/// not occupy a seat of their own.
pub trait SeatReservationService {
    fn reserve_seat(&mut self, account_id: AccountId, seat_count: u32) -> Result;
}

/// Stand-in gateway that records the reservation at info level and succeeds
#[derive(Debug, Default)]
pub struct LoggingSeatReservationGateway;

impl LoggingSeatReservationGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeatReservationService for LoggingSeatReservationGateway {
    fn reserve_seat(&mut self, account_id: AccountId, seat_count: u32) -> Result {
        log::info!("Reserved {seat_count} seat(s) for {account_id}");
        return Ok(());
    }
}
