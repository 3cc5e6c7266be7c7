use crate::ids::AccountId;
use crate::Result;

/// External payment capability. The engine only ever debits the full fare
/// for a purchase; failures are the gateway's to signal and propagate
/// through unchanged.
pub trait PaymentService {
    fn make_payment(&mut self, account_id: AccountId, amount: u32) -> Result;
}

/// Stand-in gateway that records the payment at info level and succeeds
#[derive(Debug, Default)]
pub struct LoggingPaymentGateway;

impl LoggingPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentService for LoggingPaymentGateway {
    fn make_payment(&mut self, account_id: AccountId, amount: u32) -> Result {
        log::info!("Payment of {amount} taken from {account_id}");
        return Ok(());
    }
}
