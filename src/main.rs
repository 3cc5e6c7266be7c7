mod args;
mod config;
mod reader;
mod writer;

use tbe::input::InputRecord;
use tbe::services::{LoggingPaymentGateway, LoggingSeatReservationGateway, TicketService};
use tbe::{PurchaseReport, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut ticket_service = tbe::build_ticket_service();
    let mut reports = vec![];

    process_purchases(&mut ticket_service, &mut reports)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&reports)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input file, process each purchase, and collect accepted ones
fn process_purchases(
    ticket_service: &mut TicketService<LoggingPaymentGateway, LoggingSeatReservationGateway>,
    reports: &mut Vec<PurchaseReport>,
) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputRecord>() {
        log::debug!("Parsing record into InputRecord: {record:?}");
        let input_record = match record {
            Ok(input_record) => input_record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_record into PurchaseRequest: {input_record:?}");
        let purchase = match input_record.parse_purchase_request() {
            Ok(purchase) => purchase,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Purchasing tickets: {purchase:?}");
        let summary =
            match ticket_service.purchase_tickets(purchase.account_id, &purchase.requests) {
                Ok(summary) => summary,
                Err(e) => {
                    log::warn!("{e}");
                    continue;
                }
            };

        log::debug!("Purchase accepted: {summary:?}");
        reports.push(PurchaseReport {
            account: purchase.account_id.0,
            total_price: summary.total_price,
            seats_reserved: summary.seats_to_reserve(),
        });
    }

    Ok(())
}

/// Write the accepted-purchase report to stdout
fn report_to_std_out(reports: &[PurchaseReport]) -> Result {
    let mut wtr = writer::build_csv_writer();

    log::debug!("Serializing reports...");
    for report in reports.iter() {
        log::debug!("Serializing report: {report:?}");
        wtr.serialize(report)?;
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    println!("{}", output);

    Ok(())
}
