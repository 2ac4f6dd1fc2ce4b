use serde::Serialize;
use stowquote_core::quotation::QuotationRequest;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct QuoteReport {
    command: &'static str,
    status: &'static str,
    category: &'static str,
    family: String,
    unit: &'static str,
    rate: String,
    months: u32,
    storage_fee: String,
    wms_fee: String,
    total_fee: String,
    download_file_name: String,
}

pub fn run(
    storage_type: &str,
    volume: &str,
    days: &str,
    wms: bool,
    email: Option<&str>,
) -> CommandResult {
    let request = match QuotationRequest::from_form(
        Some(storage_type),
        Some(volume),
        Some(days),
        Some(if wms { "Yes" } else { "No" }),
        email,
    ) {
        Ok(request) => request,
        Err(error) => return CommandResult::failure("quote", "validation", error.to_string(), 2),
    };

    let profile = request.profile();
    let fees = &profile.fees;

    let report = QuoteReport {
        command: "quote",
        status: "ok",
        category: profile.category.as_str(),
        family: format!("{:?}", profile.family),
        unit: fees.unit.as_str(),
        rate: fees.rate.to_string(),
        months: fees.months,
        storage_fee: fees.storage_fee.to_string(),
        wms_fee: fees.wms_fee.to_string(),
        total_fee: fees.total_fee.to_string(),
        download_file_name: request.download_file_name(),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(output) => CommandResult::report(output),
        Err(error) => CommandResult::failure("quote", "serialization", error.to_string(), 1),
    }
}
