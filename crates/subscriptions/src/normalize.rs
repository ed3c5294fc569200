//! Normalization and derived fields
//!
//! Runs only after validation. Fills in the fixed business constants, the
//! creation timestamp, the human-readable payment details, the single
//! subscription-month invoice line item and the ezPay print flag. Every
//! derived value is a pure function of the caller-supplied fields, so
//! normalizing an already-normalized request changes nothing.

use chrono::{SecondsFormat, Utc};

use crate::request::{InvoiceInfos, SubscriptionRequest};

pub const PAYMENT_SERVICE: &str = "tappay";
pub const INVOICE_SERVICE: &str = "ezpay";
pub const CURRENCY: &str = "TWD";
pub const ITEM_NAME: &str = "訂閱";
pub const ITEM_UNIT: &str = "月";
pub const ITEM_COUNT: u32 = 1;

/// Enrich a validated request with the fixed business constants.
pub fn normalize(mut request: SubscriptionRequest) -> SubscriptionRequest {
    let created_at = request
        .created_at
        .take()
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    request.payment_service = Some(PAYMENT_SERVICE.to_string());
    request.invoice_service = Some(INVOICE_SERVICE.to_string());

    let payment = request.payment_infos.get_or_insert_with(Default::default);
    payment.currency = Some(CURRENCY.to_string());
    payment.details = Some(format!("READr subscription at {created_at}"));

    let invoice = request.invoice_infos.get_or_insert_with(Default::default);
    invoice.item_name = Some(vec![ITEM_NAME.to_string()]);
    invoice.item_unit = Some(vec![ITEM_UNIT.to_string()]);
    invoice.item_count = Some(vec![ITEM_COUNT]);
    invoice.print_flag = Some(derive_print_flag(invoice).to_string());

    request.created_at = Some(created_at);
    request
}

/// Rule by ezPay: B2B invoices must be printed, and so must invoices with
/// neither a carrier nor a donation location code. The two conditions are
/// OR'd; once either forces "Y" nothing resets it.
pub fn derive_print_flag(invoice: &InvoiceInfos) -> &'static str {
    if invoice.category.as_deref() == Some("B2B") {
        return "Y";
    }
    if is_blank(&invoice.carrier_type) && is_blank(&invoice.loce_code) {
        return "Y";
    }
    "N"
}

// The frontend sends "" for cleared fields, so empty counts as absent.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
