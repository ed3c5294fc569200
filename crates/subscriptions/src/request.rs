//! Typed view of the subscription request payload
//!
//! Every field is optional so that a missing nested path never aborts
//! deserialization; an absent leaf fails its validation predicate instead.
//! The wire format is camelCase on the way in and stays camelCase until the
//! forwarding step renames keys for the upstream API.

use serde::{Deserialize, Serialize};

/// A subscription creation request as submitted by the frontend.
///
/// `payment_service`, `invoice_service` and the derived payment/invoice
/// fields are `None` until [`crate::normalize::normalize`] fills them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_infos: Option<PaymentInfos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_infos: Option<InvoiceInfos>,
    /// ISO-8601 creation timestamp; defaults to "now" during normalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_service: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfos {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<Cardholder>,
    /// Opaque single-use card token from the payment SDK
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cardholder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInfos {
    /// Invoice category, "B2B" or "B2C"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_type: Option<String>,
    // "loceCode" is the field name the upstream API expects; kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loce_code: Option<String>,
    /// Last four digits of the card, used only for the success audit log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_unit: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_flag: Option<String>,
}

impl SubscriptionRequest {
    pub fn cardholder(&self) -> Option<&Cardholder> {
        self.payment_infos.as_ref()?.cardholder.as_ref()
    }

    pub fn cardholder_name(&self) -> Option<&str> {
        self.cardholder()?.name.as_deref()
    }

    pub fn cardholder_email(&self) -> Option<&str> {
        self.cardholder()?.email.as_deref()
    }

    pub fn cardholder_phone(&self) -> Option<&str> {
        self.cardholder()?.phone_number.as_deref()
    }

    pub fn prime(&self) -> Option<&str> {
        self.payment_infos.as_ref()?.prime.as_deref()
    }

    pub fn last_four_num(&self) -> Option<&str> {
        self.invoice_infos.as_ref()?.last_four_num.as_deref()
    }
}
