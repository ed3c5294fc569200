//! Request validation
//!
//! The intake endpoint fails closed: unless every predicate below holds the
//! request is rejected before anything is derived or forwarded. The error
//! variant names the first failing field for the diagnostic log; the caller
//! always sees the same fixed 403 response.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use validator::ValidateEmail;

use crate::request::SubscriptionRequest;

// Taiwanese mobile numbers: 09 followed by eight digits, with an optional
// +886 / 886 country prefix replacing the leading zero.
static MOBILE_PHONE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(\+?886-?|0)9\d{8}$").expect("mobile phone pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cardholder phone number is missing or not a mobile number")]
    InvalidPhoneNumber,
    #[error("cardholder name is missing")]
    MissingCardholderName,
    #[error("cardholder email is missing or malformed")]
    InvalidEmail,
    #[error("payment prime is missing")]
    MissingPrime,
    #[error("invoice infos are missing")]
    MissingInvoiceInfos,
}

/// Check every required field of a subscription request.
///
/// An absent nested path fails the corresponding predicate exactly like a
/// present-but-invalid value does.
pub fn validate(request: &SubscriptionRequest) -> Result<(), ValidationError> {
    let phone = request.cardholder_phone().unwrap_or("");
    if !MOBILE_PHONE.is_match(phone) {
        return Err(ValidationError::InvalidPhoneNumber);
    }

    if request.cardholder_name().is_none_or(str::is_empty) {
        return Err(ValidationError::MissingCardholderName);
    }

    if !request.cardholder_email().unwrap_or("").validate_email() {
        return Err(ValidationError::InvalidEmail);
    }

    if request.prime().is_none_or(str::is_empty) {
        return Err(ValidationError::MissingPrime);
    }

    if request.invoice_infos.is_none() {
        return Err(ValidationError::MissingInvoiceInfos);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Cardholder, InvoiceInfos, PaymentInfos};

    fn valid_request() -> SubscriptionRequest {
        SubscriptionRequest {
            payment_infos: Some(PaymentInfos {
                cardholder: Some(Cardholder {
                    name: Some("王小明".to_string()),
                    email: Some("reader@example.com".to_string()),
                    phone_number: Some("0912345678".to_string()),
                }),
                prime: Some("test_prime".to_string()),
                ..Default::default()
            }),
            invoice_infos: Some(InvoiceInfos::default()),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert_eq!(validate(&valid_request()), Ok(()));
    }

    #[test]
    fn accepts_country_prefixed_mobile_number() {
        for phone in ["+886912345678", "886912345678", "+886-912345678"] {
            let mut req = valid_request();
            req.payment_infos
                .as_mut()
                .unwrap()
                .cardholder
                .as_mut()
                .unwrap()
                .phone_number = Some(phone.to_string());
            assert_eq!(validate(&req), Ok(()), "should accept {phone}");
        }
    }

    #[test]
    fn rejects_non_mobile_phone_numbers() {
        for phone in ["", "0287654321", "12345", "09123456789", "abc"] {
            let mut req = valid_request();
            req.payment_infos
                .as_mut()
                .unwrap()
                .cardholder
                .as_mut()
                .unwrap()
                .phone_number = Some(phone.to_string());
            assert_eq!(
                validate(&req),
                Err(ValidationError::InvalidPhoneNumber),
                "should reject {phone:?}"
            );
        }
    }

    #[test]
    fn rejects_missing_phone() {
        let mut req = valid_request();
        req.payment_infos
            .as_mut()
            .unwrap()
            .cardholder
            .as_mut()
            .unwrap()
            .phone_number = None;
        assert_eq!(validate(&req), Err(ValidationError::InvalidPhoneNumber));
    }

    #[test]
    fn rejects_missing_or_empty_name() {
        for name in [None, Some(String::new())] {
            let mut req = valid_request();
            req.payment_infos
                .as_mut()
                .unwrap()
                .cardholder
                .as_mut()
                .unwrap()
                .name = name;
            assert_eq!(validate(&req), Err(ValidationError::MissingCardholderName));
        }
    }

    #[test]
    fn rejects_bad_email() {
        for email in [None, Some(String::new()), Some("not-an-email".to_string())] {
            let mut req = valid_request();
            req.payment_infos
                .as_mut()
                .unwrap()
                .cardholder
                .as_mut()
                .unwrap()
                .email = email.clone();
            assert_eq!(
                validate(&req),
                Err(ValidationError::InvalidEmail),
                "should reject {email:?}"
            );
        }
    }

    #[test]
    fn rejects_missing_prime() {
        let mut req = valid_request();
        req.payment_infos.as_mut().unwrap().prime = None;
        assert_eq!(validate(&req), Err(ValidationError::MissingPrime));
    }

    #[test]
    fn rejects_missing_invoice_infos() {
        let mut req = valid_request();
        req.invoice_infos = None;
        assert_eq!(validate(&req), Err(ValidationError::MissingInvoiceInfos));
    }

    #[test]
    fn rejects_entirely_empty_request() {
        // The missing paymentInfos path fails the phone predicate first.
        assert_eq!(
            validate(&SubscriptionRequest::default()),
            Err(ValidationError::InvalidPhoneNumber)
        );
    }
}
