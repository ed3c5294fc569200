// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! READr Subscription Intake
//!
//! Domain logic for the middle-tier subscription endpoint:
//!
//! - **Request model**: typed, optional-field view of the incoming payload
//! - **Validation**: cardholder name/email/phone, payment prime, invoice block
//! - **Normalization**: fixed business constants and the invoice print flag
//! - **Key renaming**: deep camelCase → snake_case transform for the upstream API
//! - **Upstream client**: single POST to the subscription service of record

pub mod decamelize;
pub mod error;
pub mod normalize;
pub mod request;
pub mod upstream;
pub mod validate;


// Decamelize
pub use decamelize::decamelize_keys;

// Error
pub use error::{format_error, ErrorWrapper};

// Normalize
pub use normalize::{normalize, CURRENCY, INVOICE_SERVICE, PAYMENT_SERVICE};

// Request
pub use request::{Cardholder, InvoiceInfos, PaymentInfos, SubscriptionRequest};

// Upstream
pub use upstream::{UpstreamClient, UpstreamResponse};

// Validate
pub use validate::{validate, ValidationError};
