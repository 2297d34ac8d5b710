//! Print requests as they arrive from a caller.
//!
//! Every field is optional. Missing or blank fields fall back to the values
//! the ticket station has always printed, so an empty request `{}` still
//! produces a valid (zero-value) ticket.

use serde::{Deserialize, Serialize};

use super::VoucherRecord;
use crate::amount::{Amount, AmountInput};
use crate::error::CashoutError;

/// Fallback values for missing request fields.
pub mod defaults {
    pub const VOUCHER_TYPE: &str = "CASHOUT TICKET";
    pub const VALID_DATE: &str = "01.01.2025";
    pub const AMOUNT: &str = "0.00";
    pub const VALIDATION: &str = "010000000000000001";
    pub const TICKET_NO: &str = "0001";
    pub const TIME: &str = "12:00:00";
}

/// Wire shape of a print request (camelCase JSON keys).
///
/// ```
/// use cashout::ticket::VoucherRequest;
///
/// let request = VoucherRequest::from_json(r#"{"amount": "250.75", "ticketNo": "0042"}"#)?;
/// let record = request.into_record()?;
/// assert_eq!(record.ticket_no, "0042");
/// assert_eq!(record.voucher_type, "CASHOUT TICKET");
/// # Ok::<(), cashout::CashoutError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoucherRequest {
    pub voucher_type: Option<String>,
    pub valid_date: Option<String>,
    pub amount: Option<AmountInput>,
    pub validation: Option<String>,
    pub ticket_no: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub asset: Option<String>,
    pub floor: Option<String>,
}

impl VoucherRequest {
    /// Decode a request body.
    ///
    /// A non-numeric `amount` still decodes; it is rejected as
    /// `InvalidAmount` by [`into_record`](Self::into_record). Numbers too
    /// large for `f64` (`1e400`) are refused by the JSON parser itself and
    /// come back as `Request`.
    pub fn from_json(text: &str) -> Result<Self, CashoutError> {
        serde_json::from_str(text).map_err(|e| CashoutError::Request(e.to_string()))
    }

    /// Apply defaults and validate the amount.
    ///
    /// ## Errors
    ///
    /// `InvalidAmount` when the amount is present but not a finite
    /// non-negative number.
    pub fn into_record(self) -> Result<VoucherRecord, CashoutError> {
        let amount = match self.amount {
            Some(AmountInput::Text(s)) if s.trim().is_empty() => {
                defaulted("amount", defaults::AMOUNT);
                Amount::ZERO
            }
            Some(input) => Amount::try_from(input)?,
            None => {
                defaulted("amount", defaults::AMOUNT);
                Amount::ZERO
            }
        };

        Ok(VoucherRecord {
            voucher_type: or_default(self.voucher_type, "voucherType", defaults::VOUCHER_TYPE),
            valid_date: or_default(self.valid_date, "validDate", defaults::VALID_DATE),
            amount,
            validation: or_default(self.validation, "validation", defaults::VALIDATION),
            ticket_no: or_default(self.ticket_no, "ticketNo", defaults::TICKET_NO),
            time: or_default(self.time, "time", defaults::TIME),
            location: non_blank(self.location),
            asset: non_blank(self.asset),
            floor: non_blank(self.floor),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_default(value: Option<String>, field: &str, default: &str) -> String {
    match non_blank(value) {
        Some(v) => v,
        None => {
            defaulted(field, default);
            default.to_string()
        }
    }
}

fn defaulted(field: &str, default: &str) {
    tracing::debug!(field, default, "request field missing, using default");
}
