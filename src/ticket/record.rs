//! The voucher data a ticket is composed from.

use crate::amount::Amount;
use crate::error::CashoutError;
use crate::protocol::barcode::digits_only;

use super::request::defaults;

/// A validated voucher, ready for composition.
///
/// Built per print request (usually through
/// [`VoucherRequest::into_record`](super::VoucherRequest::into_record)) and
/// only ever borrowed by the composer.
#[derive(Debug, Clone, PartialEq)]
pub struct VoucherRecord {
    /// Title line, e.g. `CASHOUT TICKET`
    pub voucher_type: String,
    pub valid_date: String,
    pub amount: Amount,
    /// Validation number; separators are allowed and dropped for the barcode
    pub validation: String,
    pub ticket_no: String,
    /// Printed time of issue
    pub time: String,
    pub location: Option<String>,
    pub asset: Option<String>,
    pub floor: Option<String>,
}

impl VoucherRecord {
    /// Digits of the validation code as encoded in the barcode.
    ///
    /// ## Errors
    ///
    /// `InvalidBarcodePayload` when the validation code has no digits.
    pub fn barcode_payload(&self) -> Result<String, CashoutError> {
        let digits = digits_only(&self.validation);
        if digits.is_empty() {
            return Err(CashoutError::InvalidBarcodePayload(format!(
                "validation code '{}' has no digits",
                self.validation
            )));
        }
        Ok(digits)
    }

    /// `Location: ..  Asset: ..  Floor: ..` with only the fields present.
    pub fn metadata_line(&self) -> Option<String> {
        let parts: Vec<String> = [
            ("Location", &self.location),
            ("Asset", &self.asset),
            ("Floor", &self.floor),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label}: {v}")))
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("  "))
        }
    }

    pub fn amount_line(&self) -> String {
        format!("Amount: {}PHP", self.amount)
    }

    pub fn valid_date_line(&self) -> String {
        format!("Valid Date: {}", self.valid_date)
    }

    pub fn ticket_line(&self) -> String {
        format!("Ticket #{}  Time: {}", self.ticket_no, self.time)
    }
}

impl Default for VoucherRecord {
    fn default() -> Self {
        Self {
            voucher_type: defaults::VOUCHER_TYPE.to_string(),
            valid_date: defaults::VALID_DATE.to_string(),
            amount: Amount::ZERO,
            validation: defaults::VALIDATION.to_string(),
            ticket_no: defaults::TICKET_NO.to_string(),
            time: defaults::TIME.to_string(),
            location: None,
            asset: None,
            floor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_payload() {
        let record = VoucherRecord {
            validation: "01-2345-6789".into(),
            ..VoucherRecord::default()
        };
        assert_eq!(record.barcode_payload().unwrap(), "0123456789");

        let bad = VoucherRecord {
            validation: "VOID".into(),
            ..VoucherRecord::default()
        };
        assert!(matches!(
            bad.barcode_payload(),
            Err(CashoutError::InvalidBarcodePayload(_))
        ));
    }

    #[test]
    fn test_metadata_line() {
        let mut record = VoucherRecord::default();
        assert_eq!(record.metadata_line(), None);

        record.asset = Some("A-1042".into());
        assert_eq!(record.metadata_line().as_deref(), Some("Asset: A-1042"));

        record.location = Some("Main Hall".into());
        record.floor = Some("2".into());
        assert_eq!(
            record.metadata_line().as_deref(),
            Some("Location: Main Hall  Asset: A-1042  Floor: 2")
        );
    }

    #[test]
    fn test_text_lines() {
        let record = VoucherRecord {
            amount: Amount::new(1234, 5).unwrap(),
            ..VoucherRecord::default()
        };
        assert_eq!(record.amount_line(), "Amount: 1234.05PHP");
        assert_eq!(record.valid_date_line(), "Valid Date: 01.01.2025");
        assert_eq!(record.ticket_line(), "Ticket #0001  Time: 12:00:00");
    }
}
