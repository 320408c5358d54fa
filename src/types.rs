use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Invoice record as returned by `GET /invoice/{id}`.
///
/// Monetary fields are decimal strings and are rendered verbatim; all
/// arithmetic happens server-side. Missing fields deserialize to empty
/// strings since the backend does not publish a schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub partner_name: String,
    pub licensor_id: String,
    pub licensor_name: String,
    pub acc_num: String,
    pub ifsc: String,
    pub iban: String,
    pub currency: String,
    pub date: String,
    pub channel_id: String,
    pub channel_name: String,
    pub invoice_number: String,
    pub pt_revenue: String,
    pub us_tax: String,
    pub pt_after_us_tax: String,
    pub commission: String,
    pub total_payout: String,
    pub conversion_rate: String,
    pub payout: String,
    pub status: String,
    pub commission_amount: String,
    pub licensor_address: String,
    pub channel_email: String,
    pub licensor_email: String,
    pub tds: String,
}

impl Invoice {
    /// Symbol shown next to the final payout amount. Non-USD invoices are
    /// settled in rupees.
    pub fn currency_symbol(&self) -> &'static str {
        if self.currency == "USD" {
            "$"
        } else {
            "₹"
        }
    }
}

/// Licensor reference from `GET /licensors`, used by the music form picker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Licensor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "licensorName")]
    pub licensor_name: String,
}

/// In-progress music record for `POST /music`.
///
/// The `_id` field is sent empty; the server assigns the real id. The draft
/// lives in form state, is mutated field-by-field, and only resets when the
/// server accepts it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicDraft {
    #[serde(rename = "_id")]
    pub id: String,
    pub licensor_id: String,
    pub music_id: String,
    pub licensor_name: String,
    pub music_name: String,
    pub music_email: String,
    pub commission: String,
    pub music_logo: String,
}

/// Response body of `POST /music`. The server uses the same shape for
/// acceptance and validation failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    pub message: Option<String>,
}

/// Which top-level view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Invoice,
    CreateMusic,
}

/// Lifecycle of a background fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Lifecycle of the server-side PDF generation + local save.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfState {
    Idle,
    Requesting,
    Saved(PathBuf),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EnteringInvoiceId,
    EnteringToken,
    ConfirmClearToken,
    /// Editing a text field of the music form.
    EditingField,
    /// Licensor picker popup over the music form.
    PickingLicensor,
    /// Print preview modal over the invoice view.
    PrintPreview,
}

/// Fields of the music creation form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicField {
    Licensor,
    MusicId,
    MusicName,
    Email,
    Commission,
    Logo,
}

impl MusicField {
    pub const ALL: [MusicField; 6] = [
        MusicField::Licensor,
        MusicField::MusicId,
        MusicField::MusicName,
        MusicField::Email,
        MusicField::Commission,
        MusicField::Logo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MusicField::Licensor => "Licensor",
            MusicField::MusicId => "Music ID",
            MusicField::MusicName => "Music Name",
            MusicField::Email => "Email",
            MusicField::Commission => "Commission (%)",
            MusicField::Logo => "Logo file",
        }
    }
}

/// Outcome of a create submission, as applied to form state.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// Server accepted the draft; carries the server message.
    Accepted(String),
    /// Server rejected the draft with a validation message.
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_deserializes_camel_case_wire_shape() {
        let json = r#"{
            "_id": "662f1",
            "partnerName": "Acme Media",
            "licensorName": "Northwind Rights",
            "channelName": "Acme TV",
            "invoiceNumber": "INV-2024-0042",
            "currency": "USD",
            "payout": "1234.56",
            "totalPayout": "1500.00",
            "date": "April 2024"
        }"#;

        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.id, "662f1");
        assert_eq!(invoice.partner_name, "Acme Media");
        assert_eq!(invoice.invoice_number, "INV-2024-0042");
        // rendered verbatim, never recomputed
        assert_eq!(invoice.payout, "1234.56");
        // fields absent from the response default to empty
        assert_eq!(invoice.iban, "");
        assert_eq!(invoice.tds, "");
    }

    #[test]
    fn currency_symbol_follows_currency_code() {
        let usd = Invoice {
            currency: "USD".to_string(),
            ..Default::default()
        };
        let inr = Invoice {
            currency: "INR".to_string(),
            ..Default::default()
        };
        assert_eq!(usd.currency_symbol(), "$");
        assert_eq!(inr.currency_symbol(), "₹");
    }

    #[test]
    fn licensor_deserializes_underscore_id() {
        let json = r#"[{"_id": "abc123", "licensorName": "Northwind Rights"}]"#;
        let licensors: Vec<Licensor> = serde_json::from_str(json).unwrap();
        assert_eq!(licensors.len(), 1);
        assert_eq!(licensors[0].id, "abc123");
        assert_eq!(licensors[0].licensor_name, "Northwind Rights");
    }

    #[test]
    fn draft_serializes_to_camel_case_with_underscore_id() {
        let draft = MusicDraft {
            licensor_id: "abc123".to_string(),
            licensor_name: "Northwind Rights".to_string(),
            music_name: "Summer Hits".to_string(),
            commission: "12".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["_id"], "");
        assert_eq!(value["licensorId"], "abc123");
        assert_eq!(value["musicName"], "Summer Hits");
        assert_eq!(value["commission"], "12");
        // the full shape is posted, including untouched fields
        assert_eq!(value["musicLogo"], "");
    }

    #[test]
    fn create_response_message_is_optional() {
        let with: CreateResponse = serde_json::from_str(r#"{"message": "Music created"}"#).unwrap();
        let without: CreateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(with.message.as_deref(), Some("Music created"));
        assert!(without.message.is_none());
    }
}
