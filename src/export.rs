//! Client-side export surfaces: the invoice email link, the saved PDF, the
//! print-formatted document, and the logo data URI for the music form.

use crate::types::Invoice;
use base64::{engine::general_purpose, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fs;
use std::path::{Path, PathBuf};

/// Characters left unescaped in mailto subject/body. Matches the JS
/// `encodeURIComponent` set, so links round-trip exactly like the original
/// web console's.
const MAILTO_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one mailto header value per RFC 6068.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, MAILTO_SET).to_string()
}

pub fn email_subject(invoice: &Invoice) -> String {
    format!("Invoice for {} - {}", invoice.date, invoice.channel_name)
}

pub fn email_body(invoice: &Invoice, company_name: &str) -> String {
    format!(
        "Dear {licensor},\n\n\
         Please find attached the invoice for the month of {date} for the channel {channel}.\n\n\
         If you have any questions or require further clarification regarding the invoice, \
         please do not hesitate to reach out. We are here to assist you and ensure all your \
         queries are addressed promptly.\n\n\
         Thank you for your continued partnership and prompt payment. We look forward to \
         continuing to work with you.\n\n\
         Best regards,\n\
         {company}",
        licensor = invoice.licensor_name,
        date = invoice.date,
        channel = invoice.channel_name,
        company = company_name,
    )
}

/// Build the `mailto:` link for an invoice, addressed to the licensor.
pub fn mailto_link(invoice: &Invoice, company_name: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        invoice.licensor_email,
        encode_component(&email_subject(invoice)),
        encode_component(&email_body(invoice, company_name)),
    )
}

/// Filename a downloaded PDF is saved under.
pub fn pdf_filename(invoice_number: &str) -> String {
    format!("{invoice_number}.pdf")
}

/// Write the PDF payload to `{invoiceNumber}.pdf` in the download directory.
pub fn save_pdf(dir: &Path, invoice_number: &str, bytes: &[u8]) -> Result<PathBuf, String> {
    save_bytes(dir, &pdf_filename(invoice_number), bytes)
}

/// Write the print-formatted document to `{invoiceNumber}.txt`.
pub fn save_print_file(dir: &Path, invoice_number: &str, contents: &str) -> Result<PathBuf, String> {
    save_bytes(dir, &format!("{invoice_number}.txt"), contents.as_bytes())
}

fn save_bytes(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, String> {
    fs::create_dir_all(dir).map_err(|e| format!("Cannot create {}: {e}", dir.display()))?;
    let path = dir.join(filename);
    fs::write(&path, bytes).map_err(|e| format!("Cannot write {}: {e}", path.display()))?;
    Ok(path)
}

/// Render the print-friendly document: the same fixed layout as the viewer,
/// monetary fields verbatim.
pub fn print_document(invoice: &Invoice) -> String {
    let rule = "-".repeat(62);
    let mut doc = String::new();

    doc.push_str(&format!("INVOICE {}\n", invoice.invoice_number));
    doc.push_str(&format!("Status: {}\n", invoice.status));
    doc.push_str(&rule);
    doc.push('\n');

    doc.push_str(&format!("Licensor            {}\n", invoice.licensor_name));
    doc.push_str(&format!("Partner Name        {}\n", invoice.partner_name));
    doc.push_str(&format!("Preferred currency  {}\n", invoice.currency));
    doc.push_str(&rule);
    doc.push('\n');

    doc.push_str(&format!("Account Number      {}\n", invoice.acc_num));
    doc.push_str(&format!("IFSC                {}\n", invoice.ifsc));
    doc.push_str(&format!("IBAN                {}\n", invoice.iban));
    doc.push_str(&rule);
    doc.push('\n');

    doc.push_str(&format!("Channel ID          {}\n", invoice.channel_id));
    doc.push_str(&format!("Channel Name        {}\n", invoice.channel_name));
    doc.push_str(&format!("Invoice Date        {}\n", invoice.date));
    doc.push_str(&rule);
    doc.push('\n');

    doc.push_str(&format!("Licensor Address    {}\n", invoice.licensor_address));
    doc.push_str(&format!("Licensor Email      {}\n", invoice.licensor_email));
    doc.push_str(&format!("Channel Email       {}\n", invoice.channel_email));
    doc.push_str(&rule);
    doc.push('\n');

    doc.push_str(&format!(
        "Total Payout (USD)            ${}\n",
        invoice.total_payout
    ));
    doc.push_str(&format!(
        "Commission {}%               ${}\n",
        invoice.commission, invoice.commission_amount
    ));
    doc.push_str(&format!(
        "Total Amount ({})            {} {}\n",
        invoice.currency,
        invoice.currency_symbol(),
        invoice.payout
    ));

    doc
}

/// Embed a logo file as a base64 data URI.
///
/// Only the formats the original file picker accepted are allowed; there is
/// deliberately no size check beyond that.
pub fn logo_data_uri(path: &Path, bytes: &[u8]) -> Result<String, String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return Err("Unsupported logo format (use .png or .jpg)".to_string()),
    };

    Ok(format!(
        "data:{mime};base64,{}",
        general_purpose::STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_invoice() -> Invoice {
        Invoice {
            invoice_number: "INV-2024-0042".to_string(),
            licensor_name: "Northwind Rights".to_string(),
            licensor_email: "accounts@northwind.example".to_string(),
            channel_name: "Acme TV".to_string(),
            date: "April 2024".to_string(),
            currency: "USD".to_string(),
            payout: "1234.56".to_string(),
            total_payout: "1500.00".to_string(),
            commission: "15".to_string(),
            commission_amount: "225.00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("April 2024"), "April%202024");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        // unreserved set stays literal
        assert_eq!(encode_component("A-Z_z.9!~*'()"), "A-Z_z.9!~*'()");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn mailto_link_embeds_record_values_encoded() {
        let invoice = sample_invoice();
        let link = mailto_link(&invoice, "Royalty Desk");

        assert!(link.starts_with("mailto:accounts@northwind.example?subject="));
        // subject: Invoice for April 2024 - Acme TV
        assert!(link.contains("subject=Invoice%20for%20April%202024%20-%20Acme%20TV"));
        // body carries the exact licensor name, date, and channel
        assert!(link.contains("Dear%20Northwind%20Rights%2C"));
        assert!(link.contains("month%20of%20April%202024"));
        assert!(link.contains("channel%20Acme%20TV"));
        assert!(link.contains("Royalty%20Desk"));
        // raw spaces and newlines never survive encoding
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn pdf_filename_derives_from_invoice_number() {
        assert_eq!(pdf_filename("INV-2024-0042"), "INV-2024-0042.pdf");
    }

    #[test]
    fn save_pdf_writes_payload_under_invoice_number() {
        let dir = tempfile::tempdir().unwrap();
        let payload = b"%PDF-1.7 fake payload";

        let path = save_pdf(dir.path(), "INV-2024-0042", payload).unwrap();

        assert_eq!(path.file_name().unwrap(), "INV-2024-0042.pdf");
        assert_eq!(fs::read(&path).unwrap(), payload);
    }

    #[test]
    fn save_pdf_creates_missing_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("pdf");

        let path = save_pdf(&nested, "INV-1", b"x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn print_document_renders_payout_verbatim() {
        let invoice = sample_invoice();
        let doc = print_document(&invoice);

        assert!(doc.contains("INVOICE INV-2024-0042"));
        // server-provided strings, no recomputation or reformatting
        assert!(doc.contains("$ 1234.56"));
        assert!(doc.contains("$1500.00"));
        assert!(doc.contains("Commission 15%"));
    }

    #[test]
    fn print_document_uses_rupee_symbol_for_non_usd() {
        let mut invoice = sample_invoice();
        invoice.currency = "INR".to_string();
        let doc = print_document(&invoice);
        assert!(doc.contains("₹ 1234.56"));
    }

    #[test]
    fn logo_data_uri_embeds_base64_with_mime() {
        let uri = logo_data_uri(Path::new("/tmp/logo.png"), &[1, 2, 3]).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let jpeg = logo_data_uri(Path::new("logo.JPG"), b"abc").unwrap();
        assert!(jpeg.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn logo_data_uri_rejects_unsupported_extensions() {
        assert!(logo_data_uri(Path::new("logo.gif"), &[]).is_err());
        assert!(logo_data_uri(Path::new("logo"), &[]).is_err());
    }
}
