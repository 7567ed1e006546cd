/// File downloads: report documents as PDF or CSV, plain lists as CSV
use contracts::dashboards::d401_reports::ReportDocument;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::date_utils::today;
use crate::shared::pdf::report_pdf;

const SEPARATOR: &str = ",";

/// Rows that can be written to a CSV file
pub trait CsvExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// Cell values in header order
    fn to_csv_row(&self) -> Vec<String>;
}

fn push_row(out: &mut String, cells: impl IntoIterator<Item = String>) {
    let escaped: Vec<String> = cells.into_iter().map(|c| escape_csv_cell(&c)).collect();
    out.push_str(&escaped.join(SEPARATOR));
    out.push('\n');
}

/// CSV text for a list, with a UTF-8 BOM so spreadsheet apps pick the encoding
pub fn list_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv = String::from('\u{FEFF}');
    push_row(&mut csv, T::headers().into_iter().map(str::to_string));
    for item in data {
        push_row(&mut csv, item.to_csv_row());
    }
    csv
}

/// CSV text for a report: title line, then each section's heading, columns and rows
pub fn report_csv(doc: &ReportDocument) -> String {
    let mut csv = String::from('\u{FEFF}');
    push_row(&mut csv, [doc.title.clone()]);
    for section in &doc.sections {
        csv.push('\n');
        if let Some(heading) = &section.heading {
            push_row(&mut csv, [heading.clone()]);
        }
        push_row(&mut csv, section.columns.iter().cloned());
        if section.rows.is_empty() {
            push_row(&mut csv, ["No data available".to_string()]);
        }
        for row in &section.rows {
            push_row(&mut csv, row.iter().cloned());
        }
    }
    csv
}

/// Exports a list to a CSV file and starts the download
pub fn export_list<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let blob = create_csv_blob(&list_csv(data))?;
    download_blob(&blob, filename)
}

/// Downloads a report as `<file_stem>.pdf`. Empty sections print "No data available".
pub fn export_report(doc: &ReportDocument) -> Result<(), String> {
    let generated_on = today().format("%b %-d, %Y").to_string();
    let bytes = report_pdf(doc, &generated_on)?;
    let blob = create_pdf_blob(&bytes)?;
    download_blob(&blob, &format!("{}.pdf", doc.file_stem))
}

/// Downloads a report as `<file_stem>.csv`
pub fn export_report_csv(doc: &ReportDocument) -> Result<(), String> {
    let blob = create_csv_blob(&report_csv(doc))?;
    download_blob(&blob, &format!("{}.csv", doc.file_stem))
}

/// Quotes a cell holding the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn create_pdf_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Clicks a hidden anchor pointing at an object URL
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    log::debug!("downloaded {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d401_reports::ReportKind;
    use serde_json::json;

    struct Row(&'static str, i64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Count"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_list_csv() {
        let csv = list_csv(&[Row("Wa, Upper", 3)]);
        assert_eq!(csv, "\u{FEFF}Name,Count\n\"Wa, Upper\",3\n");
    }

    #[test]
    fn test_report_csv_sections() {
        let doc = ReportKind::DemographicsSummary.build(&json!({
            "genders": [{"gender": "Male", "count": 2}]
        }));
        let csv = report_csv(&doc);
        assert!(csv.starts_with("\u{FEFF}Demographics Summary Report\n"));
        assert!(csv.contains("B. Gender Analysis\nGender,Count\nMale,2\n"));
        assert!(csv.contains("A. Age Group Analysis\nAge Group,Count\nNo data available\n"));
    }

    #[test]
    fn test_report_csv_when_every_section_is_empty() {
        let doc = ReportKind::CommunityBeneficiary.build(&serde_json::Value::Null);
        let csv = report_csv(&doc);
        assert_eq!(
            csv,
            "\u{FEFF}Community-based Beneficiary Report\n\nCommunity,Beneficiary Count\nNo data available\n"
        );
    }
}
