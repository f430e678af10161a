//! CSV export of the submission list.
//!
//! Pure formatting: header row from the model's field names, one data
//! row per submission, RFC 4180 quoting (fields containing commas,
//! quotes, or line breaks are wrapped in double quotes with embedded
//! quotes doubled). An empty input yields an empty string so the
//! download handler can answer 204 instead of shipping a lone header.

use crate::submission::Submission;

/// Column order for the export, matching the model's field order.
const HEADER: &str = "id,name,email,postal_code,city,region,lat,lon,created_at";

/// Render submissions as an RFC 4180 CSV document.
pub fn to_csv(submissions: &[Submission]) -> String {
    if submissions.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(submissions.len() * 96);
    out.push_str(HEADER);
    out.push_str("\r\n");

    for s in submissions {
        let fields = [
            s.id.to_string(),
            s.name.clone(),
            s.email.clone(),
            s.postal_code.clone(),
            s.city.clone().unwrap_or_default(),
            s.region.clone().unwrap_or_default(),
            s.lat.to_string(),
            s.lon.to_string(),
            s.created_at.to_rfc3339(),
        ];
        let row: Vec<String> = fields.iter().map(|f| quote_field(f)).collect();
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }

    out
}

/// Quote a single field per RFC 4180 when it contains a comma, a
/// double quote, or a line break; embedded quotes are doubled.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
