use crate::models::ReportRow;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// `Monday, 02-Jan-06 15:04:05 UTC`
pub fn format_rfc850(time: &DateTime<Utc>) -> String {
    time.format("%A, %d-%b-%y %H:%M:%S UTC").to_string()
}

/// Renders the report as a bare HTML table. Never-ingested wallets get an empty time cell.
pub fn render_report(rows: &[ReportRow]) -> String {
    let mut html = String::from("<table>");
    html.push_str("<tr><th>address</th><th>created_at</th></tr>");

    for row in rows {
        let created_at = row
            .latest_created_at
            .as_ref()
            .map(format_rfc850)
            .unwrap_or_default();

        // Writing into a String cannot fail
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            html_escape::encode_text(&row.address),
            created_at
        );
    }

    html.push_str("</table>");
    html
}
