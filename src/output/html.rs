//! HTML report output format.
//!
//! Generates a self-contained HTML report with styling for easy viewing
//! and sharing: the run summary first, then the per-package table with
//! rows colored by support status.

use crate::model::{MatchStatus, ScanResult, ScanSummary, SupportStatus};

pub fn generate_html_string(results: &[ScanResult], summary: &ScanSummary) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>EOL Scan Report - {}</title>
    <style>
        :root {{
            --bg-color: #f8f9fa;
            --card-bg: #ffffff;
            --text-color: #212529;
            --text-muted: #6c757d;
            --border-color: #dee2e6;
            --eol: #dc3545;
            --active: #28a745;
            --unknown: #ff9800;
            --not-found: #9c27b0;
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: var(--bg-color);
            color: var(--text-color);
            line-height: 1.6;
            padding: 2rem;
        }}
        .container {{ max-width: 1100px; margin: 0 auto; }}
        h1 {{ font-size: 1.75rem; font-weight: 600; margin-bottom: 1rem; }}
        h2 {{
            font-size: 1.25rem;
            margin-bottom: 1rem;
            padding-bottom: 0.5rem;
            border-bottom: 1px solid var(--border-color);
        }}
        .summary {{
            background: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 8px;
            padding: 1.25rem;
            margin-bottom: 2rem;
        }}
        .summary p {{ margin: 0.25rem 0; }}
        .summary .muted {{ color: var(--text-muted); font-size: 0.9rem; }}
        table {{
            width: 100%;
            border-collapse: collapse;
            background: var(--card-bg);
            border-radius: 8px;
            overflow: hidden;
        }}
        th, td {{
            padding: 0.6rem 1rem;
            text-align: left;
            border-bottom: 1px solid var(--border-color);
        }}
        th {{ background: var(--bg-color); font-weight: 600; }}
        tr.eol td:first-child {{ border-left: 4px solid var(--eol); }}
        tr.active td:first-child {{ border-left: 4px solid var(--active); }}
        tr.unknown td:first-child {{ border-left: 4px solid var(--unknown); }}
        tr.not-found td:first-child {{ border-left: 4px solid var(--not-found); }}
        .badge {{
            display: inline-block;
            padding: 0.1rem 0.5rem;
            border-radius: 4px;
            font-size: 0.8rem;
            color: #fff;
        }}
        .badge.eol {{ background: var(--eol); }}
        .badge.active {{ background: var(--active); }}
        .badge.unknown {{ background: var(--unknown); }}
    </style>
</head>
<body>
    <div class="container">
        <h1>End of Life Scan Report</h1>
        <div class="summary">
            <h2>Summary</h2>
            <p class="muted">Scan date: {}</p>
            <p><strong>Total packages:</strong> {}</p>
            <p><strong>Matched products:</strong> {}</p>
            <p><strong>EOL packages:</strong> {}</p>
            <p><strong>Active packages:</strong> {}</p>
            <p><strong>Unknown status:</strong> {}</p>
            <p><strong>Not found:</strong> {}</p>
            <p><strong>Skipped rows:</strong> {}</p>
        </div>
        <h2>Package Details</h2>
        <table>
            <tr>
                <th>Package</th>
                <th>Version</th>
                <th>Status</th>
                <th>EOL Date</th>
                <th>Message</th>
            </tr>
"#,
        summary.scan_timestamp.format("%Y%m%d_%H%M%S"),
        summary.scan_timestamp.to_rfc3339(),
        summary.total_packages,
        summary.matched_products,
        summary.eol_packages,
        summary.active_packages,
        summary.unknown_packages,
        summary.not_found_packages,
        summary.skipped_rows,
    ));

    for result in results {
        let row_class = if result.status == MatchStatus::NotFound {
            "not-found"
        } else {
            result.support_status.as_str()
        };
        html.push_str(&format!(
            r#"            <tr class="{}">
                <td>{}</td>
                <td>{}</td>
                <td><span class="badge {}">{}</span></td>
                <td>{}</td>
                <td>{}</td>
            </tr>
"#,
            row_class,
            escape_html(&result.product),
            escape_html(result.version.as_deref().unwrap_or("-")),
            result.support_status.as_str(),
            result.support_status,
            result
                .eol_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            escape_html(&result.message),
        ));
    }

    html.push_str(
        r#"        </table>
    </div>
</body>
</html>
"#,
    );

    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
