use crate::model::{ScanResult, ScanSummary, SupportStatus};
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

#[derive(Tabled)]
struct EolRow {
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "EOL Date")]
    eol_date: String,
    #[tabled(rename = "Message")]
    message: String,
}

/// Print the per-file console summary: counts table, then the EOL rows.
pub fn print_cli_summary(results: &[ScanResult], summary: &ScanSummary) -> Result<()> {
    println!();
    println!(
        "Scan completed at: {}",
        summary.scan_timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    let rows = vec![
        SummaryRow {
            metric: "Total packages",
            count: summary.total_packages,
        },
        SummaryRow {
            metric: "Matched products",
            count: summary.matched_products,
        },
        SummaryRow {
            metric: "EOL",
            count: summary.eol_packages,
        },
        SummaryRow {
            metric: "Active",
            count: summary.active_packages,
        },
        SummaryRow {
            metric: "Unknown",
            count: summary.unknown_packages,
        },
        SummaryRow {
            metric: "Not found",
            count: summary.not_found_packages,
        },
        SummaryRow {
            metric: "Skipped rows",
            count: summary.skipped_rows,
        },
    ];
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);

    let eol: Vec<EolRow> = results
        .iter()
        .filter(|r| r.support_status == SupportStatus::Eol)
        .map(|r| EolRow {
            package: truncate(&r.product, 40),
            version: r.version.clone().unwrap_or_else(|| "-".to_string()),
            eol_date: r
                .eol_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            message: truncate(&r.message, 50),
        })
        .collect();

    if !eol.is_empty() {
        println!();
        println!("End-of-life packages:");
        println!();
        let table = Table::new(eol).with(Style::rounded()).to_string();
        println!("{}", table);
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
