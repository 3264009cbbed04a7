//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::health::{HealthBand, HealthScoreReport};
use crate::vault::EntrySummary;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of entries (Id, Service, Username, Category, Updated).
pub fn print_entries_table(entries: &[EntrySummary]) {
    if entries.is_empty() {
        info("No credentials in this vault yet.");
        tip("Run `vaultguard store <SERVICE> <USERNAME>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Service", "Username", "Category", "Updated"]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.service.clone(),
            e.username.clone(),
            e.category.clone().unwrap_or_default(),
            e.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}

/// Print a health report with the score colored by band.
pub fn print_health_report(report: &HealthScoreReport) {
    let score = format!("{}/100", report.score);
    let score = match HealthBand::for_score(report.score) {
        _ if report.total_entries == 0 => style(score).dim(),
        HealthBand::Excellent => style(score).green().bold(),
        HealthBand::Good => style(score).yellow().bold(),
        HealthBand::Critical => style(score).red().bold(),
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Score".to_string(), score.to_string()]);
    table.add_row(vec!["Entries".to_string(), report.total_entries.to_string()]);
    table.add_row(vec!["Weak".to_string(), report.weak_count.to_string()]);
    table.add_row(vec!["Reused".to_string(), report.reused_count.to_string()]);

    println!("{table}");
    info(&report.advisory_message);
}
