//! PDF report generation
//!
//! Builds a paginated report with the weekly totals table and the full
//! week → matter → entry → action breakdown. Rendering needs a TrueType
//! font family on disk (regular, bold, italic and bold-italic variants
//! named after [`PDF_FONT_FAMILY`]); the original reports use Noto Sans
//! for Hebrew coverage.
//!
//! [`PDF_FONT_FAMILY`]: crate::PDF_FONT_FAMILY

use std::collections::BTreeMap;
use std::path::Path;

use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{Alignment, Element};

use crate::PDF_FONT_FAMILY;
use crate::error::Result;
use crate::period::{all_weeks, format_hhmm, period_end, period_start};
use crate::storage::state::Worklog;
use crate::utils::now;

use super::{DISCLAIMER_TEXT, DISCLAIMER_TEXT_HE, ReportEntry, ReportFilter, report_entries, week_totals};

/// Generate the PDF report as raw bytes
pub fn pdf_report(worklog: &Worklog, filter: &ReportFilter, fonts_dir: &Path) -> Result<Vec<u8>> {
    let font_family = genpdf::fonts::from_files(fonts_dir, PDF_FONT_FAMILY, None)?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title("Work Log Report");

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(20);
    doc.set_page_decorator(decorator);

    let entries = report_entries(worklog, filter);
    let totals = week_totals(&entries);
    let grand_total: i64 = totals.values().sum();

    // Header
    doc.push(
        Paragraph::new("דוח יומן עבודה / Work Log Report")
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(18)),
    );
    doc.push(Break::new(1.0));
    doc.push(Paragraph::new(format!(
        "Period: {} to {}",
        period_start(),
        period_end()
    )));
    doc.push(Paragraph::new(format!(
        "Generated: {}",
        now().format("%Y-%m-%d %H:%M:%S")
    )));
    doc.push(Break::new(1.0));
    doc.push(
        Paragraph::new(DISCLAIMER_TEXT)
            .aligned(Alignment::Center)
            .styled(Style::new().with_font_size(9)),
    );
    doc.push(
        Paragraph::new(DISCLAIMER_TEXT_HE)
            .aligned(Alignment::Center)
            .styled(Style::new().with_font_size(9)),
    );
    doc.push(Break::new(1.0));

    // Weekly summary table
    doc.push(
        Paragraph::new("סיכום שבועי / Weekly Summary")
            .styled(Style::new().bold().with_font_size(14)),
    );
    doc.push(Break::new(1.0));
    doc.push(summary_table(&totals, grand_total)?);
    doc.push(Break::new(1.0));

    // Detailed breakdown
    doc.push(
        Paragraph::new("פירוט / Detailed Breakdown")
            .styled(Style::new().bold().with_font_size(14)),
    );
    doc.push(Break::new(1.0));
    push_breakdown(&mut doc, &entries);

    let mut out = Vec::new();
    doc.render(&mut out)?;
    Ok(out)
}

/// Build the weekly totals table, all weeks plus a grand total row
fn summary_table(totals: &BTreeMap<u32, i64>, grand_total: i64) -> Result<TableLayout> {
    let header = Style::new().bold();

    let mut table = TableLayout::new(vec![1, 2, 2, 1]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    table
        .row()
        .element(Paragraph::new("Week").styled(header))
        .element(Paragraph::new("Start").styled(header))
        .element(Paragraph::new("End").styled(header))
        .element(Paragraph::new("Total").styled(header))
        .push()?;

    for week in all_weeks() {
        let total = totals.get(&week.index).copied().unwrap_or(0);
        table
            .row()
            .element(Paragraph::new(week.index.to_string()))
            .element(Paragraph::new(week.start.to_string()))
            .element(Paragraph::new(week.end.to_string()))
            .element(Paragraph::new(format_hhmm(total)))
            .push()?;
    }

    table
        .row()
        .element(Paragraph::new(""))
        .element(Paragraph::new(""))
        .element(Paragraph::new("Grand Total / סה\u{05f4}כ").styled(header))
        .element(Paragraph::new(format_hhmm(grand_total)).styled(header))
        .push()?;

    Ok(table)
}

/// Append the week → matter → entry → action breakdown
fn push_breakdown(doc: &mut genpdf::Document, entries: &[ReportEntry<'_>]) {
    for week in all_weeks() {
        let week_entries: Vec<&ReportEntry<'_>> = entries
            .iter()
            .filter(|re| re.entry.week_index == week.index)
            .collect();
        if week_entries.is_empty() {
            continue;
        }

        doc.push(
            Paragraph::new(format!(
                "Week {}: {} - {}",
                week.index, week.start, week.end
            ))
            .styled(Style::new().bold().with_font_size(12)),
        );

        let mut by_matter: BTreeMap<&str, Vec<&ReportEntry<'_>>> = BTreeMap::new();
        for &re in &week_entries {
            by_matter.entry(re.matter_name.as_str()).or_default().push(re);
        }

        for (matter_name, matter_entries) in by_matter {
            let matter_total: i64 = matter_entries.iter().map(|re| re.entry.total_minutes).sum();
            doc.push(
                Paragraph::new(format!("{} ({})", matter_name, format_hhmm(matter_total)))
                    .styled(Style::new().bold()),
            );

            for re in matter_entries {
                let entry = re.entry;
                let mut line = format!(
                    "  {} - {}",
                    entry.entry_date,
                    format_hhmm(entry.total_minutes)
                );
                if let Some(invoice) = &entry.invoice_original_filename {
                    line.push_str(&format!(" [Invoice: {invoice}]"));
                }
                doc.push(Paragraph::new(line));

                for action in &entry.actions {
                    doc.push(Paragraph::new(format!(
                        "    • {} ({})",
                        action.action_description,
                        format_hhmm(action.duration_minutes)
                    )));
                }
            }
            doc.push(Break::new(1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorklogError;
    use tempfile::TempDir;

    #[test]
    fn test_pdf_report_missing_fonts() {
        let dir = TempDir::new().unwrap();
        let result = pdf_report(
            &Worklog::new(),
            &ReportFilter::default(),
            &dir.path().join("no-fonts-here"),
        );
        assert!(matches!(result, Err(WorklogError::Export(_))));
    }

    #[test]
    fn test_summary_table_builds_for_empty_totals() {
        let table = summary_table(&BTreeMap::new(), 0);
        assert!(table.is_ok());
    }
}
