//! Print document export — render a project as a static HTML document.
//!
//! Produces a self-contained page suitable for the browser print dialog or
//! any HTML-to-PDF pipeline. The matrix section walks the identical strict
//! lower triangle as the interactive layout, so the printed matrix is
//! structurally the same grid, just with static glyphs instead of click
//! targets.
//!
//! ```text
//! Project → write_print_document() → HTML → print dialog / PDF
//! ```

use std::io::Write;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::layout::{self, TriangularLayout};
use crate::model::{Project, Strength, TypedValue};
use crate::Result;

// ============================================================================
// Settings
// ============================================================================

/// Page orientation for the `@page` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    fn css(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Paper size for the `@page` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    #[serde(rename = "letter")]
    Letter,
    #[serde(rename = "tabloid")]
    Tabloid,
    #[serde(rename = "A4")]
    A4,
    #[serde(rename = "A3")]
    A3,
}

impl PaperSize {
    fn css(self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
            PaperSize::Tabloid => "tabloid",
            PaperSize::A4 => "A4",
            PaperSize::A3 => "A3",
        }
    }
}

/// Which sections to render and how to page them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    pub include_matrix: bool,
    pub include_criteria: bool,
    pub orientation: Orientation,
    pub paper_size: PaperSize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            include_matrix: true,
            include_criteria: true,
            orientation: Orientation::Landscape,
            paper_size: PaperSize::Tabloid,
        }
    }
}

/// Studio branding applied to the document header and accent colors.
/// Persisted separately from projects (see [`crate::storage`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSettings {
    pub company_name: String,
    /// Data-URI or URL of a logo image, if configured.
    pub logo: Option<String>,
    pub primary_color: String,
    pub accent_color: String,
}

impl Default for BrandSettings {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            logo: None,
            primary_color: "#030213".into(),
            accent_color: "#2563eb".into(),
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// Render the project as a printable HTML document.
pub fn write_print_document(
    project: &Project,
    settings: &ExportSettings,
    brand: &BrandSettings,
    writer: &mut dyn Write,
) -> Result<()> {
    let primary = escape(&brand.primary_color);
    let company = if brand.company_name.is_empty() {
        "Interior Architecture".to_string()
    } else {
        escape(&brand.company_name)
    };

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "<meta charset=\"UTF-8\">")?;
    writeln!(
        writer,
        "<title>{} - Adjacency Matrix</title>",
        escape(&project.name)
    )?;
    write_styles(writer, settings, &primary)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;

    // Header
    writeln!(writer, "<div class=\"header\">")?;
    writeln!(writer, "<div>")?;
    writeln!(writer, "<h1>{}</h1>", escape(&project.name))?;
    writeln!(writer, "<div class=\"company\">{company}</div>")?;
    writeln!(writer, "</div>")?;
    writeln!(
        writer,
        "<div class=\"date\">{}</div>",
        Utc::now().format("%Y-%m-%d")
    )?;
    writeln!(writer, "</div>")?;

    writeln!(writer, "<div class=\"content\">")?;
    if settings.include_matrix {
        write_matrix_section(project, writer)?;
    }
    if settings.include_criteria {
        write_criteria_section(project, writer)?;
    }
    writeln!(writer, "</div>")?;

    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}

fn write_styles(writer: &mut dyn Write, settings: &ExportSettings, primary: &str) -> Result<()> {
    writeln!(writer, "<style>")?;
    writeln!(
        writer,
        "@media print {{ @page {{ size: {} {}; margin: 0.5in; }} }}",
        settings.paper_size.css(),
        settings.orientation.css()
    )?;
    writeln!(writer, "* {{ margin: 0; padding: 0; box-sizing: border-box; }}")?;
    writeln!(
        writer,
        "body {{ font-family: -apple-system, 'Segoe UI', 'Roboto', sans-serif; color: #000; background: white; padding: 20px; }}"
    )?;
    writeln!(
        writer,
        ".header {{ display: flex; justify-content: space-between; align-items: center; margin-bottom: 30px; padding-bottom: 15px; border-bottom: 3px solid {primary}; }}"
    )?;
    writeln!(writer, ".header h1 {{ font-size: 24px; color: {primary}; }}")?;
    writeln!(writer, ".header .company {{ font-size: 14px; color: #666; }}")?;
    writeln!(writer, ".header .date {{ font-size: 12px; color: #666; }}")?;
    let content_display = match settings.orientation {
        Orientation::Landscape => "display: flex; gap: 30px;",
        Orientation::Portrait => "display: block;",
    };
    writeln!(writer, ".content {{ {content_display} }}")?;
    writeln!(writer, ".section {{ margin-bottom: 30px; flex: 1; }}")?;
    writeln!(writer, ".section h2 {{ font-size: 18px; margin-bottom: 15px; color: {primary}; }}")?;
    writeln!(writer, ".matrix-table {{ border-collapse: collapse; font-size: 11px; }}")?;
    writeln!(writer, ".matrix-table td {{ border: 1px solid #ddd; padding: 8px; text-align: center; }}")?;
    writeln!(
        writer,
        ".matrix-table .label {{ background: #f5f5f5; font-weight: 500; text-align: left; white-space: nowrap; }}"
    )?;
    writeln!(writer, ".matrix-table .cell {{ width: 40px; height: 40px; font-size: 18px; }}")?;
    writeln!(
        writer,
        ".matrix-table .diagonal-label {{ writing-mode: vertical-rl; transform: rotate(180deg); padding: 8px 4px; background: #f5f5f5; }}"
    )?;
    writeln!(writer, ".criteria-table {{ width: 100%; border-collapse: collapse; font-size: 10px; }}")?;
    writeln!(
        writer,
        ".criteria-table th {{ background: {primary}; color: white; padding: 8px; text-align: left; font-weight: 500; }}"
    )?;
    writeln!(writer, ".criteria-table td {{ border: 1px solid #ddd; padding: 6px 8px; }}")?;
    writeln!(writer, ".criteria-table tr:nth-child(even) {{ background: #f9f9f9; }}")?;
    writeln!(writer, ".criteria-table .total {{ font-weight: 500; background: #f0f0f0; }}")?;
    writeln!(
        writer,
        ".legend {{ margin-top: 15px; padding: 10px; border: 1px solid #ddd; border-radius: 4px; background: #f9f9f9; }}"
    )?;
    writeln!(writer, ".legend h3 {{ font-size: 12px; margin-bottom: 8px; }}")?;
    writeln!(writer, ".legend-items {{ display: flex; gap: 20px; flex-wrap: wrap; }}")?;
    writeln!(
        writer,
        ".legend-item {{ display: flex; align-items: center; gap: 8px; font-size: 11px; }}"
    )?;
    writeln!(writer, ".legend-symbol {{ font-size: 18px; width: 24px; text-align: center; }}")?;
    writeln!(writer, "</style>")?;
    Ok(())
}

// ============================================================================
// Matrix section
// ============================================================================

fn write_matrix_section(project: &Project, writer: &mut dyn Write) -> Result<()> {
    let spaces = &project.spaces;
    let layout = TriangularLayout::build(spaces);

    writeln!(writer, "<div class=\"section\">")?;
    writeln!(writer, "<h2>Adjacency Matrix</h2>")?;
    writeln!(writer, "<table class=\"matrix-table\">")?;
    writeln!(writer, "<tbody>")?;

    // The first space is label-only: it has no earlier spaces to compare
    // against, matching the interactive layout's missing row 0.
    if let Some(first) = spaces.first() {
        writeln!(writer, "<tr><td class=\"label\">{}</td></tr>", escape(&first.name))?;
    }

    for row in &layout.rows {
        write!(writer, "<tr><td class=\"label\">{}</td>", escape(&spaces[row.row].name))?;
        for cell in &row.cells {
            let (row_id, col_id) = layout::cell_ids(spaces, cell);
            let glyph = project
                .adjacencies
                .get(row_id, col_id)
                .map(|s| format!("<span style=\"color: {}\">{}</span>", s.color(), s.symbol()))
                .unwrap_or_default();
            write!(writer, "<td class=\"cell\">{glyph}</td>")?;
        }
        writeln!(writer, "</tr>")?;
    }

    // Column label row along the bottom, excluding the last space.
    if !layout.column_labels.is_empty() {
        write!(writer, "<tr><td></td>")?;
        for &c in &layout.column_labels {
            write!(
                writer,
                "<td class=\"diagonal-label\">{}</td>",
                escape(&spaces[c].name)
            )?;
        }
        writeln!(writer, "</tr>")?;
    }

    writeln!(writer, "</tbody>")?;
    writeln!(writer, "</table>")?;

    write_legend(writer)?;
    writeln!(writer, "</div>")?;
    Ok(())
}

/// The print legend carries all stored strengths, including the blank
/// legacy `avoid` row, so imported data remains accounted for on paper.
fn write_legend(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "<div class=\"legend\">")?;
    writeln!(writer, "<h3>Legend</h3>")?;
    writeln!(writer, "<div class=\"legend-items\">")?;
    for strength in [
        Strength::Required,
        Strength::Preferred,
        Strength::Neutral,
        Strength::Avoid,
    ] {
        writeln!(
            writer,
            "<div class=\"legend-item\"><span class=\"legend-symbol\" style=\"color: {}\">{}</span><span>{}</span></div>",
            strength.color(),
            strength.symbol(),
            strength.display_label()
        )?;
    }
    writeln!(writer, "</div>")?;
    writeln!(writer, "</div>")?;
    Ok(())
}

// ============================================================================
// Criteria section
// ============================================================================

fn is_visible(project: &Project, column: &str) -> bool {
    project.visible_default_columns.iter().any(|c| c == column)
}

fn write_criteria_section(project: &Project, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "<div class=\"section\">")?;
    writeln!(writer, "<h2>Program Criteria</h2>")?;
    writeln!(writer, "<table class=\"criteria-table\">")?;

    writeln!(writer, "<thead>")?;
    write!(writer, "<tr><th>Space</th><th>Area (SF)</th>")?;
    for column in ["daylight", "plumbing", "privacy", "equipment", "notes"] {
        if is_visible(project, column) {
            let mut chars = column.chars();
            let title = chars
                .next()
                .map(|c| c.to_uppercase().collect::<String>() + chars.as_str())
                .unwrap_or_default();
            write!(writer, "<th>{title}</th>")?;
        }
    }
    for col in &project.custom_columns {
        write!(writer, "<th>{}</th>", escape(&col.name))?;
    }
    writeln!(writer, "</tr>")?;
    writeln!(writer, "</thead>")?;

    writeln!(writer, "<tbody>")?;
    for space in &project.spaces {
        write!(writer, "<tr><td>{}</td>", escape(&space.name))?;
        write!(writer, "<td>{}</td>", format_area(space.planned_area))?;
        if is_visible(project, "daylight") {
            write!(writer, "<td>{}</td>", check(space.daylight))?;
        }
        if is_visible(project, "plumbing") {
            write!(writer, "<td>{}</td>", check(space.plumbing))?;
        }
        if is_visible(project, "privacy") {
            write!(writer, "<td>{}</td>", space.privacy)?;
        }
        if is_visible(project, "equipment") {
            write!(writer, "<td>{}</td>", dash_if_empty(&space.equipment))?;
        }
        if is_visible(project, "notes") {
            write!(writer, "<td>{}</td>", dash_if_empty(&space.notes))?;
        }
        for col in &project.custom_columns {
            let rendered = match space.field(&col.id).map(|v| col.typed(v)) {
                Some(TypedValue::Bool(b)) => check(b).to_string(),
                Some(TypedValue::Number(n)) => format_number(n),
                Some(TypedValue::Text(s)) | Some(TypedValue::Choice(s)) => {
                    dash_if_empty(s)
                }
                None => "-".to_string(),
            };
            write!(writer, "<td>{rendered}</td>")?;
        }
        writeln!(writer, "</tr>")?;
    }

    // Total row: numeric area summed across all spaces, absent as zero.
    // The colspan matches the headers actually rendered above.
    let visible_count = ["daylight", "plumbing", "privacy", "equipment", "notes"]
        .iter()
        .filter(|c| is_visible(project, c))
        .count();
    writeln!(
        writer,
        "<tr class=\"total\"><td>Total</td><td>{}</td><td colspan=\"{}\"></td></tr>",
        format_number(project.total_planned_area()),
        visible_count + project.custom_columns.len()
    )?;
    writeln!(writer, "</tbody>")?;
    writeln!(writer, "</table>")?;
    writeln!(writer, "</div>")?;
    Ok(())
}

// ============================================================================
// Formatting helpers
// ============================================================================

fn check(b: bool) -> &'static str {
    if b { "✓" } else { "" }
}

fn dash_if_empty(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        escape(s)
    }
}

fn format_area(area: Option<f64>) -> String {
    area.map(format_number).unwrap_or_else(|| "-".to_string())
}

/// Whole numbers print without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Minimal HTML escaping for interpolated user text.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
