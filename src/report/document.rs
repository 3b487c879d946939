//! Word-processing table document rendering.
//!
//! Lays out the flat assignment report and the assignment matrix as a
//! heading, a date-range subtitle and one grid table on an A4 page.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, PageMargin, Paragraph, Run, Table, TableCell, TableRow, VAlignType,
    VMergeType,
};
use rust_decimal::Decimal;

use crate::aggregation::MatrixRow;
use crate::error::{ReportError, ReportResult};
use crate::models::AssignmentRow;

use super::{DocumentKind, EMPTY_TEXT, Orientation, ReportDocument, ReportRange, format_number};

// A4 page geometry in twentieths of a point.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const PAGE_MARGIN: i32 = 1440;
const HEADER_FOOTER_MARGIN: i32 = 720;

fn base_document(orientation: Orientation) -> Docx {
    let (width, height) = match orientation {
        Orientation::Portrait => (PAGE_WIDTH, PAGE_HEIGHT),
        Orientation::Landscape => (PAGE_HEIGHT, PAGE_WIDTH),
    };

    Docx::new().page_size(width, height).page_margin(
        PageMargin::new()
            .left(PAGE_MARGIN)
            .right(PAGE_MARGIN)
            .top(PAGE_MARGIN)
            .bottom(PAGE_MARGIN)
            .header(HEADER_FOOTER_MARGIN)
            .footer(HEADER_FOOTER_MARGIN),
    )
}

fn add_title(docx: Docx, title: &str, range: ReportRange) -> Docx {
    docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(title).bold().size(32)))
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("From "))
                .add_run(Run::new().add_text(range.start.to_string()).bold())
                .add_run(Run::new().add_text(" to "))
                .add_run(Run::new().add_text(range.end.to_string()).bold())
                .add_run(Run::new().add_text(":")),
        )
}

fn header_cell(text: &str) -> TableCell {
    TableCell::new().vertical_align(VAlignType::Center).add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(text).bold()),
    )
}

fn text_cell(text: &str) -> TableCell {
    TableCell::new()
        .vertical_align(VAlignType::Center)
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn centered_cell(text: &str) -> TableCell {
    TableCell::new().vertical_align(VAlignType::Center).add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(text)),
    )
}

fn merge_continue_cell() -> TableCell {
    TableCell::new()
        .vertical_merge(VMergeType::Continue)
        .add_paragraph(Paragraph::new())
}

fn pack(docx: Docx) -> ReportResult<ReportDocument> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ReportError::Document {
            message: e.to_string(),
        })?;
    Ok(ReportDocument::new(DocumentKind::Table, cursor.into_inner()))
}

/// Renders the flat assignment report.
///
/// Adjacent rows belonging to the same employment collapse their
/// identifying cells vertically; this is a visual de-duplication only, the
/// row data is unchanged.
pub(super) fn assignment_document(
    range: ReportRange,
    rows: &[AssignmentRow],
    orientation: Orientation,
) -> ReportResult<ReportDocument> {
    let mut docx = add_title(base_document(orientation), "Employees' assignments", range);

    if rows.is_empty() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(EMPTY_TEXT)));
        return pack(docx);
    }

    let header = TableRow::new(vec![
        header_cell("Employee"),
        header_cell("Employee ID number"),
        header_cell("Department"),
        header_cell("Position"),
        header_cell("Project"),
        header_cell("Hours"),
    ]);

    let mut table_rows = vec![header];
    for (index, row) in rows.iter().enumerate() {
        let continues = index > 0
            && rows[index - 1].employee == row.employee
            && rows[index - 1].number == row.number;

        let identity_cells: Vec<TableCell> = if continues {
            (0..4).map(|_| merge_continue_cell()).collect()
        } else {
            vec![
                text_cell(&row.employee).vertical_merge(VMergeType::Restart),
                centered_cell(&row.number).vertical_merge(VMergeType::Restart),
                text_cell(&row.department).vertical_merge(VMergeType::Restart),
                text_cell(&row.position).vertical_merge(VMergeType::Restart),
            ]
        };

        let mut cells = identity_cells;
        cells.push(text_cell(&row.project));
        cells.push(centered_cell(&format_number(row.hours)));
        table_rows.push(TableRow::new(cells));
    }

    docx = docx.add_table(Table::new(table_rows));
    pack(docx)
}

/// Renders the employee×project matrix report.
pub(super) fn matrix_document(
    range: ReportRange,
    rows: &[MatrixRow],
    absence_label: &str,
    orientation: Orientation,
) -> ReportResult<ReportDocument> {
    let mut docx = add_title(
        base_document(orientation),
        "Employees' assignments matrix",
        range,
    );

    if rows.is_empty() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(EMPTY_TEXT)));
        return pack(docx);
    }

    let (employees, header, values) = matrix_layout(rows, absence_label);

    let mut table_rows = Vec::with_capacity(employees.len() + 1);
    table_rows.push(TableRow::new(
        header.iter().map(|title| header_cell(title)).collect(),
    ));

    for employee in &employees {
        let mut cells = vec![text_cell(employee)];
        for project in header.iter().skip(1) {
            match values.get(&(employee.clone(), project.clone())) {
                Some(hours) => cells.push(centered_cell(&format_number(*hours))),
                None => cells.push(TableCell::new().add_paragraph(Paragraph::new())),
            }
        }
        table_rows.push(TableRow::new(cells));
    }

    docx = docx.add_table(Table::new(table_rows));
    pack(docx)
}

/// Sorted employee labels, the header row (projects sorted, absence label
/// last) and the value lookup for the matrix layout.
pub(super) fn matrix_layout(
    rows: &[MatrixRow],
    absence_label: &str,
) -> (
    Vec<String>,
    Vec<String>,
    BTreeMap<(String, String), Decimal>,
) {
    let employees: Vec<String> = rows
        .iter()
        .map(|row| format!("{} [{}]", row.employee, row.number))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut header: Vec<String> = vec!["Employees".to_string()];
    header.extend(
        rows.iter()
            .filter(|row| row.project != absence_label)
            .map(|row| row.project.clone())
            .collect::<BTreeSet<_>>(),
    );
    header.push(absence_label.to_string());

    let mut values: BTreeMap<(String, String), Decimal> = BTreeMap::new();
    for row in rows {
        let key = (
            format!("{} [{}]", row.employee, row.number),
            row.project.clone(),
        );
        *values.entry(key).or_insert(Decimal::ZERO) += row.hours;
    }

    (employees, header, values)
}
