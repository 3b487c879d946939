//! Spreadsheet workbook rendering.
//!
//! Lays out the matrix, hours-check and labor-distribution reports as A4
//! worksheets: a four-row title block, a bold centered header row, the data
//! matrix with thin borders, and (where a cross-employee total makes sense)
//! a trailing "Total" row of live `=SUM` formulas so the file recomputes on
//! edit.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::aggregation::{HoursCheckRow, LaborShareRow, MatrixRow, ProjectShareRow};
use crate::error::{ReportError, ReportResult};

use super::document::matrix_layout;
use super::{DocumentKind, EMPTY_TEXT, Orientation, ReportDocument, ReportRange};

const PAPER_A4: u8 = 9;

/// Row index the header row occupies; the title block sits above it.
const HEADER_ROW: u32 = 4;

/// Column span used for the title block when a report has no data.
const EMPTY_BLOCK_WIDTH: u16 = 9;

struct Formats {
    title: Format,
    plain: Format,
    header: Format,
    label: Format,
    number: Format,
    total_label: Format,
    total_number: Format,
}

fn formats() -> Formats {
    Formats {
        title: Format::new().set_bold().set_italic().set_font_size(12.0),
        plain: Format::new(),
        header: Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin),
        label: Format::new().set_border(FormatBorder::Thin),
        number: Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin),
        total_label: Format::new().set_bold().set_border(FormatBorder::Thin),
        total_number: Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin),
    }
}

fn doc_err(error: XlsxError) -> ReportError {
    ReportError::Document {
        message: error.to_string(),
    }
}

/// Converts a zero-based column index to its letter name (0 -> A, 26 -> AA).
fn column_letter(col: u16) -> String {
    let mut result = String::new();
    let mut n = u32::from(col);
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

fn prepare_sheet<'a>(
    workbook: &'a mut Workbook,
    name: &str,
    orientation: Orientation,
) -> ReportResult<&'a mut Worksheet> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name).map_err(doc_err)?;
    sheet.set_paper_size(PAPER_A4);
    if orientation == Orientation::Landscape {
        sheet.set_landscape();
    }
    Ok(sheet)
}

/// Writes the four-row title block above the data table.
fn add_title_block(
    sheet: &mut Worksheet,
    title: &str,
    range: ReportRange,
    width: u16,
    formats: &Formats,
) -> ReportResult<()> {
    sheet
        .merge_range(0, 0, 0, width - 1, title, &formats.title)
        .map_err(doc_err)?;
    sheet
        .merge_range(1, 0, 1, width - 1, "", &formats.plain)
        .map_err(doc_err)?;
    sheet
        .merge_range(
            2,
            0,
            2,
            width - 1,
            &format!("From {} to {}:", range.start, range.end),
            &formats.plain,
        )
        .map_err(doc_err)?;
    sheet
        .merge_range(3, 0, 3, width - 1, "", &formats.plain)
        .map_err(doc_err)?;
    Ok(())
}

/// Writes the placeholder row shown when a report has no data.
fn add_empty_placeholder(sheet: &mut Worksheet, formats: &Formats) -> ReportResult<()> {
    sheet
        .merge_range(
            HEADER_ROW,
            0,
            HEADER_ROW,
            EMPTY_BLOCK_WIDTH - 1,
            EMPTY_TEXT,
            &formats.plain,
        )
        .map_err(doc_err)?;
    Ok(())
}

fn finish(workbook: &mut Workbook) -> ReportResult<ReportDocument> {
    let bytes = workbook.save_to_buffer().map_err(doc_err)?;
    Ok(ReportDocument::new(DocumentKind::Spreadsheet, bytes))
}

fn number_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Renders the employee×project matrix workbook.
pub(super) fn matrix_workbook(
    range: ReportRange,
    rows: &[MatrixRow],
    absence_label: &str,
    orientation: Orientation,
) -> ReportResult<ReportDocument> {
    let formats = formats();
    let mut workbook = Workbook::new();
    let sheet = prepare_sheet(&mut workbook, "Assignments matrix", orientation)?;

    if rows.is_empty() {
        add_title_block(
            sheet,
            "Employees' assignments matrix",
            range,
            EMPTY_BLOCK_WIDTH,
            &formats,
        )?;
        add_empty_placeholder(sheet, &formats)?;
        return finish(&mut workbook);
    }

    let (employees, header, values) = matrix_layout(rows, absence_label);
    let width = header.len() as u16;

    add_title_block(
        sheet,
        "Employees' assignments matrix",
        range,
        width,
        &formats,
    )?;

    for (col, title) in header.iter().enumerate() {
        sheet
            .write_with_format(HEADER_ROW, col as u16, title.as_str(), &formats.header)
            .map_err(doc_err)?;
    }

    for (index, employee) in employees.iter().enumerate() {
        let row = HEADER_ROW + 1 + index as u32;
        sheet
            .write_with_format(row, 0, employee.as_str(), &formats.label)
            .map_err(doc_err)?;
        for (offset, project) in header.iter().enumerate().skip(1) {
            let key = (employee.clone(), project.clone());
            match values.get(&key) {
                Some(hours) => sheet
                    .write_with_format(row, offset as u16, number_value(*hours), &formats.number)
                    .map_err(doc_err)?,
                None => sheet
                    .write_with_format(row, offset as u16, "", &formats.number)
                    .map_err(doc_err)?,
            };
        }
    }

    // Trailing total row with live formula ranges per project column
    let total_row = HEADER_ROW + 1 + employees.len() as u32;
    sheet
        .write_with_format(total_row, 0, "Total", &formats.total_label)
        .map_err(doc_err)?;
    for col in 1..width {
        let letter = column_letter(col);
        let formula = format!(
            "=SUM({letter}{first}:{letter}{last})",
            first = HEADER_ROW + 2,
            last = total_row,
        );
        sheet
            .write_formula_with_format(total_row, col, formula.as_str(), &formats.total_number)
            .map_err(doc_err)?;
    }

    sheet.autofit();
    finish(&mut workbook)
}

/// Renders the per-employment work-hours check workbook.
pub(super) fn hours_check_workbook(
    range: ReportRange,
    rows: &[HoursCheckRow],
    orientation: Orientation,
) -> ReportResult<ReportDocument> {
    let formats = formats();
    let mut workbook = Workbook::new();
    let sheet = prepare_sheet(&mut workbook, "Work hours check", orientation)?;

    let header = [
        "Employee",
        "Employee ID number",
        "Department",
        "Position",
        "Staff units",
        "Hours assigned",
        "Absence hours",
        "Hours total",
        "Work hours",
        "Hours difference",
    ];

    if rows.is_empty() {
        add_title_block(
            sheet,
            "Employees' work hours check",
            range,
            EMPTY_BLOCK_WIDTH,
            &formats,
        )?;
        add_empty_placeholder(sheet, &formats)?;
        return finish(&mut workbook);
    }

    let width = header.len() as u16;
    add_title_block(sheet, "Employees' work hours check", range, width, &formats)?;

    for (col, title) in header.iter().enumerate() {
        sheet
            .write_with_format(HEADER_ROW, col as u16, *title, &formats.header)
            .map_err(doc_err)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let sheet_row = HEADER_ROW + 1 + index as u32;
        sheet
            .write_with_format(sheet_row, 0, row.employee.as_str(), &formats.label)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 1, row.number.as_str(), &formats.number)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 2, row.department.as_str(), &formats.label)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 3, row.position.as_str(), &formats.label)
            .map_err(doc_err)?;
        for (col, value) in [
            row.staff_units,
            row.assigned_hours,
            row.absence_hours,
            row.hours_assigned_total,
            row.work_hours_total,
            row.hours_difference,
        ]
        .into_iter()
        .enumerate()
        {
            sheet
                .write_with_format(
                    sheet_row,
                    4 + col as u16,
                    number_value(value),
                    &formats.number,
                )
                .map_err(doc_err)?;
        }
    }

    // Trailing total row over the numeric columns
    let total_row = HEADER_ROW + 1 + rows.len() as u32;
    sheet
        .write_with_format(total_row, 0, "Total", &formats.total_label)
        .map_err(doc_err)?;
    for col in 1..4 {
        sheet
            .write_with_format(total_row, col, "", &formats.total_label)
            .map_err(doc_err)?;
    }
    for col in 4..width {
        let letter = column_letter(col);
        let formula = format!(
            "=SUM({letter}{first}:{letter}{last})",
            first = HEADER_ROW + 2,
            last = total_row,
        );
        sheet
            .write_formula_with_format(total_row, col, formula.as_str(), &formats.total_number)
            .map_err(doc_err)?;
    }

    sheet.autofit();
    finish(&mut workbook)
}

/// Renders the labor-distribution workbook (shares of the work-hour quota).
pub(super) fn labor_distribution_workbook(
    range: ReportRange,
    rows: &[LaborShareRow],
    orientation: Orientation,
) -> ReportResult<ReportDocument> {
    let formats = formats();
    let mut workbook = Workbook::new();
    let sheet = prepare_sheet(&mut workbook, "Labor distribution", orientation)?;

    let title = "Employees' indexes of labor distribution";
    if rows.is_empty() {
        add_title_block(sheet, title, range, EMPTY_BLOCK_WIDTH, &formats)?;
        add_empty_placeholder(sheet, &formats)?;
        return finish(&mut workbook);
    }

    let header = [
        "Employee",
        "Employee ID number",
        "Staff units",
        "Project",
        "Share",
        "Employment total",
    ];
    let width = header.len() as u16;
    add_title_block(sheet, title, range, width, &formats)?;

    for (col, value) in header.iter().enumerate() {
        sheet
            .write_with_format(HEADER_ROW, col as u16, *value, &formats.header)
            .map_err(doc_err)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let sheet_row = HEADER_ROW + 1 + index as u32;
        sheet
            .write_with_format(sheet_row, 0, row.employee.as_str(), &formats.label)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 1, row.number.as_str(), &formats.number)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 2, number_value(row.staff_units), &formats.number)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 3, row.project.as_str(), &formats.label)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 4, number_value(row.share), &formats.number)
            .map_err(doc_err)?;
        sheet
            .write_with_format(
                sheet_row,
                5,
                number_value(row.employment_total),
                &formats.number,
            )
            .map_err(doc_err)?;
    }

    sheet.autofit();
    finish(&mut workbook)
}

/// Renders the per-project labor-distribution workbook (shares of each
/// employment's own hours).
pub(super) fn per_project_workbook(
    range: ReportRange,
    rows: &[ProjectShareRow],
    orientation: Orientation,
) -> ReportResult<ReportDocument> {
    let formats = formats();
    let mut workbook = Workbook::new();
    let sheet = prepare_sheet(&mut workbook, "Labor distribution per project", orientation)?;

    let title = "Employees' indexes of labor distribution per project";
    if rows.is_empty() {
        add_title_block(sheet, title, range, EMPTY_BLOCK_WIDTH, &formats)?;
        add_empty_placeholder(sheet, &formats)?;
        return finish(&mut workbook);
    }

    let header = ["Employee", "Employee ID number", "Project", "Share"];
    let width = header.len() as u16;
    add_title_block(sheet, title, range, width, &formats)?;

    for (col, value) in header.iter().enumerate() {
        sheet
            .write_with_format(HEADER_ROW, col as u16, *value, &formats.header)
            .map_err(doc_err)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let sheet_row = HEADER_ROW + 1 + index as u32;
        sheet
            .write_with_format(sheet_row, 0, row.employee.as_str(), &formats.label)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 1, row.number.as_str(), &formats.number)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 2, row.project.as_str(), &formats.label)
            .map_err(doc_err)?;
        sheet
            .write_with_format(sheet_row, 3, number_value(row.share), &formats.number)
            .map_err(doc_err)?;
    }

    sheet.autofit();
    finish(&mut workbook)
}
