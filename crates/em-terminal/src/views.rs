//! Plain-text rendering of the listing screen.

use em_core::employee::EmployeeRecord;
use em_core::listing::Page;

const COLUMNS: [&str; 6] = ["ID", "Name", "Mobile", "Email", "DOB", "Department"];

fn row(record: &EmployeeRecord) -> [String; 6] {
    [
        record
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default(),
        record.employee_name.clone(),
        record.mobile_number.clone(),
        record.email.clone(),
        record.dob.clone(),
        record.department.clone(),
    ]
}

/// Renders one page as an aligned table with a `page x of y` footer.
/// Pages are shown 1-based.
pub fn render_page(page: &Page<EmployeeRecord>) -> String {
    if page.total == 0 {
        return "No employees found.\n".to_string();
    }

    let rows: Vec<[String; 6]> = page.items.iter().map(row).collect();
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, COLUMNS.iter().copied(), &widths);
    for cells in &rows {
        push_line(&mut out, cells.iter().map(String::as_str), &widths);
    }
    out.push_str(&format!(
        "page {} of {} ({} employees, {} per page)\n",
        page.page + 1,
        page.total_pages().max(1),
        page.total,
        page.page_size
    ));
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
