//! Delimited text export of the employee listing.

use crate::employee::EmployeeRecord;

/// Header row, in column order.
pub const EXPORT_HEADERS: [&str; 10] = [
    "ID",
    "Employee Name",
    "Mobile Number",
    "Email",
    "DOB",
    "Department",
    "Designation",
    "Gender",
    "Blood Group",
    "Address",
];

/// Renders `records` as delimited text with a header row.
///
/// Cells containing the delimiter, a quote or a line break are quoted, with
/// embedded quotes doubled. Lines end with `\r\n`.
pub fn to_delimited(records: &[EmployeeRecord], delimiter: char) -> String {
    let mut out = String::new();
    push_row(&mut out, EXPORT_HEADERS.iter().copied(), delimiter);
    for record in records {
        let id = record.id.as_ref().map(|id| id.as_str()).unwrap_or("");
        let cells: [&str; 10] = [
            id,
            &record.employee_name,
            &record.mobile_number,
            &record.email,
            &record.dob,
            &record.department,
            &record.designation,
            &record.gender,
            &record.blood_group,
            &record.address,
        ];
        push_row(&mut out, cells.into_iter(), delimiter);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, delimiter: char) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        push_cell(out, cell, delimiter);
    }
    out.push_str("\r\n");
}

fn push_cell(out: &mut String, cell: &str, delimiter: char) {
    let needs_quotes = cell.contains(delimiter) || cell.contains(['"', '\n', '\r']);
    if !needs_quotes {
        out.push_str(cell);
        return;
    }
    out.push('"');
    out.push_str(&cell.replace('"', "\"\""));
    out.push('"');
}
