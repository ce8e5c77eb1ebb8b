use crate::domain::entities::directory_row::DirectoryRow;

const NAME_HEADER: &str = "Subdir";
const BRANCH_HEADER: &str = "Branch";
const STATUS_HEADER: &str = "Status";

/// Minimum width of the name and branch columns
const MIN_COLUMN_WIDTH: usize = 10;

/// Render the collected rows as an aligned text table
///
/// The name and branch columns are left-justified and space-padded to the
/// longest value in the column, with a ten-character floor; the status column
/// is printed as-is. A dashed separator follows the header line. Rows
/// keep the order they were collected in.
pub fn render(rows: &[DirectoryRow]) -> String {
    let name_width = column_width(rows.iter().map(|r| r.name.as_str()));
    let branch_width = column_width(rows.iter().map(|r| r.branch.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{NAME_HEADER:<name_width$}  {BRANCH_HEADER:<branch_width$}  {STATUS_HEADER}\n"
    ));
    output.push_str(&"-".repeat(name_width + branch_width + 10));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<name_width$}  {:<branch_width$}  {}\n",
            row.name, row.branch, row.status
        ));
    }

    output
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|value| value.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMN_WIDTH)
}
