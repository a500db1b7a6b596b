//! Bordered table rendering for `show`.

use tasklist::store::Task;

// The id column has always been three wide, even though "id" is two.
const ID_WIDTH: usize = 3;
const ID_HEADER: &str = "id";
const DESC_HEADER: &str = "description";
const LABELS_HEADER: &str = "labels";

/// Render tasks as a three-column bordered table. Callers pass tasks
/// already sorted; every column grows to fit its longest value, and the
/// description column never shrinks below `min_desc_width`.
pub(crate) fn render(tasks: &[&Task], min_desc_width: usize) -> String {
    // Widths count chars, matching the formatter's padding.
    let id_width = tasks
        .iter()
        .map(|t| t.id.to_string().chars().count())
        .max()
        .unwrap_or(0)
        .max(ID_WIDTH);
    let desc_width = tasks
        .iter()
        .map(|t| t.description.chars().count())
        .max()
        .unwrap_or(0)
        .max(DESC_HEADER.len())
        .max(min_desc_width);
    let labels_width = tasks
        .iter()
        .map(|t| t.labels_joined().chars().count())
        .max()
        .unwrap_or(0)
        .max(LABELS_HEADER.len());

    let border = format!(
        "+{}+{}+{}+\n",
        "-".repeat(id_width + 2),
        "-".repeat(desc_width + 2),
        "-".repeat(labels_width + 2)
    );

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&format!(
        "| {:<id_width$} | {:<desc_width$} | {:<labels_width$} |\n",
        ID_HEADER, DESC_HEADER, LABELS_HEADER
    ));
    out.push_str(&border);
    for task in tasks {
        out.push_str(&format!(
            "| {:<id_width$} | {:<desc_width$} | {:<labels_width$} |\n",
            task.id,
            task.description,
            task.labels_joined()
        ));
    }
    out.push_str(&border);
    out
}
