use itertools::Itertools;

use crate::timetable::timetable_ops::Timetables;

/// renders rows as a boxed grid with every column padded to its widest cell.
/// the first row is set apart as the header.
pub fn render_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let columns = std::iter::once(header.len())
        .chain(rows.iter().map(|r| r.len()))
        .max()
        .unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in std::iter::once(header).chain(rows.iter().map(|r| r.as_slice())) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let separator = format!(
        "+{}+",
        widths.iter().map(|w| "-".repeat(w + 2)).join("+")
    );
    let render_row = |row: &[String]| {
        let cells = widths
            .iter()
            .copied()
            .enumerate()
            .map(|(i, w)| {
                let cell = row.get(i).map(|c| c.as_str()).unwrap_or("");
                format!(" {cell:<w$} ")
            })
            .join("|");
        format!("|{cells}|")
    };

    let mut lines = vec![separator.clone(), render_row(header), separator.clone()];
    lines.extend(rows.iter().map(|r| render_row(r)));
    if !rows.is_empty() {
        lines.push(separator);
    }
    lines.join("\n")
}

/// a single column table listing names, as used by the list operation
pub fn render_list(title: &str, names: &[&str]) -> String {
    let rows = names.iter().map(|n| vec![n.to_string()]).collect_vec();
    render_grid(&[title.to_string()], &rows)
}

/// each direction's table preceded by a `{routes} {DIRECTION} table` title
pub fn render_timetables(timetables: &Timetables) -> String {
    let routes = timetables.routes.join("/");
    timetables
        .tables
        .iter()
        .map(|(direction, table)| {
            format!(
                "{routes} {direction} table\n{}",
                render_grid(&table.header, &table.rows)
            )
        })
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_grid_pads_columns() {
        let header = strings(&["Days", "Tara St"]);
        let rows = vec![strings(&["Mon-Fri", "08:20"]), strings(&["Sunday", "X"])];
        let expected = [
            "+---------+---------+",
            "| Days    | Tara St |",
            "+---------+---------+",
            "| Mon-Fri | 08:20   |",
            "| Sunday  | X       |",
            "+---------+---------+",
        ]
        .join("\n");
        assert_eq!(render_grid(&header, &rows), expected);
    }

    #[test]
    fn test_render_list_without_rows() {
        let expected = ["+--------+", "| Routes |", "+--------+"].join("\n");
        assert_eq!(render_list("Routes", &[]), expected);
    }
}
