//! Construct names from instrument export header lines.

/// Splits a header line on its delimiter and trims every cell.
///
/// Comma is the default; `;` or tab is used only when the line has no comma at all.
pub fn split_header(line: &str) -> Vec<String> {
    let line = line.trim_start_matches('\u{FEFF}');
    let delimiter = if line.contains(',') {
        ','
    } else if line.contains(';') {
        ';'
    } else if line.contains('\t') {
        '\t'
    } else {
        ','
    };
    line.split(delimiter).map(|cell| cell.trim().to_string()).collect()
}

fn lowered(cell: &str) -> String {
    cell.replace('\u{00A0}', " ").trim().to_lowercase()
}

/// True for cells that start a time axis: `"Time (min)"`, `"time\u{a0}(min)"`, `"Time2"`,
/// or a duplicated `"time (min).1"`.
pub fn is_time_column(header: &str) -> bool {
    lowered(header).starts_with("time")
}

/// Spreadsheet placeholders such as `"Unnamed: 3"` left by empty header cells.
pub fn is_unnamed_placeholder(header: &str) -> bool {
    lowered(header).starts_with("unnamed")
}

/// Header cells that name constructs: time columns, placeholders and empty cells are
/// skipped.
pub fn construct_headers(line: &str) -> Vec<String> {
    split_header(line)
        .into_iter()
        .filter(|cell| !cell.is_empty() && !is_time_column(cell) && !is_unnamed_placeholder(cell))
        .collect()
}

/// Positions of the cells that start a time axis.
pub fn time_axis_indices(line: &str) -> Vec<usize> {
    split_header(line)
        .iter()
        .enumerate()
        .filter(|(_, cell)| is_time_column(cell))
        .map(|(idx, _)| idx)
        .collect()
}

/// Construct names recorded against a second time axis.
///
/// Some exports carry two time columns; every named column to the right of the second one
/// belongs to that alternate axis. Lines with fewer than two time columns yield nothing.
pub fn alternate_time_columns(line: &str) -> Vec<String> {
    let Some(&second) = time_axis_indices(line).get(1) else {
        return Vec::new();
    };
    split_header(line)
        .into_iter()
        .skip(second + 1)
        .filter(|cell| !cell.is_empty() && !is_unnamed_placeholder(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_wins_over_other_delimiters() {
        assert_eq!(split_header("a;b,c"), vec!["a;b", "c"]);
        assert_eq!(split_header("a; b ;c"), vec!["a", "b", "c"]);
        assert_eq!(split_header("a\tb"), vec!["a", "b"]);
        assert_eq!(split_header("single"), vec!["single"]);
    }

    #[test]
    fn time_columns_and_placeholders_are_skipped() {
        let line = "\u{FEFF}Time (min),SSS, LLL ,time\u{a0}(min).1,,Unnamed: 5,K80";
        assert_eq!(construct_headers(line), vec!["SSS", "LLL", "K80"]);
    }

    #[test]
    fn time_columns_are_recognized_by_prefix() {
        assert!(is_time_column("TIME"));
        assert!(is_time_column(" Time2 (min)"));
        assert!(!is_time_column("m-time"));
        assert!(is_unnamed_placeholder("Unnamed: 0"));
        assert!(!is_unnamed_placeholder("SSS"));
    }

    #[test]
    fn names_right_of_the_second_time_column_use_the_alternate_axis() {
        let line = "Time (min),SSS,LLL,Unnamed: 3,Time2 (min),K80,m-K80,,Unnamed: 8,V40";
        assert_eq!(time_axis_indices(line), vec![0, 4]);
        assert_eq!(alternate_time_columns(line), vec!["K80", "m-K80", "V40"]);
        assert_eq!(
            construct_headers(line),
            vec!["SSS", "LLL", "K80", "m-K80", "V40"]
        );
    }

    #[test]
    fn single_time_axis_has_no_alternate_columns() {
        assert!(alternate_time_columns("Time (min),SSS,LLL").is_empty());
        assert!(alternate_time_columns("SSS;LLL").is_empty());
        assert!(alternate_time_columns("").is_empty());
    }
}
