// table_utils.rs

/// Represents a tabular artifact: an ordered set of named columns with
/// row-major string data. Every row is normalized to exactly the header
/// width at construction time, so the row count is shared across columns
/// and downstream writers never see ragged records. A table with no
/// headers has no columns and therefore holds no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a new, empty `Table`.
    ///
    /// ```
    /// use tabio::table_utils::Table;
    ///
    /// let table = Table::new();
    /// assert!(table.headers().is_empty());
    /// assert_eq!(table.row_count(), 0);
    /// ```
    pub fn new() -> Self {
        Table {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Builds a `Table` from raw headers and row data. Rows shorter than
    /// the header width are padded with empty strings; longer rows are
    /// truncated. If `headers` is empty the resulting table is empty.
    ///
    /// ```
    /// use tabio::table_utils::Table;
    ///
    /// let table = Table::from_rows(
    ///     vec!["name".to_string(), "score".to_string()],
    ///     vec![
    ///         vec!["alice".to_string(), "91".to_string()],
    ///         vec!["bob".to_string()], // padded to ["bob", ""]
    ///     ],
    /// );
    ///
    /// assert_eq!(table.row_count(), 2);
    /// assert_eq!(table.rows()[1], vec!["bob".to_string(), "".to_string()]);
    /// ```
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        if headers.is_empty() {
            return Table::new();
        }

        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                while row.len() < width {
                    row.push(String::new());
                }
                row
            })
            .collect();

        Table { headers, rows }
    }

    /// Returns the column headers in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows in order. Each row has exactly
    /// `self.headers().len()` cells.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of data rows (the header row is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` when the table holds no columns.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Represents a named artifact bundle: an insertion-ordered mapping from
/// unique sheet name to `Table`, exported together as one multi-sheet
/// workbook. Inserting under a name that already exists replaces that
/// entry without changing its position.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    sheets: Vec<(String, Table)>,
}

impl Bundle {
    /// Creates a new, empty `Bundle`.
    pub fn new() -> Self {
        Bundle { sheets: Vec::new() }
    }

    /// Inserts a table under `name`, replacing any existing entry with the
    /// same name in place.
    ///
    /// ```
    /// use tabio::table_utils::{Bundle, Table};
    ///
    /// let mut bundle = Bundle::new();
    /// bundle.insert("summary", Table::new());
    /// bundle.insert("detail", Table::new());
    /// assert_eq!(bundle.len(), 2);
    ///
    /// bundle.insert("summary", Table::new()); // replaced, not appended
    /// assert_eq!(bundle.len(), 2);
    /// ```
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        let name = name.into();
        match self.sheets.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = table,
            None => self.sheets.push((name, table)),
        }
    }

    /// Returns the table stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.sheets
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, table)| table)
    }

    /// Returns the sheet entries in insertion order.
    pub fn sheets(&self) -> &[(String, Table)] {
        &self.sheets
    }

    /// Returns the number of sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns `true` when the bundle holds no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_rows(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn from_rows_pads_short_rows_to_header_width() {
        let table = table_with(&["a", "b", "c"], &[&["1"], &["1", "2", "3"]]);

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows()[0], vec!["1", "", ""]);
        assert_eq!(table.rows()[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn from_rows_truncates_long_rows_to_header_width() {
        let table = table_with(&["a", "b"], &[&["1", "2", "3", "4"]]);

        assert_eq!(table.rows()[0], vec!["1", "2"]);
    }

    #[test]
    fn from_rows_with_no_headers_drops_all_rows() {
        let table = Table::from_rows(vec![], vec![vec!["orphan".to_string()]]);

        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn bundle_insert_replaces_existing_entry_in_place() {
        let mut bundle = Bundle::new();
        bundle.insert("summary", table_with(&["x"], &[&["old"]]));
        bundle.insert("detail", table_with(&["y"], &[]));
        bundle.insert("summary", table_with(&["x"], &[&["new"]]));

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.sheets()[0].0, "summary");
        assert_eq!(bundle.get("summary").unwrap().rows()[0], vec!["new"]);
    }

    #[test]
    fn bundle_get_missing_name_returns_none() {
        let bundle = Bundle::new();
        assert!(bundle.get("anything").is_none());
    }
}
