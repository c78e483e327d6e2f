// save_utils.rs
use crate::table_utils::{Bundle, Table};
use csv::Writer;
use rust_xlsxwriter::Workbook;
use std::error::Error;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use tracing::info;

fn with_suffix(file_name: &str, suffix: &str) -> String {
    if file_name.ends_with(suffix) {
        file_name.to_string()
    } else {
        format!("{}{}", file_name, suffix)
    }
}

/// Saves a `Table` as a CSV file named `file_name` inside `folder`,
/// creating the folder recursively if it does not exist. `file_name` gets a
/// `.csv` suffix when it does not already carry one. Any existing file at
/// the destination is overwritten. The header row is written first (when
/// the table has headers), followed by the data rows, with no index column.
/// Returns the path written.
///
/// The conventional folder for notebook output is `"output"`; the caller
/// passes it explicitly so nothing depends on the process launch location.
///
/// ```
/// use tabio::save_utils::save_table;
/// use tabio::table_utils::Table;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let table = Table::from_rows(
///     vec!["name".to_string(), "score".to_string()],
///     vec![vec!["alice".to_string(), "91".to_string()]],
/// );
///
/// let path = save_table(&table, "scores", dir.path()).unwrap();
/// assert_eq!(path, dir.path().join("scores.csv"));
///
/// let contents = std::fs::read_to_string(path).unwrap();
/// assert_eq!(contents, "name,score\nalice,91\n");
/// ```
pub fn save_table(
    table: &Table,
    file_name: &str,
    folder: impl AsRef<Path>,
) -> Result<PathBuf, Box<dyn Error>> {
    let folder = folder.as_ref();
    create_dir_all(folder)?;

    let file_path = folder.join(with_suffix(file_name, ".csv"));
    let mut wtr = Writer::from_path(&file_path)?;

    if !table.headers().is_empty() {
        wtr.write_record(table.headers())?;
    }
    for row in table.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    info!("table saved to {}", file_path.display());
    Ok(file_path)
}

/// Saves a `Bundle` as a multi-sheet XLSX workbook named `file_name` inside
/// `folder`, creating the folder recursively if it does not exist.
/// `file_name` gets an `.xlsx` suffix when absent. Each bundle entry
/// becomes one worksheet, named after its bundle key, with the table's
/// header row first and no index column. Any existing file at the
/// destination is overwritten. Returns the path written.
///
/// ```
/// use tabio::save_utils::save_bundle;
/// use tabio::table_utils::{Bundle, Table};
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let mut bundle = Bundle::new();
/// bundle.insert("summary", Table::from_rows(
///     vec!["metric".to_string(), "value".to_string()],
///     vec![vec!["rows".to_string(), "120".to_string()]],
/// ));
///
/// let path = save_bundle(&bundle, "results", dir.path()).unwrap();
/// assert_eq!(path, dir.path().join("results.xlsx"));
/// ```
pub fn save_bundle(
    bundle: &Bundle,
    file_name: &str,
    folder: impl AsRef<Path>,
) -> Result<PathBuf, Box<dyn Error>> {
    let folder = folder.as_ref();
    create_dir_all(folder)?;

    let file_path = folder.join(with_suffix(file_name, ".xlsx"));
    let mut workbook = Workbook::new();

    for (sheet_name, table) in bundle.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name)?;

        for (col, header) in table.headers().iter().enumerate() {
            worksheet.write_string(0, col as u16, header)?;
        }
        for (row_idx, row) in table.rows().iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                worksheet.write_string((row_idx + 1) as u32, col as u16, cell)?;
            }
        }
    }

    workbook.save(&file_path)?;

    info!("workbook saved to {}", file_path.display());
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Reader, Xlsx};
    use std::fs;
    use tempfile::tempdir;

    fn sample_table() -> Table {
        Table::from_rows(
            vec!["name".to_string(), "score".to_string()],
            vec![
                vec!["alice".to_string(), "91".to_string()],
                vec!["bob".to_string(), "78".to_string()],
            ],
        )
    }

    #[test]
    fn save_table_creates_missing_folder() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("reports").join("week_12");

        let path = save_table(&sample_table(), "scores", &folder).unwrap();

        assert!(folder.is_dir());
        assert_eq!(path, folder.join("scores.csv"));
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "name,score\nalice,91\nbob,78\n");
    }

    #[test]
    fn save_table_normalizes_csv_suffix() {
        let dir = tempdir().unwrap();

        let bare = save_table(&sample_table(), "report", dir.path()).unwrap();
        let suffixed = save_table(&sample_table(), "report.csv", dir.path()).unwrap();

        assert_eq!(bare, suffixed);
        assert_eq!(bare, dir.path().join("report.csv"));
    }

    #[test]
    fn save_table_overwrites_previous_export() {
        let dir = tempdir().unwrap();
        save_table(&sample_table(), "out", dir.path()).unwrap();

        let second = Table::from_rows(
            vec!["city".to_string()],
            vec![vec!["pune".to_string()], vec!["nagpur".to_string()]],
        );
        let overwritten = save_table(&second, "out", dir.path()).unwrap();

        // Content after the overwrite matches a fresh export of the second
        // table, independent of the first.
        let fresh_dir = tempdir().unwrap();
        let fresh = save_table(&second, "out", fresh_dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(overwritten).unwrap(),
            fs::read_to_string(fresh).unwrap()
        );
    }

    #[test]
    fn save_table_with_empty_table_writes_empty_file() {
        let dir = tempdir().unwrap();

        let path = save_table(&Table::new(), "empty", dir.path()).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn save_bundle_writes_one_sheet_per_entry() {
        let dir = tempdir().unwrap();
        let mut bundle = Bundle::new();
        bundle.insert("summary", sample_table());
        bundle.insert(
            "detail",
            Table::from_rows(
                vec!["key".to_string(), "value".to_string()],
                vec![vec!["rows".to_string(), "2".to_string()]],
            ),
        );

        let path = save_bundle(&bundle, "results", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("results.xlsx"));

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(
            workbook.sheet_names().to_vec(),
            vec!["summary".to_string(), "detail".to_string()]
        );

        let range = workbook.worksheet_range("summary").unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["name".to_string(), "score".to_string()],
                vec!["alice".to_string(), "91".to_string()],
                vec!["bob".to_string(), "78".to_string()],
            ]
        );
    }

    #[test]
    fn save_bundle_normalizes_xlsx_suffix() {
        let dir = tempdir().unwrap();
        let mut bundle = Bundle::new();
        bundle.insert("only", sample_table());

        let bare = save_bundle(&bundle, "book", dir.path()).unwrap();
        let suffixed = save_bundle(&bundle, "book.xlsx", dir.path()).unwrap();

        assert_eq!(bare, suffixed);
        assert_eq!(bare, dir.path().join("book.xlsx"));
    }
}
