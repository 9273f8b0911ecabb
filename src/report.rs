//! Rendering and persistence of the results table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::WriteError;
use crate::stats::ResultsTable;

const COLUMNS: [&str; 6] = ["Player", "Min", "Max", "Mean", "Median", "Standard Deviation"];

/// Renders the table as aligned human-readable text, one row per player.
pub fn render(table: &ResultsTable) -> String {
    let name_width = table
        .iter()
        .map(|row| row.name.len())
        .chain([COLUMNS[0].len()])
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>18}\n",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4], COLUMNS[5],
    );
    for row in table {
        out.push_str(&format!(
            "{:<name_width$}  {:>12.4}  {:>12.4}  {:>12.4}  {:>12.4}  {:>18.4}\n",
            row.name, row.min, row.max, row.mean, row.median, row.std_dev,
        ));
    }
    out
}

/// Serializes the table as comma-separated values: one header row, then one
/// row per player with the player name as the row label.
///
/// Floats are written with Rust's shortest round-trippable representation,
/// so parsing the output back reproduces the exact statistic values.
pub fn to_csv(table: &ResultsTable) -> String {
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for row in table {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            row.name, row.min, row.max, row.mean, row.median, row.std_dev,
        ));
    }
    out
}

/// Writes the CSV serialization of the table to `path`.
///
/// # Errors
/// Fails with [`WriteError`] if the destination cannot be created or
/// written. A failed write does not affect a table already rendered to the
/// console.
pub fn write_csv(table: &ResultsTable, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = path.as_ref();
    let write_to = |path: &Path| -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(to_csv(table).as_bytes())
    };

    write_to(path).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })?;

    info!("results written to {path:?}");
    Ok(())
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::stats::StatSummary;

    fn sample_table() -> ResultsTable {
        vec![
            StatSummary {
                name: "Alpha".to_owned(),
                min: 10.0,
                max: 10.0,
                mean: 10.0,
                median: 10.0,
                std_dev: 0.0,
            },
            StatSummary {
                name: "Beta".to_owned(),
                min: 18.5,
                max: 21.5,
                mean: 20.0,
                median: 20.0,
                std_dev: 1.5,
            },
        ]
    }

    #[test]
    fn csv_has_header_and_one_row_per_player() {
        let csv = to_csv(&sample_table());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Player,Min,Max,Mean,Median,Standard Deviation");
        assert_eq!(lines[1], "Alpha,10,10,10,10,0");
        assert_eq!(lines[2], "Beta,18.5,21.5,20,20,1.5");
    }

    #[test]
    fn render_aligns_all_players_under_the_header() {
        let text = render(&sample_table());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Player"));
        assert!(lines[1].starts_with("Alpha "));
        assert!(lines[2].starts_with("Beta "));
        assert!(lines[0].contains("Standard Deviation"));
    }

    #[test]
    fn empty_table_renders_header_only() {
        let text = render(&Vec::new());
        assert_eq!(text.lines().count(), 1);
        assert_eq!(to_csv(&Vec::new()).lines().count(), 1);
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let err = write_csv(&sample_table(), "no_such_dir/results.csv").unwrap_err();
        assert_eq!(err.path, Path::new("no_such_dir/results.csv"));
    }
}
