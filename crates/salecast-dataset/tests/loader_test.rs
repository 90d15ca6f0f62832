use std::io::Write;

use salecast_core::config::DatasetConfig;
use salecast_core::errors::{DatasetError, SalecastError};
use salecast_core::traits::SalesHistory;
use salecast_dataset::load_table;

const HEADER: &str = "Date,Store ID,Product ID,Inventory Level,Price,Discount,Units Sold";

fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn config_for(file: &tempfile::NamedTempFile) -> DatasetConfig {
    DatasetConfig {
        csv_path: file.path().to_string_lossy().into_owned(),
        ..Default::default()
    }
}

#[test]
fn loads_rows_and_derives_year_month() {
    let file = write_csv(&[
        "2024-01-15,S001,P001,120,9.99,0.1,34",
        "2024-11-02,S001,P001,80,9.49,0.0,51",
    ]);
    let table = load_table(&config_for(&file)).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].year, 2024);
    assert_eq!(table.rows()[0].month, 1);
    assert_eq!(table.rows()[1].month, 11);
}

#[test]
fn drops_rows_with_unparseable_dates() {
    let file = write_csv(&[
        "2024-01-15,S001,P001,120,9.99,0.1,34",
        "not-a-date,S001,P001,80,9.49,0.0,51",
        "2024-02-20,S001,P001,90,9.99,0.2,40",
    ]);
    let table = load_table(&config_for(&file)).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn extra_columns_are_ignored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER},Region").unwrap();
    writeln!(file, "2024-01-15,S001,P001,120,9.99,0.1,34,North").unwrap();
    file.flush().unwrap();
    let table = load_table(&config_for(&file)).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn missing_column_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Date,Store ID,Product ID,Inventory Level,Price,Discount").unwrap();
    writeln!(file, "2024-01-15,S001,P001,120,9.99,0.1").unwrap();
    file.flush().unwrap();
    let err = load_table(&config_for(&file)).unwrap_err();
    match err {
        SalecastError::Dataset(DatasetError::MissingColumn { column }) => {
            assert_eq!(column, "Units Sold");
        }
        other => panic!("expected MissingColumn, got {other}"),
    }
}

#[test]
fn malformed_numeric_row_is_rejected_with_row_number() {
    let file = write_csv(&[
        "2024-01-15,S001,P001,120,9.99,0.1,34",
        "2024-01-16,S001,P001,oops,9.99,0.1,34",
    ]);
    let err = load_table(&config_for(&file)).unwrap_err();
    match err {
        SalecastError::Dataset(DatasetError::MalformedRow { row, .. }) => assert_eq!(row, 3),
        other => panic!("expected MalformedRow, got {other}"),
    }
}

#[test]
fn all_dates_bad_means_empty_dataset() {
    let file = write_csv(&["garbage,S001,P001,120,9.99,0.1,34"]);
    let err = load_table(&config_for(&file)).unwrap_err();
    assert!(matches!(
        err,
        SalecastError::Dataset(DatasetError::Empty { .. })
    ));
}

#[test]
fn unreadable_path_is_rejected() {
    let config = DatasetConfig {
        csv_path: "/does/not/exist.csv".into(),
        ..Default::default()
    };
    let err = load_table(&config).unwrap_err();
    assert!(matches!(
        err,
        SalecastError::Dataset(DatasetError::ReadFailed { .. })
    ));
}

#[test]
fn custom_date_format_is_honored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "15/01/2024,S001,P001,120,9.99,0.1,34").unwrap();
    file.flush().unwrap();
    let config = DatasetConfig {
        csv_path: file.path().to_string_lossy().into_owned(),
        date_format: "%d/%m/%Y".into(),
    };
    let table = load_table(&config).unwrap();
    assert_eq!(table.rows()[0].month, 1);
    assert_eq!(table.rows()[0].year, 2024);
}

#[test]
fn global_mean_matches_retained_rows() {
    let file = write_csv(&[
        "2024-01-15,S001,P001,120,9.99,0.1,10",
        "bad-date,S001,P001,120,9.99,0.1,1000",
        "2024-02-15,S002,P002,120,9.99,0.1,30",
    ]);
    let table = load_table(&config_for(&file)).unwrap();
    // The dropped row's 1000 units must not contaminate the mean.
    assert_eq!(table.global_mean_units(), 20.0);
}
