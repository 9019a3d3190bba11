use chrono::NaiveDate;
use currencyfreaks_client::model::request::{EndpointKind, OutputKind, RequestParameters};
use currencyfreaks_client::model::table::{FluctuationSummary, RatePoint, ResultTable};
use currencyfreaks_client::presentation::write_csv;
use tempfile::tempdir;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn historical_params() -> RequestParameters {
    RequestParameters::new(
        "USD",
        "EUR",
        "2024-01-01",
        "2024-01-03",
        EndpointKind::Historical,
        OutputKind::Csv,
        None,
    )
    .unwrap()
}

#[test]
fn historical_csv_has_one_row_per_day() {
    let table = ResultTable::Rates(vec![
        RatePoint {
            date: day(2024, 1, 1),
            rate: Some(0.92),
        },
        RatePoint {
            date: day(2024, 1, 2),
            rate: None,
        },
        RatePoint {
            date: day(2024, 1, 3),
            rate: Some(0.93),
        },
    ]);

    let dir = tempdir().unwrap();
    let path = write_csv(&table, &historical_params(), dir.path()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "USD_EUR_2024-01-01_2024-01-03.csv"
    );

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Date,Rate");
    assert_eq!(lines[1], "2024-01-01,0.92");
    // An absent rate is an empty field, never a zero
    assert_eq!(lines[2], "2024-01-02,");
    assert_eq!(lines[3], "2024-01-03,0.93");
}

#[test]
fn fluctuation_csv_has_exactly_one_row() {
    let table = ResultTable::Fluctuation(FluctuationSummary {
        date: day(2024, 1, 1),
        start_rate: 1.05,
        end_rate: 1.1,
        change: 0.05,
        percent_change: 4.76,
    });
    let params = RequestParameters::new(
        "USD",
        "EUR",
        "2024-01-01",
        "2024-01-03",
        EndpointKind::Fluctuation,
        OutputKind::Csv,
        None,
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let path = write_csv(&table, &params, dir.path()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Date,StartRate,EndRate,Change,PercentChange");
    assert_eq!(lines[1], "2024-01-01,1.05,1.1,0.05,4.76");
}
