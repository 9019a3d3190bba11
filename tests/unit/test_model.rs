use chrono::NaiveDate;
use currencyfreaks_client::error::AppError;
use currencyfreaks_client::model::request::{
    ChartKind, EndpointKind, OutputKind, RequestParameters,
};
use currencyfreaks_client::model::table::{
    FluctuationSummary, RatePoint, ResultTable, FLUCTUATION_HEADERS, RATE_HEADERS,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn endpoint_kind_parses_menu_numbers_and_names() {
    assert_eq!("1".parse::<EndpointKind>().unwrap(), EndpointKind::Historical);
    assert_eq!("2".parse::<EndpointKind>().unwrap(), EndpointKind::TimeSeries);
    assert_eq!(
        "3".parse::<EndpointKind>().unwrap(),
        EndpointKind::Fluctuation
    );
    assert_eq!(
        "Fluctuation".parse::<EndpointKind>().unwrap(),
        EndpointKind::Fluctuation
    );
    assert_eq!(
        "time-series".parse::<EndpointKind>().unwrap(),
        EndpointKind::TimeSeries
    );
    assert!(matches!(
        "4".parse::<EndpointKind>(),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn output_and_chart_kind_parse() {
    assert_eq!("1".parse::<OutputKind>().unwrap(), OutputKind::Csv);
    assert_eq!("chart".parse::<OutputKind>().unwrap(), OutputKind::Chart);
    assert_eq!("3".parse::<ChartKind>().unwrap(), ChartKind::Candlestick);
    assert_eq!("Line".parse::<ChartKind>().unwrap(), ChartKind::Line);
    assert!(matches!(
        "pie".parse::<ChartKind>(),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn parameters_uppercase_currency_codes() {
    let params = RequestParameters::new(
        "usd",
        " eur ",
        "2024-01-01",
        "2024-01-03",
        EndpointKind::Historical,
        OutputKind::Csv,
        None,
    )
    .unwrap();
    assert_eq!(params.base_currency, "USD");
    assert_eq!(params.quote_currency, "EUR");
}

#[test]
fn parameters_reject_invalid_date() {
    let err = RequestParameters::new(
        "USD",
        "EUR",
        "01/01/2024",
        "2024-01-03",
        EndpointKind::Historical,
        OutputKind::Csv,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn parameters_reject_reversed_range() {
    let err = RequestParameters::new(
        "USD",
        "EUR",
        "2024-01-03",
        "2024-01-01",
        EndpointKind::Historical,
        OutputKind::Csv,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn chart_output_requires_chart_kind() {
    let err = RequestParameters::new(
        "USD",
        "EUR",
        "2024-01-01",
        "2024-01-03",
        EndpointKind::TimeSeries,
        OutputKind::Chart,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let ok = RequestParameters::new(
        "USD",
        "EUR",
        "2024-01-01",
        "2024-01-03",
        EndpointKind::TimeSeries,
        OutputKind::Chart,
        Some(ChartKind::Line),
    );
    assert!(ok.is_ok());
}

#[test]
fn csv_output_rejects_chart_kind() {
    let err = RequestParameters::new(
        "USD",
        "EUR",
        "2024-01-01",
        "2024-01-03",
        EndpointKind::TimeSeries,
        OutputKind::Csv,
        Some(ChartKind::Line),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn file_stem_matches_naming_pattern() {
    let params = RequestParameters::new(
        "usd",
        "eur",
        "2024-01-01",
        "2024-01-03",
        EndpointKind::Historical,
        OutputKind::Csv,
        None,
    )
    .unwrap();
    assert_eq!(params.file_stem(), "USD_EUR_2024-01-01_2024-01-03");
}

#[test]
fn table_headers_depend_on_shape() {
    let rates = ResultTable::Rates(vec![]);
    assert_eq!(rates.headers(), RATE_HEADERS);

    let fluctuation = ResultTable::Fluctuation(FluctuationSummary {
        date: day(2024, 1, 1),
        start_rate: 1.0,
        end_rate: 1.1,
        change: 0.1,
        percent_change: 10.0,
    });
    assert_eq!(fluctuation.headers(), FLUCTUATION_HEADERS);
    assert_eq!(fluctuation.len(), 1);
}

#[test]
fn max_rate_ignores_absent_values() {
    let table = ResultTable::Rates(vec![
        RatePoint {
            date: day(2024, 1, 1),
            rate: Some(0.8),
        },
        RatePoint {
            date: day(2024, 1, 2),
            rate: None,
        },
        RatePoint {
            date: day(2024, 1, 3),
            rate: Some(0.9),
        },
    ]);
    assert_eq!(table.max_rate(), Some(0.9));

    let empty = ResultTable::Rates(vec![RatePoint {
        date: day(2024, 1, 1),
        rate: None,
    }]);
    assert_eq!(empty.max_rate(), None);
}
