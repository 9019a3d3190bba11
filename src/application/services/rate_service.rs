//! Rate fetching and normalization
//!
//! The historical endpoint has no native range support, so that mode issues
//! one request per calendar day, strictly sequentially. The time-series and
//! fluctuation endpoints cover the whole range in a single request. This
//! asymmetry mirrors the upstream API and must not be collapsed into a
//! single call for the historical mode.

use crate::application::services::RateService;
use crate::config::Config;
use crate::error::AppError;
use crate::model::request::{EndpointKind, RequestParameters};
use crate::model::response::{FluctuationResponse, HistoricalRateResponse, TimeSeriesResponse};
use crate::model::table::{FluctuationSummary, RatePoint, ResultTable};
use crate::transport::http_client::FxHttpClient;
use crate::utils::date::expand_date_range;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the rate service
pub struct RateServiceImpl<T: FxHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: FxHttpClient> RateServiceImpl<T> {
    /// Creates a new instance of the rate service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// One request per day over the inclusive range, in chronological order
    ///
    /// A day whose response lacks the requested quote rate yields a row with
    /// an absent rate. No retry or backoff between the per-day calls.
    async fn fetch_historical(
        &self,
        params: &RequestParameters,
    ) -> Result<ResultTable, AppError> {
        let days = expand_date_range(params.start_date, params.end_date);
        info!(
            "Fetching historical rates for {}/{} over {} days",
            params.base_currency,
            params.quote_currency,
            days.len()
        );

        let mut points = Vec::with_capacity(days.len());
        for day in days {
            let query = [
                ("date", day.to_string()),
                ("base", params.base_currency.clone()),
                ("symbols", params.quote_currency.clone()),
            ];
            let response: HistoricalRateResponse =
                self.client.get_json("rates/historical", &query).await?;
            let rate = response.rates.get(&params.quote_currency).copied();
            debug!("{}: {:?}", day, rate);
            points.push(RatePoint { date: day, rate });
        }
        Ok(ResultTable::Rates(points))
    }

    /// Single request covering the whole range
    ///
    /// An entry without the requested quote rate maps to `0.0`, matching the
    /// behavior of the original data flow.
    async fn fetch_time_series(
        &self,
        params: &RequestParameters,
    ) -> Result<ResultTable, AppError> {
        let query = range_query(params);
        let response: TimeSeriesResponse = self.client.get_json("timeseries", &query).await?;
        info!(
            "Time series returned {} entries",
            response.historical_rates_list.len()
        );

        let mut points = Vec::with_capacity(response.historical_rates_list.len());
        for entry in &response.historical_rates_list {
            let date = parse_entry_date(&entry.date)?;
            let rate = entry
                .rates
                .get(&params.quote_currency)
                .copied()
                .unwrap_or(0.0);
            points.push(RatePoint {
                date,
                rate: Some(rate),
            });
        }
        Ok(ResultTable::Rates(points))
    }

    /// Single request producing exactly one summary row
    ///
    /// The row is dated at the requested start date; absent numeric fields
    /// (or a wholly absent quote entry) map to `0.0`.
    async fn fetch_fluctuation(
        &self,
        params: &RequestParameters,
    ) -> Result<ResultTable, AppError> {
        let query = range_query(params);
        let response: FluctuationResponse = self.client.get_json("fluctuation", &query).await?;
        let fluctuation = response
            .rate_fluctuations
            .get(&params.quote_currency)
            .cloned()
            .unwrap_or_default();

        Ok(ResultTable::Fluctuation(FluctuationSummary {
            date: params.start_date,
            start_rate: fluctuation.start_rate.unwrap_or(0.0),
            end_rate: fluctuation.end_rate.unwrap_or(0.0),
            change: fluctuation.change.unwrap_or(0.0),
            percent_change: fluctuation.percent_change.unwrap_or(0.0),
        }))
    }
}

#[async_trait]
impl<T: FxHttpClient + 'static> RateService for RateServiceImpl<T> {
    async fn fetch(&self, params: &RequestParameters) -> Result<ResultTable, AppError> {
        match params.endpoint {
            EndpointKind::Historical => self.fetch_historical(params).await,
            EndpointKind::TimeSeries => self.fetch_time_series(params).await,
            EndpointKind::Fluctuation => self.fetch_fluctuation(params).await,
        }
    }
}

fn range_query(params: &RequestParameters) -> [(&'static str, String); 4] {
    [
        ("startDate", params.start_date.to_string()),
        ("endDate", params.end_date.to_string()),
        ("base", params.base_currency.clone()),
        ("symbols", params.quote_currency.clone()),
    ]
}

fn parse_entry_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::Deserialization(format!("invalid date '{value}' in response: {e}")))
}
