//! Chart rendering
//!
//! Three chart styles over the normalized result table. Rates far below 1.0
//! are displayed as reciprocals so the y axis stays legible; this is a
//! presentation transform only, the table itself is never rewritten. The
//! candlestick style is valid for the time-series endpoint alone and builds
//! synthetic OHLC values around each single rate, since the API reports one
//! value per date.

use crate::constants::{
    CANDLE_HIGH_FACTOR, CANDLE_LOW_FACTOR, CHART_HEIGHT, CHART_WIDTH, RECIPROCAL_THRESHOLD,
};
use crate::error::{AppError, FxResult};
use crate::model::request::{ChartKind, EndpointKind, RequestParameters};
use crate::model::table::ResultTable;
use chrono::NaiveDate;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Series of values prepared for plotting
pub struct DisplaySeries {
    /// Dates of the plottable points, chronological
    pub dates: Vec<NaiveDate>,
    /// Value per date, reciprocal-scaled when `reciprocal` is set
    pub values: Vec<f64>,
    /// Y-axis label
    pub y_label: String,
    /// True when the values are reciprocals of the raw rates
    pub reciprocal: bool,
}

/// Synthetic OHLC values for one candlestick period
pub struct Candle {
    /// Calendar date of the period
    pub date: NaiveDate,
    /// Opening value, equal to the raw rate
    pub open: f64,
    /// High value, rate scaled by the fixed wick factor
    pub high: f64,
    /// Low value, rate scaled by the fixed wick factor
    pub low: f64,
    /// Closing value, equal to the raw rate
    pub close: f64,
}

/// Derives the series actually drawn on line and bar charts
///
/// When the endpoint is not Fluctuation and every rate sits below 1.0, the
/// series becomes the elementwise reciprocal and the y label names the
/// inverted pair. Absent and non-finite values are skipped.
pub fn display_series(table: &ResultTable, params: &RequestParameters) -> DisplaySeries {
    let reciprocal = params.endpoint != EndpointKind::Fluctuation
        && table
            .max_rate()
            .map(|max| max < RECIPROCAL_THRESHOLD)
            .unwrap_or(false);

    let mut dates = Vec::new();
    let mut values = Vec::new();
    match table {
        ResultTable::Rates(points) => {
            for point in points {
                if let Some(rate) = point.rate {
                    let value = if reciprocal { 1.0 / rate } else { rate };
                    if value.is_finite() {
                        dates.push(point.date);
                        values.push(value);
                    }
                }
            }
        }
        ResultTable::Fluctuation(summary) => {
            dates.push(summary.date);
            values.push(summary.end_rate);
        }
    }

    let y_label = if reciprocal {
        format!("{} per {}", params.quote_currency, params.base_currency)
    } else {
        "Rate".to_string()
    };

    DisplaySeries {
        dates,
        values,
        y_label,
        reciprocal,
    }
}

/// Builds synthetic candles from the per-date rates
///
/// Open = Close = rate, High = rate * 1.01, Low = rate * 0.99. There is no
/// real intraday data behind these wicks. Dates without a rate are skipped;
/// a fluctuation table yields no candles.
pub fn synthetic_candles(table: &ResultTable) -> Vec<Candle> {
    match table {
        ResultTable::Rates(points) => points
            .iter()
            .filter_map(|point| {
                point.rate.map(|rate| Candle {
                    date: point.date,
                    open: rate,
                    high: rate * CANDLE_HIGH_FACTOR,
                    low: rate * CANDLE_LOW_FACTOR,
                    close: rate,
                })
            })
            .collect(),
        ResultTable::Fluctuation(_) => Vec::new(),
    }
}

/// Renders the requested chart into `output_dir`
///
/// Returns the path of the written PNG, or `None` when a candlestick chart
/// was requested for an endpoint other than time series; that case emits an
/// explanatory message instead of failing.
pub fn render_chart(
    table: &ResultTable,
    params: &RequestParameters,
    output_dir: &Path,
) -> FxResult<Option<PathBuf>> {
    let kind = params.chart.ok_or_else(|| {
        AppError::InvalidInput("chart output requested without a chart type".to_string())
    })?;

    if kind == ChartKind::Candlestick {
        if params.endpoint != EndpointKind::TimeSeries {
            warn!("Candlestick chart requested for a non-time-series endpoint, skipping");
            println!("Candlestick chart only works for Time Series endpoint.");
            return Ok(None);
        }
        let candles = synthetic_candles(table);
        if candles.is_empty() {
            return Err(AppError::InvalidInput(
                "result table contains no plottable values".to_string(),
            ));
        }
        let path = output_dir.join(format!("{}_candlestick.png", params.file_stem()));
        let title = format!("{} vs {}", params.base_currency, params.quote_currency);
        draw_candlesticks(&candles, &title, &path)?;
        info!("Candlestick chart saved as {}", path.display());
        println!("Candlestick chart saved as {}", path.display());
        return Ok(Some(path));
    }

    let series = display_series(table, params);
    if series.values.is_empty() {
        return Err(AppError::InvalidInput(
            "result table contains no plottable values".to_string(),
        ));
    }

    let path = output_dir.join(format!("{}.png", params.file_stem()));
    if params.endpoint == EndpointKind::Fluctuation {
        // The fluctuation endpoint always renders as a single-bar chart
        let title = format!(
            "{} Fluctuation ({})",
            params.quote_currency, params.base_currency
        );
        draw_bars(&series, &title, ORANGE, &path)?;
    } else {
        let title = format!("{} vs {}", params.base_currency, params.quote_currency);
        match kind {
            ChartKind::Line => draw_line(&series, &title, &path)?,
            ChartKind::Bar => draw_bars(&series, &title, SKY_BLUE, &path)?,
            ChartKind::Candlestick => unreachable!("handled above"),
        }
    }
    info!("Chart saved as {}", path.display());
    println!("Chart saved as {}", path.display());
    Ok(Some(path))
}

fn draw_err<E: Display>(error: E) -> AppError {
    AppError::ChartRender(error.to_string())
}

fn padded_range(min: f64, max: f64, from_zero: bool) -> (f64, f64) {
    let (mut low, high) = if from_zero && min >= 0.0 {
        (0.0, max)
    } else {
        (min, max)
    };
    let span = high - low;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (high.abs() * 0.05).max(0.5)
    };
    if !(from_zero && low == 0.0) {
        low -= pad;
    }
    (low, high + pad)
}

fn configure_mesh(
    chart: &mut ChartContext<'_, BitMapBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    dates: &[NaiveDate],
    y_label: &str,
) -> FxResult<()> {
    let formatter = |x: &f64| {
        let index = x.round();
        if index >= 0.0 && (index as usize) < dates.len() {
            dates[index as usize].to_string()
        } else {
            String::new()
        }
    };
    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_label)
        .x_labels(dates.len().clamp(2, 10))
        .x_label_formatter(&formatter)
        .light_line_style(BLACK.mix(0.08))
        .draw()
        .map_err(draw_err)?;
    Ok(())
}

fn draw_line(series: &DisplaySeries, title: &str, path: &Path) -> FxResult<()> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let n = series.values.len();
    let min = series.values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = series
        .values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = padded_range(min, max, false);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), y_min..y_max)
        .map_err(draw_err)?;
    configure_mesh(&mut chart, &series.dates, &series.y_label)?;

    chart
        .draw_series(LineSeries::new(
            series
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v)),
            BLUE.stroke_width(2),
        ))
        .map_err(draw_err)?;
    chart
        .draw_series(
            series
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| Circle::new((i as f64, v), 4, BLUE.filled())),
        )
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_bars(series: &DisplaySeries, title: &str, color: RGBColor, path: &Path) -> FxResult<()> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let n = series.values.len();
    let min = series.values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = series
        .values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = padded_range(min, max, true);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), y_min..y_max)
        .map_err(draw_err)?;
    configure_mesh(&mut chart, &series.dates, &series.y_label)?;

    chart
        .draw_series(series.values.iter().enumerate().map(|(i, &v)| {
            let x = i as f64;
            Rectangle::new([(x - 0.35, 0.0), (x + 0.35, v)], color.mix(0.7).filled())
        }))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_candlesticks(candles: &[Candle], title: &str, path: &Path) -> FxResult<()> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let n = candles.len();
    let min = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let max = candles
        .iter()
        .map(|c| c.high)
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = padded_range(min, max, false);
    let dates: Vec<NaiveDate> = candles.iter().map(|c| c.date).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), y_min..y_max)
        .map_err(draw_err)?;
    configure_mesh(&mut chart, &dates, "Rate")?;

    chart
        .draw_series(candles.iter().enumerate().map(|(i, c)| {
            CandleStick::new(
                i as f64,
                c.open,
                c.high,
                c.low,
                c.close,
                GREEN.filled(),
                RED.filled(),
                10,
            )
        }))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}
