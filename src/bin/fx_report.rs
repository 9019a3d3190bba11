//! Interactive exchange-rate report
//!
//! Prints the supported-currency catalog, collects the request parameters
//! from the console, fetches the rates and writes a CSV file or chart image
//! into the current directory.

use currencyfreaks_client::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn prompt(reader: &mut impl BufRead, label: &str) -> FxResult<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> FxResult<()> {
    setup_logger();

    let config = Arc::new(Config::new());
    let transport = Arc::new(FxHttpClientImpl::new(config.clone())?);

    let catalog = CatalogServiceImpl::new(transport.clone());
    let symbols = catalog.supported_currencies().await?;
    print_catalog(&symbols, CATALOG_PRINT_LIMIT);

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let base = prompt(&mut reader, "Enter base currency code (e.g., USD): ")?;
    let quote = prompt(&mut reader, "Enter symbol currency code (e.g., EUR): ")?;
    let start = prompt(&mut reader, "Enter start date (YYYY-MM-DD): ")?;
    let end = prompt(&mut reader, "Enter end date (YYYY-MM-DD): ")?;

    println!("\nEndpoints:\n1 - Historical\n2 - Time Series\n3 - Fluctuation");
    let endpoint: EndpointKind = prompt(&mut reader, "Choose endpoint (1/2/3): ")?.parse()?;

    println!("\nOutput options:\n1 - Download CSV\n2 - Draw Chart");
    let output: OutputKind = prompt(&mut reader, "Choose output (1/2): ")?.parse()?;

    let chart = match output {
        OutputKind::Chart => {
            println!("\nChart options:\n1 - Line Chart\n2 - Bar Chart\n3 - Candlestick Chart");
            Some(prompt(&mut reader, "Choose chart type: ")?.parse::<ChartKind>()?)
        }
        OutputKind::Csv => None,
    };

    let params = RequestParameters::new(&base, &quote, &start, &end, endpoint, output, chart)?;
    info!(
        "Fetching {}/{} from {} to {}",
        params.base_currency, params.quote_currency, params.start_date, params.end_date
    );

    let service = RateServiceImpl::new(config, transport);
    let table = service.fetch(&params).await?;
    info!("Result table has {} row(s)", table.len());

    // Both writers print the artifact path themselves; render_chart prints
    // the explanation instead when a candlestick is requested for an
    // unsupported endpoint
    match params.output {
        OutputKind::Csv => {
            write_csv(&table, &params, Path::new("."))?;
        }
        OutputKind::Chart => {
            render_chart(&table, &params, Path::new("."))?;
        }
    }

    Ok(())
}
