use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::pricing::PRINT_DECIMALS;
use crate::data::store::{is_sentinel, PriceTable};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSummary {
    pub total: usize,
    pub priced: usize,
    pub failed: usize,
}

pub fn summarize(table: &PriceTable) -> PollSummary {
    let snapshot = table.snapshot();
    let failed = snapshot.values().filter(|p| is_sentinel(**p)).count();
    PollSummary {
        total: snapshot.len(),
        priced: snapshot.len() - failed,
        failed,
    }
}

/// `TICKER, PRICE` with a fixed number of decimals.
pub fn format_line(ticker: &str, price: f64) -> String {
    format!("{}, {:.*}", ticker, PRINT_DECIMALS, price)
}

/// All table lines, sorted by ticker.
pub fn render(table: &PriceTable) -> Vec<String> {
    table
        .snapshot()
        .iter()
        .map(|(ticker, price)| format_line(ticker, *price))
        .collect()
}

pub fn write_table<W: Write>(table: &PriceTable, out: &mut W) -> io::Result<()> {
    for line in render(table) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

pub fn print_table(table: &PriceTable) -> io::Result<()> {
    let summary = summarize(table);
    info!(
        "📊 [REPORT] {} tickers: {} priced, {} failed",
        summary.total, summary.priced, summary.failed
    );
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_table(table, &mut handle)
}
