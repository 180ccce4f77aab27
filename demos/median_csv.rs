//! Computes the median of each column (default) or each row of a csv file with a header line.
//!
//! cargo run --release --example median_csv -- --file data.csv [--by-row] [--style parallel] [--mean]
//!
//! All iteration styles give the same values. With RUST_LOG=debug each style is run once and timed.

use anyhow::anyhow;

use clap::{Parser, ValueEnum};
use log::{Level, log_enabled};
use std::path::PathBuf;

use cpu_time::ProcessTime;
use std::time::SystemTime;

use axisreduce::ReduceError;
use axisreduce::reducer::{Axis, AxisReducer, IterStyle, ReducerParams};
use axisreduce::stats::Mean;
use axisreduce::table::Table;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Style {
    Function,
    Loop,
    Map,
    Parallel,
}

impl From<Style> for IterStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Function => IterStyle::Function,
            Style::Loop => IterStyle::Loop,
            Style::Map => IterStyle::Map,
            Style::Parallel => IterStyle::Parallel,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "median_csv")]
struct Args {
    /// csv file, first line gives column names
    #[arg(long)]
    file: PathBuf,
    /// one value per row instead of one per column
    #[arg(long, default_value_t = false)]
    by_row: bool,
    #[arg(long, value_enum, default_value_t = Style::Map)]
    style: Style,
    /// compute means instead of medians
    #[arg(long, default_value_t = false)]
    mean: bool,
}

fn run(table: &Table, params: ReducerParams, mean: bool) -> Result<Vec<f64>, ReduceError> {
    if mean {
        AxisReducer::with_statistic(Mean, params).reduce(table)
    } else {
        AxisReducer::new(params).reduce(table)
    }
}

pub fn main() -> anyhow::Result<()> {
    axisreduce::init_log();
    //
    let args = Args::parse();
    let table = Table::from_csv(&args.file)?;
    log::info!("table dimension : {:?}", table.dim());
    //
    let axis = Axis::from(args.by_row);
    if log_enabled!(Level::Debug) {
        for style in [Style::Function, Style::Loop, Style::Map, Style::Parallel] {
            let sys_now = SystemTime::now();
            let cpu_start = ProcessTime::now();
            run(&table, ReducerParams::new(axis, style.into()), args.mean)?;
            log::debug!(
                "style {:?} sys time(ms) {:?} cpu time(ms) {:?}",
                style,
                sys_now.elapsed()?.as_millis(),
                cpu_start.elapsed().as_millis()
            );
        }
    }
    let values = run(&table, ReducerParams::new(axis, args.style.into()), args.mean)
        .map_err(|e| anyhow!("reduction of {} failed : {}", args.file.display(), e))?;
    //
    if args.by_row {
        for (i, v) in values.iter().enumerate() {
            println!("row {} : {}", i + 1, v);
        }
    } else {
        for (name, v) in table.get_names().iter().zip(values.iter()) {
            println!("{} : {}", name, v);
        }
    }
    Ok(())
} // end of main
