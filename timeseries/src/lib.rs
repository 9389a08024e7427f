pub mod aggregation;
mod error;
pub mod markup;
pub mod messages;
pub mod output;
pub mod params;
pub mod printer;
pub mod row;
pub mod value;

pub use {
    aggregation::SeriesAggregator,
    error::{Error, Result},
    output::PageOutput,
    params::Parameters,
    printer::TimeseriesPrinter,
    row::{Field, ResultField, ResultRow, Row},
};
