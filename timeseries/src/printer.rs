use serde::Serialize;
use serde_json::json;

use crate::{
    aggregation::SeriesAggregator,
    markup, messages,
    output::PageOutput,
    params::{Area, Layout, Parameters},
    row::ResultRow,
    value::{Series, SeriesMap},
    Error, Result,
};

pub const CHART_ID_PREFIX: &str = "flot-timeseries-";
/// The resource module with the chart script.
pub const RESOURCE_MODULE: &str = "ext.srf.flot.timeseries";

/// Data handed to the chart script.
#[derive(Debug, Serialize)]
pub struct ChartData<'a> {
    pub data: Vec<Series>,
    pub parameters: ChartParameters<'a>,
}

#[derive(Debug, Serialize)]
pub struct ChartParameters<'a> {
    pub width: u32,
    pub height: u32,
    pub charttitle: &'a str,
    pub charttext: &'a str,
    pub layout: Layout,
    pub datatable: Area,
    pub zoom: Area,
}

/// Prints query results as a flot time series chart.
#[derive(Debug, Clone, Default)]
pub struct TimeseriesPrinter {
    params: Parameters,
}

impl TimeseriesPrinter {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    pub fn name(&self) -> &'static str {
        messages::get(messages::PRINTER_NAME)
    }

    /// Renders `rows` as a chart placeholder, registering its data with
    /// `page`.
    ///
    /// Fails with [`Error::MissingLayout`] before reading any row if no layout
    /// is selected, and with [`Error::EmptyChart`] if no data point is left.
    pub fn result_text<I>(&self, rows: I, page: &mut PageOutput) -> Result<String>
    where
        I: IntoIterator,
        I::Item: ResultRow,
    {
        let layout = self.params.layout.ok_or(Error::MissingLayout)?;
        let series = SeriesAggregator::from_params(&self.params).aggregate(rows);
        if series.is_empty() {
            return Err(Error::EmptyChart);
        }
        self.format_output(layout, series, page)
    }

    fn format_output(
        &self,
        layout: Layout,
        series: SeriesMap,
        page: &mut PageOutput,
    ) -> Result<String> {
        let chart_id = page.next_chart_id(CHART_ID_PREFIX);

        let chart_data = ChartData {
            data: series.into_series(),
            parameters: ChartParameters {
                width: self.params.width,
                height: self.params.height,
                charttitle: &self.params.charttitle,
                charttext: &self.params.charttext,
                layout,
                datatable: self.params.tablearea,
                zoom: self.params.zoomarea,
            },
        };
        let payload = serde_json::to_string(&chart_data)?;
        // the payload goes in as a string, the chart script decodes it
        let variables = serde_json::to_string(&json!({ &chart_id: payload }))?;
        page.require_head_item(
            chart_id.as_str(),
            markup::inline_script(&format!("mw.config.set({variables});")),
        );
        page.require_resource(RESOURCE_MODULE);
        tracing::debug!(%chart_id, series = chart_data.data.len(), "chart data registered");

        let chart = markup::raw_element(
            "div",
            &[
                ("id", chart_id.as_str()),
                ("class", "container"),
                ("style", "display:none;"),
            ],
            "",
        );
        let class = match self.params.class.as_str() {
            "" | "0" => "flot-chart-common",
            class => class,
        };
        let class = format!("srf-flot-timeseries {class}");
        Ok(markup::raw_element(
            "div",
            &[("class", class.as_str())],
            &(markup::processing_element() + &chart),
        ))
    }
}
