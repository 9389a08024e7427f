//! Message keys of the printer and their English texts.

pub const PRINTER_NAME: &str = "srf-printername-timeseries";
pub const ERROR_MISSING_LAYOUT: &str = "srf-error-missing-layout";
// NOTE: the key is misspelled upstream and has to stay that way
pub const WARN_EMPTY_CHART: &str = "srf-warn-empy-chart";
pub const MODULE_LOADING: &str = "srf-module-loading";

pub const PARAM_LAYOUT: &str = "srf-paramdesc-layout";
pub const PARAM_MIN: &str = "srf-paramdesc-minvalue";
pub const PARAM_GROUP: &str = "srf-paramdesc-group";
pub const PARAM_ZOOMAREA: &str = "srf-paramdesc-zoomarea";
pub const PARAM_TABLEAREA: &str = "srf-paramdesc-tablearea";
pub const PARAM_HEIGHT: &str = "srf_paramdesc_chartheight";
pub const PARAM_WIDTH: &str = "srf_paramdesc_chartwidth";
pub const PARAM_CHARTTITLE: &str = "srf_paramdesc_charttitle";
pub const PARAM_CHARTTEXT: &str = "srf-paramdesc-charttext";
pub const PARAM_CLASS: &str = "srf-paramdesc-class";

/// Returns the English text of a message key.
pub fn text(key: &str) -> Option<&'static str> {
    let text = match key {
        PRINTER_NAME => "Time series",
        ERROR_MISSING_LAYOUT => "No layout has been selected.",
        WARN_EMPTY_CHART => "The chart is empty because there is no data to display.",
        MODULE_LOADING => "Loading...",
        PARAM_LAYOUT => "The chart layout",
        PARAM_MIN => "Minimum value of a data point",
        PARAM_GROUP => "Group the data by subject or by property",
        PARAM_ZOOMAREA => "Position of the zoom area",
        PARAM_TABLEAREA => "Position of the data table",
        PARAM_HEIGHT => "The height of the chart (in pixels)",
        PARAM_WIDTH => "The width of the chart (in pixels)",
        PARAM_CHARTTITLE => "The title of the chart",
        PARAM_CHARTTEXT => "A text shown below the chart",
        PARAM_CLASS => "An additional CSS class for the chart container",
        _ => return None,
    };
    Some(text)
}

/// Same as [`text`], falling back to the key itself.
pub fn get(key: &'static str) -> &'static str {
    text(key).unwrap_or(key)
}
