use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use flot_timeseries::{markup, PageOutput, Parameters, Row, TimeseriesPrinter};
use serde::Serialize;

/// Output of rendering one chart.
#[derive(Debug, Serialize)]
pub struct Rendered {
    /// Chart id, if a chart was rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Chart placeholder, or the inline error message.
    pub html: String,
    /// HTML for the page head.
    pub head: String,
    pub resources: Vec<&'static str>,
    /// Problems with the given parameters.
    pub warnings: Vec<String>,
    /// Message of the error rendered in place of the chart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reads query result rows from a JSON file holding an array of rows.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let data = fs::read(path).wrap_err_with(|| format!("{}", path.display()))?;
    serde_json::from_slice(&data)
        .wrap_err_with(|| format!("failed to parse rows from {}", path.display()))
}

/// Parses a `name=value` parameter as written after a pipe in a query.
pub fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter {s:?}: no `=` found"))?;
    Ok((name.to_owned(), value.to_owned()))
}

/// Renders `rows` as a chart on a page of its own.
///
/// A missing layout or an empty chart is not an error: its message is
/// rendered in place of the chart.
pub fn render<I, K, V>(rows: Vec<Row>, params: I) -> Result<Rendered>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let start_time = time::Instant::now();
    let (params, warnings) = Parameters::from_pairs(params);
    let printer = TimeseriesPrinter::new(params);
    let mut page = PageOutput::new();

    let (html, error) = match printer.result_text(rows, &mut page) {
        Ok(html) => (html, None),
        Err(error) if error.is_inline() => {
            tracing::info!(%error, "chart not rendered");
            let message = error.to_string();
            (markup::error_element(&message), Some(message))
        }
        Err(error) => return Err(error).wrap_err("failed to render chart"),
    };
    let rendered = Rendered {
        id: page.head_items().next().map(|(id, _)| id.to_owned()),
        html,
        head: page.head_html()?,
        resources: page.resources().collect(),
        warnings: warnings.iter().map(ToString::to_string).collect(),
        error,
    };
    tracing::info!("render time: {}", start_time.elapsed());
    Ok(rendered)
}

/// Wraps a rendered chart in a complete HTML document.
pub fn page_html(title: &str, rendered: &Rendered) -> String {
    let title = markup::element("title", &[], title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n{title}\n{}\n</head>\n<body>\n{}\n</body>\n</html>\n",
        rendered.head, rendered.html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("charttitle=a=b"),
            Ok(("charttitle".to_owned(), "a=b".to_owned()))
        );
        assert_eq!(parse_param("layout="), Ok(("layout".to_owned(), String::new())));
        assert!(parse_param("layout").is_err());
    }
}
