use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumString, EnumVariantNames, VariantNames};

use crate::messages;

pub const DEFAULT_SIZE: u32 = 400;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Display,
    EnumString,
    EnumVariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    #[default]
    Line,
    Bar,
}

/// Which label a field's data point is filed under.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Display,
    EnumString,
    EnumVariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GroupBy {
    /// The page owning the row.
    #[default]
    Subject,
    /// The printout label of the field.
    Property,
}

/// Placement of the zoom area or the data table relative to the chart.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Display,
    EnumString,
    EnumVariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Area {
    None,
    #[default]
    Bottom,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParamKind {
    String,
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamDefinition {
    pub name: &'static str,
    /// Message key of the description.
    pub message: &'static str,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub default: &'static str,
    pub values: &'static [&'static str],
    #[serde(rename = "lowerbound", skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<i64>,
}

impl ParamDefinition {
    const fn string(name: &'static str, message: &'static str, default: &'static str) -> Self {
        Self {
            name,
            message,
            kind: ParamKind::String,
            default,
            values: &[],
            lower_bound: None,
        }
    }

    const fn enumeration(
        name: &'static str,
        message: &'static str,
        default: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            values,
            ..Self::string(name, message, default)
        }
    }

    const fn integer(
        name: &'static str,
        message: &'static str,
        default: &'static str,
        lower_bound: Option<i64>,
    ) -> Self {
        Self {
            name,
            message,
            kind: ParamKind::Integer,
            default,
            values: &[],
            lower_bound,
        }
    }

    pub fn description(&self) -> &'static str {
        messages::get(self.message)
    }
}

/// Parameters understood by the printer, in declaration order.
pub const DEFINITIONS: &[ParamDefinition] = &[
    ParamDefinition::enumeration("layout", messages::PARAM_LAYOUT, "line", Layout::VARIANTS),
    ParamDefinition::integer("min", messages::PARAM_MIN, "", None),
    ParamDefinition::enumeration("group", messages::PARAM_GROUP, "subject", GroupBy::VARIANTS),
    ParamDefinition::enumeration("zoomarea", messages::PARAM_ZOOMAREA, "bottom", Area::VARIANTS),
    ParamDefinition::enumeration("tablearea", messages::PARAM_TABLEAREA, "bottom", Area::VARIANTS),
    ParamDefinition::integer("height", messages::PARAM_HEIGHT, "400", Some(1)),
    ParamDefinition::integer("width", messages::PARAM_WIDTH, "400", Some(1)),
    ParamDefinition::string("charttitle", messages::PARAM_CHARTTITLE, ""),
    ParamDefinition::string("charttext", messages::PARAM_CHARTTEXT, ""),
    ParamDefinition::string("class", messages::PARAM_CLASS, ""),
];

pub fn definition(name: &str) -> Option<&'static ParamDefinition> {
    DEFINITIONS.iter().find(|def| def.name == name)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamWarning {
    #[error("unknown parameter {0:?}")]
    Unknown(String),
    #[error("invalid value {value:?} for parameter {name:?}, using {default:?}")]
    Invalid {
        name: &'static str,
        value: String,
        default: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// `None` when explicitly set to an empty value.
    pub layout: Option<Layout>,
    pub min: Option<i64>,
    pub group: GroupBy,
    pub zoomarea: Area,
    pub tablearea: Area,
    pub height: u32,
    pub width: u32,
    pub charttitle: String,
    pub charttext: String,
    pub class: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            layout: Some(Layout::default()),
            min: None,
            group: GroupBy::default(),
            zoomarea: Area::default(),
            tablearea: Area::default(),
            height: DEFAULT_SIZE,
            width: DEFAULT_SIZE,
            charttitle: String::new(),
            charttext: String::new(),
            class: String::new(),
        }
    }
}

impl Parameters {
    /// Builds the parameters from `name=value` pairs as written in a query.
    ///
    /// Names are matched case-insensitively. Invalid values fall back to the
    /// default of the parameter; a warning is returned for each of them and
    /// for each unknown name. A later pair overrides an earlier one.
    pub fn from_pairs<I, K, V>(pairs: I) -> (Self, Vec<ParamWarning>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        let mut warnings = Vec::new();
        for (name, value) in pairs {
            let name = name.as_ref().trim().to_ascii_lowercase();
            let Some(def) = definition(&name) else {
                tracing::warn!(%name, "unknown query parameter");
                warnings.push(ParamWarning::Unknown(name));
                continue;
            };
            if let Err(warning) = params.set(def, value.as_ref().trim()) {
                tracing::warn!(%warning, "invalid query parameter");
                warnings.push(warning);
                params
                    .set(def, def.default)
                    .expect("BUG: parameter default does not parse");
            }
        }
        (params, warnings)
    }

    fn set(&mut self, def: &ParamDefinition, value: &str) -> Result<(), ParamWarning> {
        match def.name {
            "layout" if value.is_empty() => self.layout = None,
            "layout" => self.layout = Some(parse_enum(def, value)?),
            "min" if value.is_empty() => self.min = None,
            "min" => self.min = Some(parse_integer(def, value)?),
            "group" => self.group = parse_enum(def, value)?,
            "zoomarea" => self.zoomarea = parse_enum(def, value)?,
            "tablearea" => self.tablearea = parse_enum(def, value)?,
            "height" => self.height = parse_size(def, value)?,
            "width" => self.width = parse_size(def, value)?,
            "charttitle" => self.charttitle = value.to_owned(),
            "charttext" => self.charttext = value.to_owned(),
            "class" => self.class = value.to_owned(),
            name => unreachable!("no setter for parameter {name}"),
        }
        Ok(())
    }
}

fn invalid(def: &ParamDefinition, value: &str) -> ParamWarning {
    ParamWarning::Invalid {
        name: def.name,
        value: value.to_owned(),
        default: def.default,
    }
}

fn parse_enum<T: FromStr>(def: &ParamDefinition, value: &str) -> Result<T, ParamWarning> {
    value
        .to_ascii_lowercase()
        .parse()
        .map_err(|_| invalid(def, value))
}

fn parse_integer(def: &ParamDefinition, value: &str) -> Result<i64, ParamWarning> {
    let n: i64 = value.parse().map_err(|_| invalid(def, value))?;
    match def.lower_bound {
        Some(lower_bound) if n < lower_bound => Err(invalid(def, value)),
        _ => Ok(n),
    }
}

fn parse_size(def: &ParamDefinition, value: &str) -> Result<u32, ParamWarning> {
    parse_integer(def, value)?
        .try_into()
        .map_err(|_| invalid(def, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_defaults() {
        let (params, warnings) = Parameters::from_pairs(Vec::<(&str, &str)>::new());
        assert!(warnings.is_empty());
        assert_eq!(params, Parameters::default());
        assert_eq!(params.layout, Some(Layout::Line));
        assert_eq!(params.group, GroupBy::Subject);
        assert_eq!(params.zoomarea, Area::Bottom);
        assert_eq!(params.tablearea, Area::Bottom);
        assert_eq!((params.width, params.height), (400, 400));
        assert!(params.min.is_none());
    }

    #[test]
    fn test_from_pairs() {
        let (params, warnings) = Parameters::from_pairs([
            ("layout", "Bar"),
            ("min", "-5"),
            (" Group ", "property"),
            ("zoomarea", "none"),
            ("tablearea", "top"),
            ("height", "250"),
            ("width", "600"),
            ("charttitle", " Visitors "),
            ("charttext", "per day"),
            ("class", "wide"),
        ]);
        assert!(warnings.is_empty());
        expect![[r#"
            Parameters {
                layout: Some(
                    Bar,
                ),
                min: Some(
                    -5,
                ),
                group: Property,
                zoomarea: None,
                tablearea: Top,
                height: 250,
                width: 600,
                charttitle: "Visitors",
                charttext: "per day",
                class: "wide",
            }
        "#]]
        .assert_debug_eq(&params);
    }

    #[test]
    fn test_empty_layout_is_unset() {
        let (params, warnings) = Parameters::from_pairs([("layout", "")]);
        assert!(warnings.is_empty());
        assert!(params.layout.is_none());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let (params, warnings) = Parameters::from_pairs([
            ("layout", "pie"),
            ("min", "a lot"),
            ("group", "category"),
            ("height", "0"),
            ("width", "99999999999"),
            ("colour", "red"),
        ]);
        assert_eq!(params, Parameters::default());
        let warnings = warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        expect![[r#"
            [
                "invalid value \"pie\" for parameter \"layout\", using \"line\"",
                "invalid value \"a lot\" for parameter \"min\", using \"\"",
                "invalid value \"category\" for parameter \"group\", using \"subject\"",
                "invalid value \"0\" for parameter \"height\", using \"400\"",
                "invalid value \"99999999999\" for parameter \"width\", using \"400\"",
                "unknown parameter \"colour\"",
            ]
        "#]]
        .assert_debug_eq(&warnings);
    }

    #[test]
    fn test_later_pair_overrides() {
        let (params, _) = Parameters::from_pairs([("width", "100"), ("width", "-1")]);
        assert_eq!(params.width, DEFAULT_SIZE);
        let (params, _) = Parameters::from_pairs([("min", "3"), ("min", "")]);
        assert!(params.min.is_none());
    }

    #[test]
    fn test_definitions() {
        let names = DEFINITIONS.iter().map(|def| def.name).collect::<Vec<_>>();
        expect![[r#"
            [
                "layout",
                "min",
                "group",
                "zoomarea",
                "tablearea",
                "height",
                "width",
                "charttitle",
                "charttext",
                "class",
            ]
        "#]]
        .assert_debug_eq(&names);

        // every definition can be set
        let (params, warnings) =
            Parameters::from_pairs(DEFINITIONS.iter().map(|def| (def.name, def.default)));
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(params, Parameters::default());

        let zoomarea = serde_json::to_string(definition("zoomarea").unwrap()).unwrap();
        expect![[r#"{"name":"zoomarea","message":"srf-paramdesc-zoomarea","type":"string","default":"bottom","values":["none","bottom","top"]}"#]]
            .assert_eq(&zoomarea);
        let height = serde_json::to_string(definition("height").unwrap()).unwrap();
        expect![[r#"{"name":"height","message":"srf_paramdesc_chartheight","type":"integer","default":"400","values":[],"lowerbound":1}"#]]
            .assert_eq(&height);
        assert_eq!(
            definition("width").unwrap().description(),
            "The width of the chart (in pixels)"
        );
    }
}
