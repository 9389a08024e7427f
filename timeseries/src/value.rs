use indexmap::IndexMap;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

// See https://docs.rs/indexmap/latest/indexmap/#alternate-hashers
pub type FxIndexMap<K, V> = IndexMap<K, V, std::hash::BuildHasherDefault<rustc_hash::FxHasher>>;

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A typed value of a result field, tagged by the kind of its data item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DataValue {
    Time(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
    Number(f64),
    Text(String),
    Boolean(bool),
    Uri(String),
    WikiPage(String),
    Geo { lat: f64, lon: f64 },
    Error(String),
}

/// Converts `t` to the integer form of a `YYYYMMDDHHMMSS` timestamp in UTC.
pub fn wiki_timestamp(t: OffsetDateTime) -> i64 {
    let t = t.to_offset(UtcOffset::UTC);
    i64::from(t.year()) * 10_000_000_000
        + i64::from(u8::from(t.month())) * 100_000_000
        + i64::from(t.day()) * 1_000_000
        + i64::from(t.hour()) * 10_000
        + i64::from(t.minute()) * 100
        + i64::from(t.second())
}

/// One aggregated data point of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Wiki timestamp, see [`wiki_timestamp`].
    pub timestamp: i64,
    pub value: f64,
}

impl Serialize for Sample {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.timestamp)?;
        // integral sums are written without a fractional part
        if self.value.fract() == 0.0 && self.value.abs() <= MAX_SAFE_INTEGER {
            seq.serialize_element(&(self.value as i64))?;
        } else {
            seq.serialize_element(&self.value)?;
        }
        seq.end()
    }
}

/// A named series as handed to the chart script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<Sample>,
}

/// Aggregated samples keyed by group, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesMap(pub(crate) FxIndexMap<String, Vec<Sample>>);

impl SeriesMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of samples over all series.
    pub fn nr_samples(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn get(&self, group: &str) -> Option<&[Sample]> {
        self.0.get(group).map(Vec::as_slice)
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_series(self) -> Vec<Series> {
        self.0
            .into_iter()
            .map(|(label, data)| Series { label, data })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use time::macros::datetime;

    #[test]
    fn test_wiki_timestamp() {
        assert_eq!(
            wiki_timestamp(datetime!(2012-03-04 5:06:07 UTC)),
            20120304050607
        );
        // converted to UTC first
        assert_eq!(
            wiki_timestamp(datetime!(2012-03-04 1:00 +2)),
            20120303230000
        );
    }

    #[test]
    fn test_data_value_deserialize() {
        let values: Vec<DataValue> = serde_json::from_str(
            r#"[
                {"type": "time", "value": "2012-01-01T10:30:00Z"},
                {"type": "number", "value": 5},
                {"type": "wikipage", "value": "Main Page"},
                {"type": "geo", "value": {"lat": 52.5, "lon": 13.4}}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            values,
            [
                DataValue::Time(datetime!(2012-01-01 10:30 UTC)),
                DataValue::Number(5.0),
                DataValue::WikiPage("Main Page".to_owned()),
                DataValue::Geo {
                    lat: 52.5,
                    lon: 13.4
                },
            ]
        );
    }

    #[test]
    fn test_sample_serialize() {
        let samples = [
            Sample {
                timestamp: 20120101000000,
                value: 5.0,
            },
            Sample {
                timestamp: 20120102000000,
                value: 2.5,
            },
        ];
        expect![[r#"[[20120101000000,5],[20120102000000,2.5]]"#]]
            .assert_eq(&serde_json::to_string(&samples).unwrap());
    }
}
