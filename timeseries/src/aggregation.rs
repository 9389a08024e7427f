use crate::{
    params::{GroupBy, Parameters},
    row::{ResultField, ResultRow},
    value::{wiki_timestamp, DataValue, FxIndexMap, Sample, SeriesMap},
};

/// Groups result rows into named series of `(timestamp, sum)` samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeriesAggregator {
    group: GroupBy,
    /// Samples with a smaller sum are dropped. Unset means `0`.
    min: Option<f64>,
}

impl SeriesAggregator {
    pub fn new(group: GroupBy, min: Option<f64>) -> Self {
        Self { group, min }
    }

    pub fn from_params(params: &Parameters) -> Self {
        Self::new(params.group, params.min.map(|min| min as f64))
    }

    /// Consumes `rows` once, in order.
    ///
    /// Every field yields at most one sample: the sum of its numbers, stamped
    /// with the last time value seen so far in the row. The sample is kept
    /// if a time value was seen and the sum is finite, nonzero and not below
    /// the minimum (`0` when unset). Series are returned in the order their group was first seen,
    /// samples in row order.
    #[tracing::instrument(skip_all, fields(group = %self.group))]
    pub fn aggregate<I>(&self, rows: I) -> SeriesMap
    where
        I: IntoIterator,
        I::Item: ResultRow,
    {
        let mut merged_samples = FxIndexMap::<String, Vec<Sample>>::default();
        let mut nr_rows = 0;
        for row in rows {
            nr_rows += 1;
            for (group, sample) in self.row_samples(row) {
                merged_samples.entry(group).or_default().push(sample);
            }
        }
        let series = SeriesMap(merged_samples);
        tracing::debug!(
            rows = nr_rows,
            series = series.len(),
            samples = series.nr_samples(),
            "aggregated time series"
        );
        series
    }

    /// Samples of a single row, one per group.
    ///
    /// A later field overwrites the sample of an earlier field filed under
    /// the same group, keeping its position.
    fn row_samples<R: ResultRow>(&self, row: R) -> FxIndexMap<String, Sample> {
        let subject = row.subject().to_owned();
        let mut samples = FxIndexMap::default();
        let mut timestamp = None;
        for field in row.into_fields() {
            let group = match self.group {
                GroupBy::Subject => subject.clone(),
                GroupBy::Property => field.label().to_owned(),
            };
            let mut sum = 0.0;
            for value in field.into_values() {
                match value {
                    DataValue::Time(t) => timestamp = Some(wiki_timestamp(t)),
                    DataValue::Number(v) => sum += v,
                    _ => {}
                }
            }
            if let Some(timestamp) = timestamp {
                if self.accepts(sum) {
                    samples.insert(
                        group,
                        Sample {
                            timestamp,
                            value: sum,
                        },
                    );
                }
            }
        }
        samples
    }

    fn accepts(&self, sum: f64) -> bool {
        // NOTE: a sum of zero is never plotted
        sum.is_finite() && sum != 0.0 && sum >= self.min.unwrap_or(0.0)
    }
}
