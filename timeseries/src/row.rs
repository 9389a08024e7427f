use serde::{Deserialize, Serialize};

use crate::value::DataValue;

/// A field of a result row: one printout column and its values.
///
/// The values are handed out once, in order.
pub trait ResultField {
    type Values: Iterator<Item = DataValue>;

    /// Label of the printout this field belongs to.
    fn label(&self) -> &str;

    fn into_values(self) -> Self::Values;
}

/// A row of a query result, owned by one subject (page).
pub trait ResultRow {
    type Field: ResultField;
    type Fields: Iterator<Item = Self::Field>;

    /// Display text of the subject owning this row.
    fn subject(&self) -> &str;

    fn into_fields(self) -> Self::Fields;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    #[serde(default)]
    pub values: Vec<DataValue>,
}

impl Field {
    pub fn new<S, I>(label: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = DataValue>,
    {
        Self {
            label: label.into(),
            values: values.into_iter().collect(),
        }
    }
}

impl ResultField for Field {
    type Values = std::vec::IntoIter<DataValue>;

    fn label(&self) -> &str {
        &self.label
    }

    fn into_values(self) -> Self::Values {
        self.values.into_iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub subject: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Row {
    pub fn new<S, I>(subject: S, fields: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Field>,
    {
        Self {
            subject: subject.into(),
            fields: fields.into_iter().collect(),
        }
    }
}

impl ResultRow for Row {
    type Field = Field;
    type Fields = std::vec::IntoIter<Field>;

    fn subject(&self) -> &str {
        &self.subject
    }

    fn into_fields(self) -> Self::Fields {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_row_deserialize() {
        let row: Row = serde_json::from_str(
            r#"{
                "subject": "Berlin",
                "fields": [
                    {"label": "Population", "values": [{"type": "number", "value": 3.6}]},
                    {"label": "Mayor"}
                ]
            }"#,
        )
        .unwrap();
        expect![[r#"
            Row {
                subject: "Berlin",
                fields: [
                    Field {
                        label: "Population",
                        values: [
                            Number(
                                3.6,
                            ),
                        ],
                    },
                    Field {
                        label: "Mayor",
                        values: [],
                    },
                ],
            }
        "#]]
        .assert_debug_eq(&row);
    }

    #[test]
    fn test_row_into_fields() {
        let row = Row::new(
            "A",
            [
                Field::new("p1", [DataValue::Number(1.0)]),
                Field::new("p2", Vec::new()),
            ],
        );
        assert_eq!(row.subject(), "A");
        let labels = row
            .into_fields()
            .map(|field| field.label().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["p1", "p2"]);
    }
}
