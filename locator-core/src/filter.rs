//! Filter expressions of the content API.
//!
//! A filter is a JSON object that maps a field name to a predicate
//! (`{"meta.id":{"!$eq":"123"}}`) or combines nested filters with
//! `$and` / `$or`.

use std::collections::BTreeMap;

use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::Value;

/// Field of the entity metadata that holds the entity id.
pub const ENTITY_ID_FIELD: &str = "meta.id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
    Lt,
    Gt,
    Le,
    Ge,
    In,
    NotIn,
}

impl Operator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "$eq",
            Self::NotEq => "!$eq",
            Self::Lt => "$lt",
            Self::Gt => "$gt",
            Self::Le => "$le",
            Self::Ge => "$ge",
            Self::In => "$in",
            Self::NotIn => "!$in",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Field {
        field: String,
        op: Operator,
        value: Value,
    },
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn field(field: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        Self::Field {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::field(field, Operator::Eq, value)
    }

    pub fn not_eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::field(field, Operator::NotEq, value)
    }

    /// Matches every entity except the one with the given id.
    pub fn exclude_entity(id: &str) -> Self {
        Self::not_eq(ENTITY_ID_FIELD, id)
    }

    #[must_use]
    pub fn and(self, other: Filter) -> Self {
        match self {
            Self::And(mut filters) => {
                filters.push(other);
                Self::And(filters)
            }
            filter => Self::And(vec![filter, other]),
        }
    }

    #[must_use]
    pub fn or(self, other: Filter) -> Self {
        match self {
            Self::Or(mut filters) => {
                filters.push(other);
                Self::Or(filters)
            }
            filter => Self::Or(vec![filter, other]),
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for Filter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Field { field, op, value } => {
                let predicate = BTreeMap::from([(op.as_str(), value)]);
                map.serialize_entry(field, &predicate)?;
            }
            Self::And(filters) => map.serialize_entry("$and", filters)?,
            Self::Or(filters) => map.serialize_entry("$or", filters)?,
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_entity_exclusion() {
        let filter = Filter::exclude_entity("123");
        assert_eq!(filter.to_json_string().unwrap(), r#"{"meta.id":{"!$eq":"123"}}"#);
    }

    #[test]
    fn escape_special_characters_in_values() {
        let id = "a\"b\\c}{ü";
        let json = Filter::exclude_entity(id).to_json_string().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, json!({ "meta.id": { "!$eq": id } }));
    }

    #[test]
    fn combine_filters() {
        let filter = Filter::exclude_entity("1")
            .and(Filter::eq("address.countryCode", "US"))
            .and(Filter::field("c_rank", Operator::Ge, 3));
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({
                "$and": [
                    { "meta.id": { "!$eq": "1" } },
                    { "address.countryCode": { "$eq": "US" } },
                    { "c_rank": { "$ge": 3 } }
                ]
            })
        );
    }

    #[test]
    fn nest_or_inside_and() {
        let either = Filter::eq("address.city", "Berlin").or(Filter::eq("address.city", "Hamburg"));
        let filter = Filter::exclude_entity("1").and(either);
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({
                "$and": [
                    { "meta.id": { "!$eq": "1" } },
                    { "$or": [
                        { "address.city": { "$eq": "Berlin" } },
                        { "address.city": { "$eq": "Hamburg" } }
                    ]}
                ]
            })
        );
    }

    #[test]
    fn serialize_list_operators() {
        let filter = Filter::field("meta.id", Operator::NotIn, json!(["1", "2"]));
        assert_eq!(
            filter.to_json_string().unwrap(),
            r#"{"meta.id":{"!$in":["1","2"]}}"#
        );
    }
}
