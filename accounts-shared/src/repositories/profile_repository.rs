use std::collections::HashMap;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Number, Value};
use crate::database::errors::DatabaseError;
use crate::utilities::fields::dynamodb;

/// Interface
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Value>, DatabaseError>;
}

/// DynamoDB-backed implementation
pub struct DynamoProfileRepository {
    db: DynamoDbClient,
    table_name: String,
}

impl DynamoProfileRepository {
    pub fn new(db: DynamoDbClient, table_name: impl Into<String>) -> Self {
        Self { db, table_name: table_name.into() }
    }
}

#[async_trait]
impl ProfileRepository for DynamoProfileRepository {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Value>, DatabaseError> {
        let res = self
            .db
            .get_item()
            .table_name(&self.table_name)
            .key(dynamodb::USER_ID_FIELD, AttributeValue::S(user_id.to_string()))
            .send()
            .await?;

        Ok(res.item.map(item_to_json))
    }
}

pub fn item_to_json(item: HashMap<String, AttributeValue>) -> Value {
    Value::Object(item.into_iter().map(|(k, v)| (k, attribute_to_json(v))).collect::<Map<_, _>>())
}

fn number_to_json(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

pub fn attribute_to_json(value: AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => number_to_json(&n),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::L(items) => Value::Array(items.into_iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => item_to_json(map),
        AttributeValue::Ss(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(items) => Value::Array(items.iter().map(|n| number_to_json(n)).collect()),
        AttributeValue::Bs(items) => Value::Array(
            items.iter().map(|b| Value::String(STANDARD.encode(b.as_ref()))).collect(),
        ),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;
    use super::*;

    #[test]
    fn profile_item_becomes_plain_json() {
        let item = HashMap::from([
            ("user_id".to_string(), AttributeValue::S("abc".to_string())),
            ("age".to_string(), AttributeValue::N("31".to_string())),
            ("score".to_string(), AttributeValue::N("4.5".to_string())),
            ("active".to_string(), AttributeValue::Bool(true)),
            ("nickname".to_string(), AttributeValue::Null(true)),
            ("tags".to_string(), AttributeValue::Ss(vec!["a".to_string(), "b".to_string()])),
            ("address".to_string(), AttributeValue::M(HashMap::from([
                ("city".to_string(), AttributeValue::S("Quito".to_string())),
            ]))),
            ("history".to_string(), AttributeValue::L(vec![AttributeValue::N("1".to_string())])),
        ]);

        assert_eq!(item_to_json(item), json!({
            "user_id": "abc",
            "age": 31,
            "score": 4.5,
            "active": true,
            "nickname": null,
            "tags": ["a", "b"],
            "address": {"city": "Quito"},
            "history": [1],
        }));
    }

    #[test]
    fn binary_values_are_base64() {
        let value = attribute_to_json(AttributeValue::B(Blob::new(b"hi".to_vec())));
        assert_eq!(value, json!("aGk="));
    }
}
