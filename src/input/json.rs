use crate::err::SeqErr;
use crate::input::Iterable;
use crate::seq::Seq;
use serde_json::Value;
use std::str::Chars;

/// 可迭代的JSON值：数组按元素迭代，字符串按字符迭代（每个字符作为单字符字符串）。
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    Array(Vec<Value>),
    Text(String),
}

impl TryFrom<Value> for JsonSource {
    type Error = SeqErr;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(JsonSource::Array(items)),
            Value::String(text) => Ok(JsonSource::Text(text)),
            Value::Null => Err(SeqErr::not_iterable("null")),
            Value::Bool(_) => Err(SeqErr::not_iterable("boolean")),
            Value::Number(_) => Err(SeqErr::not_iterable("number")),
            Value::Object(_) => Err(SeqErr::not_iterable("object")),
        }
    }
}

impl TryFrom<Value> for Seq<JsonSource> {
    type Error = SeqErr;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(Seq::new(JsonSource::try_from(value)?))
    }
}

impl Iterable for JsonSource {
    type Item = Value;
    type Cursor<'a> = JsonCursor<'a>;

    fn cursor(&self) -> Self::Cursor<'_> {
        match self {
            JsonSource::Array(items) => JsonCursor::Array(items.iter()),
            JsonSource::Text(text) => JsonCursor::Text(text.chars()),
        }
    }
}

/// [`JsonSource`]的游标。
#[derive(Debug)]
pub enum JsonCursor<'a> {
    Array(std::slice::Iter<'a, Value>),
    Text(Chars<'a>),
}

impl Iterator for JsonCursor<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            JsonCursor::Array(iter) => iter.next().cloned(),
            JsonCursor::Text(chars) => chars.next().map(|c| Value::String(c.to_string())),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            JsonCursor::Array(iter) => iter.size_hint(),
            JsonCursor::Text(chars) => chars.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iterable_values() {
        assert_eq!(JsonSource::try_from(json!([1, "a"])), Ok(JsonSource::Array(vec![json!(1), json!("a")])));
        assert_eq!(JsonSource::try_from(json!("asdf")), Ok(JsonSource::Text("asdf".to_string())));
        assert_eq!(JsonSource::try_from(json!([])), Ok(JsonSource::Array(vec![])));
    }

    #[test]
    fn test_not_iterable_values() {
        assert_eq!(JsonSource::try_from(json!({})), Err(SeqErr::NotIterable { kind: "object" }));
        assert_eq!(JsonSource::try_from(json!({"a": 1})), Err(SeqErr::NotIterable { kind: "object" }));
        assert_eq!(JsonSource::try_from(json!(null)), Err(SeqErr::NotIterable { kind: "null" }));
        assert_eq!(JsonSource::try_from(json!(true)), Err(SeqErr::NotIterable { kind: "boolean" }));
        assert_eq!(JsonSource::try_from(json!(3.5)), Err(SeqErr::NotIterable { kind: "number" }));
    }

    #[test]
    fn test_cursor() {
        let source = JsonSource::try_from(json!(["cat", 2, null])).unwrap();
        assert_eq!(source.cursor().collect::<Vec<_>>(), vec![json!("cat"), json!(2), json!(null)]);
        let source = JsonSource::try_from(json!("hi!")).unwrap();
        assert_eq!(source.cursor().collect::<Vec<_>>(), vec![json!("h"), json!("i"), json!("!")]);
        assert!(format!("{:?}", source.cursor()).starts_with("Text("));
    }

    #[test]
    fn test_seq_try_from() {
        let seq = Seq::<JsonSource>::try_from(json!([1, 2, 3])).unwrap();
        assert_eq!(seq.count(), 3);
        assert!(Seq::<JsonSource>::try_from(json!(42)).is_err());
    }
}
