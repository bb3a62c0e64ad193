//! Allow-list policy for selectable models.
//!
//! On the wire the policy is `"*"`, `"none"`, an array of model ids, or
//! absent. An empty array, an unknown string or a number decodes to
//! [`ModelListPolicy::AllowAll`]. A non-empty array always stays a list, even
//! when none of its entries name a real model.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which catalog models a surface may offer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelListPolicy {
    /// Every catalog model.
    #[default]
    AllowAll,
    /// Only the configured default model.
    AllowNone,
    /// Exactly these ids, intersected with the catalog. An empty list
    /// behaves like `AllowAll`.
    AllowList(Vec<String>),
}

impl ModelListPolicy {
    /// Build a list policy; an empty list means "all".
    pub fn list<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            Self::AllowAll
        } else {
            Self::AllowList(ids)
        }
    }
}

impl Serialize for ModelListPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ModelListPolicy::AllowAll => serializer.serialize_str("*"),
            ModelListPolicy::AllowNone => serializer.serialize_str("none"),
            ModelListPolicy::AllowList(ids) => ids.serialize(serializer),
        }
    }
}

struct PolicyVisitor;

impl<'de> Visitor<'de> for PolicyVisitor {
    type Value = ModelListPolicy;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"*\", \"none\", or an array of model ids")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(match value {
            "none" => ModelListPolicy::AllowNone,
            "*" => ModelListPolicy::AllowAll,
            other => {
                tracing::debug!(policy = %other, "Unrecognized allowedModels value, allowing all");
                ModelListPolicy::AllowAll
            }
        })
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut ids = Vec::new();
        while let Some(item) = seq.next_element::<serde_json::Value>()? {
            // Non-string entries keep their JSON text and match no catalog id.
            ids.push(match item {
                serde_json::Value::String(id) => id,
                other => other.to_string(),
            });
        }
        Ok(ModelListPolicy::list(ids))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ModelListPolicy::AllowAll)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ModelListPolicy::AllowAll)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(ModelListPolicy::AllowAll)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(ModelListPolicy::AllowAll)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(ModelListPolicy::AllowAll)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(ModelListPolicy::AllowAll)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map
            .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
            .is_some()
        {}
        Ok(ModelListPolicy::AllowAll)
    }
}

impl<'de> Deserialize<'de> for ModelListPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PolicyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ModelListPolicy {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_star_and_none() {
        assert_eq!(parse(r#""*""#), ModelListPolicy::AllowAll);
        assert_eq!(parse(r#""none""#), ModelListPolicy::AllowNone);
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse(r#"["openai/gpt-4.1", "xai/grok-4"]"#),
            ModelListPolicy::AllowList(vec!["openai/gpt-4.1".into(), "xai/grok-4".into()])
        );
    }

    #[test]
    fn test_empty_list_means_all() {
        assert_eq!(parse("[]"), ModelListPolicy::AllowAll);
        assert_eq!(ModelListPolicy::list(Vec::<String>::new()), ModelListPolicy::AllowAll);
    }

    #[test]
    fn test_unexpected_values_mean_all() {
        assert_eq!(parse(r#""everything""#), ModelListPolicy::AllowAll);
        assert_eq!(parse("null"), ModelListPolicy::AllowAll);
        assert_eq!(parse("7"), ModelListPolicy::AllowAll);
        assert_eq!(parse("true"), ModelListPolicy::AllowAll);
        assert_eq!(parse(r#"{"a": 1}"#), ModelListPolicy::AllowAll);
    }

    #[test]
    fn test_non_string_list_entries_stay_in_list() {
        assert_eq!(
            parse(r#"["openai/gpt-4.1", 3, null]"#),
            ModelListPolicy::AllowList(vec!["openai/gpt-4.1".into(), "3".into(), "null".into()])
        );
    }

    #[test]
    fn test_list_of_only_non_strings_is_not_widened() {
        assert_eq!(
            parse("[1, 2]"),
            ModelListPolicy::AllowList(vec!["1".into(), "2".into()])
        );
    }

    #[test]
    fn test_serialize_shapes() {
        assert_eq!(serde_json::to_string(&ModelListPolicy::AllowAll).unwrap(), r#""*""#);
        assert_eq!(serde_json::to_string(&ModelListPolicy::AllowNone).unwrap(), r#""none""#);
        assert_eq!(
            serde_json::to_string(&ModelListPolicy::list(["a/b"])).unwrap(),
            r#"["a/b"]"#
        );
    }
}
