use serde::{Deserialize, Deserializer, Serialize};

/// Form input submitted for inference.
///
/// Fields are kept as the text the user typed so empty or partial input
/// survives until the wire. Numeric text is turned into JSON numbers when
/// the request is serialized; everything else goes out verbatim.
///
/// Decoding only accepts a map. Each field may be a string, a number,
/// null or absent, and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    #[serde(serialize_with = "field::coerce")]
    pub age: String,
    #[serde(serialize_with = "field::coerce")]
    pub weight: String,
    #[serde(serialize_with = "field::coerce")]
    pub temperature: String,
}

impl<'de> Deserialize<'de> for PredictionRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(field::RequestVisitor)
    }
}

impl PredictionRequest {
    pub fn new(
        age: impl Into<String>,
        weight: impl Into<String>,
        temperature: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            weight: weight.into(),
            temperature: temperature.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
}

mod field {
    use super::PredictionRequest;
    use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
    use serde::ser::Serializer;
    use std::fmt;

    /// Integers first so "30" stays `30` rather than `30.0`.
    pub fn coerce<S: Serializer>(text: &str, serializer: S) -> Result<S::Ok, S::Error> {
        let trimmed = text.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return serializer.serialize_i64(n);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => serializer.serialize_f64(f),
            _ => serializer.serialize_str(text),
        }
    }

    pub struct RequestVisitor;

    impl<'de> Visitor<'de> for RequestVisitor {
        type Value = PredictionRequest;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object with age, weight and temperature")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PredictionRequest, A::Error> {
            let mut request = PredictionRequest::default();
            while let Some(key) = map.next_key::<String>()? {
                let slot = match key.as_str() {
                    "age" => &mut request.age,
                    "weight" => &mut request.weight,
                    "temperature" => &mut request.temperature,
                    _ => {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    }
                };
                *slot = map.next_value::<Text>()?.0;
            }
            Ok(request)
        }
    }

    /// Form value as text, whatever JSON scalar it arrived as.
    struct Text(String);

    impl<'de> Deserialize<'de> for Text {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(TextVisitor).map(Text)
        }
    }

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, a number or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }
}
