/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

impl IdRepr {
    fn into_id<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            IdRepr::Number(n) => Ok(n),
            IdRepr::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("invalid numeric id '{s}'"))),
        }
    }
}

/// Numeric ids the API sends as strings on some endpoints and as numbers on others
///
/// Serializes as a string, deserializes from either form.
pub mod id_as_string {
    use super::*;

    /// Writes the id as a JSON string
    pub fn serialize<S: Serializer>(id: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.to_string())
    }

    /// Reads the id from a JSON string or number
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        IdRepr::deserialize(deserializer)?.into_id()
    }
}

/// Optional variant of [`id_as_string`] for fields that may be absent or null
pub mod option_id {
    use super::*;

    /// Writes the id as a JSON number, or null
    pub fn serialize<S: Serializer>(id: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => serializer.serialize_i64(*id),
            None => serializer.serialize_none(),
        }
    }

    /// Reads the id from a JSON string, number or null
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        match Option::<IdRepr>::deserialize(deserializer)? {
            Some(repr) => repr.into_id().map(Some),
            None => Ok(None),
        }
    }
}
