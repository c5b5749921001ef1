//! Deserialization helpers shared by the response models.

use serde::{Deserialize, Deserializer};

// The upstream is PHP and emits booleans as 0/1 about as often as
// true/false, depending on the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl From<Flag> for bool {
    fn from(flag: Flag) -> bool {
        match flag {
            Flag::Bool(b) => b,
            Flag::Int(n) => n != 0,
        }
    }
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Flag::deserialize(deserializer).map(bool::from)
}

pub(crate) fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Flag>::deserialize(deserializer)?.map(bool::from))
}
