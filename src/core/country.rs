//! # Country Record
//!
//! One entry of the catalog. Every field except `id` is a display string;
//! the resource may give `population` and `area` as bare numbers, which are
//! turned into text while deserializing.

use serde::{Deserialize, Deserializer};

/// Identifier of a country, unique within a catalog.
pub type CountryId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    #[serde(deserialize_with = "scalar_text")]
    pub population: String,
    #[serde(deserialize_with = "scalar_text")]
    pub area: String,
    pub languages: String,
    pub government: String,
    pub capital: String,
}

/// A flat JSON scalar that is shown as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(u64),
    Float(f64),
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(x) => x.to_string(),
    })
}
