//! The catalog record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single Pokémon entry as served by the data provider.
///
/// Records are immutable once fetched. Only `number` and `name` are
/// guaranteed. The fields the query pipeline reads are typed; every other
/// key (stats, legendary flag, anything the data file adds) is carried in
/// `extra` unchanged so serving a record never loses or rejects data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Pokemon {
    pub number: i64,
    pub name: String,
    #[serde(default)]
    pub type_one: Option<String>,
    #[serde(default)]
    pub type_two: Option<String>,
    /// Usually an integer, but the source does not guarantee it.
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub generation: Option<Value>,
    /// Remaining source fields, such as `total`, `attack` or `legendary`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Pokemon {
    /// Creates a record with only the identifying fields set.
    #[must_use]
    pub fn new(number: i64, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            type_one: None,
            type_two: None,
            generation: None,
            extra: BTreeMap::new(),
        }
    }

    /// Sets the primary and secondary types.
    #[must_use]
    pub fn with_types(mut self, type_one: Option<&str>, type_two: Option<&str>) -> Self {
        self.type_one = type_one.map(str::to_string);
        self.type_two = type_two.map(str::to_string);
        self
    }

    /// Sets the generation.
    #[must_use]
    pub fn with_generation(mut self, generation: impl Into<Value>) -> Self {
        self.generation = Some(generation.into());
        self
    }

    /// Iterates over the non-empty type names of this record.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        [self.type_one.as_deref(), self.type_two.as_deref()]
            .into_iter()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    /// String form of the generation, empty when absent.
    #[must_use]
    pub fn generation_label(&self) -> String {
        match &self.generation {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let pokemon: Pokemon = serde_json::from_value(json!({
            "number": 25,
            "name": "Pikachu",
            "type_one": "Electric",
            "type_two": null,
            "total": 320,
            "hit_points": 35,
            "attack": 55,
            "defense": 40,
            "special_attack": 50,
            "special_defense": 50,
            "speed": 90,
            "generation": 1,
            "legendary": false
        }))
        .unwrap();

        assert_eq!(pokemon.number, 25);
        assert_eq!(pokemon.type_one.as_deref(), Some("Electric"));
        assert!(pokemon.type_two.is_none());
        assert_eq!(pokemon.generation_label(), "1");
        assert_eq!(pokemon.extra["legendary"], json!(false));
        assert_eq!(pokemon.extra["speed"], json!(90));
    }

    #[test]
    fn test_loosely_typed_stats_are_accepted() {
        let records: Vec<Pokemon> = serde_json::from_str(
            r#"[{"number": 1, "name": "Bulbasaur", "speed": "45", "legendary": "no"},
                {"number": 2, "name": "Ivysaur", "total": null}]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].extra["speed"], json!("45"));
        assert_eq!(records[1].extra["total"], Value::Null);
    }

    #[test]
    fn test_unknown_fields_survive_serialization() {
        let source = json!({
            "number": 1,
            "name": "Bulbasaur",
            "type_one": "Grass",
            "type_two": "Poison",
            "generation": 1,
            "attack": 49,
            "image": "b.png"
        });

        let pokemon: Pokemon = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(serde_json::to_value(&pokemon).unwrap(), source);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let pokemon: Pokemon = serde_json::from_value(json!({"number": 1, "name": "Bulbasaur"})).unwrap();
        assert!(pokemon.type_one.is_none());
        assert_eq!(pokemon.generation_label(), "");
        assert_eq!(pokemon.types().count(), 0);
    }

    #[test]
    fn test_types_skips_empty_values() {
        let pokemon = Pokemon::new(6, "Charizard").with_types(Some("Fire"), Some(""));
        assert_eq!(pokemon.types().collect::<Vec<_>>(), vec!["Fire"]);
    }

    #[test]
    fn test_generation_label_for_string_value() {
        let pokemon = Pokemon::new(1, "Bulbasaur").with_generation("I");
        assert_eq!(pokemon.generation_label(), "I");
    }
}
