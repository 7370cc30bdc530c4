//! Domain types for the todo collection.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo record.
///
/// `id` is supplied by the caller and is neither generated nor checked for
/// uniqueness. Any field that is missing or `null` on input takes its zero
/// value: `""` for strings, `false` for `completed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Todo {
    pub fn new(id: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
            completed: false,
        }
    }
}

/// The records every fresh collection starts with.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new("1", "Learn Go"),
        Todo::new("2", "Build a REST API"),
        Todo::new("3", "Become a Fullstack Developer"),
    ]
}
