mod add;
mod edit;

pub use add::AddChat as Add;
pub use edit::EditChat as Edit;

use serde::{Deserialize, Deserializer};

/// Form fields arrive as free text; surrounding whitespace never counts.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|value| value.trim().to_string())
}
