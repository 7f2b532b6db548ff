use serde::{Deserialize, Deserializer};

/// Page number from the query string. Anything that does not parse as an
/// integer falls back to the first page instead of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(value.parse::<i64>().map(Page).unwrap_or_default())
    }
}

#[derive(Deserialize, Default)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Page,
}

// clients send the category reference either as a number or as a string; it
// is persisted in its string form
pub fn deserialize_category_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CategoryRef {
        Number(i64),
        Text(String),
    }

    let value = Option::<CategoryRef>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        CategoryRef::Number(n) => n.to_string(),
        CategoryRef::Text(s) => s,
    }))
}
