//! Front matter splitting and typed parsing.
//!
//! A document carries front matter when its first line is `---`. The block
//! runs to the next `---` line; an unterminated block swallows the whole
//! document and leaves an empty body.
//!
//! ```text
//! ---
//! title: Hello
//! tags: [rust]
//! ---
//! # Body starts here
//! ```

use serde::{Deserialize, Deserializer, de::DeserializeOwned};

const DELIMITER: &str = "---";

/// Split `text` into the raw YAML block (if any) and the markdown body.
pub fn split(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return (None, text);
    };
    if first.trim_end() != DELIMITER {
        return (None, text);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return (Some(&text[start..offset]), &text[offset + line.len()..]);
        }
        offset += line.len();
    }

    (Some(&text[start..]), "")
}

/// Deserialize a YAML block, falling back to `T::default()` when it is absent or blank.
pub fn parse<T>(yaml: Option<&str>) -> Result<T, serde_yaml::Error>
where
    T: DeserializeOwned + Default,
{
    match yaml.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(yaml) => serde_yaml::from_str(yaml),
    }
}

/// Treat an explicit `null` (e.g. `tags:` with no value) like a missing key.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
