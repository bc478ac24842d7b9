use core::fmt::Display;
use core::str::FromStr;

use serde::{de, Deserialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum NativeOrString<T> {
    Native(T),
    String(String),
}

/// Deserializes a value from either its native representation or a string.
///
/// Environment overrides always arrive as strings.
pub fn from_anything<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NativeOrString::<T>::deserialize(deserializer)? {
        NativeOrString::Native(value) => Ok(value),
        NativeOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid value `{s}`: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Lenient {
        #[serde(deserialize_with = "from_anything")]
        enabled: bool,
        #[serde(deserialize_with = "from_anything")]
        capacity: usize,
    }

    #[test]
    fn accepts_native_and_string_values() {
        let native: Lenient = toml::from_str("enabled = true\ncapacity = 5").unwrap();
        assert!(native.enabled);
        assert_eq!(native.capacity, 5);

        let strings: Lenient = toml::from_str("enabled = \"false\"\ncapacity = \" 12 \"").unwrap();
        assert!(!strings.enabled);
        assert_eq!(strings.capacity, 12);
    }

    #[test]
    fn rejects_unparsable_strings() {
        let err = toml::from_str::<Lenient>("enabled = \"yes\"\ncapacity = 1").unwrap_err();
        assert!(err.to_string().contains("invalid value `yes`"), "{err}");
    }
}
