use std::fmt::Display;

/// A single key/value pair stored in the `kv` table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.key, self.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn displays_as_key_colon_value() {
        let record = Record::new("status", "OK");
        assert_eq!(record.to_string(), "status : OK");
    }
}
