use super::{Record, Result, StorageEngine};

/// Database commands/statements
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Set { key: String, value: String },
    Get { key: String },
    List,
}

/// Result of running a [Statement](Statement) against a store
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Done,
    Value { key: String, value: Option<String> },
    Records(Vec<Record>),
}

impl Statement {
    pub fn execute<E: StorageEngine>(self, engine: &mut E) -> Result<Output> {
        match self {
            Self::Set { key, value } => {
                engine.set(&key, &value)?;
                Ok(Output::Done)
            }
            Self::Get { key } => {
                let value = engine.get(&key)?;
                Ok(Output::Value { key, value })
            }
            Self::List => Ok(Output::Records(engine.list()?)),
        }
    }
}

impl TryFrom<&str> for Statement {
    type Error = String;

    fn try_from(input: &str) -> std::result::Result<Self, Self::Error> {
        let (keyword, rest) = input
            .split_once(char::is_whitespace)
            .unwrap_or((input, ""));
        let rest = rest.trim();

        match keyword {
            "set" => match rest.split_once(char::is_whitespace) {
                Some((key, value)) => Ok(Self::Set {
                    key: key.to_string(),
                    value: value.trim_start().to_string(),
                }),
                None => Err("usage: set <key> <value>".to_string()),
            },
            "get" if !rest.is_empty() && !rest.contains(char::is_whitespace) => Ok(Self::Get {
                key: rest.to_string(),
            }),
            "get" => Err("usage: get <key>".to_string()),
            "list" if rest.is_empty() => Ok(Self::List),
            "list" => Err("usage: list".to_string()),
            _ => Err(format!("unrecognized statement `{input}`.")),
        }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done => Ok(()),
            Self::Value {
                value: Some(value), ..
            } => write!(f, "{value}"),
            Self::Value { key, value: None } => write!(f, "key `{key}` not found"),
            Self::Records(records) => {
                for (i, record) in records.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{record}")?;
                }
                Ok(())
            }
        }
    }
}
