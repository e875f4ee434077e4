// Named arguments bound from a command line, and their check at the handler boundary.
//
// A parameter the user left out is their mistake and can be reported.
// A name the handler never declared can only come from miswired code.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(BTreeMap<String, String>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{command} expects to receive arguments :{}", .expected.join(", :"))]
    Missing {
        command: String,
        expected: Vec<String>,
    },

    #[error("{command} received extra arguments :{}", .extra.join(", :"))]
    Unexpected { command: String, extra: Vec<String> },
}

impl Arguments {
    /// Values in the order `parameters` declares them.
    pub fn bind<const N: usize>(
        mut self,
        command: &str,
        parameters: [&str; N],
    ) -> Result<[String; N], ArgumentError> {
        let extra: Vec<String> = self
            .0
            .keys()
            .filter(|name| !parameters.contains(&name.as_str()))
            .cloned()
            .collect();
        if !extra.is_empty() {
            return Err(ArgumentError::Unexpected {
                command: command.to_string(),
                extra,
            });
        }

        if parameters.iter().any(|name| !self.0.contains_key(*name)) {
            return Err(ArgumentError::Missing {
                command: command.to_string(),
                expected: parameters.iter().map(|name| name.to_string()).collect(),
            });
        }

        Ok(parameters.map(|name| self.0.remove(name).unwrap_or_default()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}
