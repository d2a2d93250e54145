//! Endpoint path templates: the [`PathBuilder`] and the [`EndpointPath`] it produces.
//!
//! Templates are logical resource paths such as `{congress}/{chamber}/members`.
//! Named slots are filled by [`PathBuilder::arg`], numbered (`{0}`) or bare (`{}`)
//! slots by [`PathBuilder::positional`]. Named arguments that no slot consumes
//! are carried over as query-string parameters.

use crate::{
    types::{format_date, Chamber, IntoDate},
    Error,
};

/// A logical resource path plus the query parameters that go with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPath {
    path: String,
    query: Vec<(String, String)>,
}

impl EndpointPath {
    /// A literal path with no parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Appends a query parameter.
    pub fn with_query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }
}

impl std::fmt::Display for EndpointPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)?;
        for (i, (name, value)) in self.query.iter().enumerate() {
            write!(f, "{}{}={}", if i == 0 { '?' } else { '&' }, name, value)?;
        }
        Ok(())
    }
}

/// Fills a path template with arguments.
///
/// Argument conversion errors (a bad chamber, an unparseable date) are held
/// until [`PathBuilder::build`] so calls can be chained.
#[derive(Debug)]
pub struct PathBuilder {
    template: String,
    positional: Vec<String>,
    named: Vec<(String, String)>,
    error: Option<Error>,
}

impl PathBuilder {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            positional: Vec::new(),
            named: Vec::new(),
            error: None,
        }
    }

    /// Adds the next positional argument.
    pub fn positional(mut self, value: impl ToString) -> Self {
        self.positional.push(value.to_string());
        self
    }

    /// Adds a named argument. If no slot uses it, it becomes a query parameter.
    pub fn arg(mut self, name: &str, value: impl ToString) -> Self {
        self.named.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a named argument only when a value is present.
    pub fn arg_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.arg(name, value),
            None => self,
        }
    }

    /// Adds a chamber argument given as free text, validating it first.
    pub fn chamber(self, name: &str, value: &str) -> Self {
        match value.parse::<Chamber>() {
            Ok(chamber) => self.arg(name, chamber),
            Err(e) => self.fail(e),
        }
    }

    /// Adds a date argument, rendered as `YYYY-MM-DD`.
    pub fn date(self, name: &str, value: impl IntoDate) -> Self {
        match value.into_date() {
            Ok(date) => self.arg(name, format_date(date)),
            Err(e) => self.fail(e),
        }
    }

    fn fail(mut self, error: Error) -> Self {
        if self.error.is_none() {
            self.error = Some(error);
        }
        self
    }

    /// Substitutes every slot, failing if any slot has no (or an empty) value.
    pub fn build(self) -> Result<EndpointPath, Error> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut used = vec![false; self.named.len()];
        let mut next_positional = 0;
        let mut path = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                Error::InvalidArgument(format!("unclosed slot in path template {:?}", self.template))
            })?;
            let slot = &after[..close];

            let value = if slot.is_empty() {
                next_positional += 1;
                self.positional.get(next_positional - 1)
            } else if let Ok(index) = slot.parse::<usize>() {
                self.positional.get(index)
            } else {
                self.named
                    .iter()
                    .position(|(name, _)| name == slot)
                    .map(|i| {
                        used[i] = true;
                        &self.named[i].1
                    })
            };

            match value {
                Some(value) if !value.is_empty() => path.push_str(&urlencoding::encode(value)),
                _ => {
                    return Err(Error::MissingPathArgument {
                        template: self.template.clone(),
                        slot: slot.to_string(),
                    })
                }
            }
            rest = &after[close + 1..];
        }
        path.push_str(rest);

        let query = self
            .named
            .into_iter()
            .zip(used)
            .filter(|(_, used)| !used)
            .map(|(pair, _)| pair)
            .collect();

        Ok(EndpointPath { path, query })
    }
}
