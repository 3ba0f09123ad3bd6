/// A header option given either as a ready-made string or as an ordered list of tokens.
///
/// Lists are joined with `,` (no whitespace) exactly once, when the owning
/// [`Cors`](crate::Cors) is constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenList {
    Joined(String),
    List(Vec<String>),
}

impl TokenList {
    pub fn joined<S: Into<String>>(value: S) -> Self {
        Self::Joined(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Serializes the option into a header-ready value, `None` when it would be empty.
    pub fn header_value(&self) -> Option<String> {
        let value = match self {
            Self::Joined(value) => value.clone(),
            Self::List(values) => values.join(","),
        };

        if value.is_empty() { None } else { Some(value) }
    }
}

impl From<&str> for TokenList {
    fn from(value: &str) -> Self {
        Self::Joined(value.to_owned())
    }
}

impl From<String> for TokenList {
    fn from(value: String) -> Self {
        Self::Joined(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for TokenList {
    fn from(values: Vec<S>) -> Self {
        Self::list(values)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for TokenList {
    fn from(values: [S; N]) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "token_list_test.rs"]
mod token_list_test;
