/// Query parameter naming the target user
pub const UID_PARAM: &str = "uid";

/// Shape of the `uid` query parameter as it reached the function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UidParam {
    /// Missing, or present with an empty value
    Absent,
    /// Exactly one non-empty `uid=<value>` pair
    Text(String),
    /// Repeated (`uid=a&uid=b`) or bracketed (`uid[]=a`, `uid[k]=a`).
    /// An unclosed `uid[` is a distinct key, not a bracket.
    Other,
}

impl UidParam {
    /// Discriminate the raw query-string pairs of a request.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut values = Vec::new();

        for (key, value) in pairs {
            if key == UID_PARAM {
                values.push(value);
            } else if key
                .strip_prefix(UID_PARAM)
                .and_then(|rest| rest.strip_prefix('['))
                .is_some_and(|rest| rest.contains(']'))
            {
                return Self::Other;
            }
        }

        match values.as_slice() {
            [] => Self::Absent,
            [value] if value.is_empty() => Self::Absent,
            [value] => Self::Text(value.to_string()),
            _ => Self::Other,
        }
    }

    /// The identifier, if the parameter carried a usable string.
    pub fn into_uid(self) -> Option<String> {
        match self {
            Self::Text(uid) => Some(uid),
            Self::Absent | Self::Other => None,
        }
    }
}
