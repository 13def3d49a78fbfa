use std::fmt;

/// An array key.
///
/// String keys holding a canonical decimal integer (`"5"`, `"-3"`, but not
/// `"05"` or `"-0"`) are stored as [`Key::Int`], the way PHP stores them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Build a key from a string, normalizing integer-like strings.
    pub fn normalized(s: impl Into<String>) -> Self {
        let s = s.into();
        match parse_canonical_int(&s) {
            Some(i) => Self::Int(i),
            None => Self::Str(s),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }
}

fn parse_canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = match digits.as_bytes() {
        [b'0'] => digits.len() == s.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
        [] => false,
    };
    if canonical { s.parse().ok() } else { None }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::normalized(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::normalized(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}
