//! Object shapes with bespoke renderings.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// A case of a PHP enum, e.g. `Suit::Hearts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    /// Fully qualified enum name, without the leading `\`.
    pub class: String,
    /// Case name.
    pub case: String,
}

impl EnumCase {
    pub fn new(class: impl Into<String>, case: impl Into<String>) -> Self {
        Self {
            class: class.into().trim_start_matches('\\').to_string(),
            case: case.into(),
        }
    }
}

/// Which of PHP's date classes a [`DateTimeValue`] reconstructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTimeClass {
    #[default]
    DateTime,
    DateTimeImmutable,
}

impl DateTimeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateTime => "DateTime",
            Self::DateTimeImmutable => "DateTimeImmutable",
        }
    }
}

/// A wall-clock timestamp in a named timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeValue {
    pub class: DateTimeClass,
    pub datetime: NaiveDateTime,
    /// Timezone name as PHP's `DateTimeZone` accepts it
    /// (`Europe/Prague`, `UTC`, `+02:00`).
    pub timezone: String,
}

impl DateTimeValue {
    /// A mutable `DateTime`.
    pub fn new(datetime: NaiveDateTime, timezone: impl Into<String>) -> Self {
        Self {
            class: DateTimeClass::DateTime,
            datetime,
            timezone: timezone.into(),
        }
    }

    /// A `DateTimeImmutable`.
    pub fn immutable(datetime: NaiveDateTime, timezone: impl Into<String>) -> Self {
        Self {
            class: DateTimeClass::DateTimeImmutable,
            ..Self::new(datetime, timezone)
        }
    }

    /// Timestamp formatted like PHP's `Y-m-d H:i:s.u`.
    pub fn formatted(&self) -> String {
        self.datetime.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

impl From<DateTime<Utc>> for DateTimeValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::immutable(dt.naive_utc(), "UTC")
    }
}

impl From<DateTime<FixedOffset>> for DateTimeValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::immutable(dt.naive_local(), dt.offset().to_string())
    }
}

/// A first-class callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Closure {
    /// Named function, rendered as `name(...)`.
    Function(String),
    /// Static method, rendered as `Class::method(...)`.
    StaticMethod { class: String, method: String },
    /// Closure capturing state or bound to an instance; not representable.
    Capturing,
}

impl Closure {
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(name.into())
    }

    pub fn static_method(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self::StaticMethod {
            class: class.into(),
            method: method.into(),
        }
    }
}

/// An open resource such as a stream or a database connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub kind: String,
}

impl Resource {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// An object that knows its own PHP `serialize()` form.
///
/// The dumper does not look inside; it emits `unserialize('...')` around
/// whatever bytes [`Serializable::serialize`] returns.
pub trait Serializable: fmt::Debug {
    fn serialize(&self) -> Vec<u8>;
}
