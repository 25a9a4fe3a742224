use indexmap::IndexMap;

/// A JSON-like value used as the default of a
/// [`FieldOption`](crate::graph::FieldOption) or as the argument of a
/// [`Directive`](crate::graph::Directive).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Elements that are [`DefaultValue::Absent`] are dropped on export.
    List(Vec<DefaultValue>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn list<T: Into<DefaultValue>>(
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// The default of an option: either a concrete [`Value`] (which may be an
/// explicit [`Value::Null`]) or no default at all.
///
/// `Absent` and `Present(Value::Null)` are observably different once exported:
/// the former omits the `= ...` clause of the argument, the latter renders
/// `= null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DefaultValue {
    #[default]
    Absent,
    Present(Value),
}
impl DefaultValue {
    pub fn present(value: impl Into<Value>) -> Self {
        Self::Present(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }
}
impl std::convert::From<Value> for DefaultValue {
    fn from(value: Value) -> Self {
        Self::Present(value)
    }
}

// A missing `default` key is handled by `#[serde(default)]` on the owning
// struct; anything actually present in the input (including `null`) is a
// `Present` value.
impl<'de> serde::Deserialize<'de> for DefaultValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Value as serde::Deserialize>::deserialize(deserializer)
            .map(Self::Present)
    }
}

// `Absent` list elements have no JSON spelling; they serialize as `null`.
impl serde::Serialize for DefaultValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Absent => serializer.serialize_unit(),
            Self::Present(value) => {
                serde::Serialize::serialize(value, serializer)
            },
        }
    }
}
