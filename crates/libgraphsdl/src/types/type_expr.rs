use indexmap::IndexMap;

/// The type algebra used to describe the values of fields, options and record
/// members.
///
/// Any [`TypeExpr`] that is not wrapped in [`TypeExpr::Optional`] is
/// non-null.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeExpr {
    Any,
    Boolean,
    Float,
    Integer,
    String,
    Optional(Box<TypeExpr>),
    Sequence(Box<TypeExpr>),
    /// A reference, by name, to a [`Node`](crate::graph::Node) or to one of
    /// the graph's data types.
    TypeRef(String),

    /// A key/value mapping. Has no GraphQL representation.
    Mapping {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },

    /// An anonymous, inline structural record. Has no GraphQL representation;
    /// named records belong in [`Graph::data_types`](crate::graph::Graph).
    Record(IndexMap<String, TypeExpr>),
}
impl TypeExpr {
    pub fn optional(inner: TypeExpr) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn sequence(item: TypeExpr) -> Self {
        Self::Sequence(Box::new(item))
    }

    pub fn type_ref(name: impl AsRef<str>) -> Self {
        Self::TypeRef(name.as_ref().to_string())
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// The name of the [`TypeExpr::TypeRef`] found by unwrapping any
    /// `Optional` and `Sequence` layers, if there is one.
    pub fn innermost_type_ref(&self) -> Option<&str> {
        match self {
            Self::Optional(inner) | Self::Sequence(inner) =>
                inner.innermost_type_ref(),
            Self::TypeRef(name) => Some(name.as_str()),
            Self::Any
            | Self::Boolean
            | Self::Float
            | Self::Integer
            | Self::String
            | Self::Mapping { .. }
            | Self::Record(_) => None,
        }
    }
}
