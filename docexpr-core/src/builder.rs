//! Declaration of fluent option builders.
//!
//! Operators whose payload is a document of named fields, some of them
//! optional, are returned as a dedicated builder type instead of a bare
//! [`Document`](bson::Document). The builder owns the payload; each setter
//! consumes the builder, adds one field and hands it back, so a chain has a
//! single owner until the finished document is taken with `into_document()`
//! or one of the `From` conversions. Cloning a builder is always explicit and
//! clones never observe each other's later changes.

/// Implements `From<T> for Document` and `From<T> for Bson` for builder types
/// that have an inherent `into_document(self) -> Document`.
///
/// # Example
///
/// ```ignore
/// docexpr_core::impl_into_document!(SwitchOperator, SliceOperator);
/// ```
#[macro_export]
macro_rules! impl_into_document {
    ($($name:ty),+ $(,)?) => {
        $(
            impl From<$name> for $crate::document::Document {
                fn from(op: $name) -> Self {
                    op.into_document()
                }
            }

            impl From<$name> for $crate::document::Bson {
                fn from(op: $name) -> Self {
                    $crate::document::Bson::Document(op.into_document())
                }
            }
        )+
    };
}

/// Declares a builder type for an operator whose payload is a document.
///
/// The generated type stores the payload fields and provides:
///
/// - `from_spec(Document)` (crate private) to create it from its required fields,
/// - `with(key, value)` (private) for setters to add an optional field,
/// - `spec()` to inspect the payload and `operator()` for the wire name,
/// - `into_document()` plus `From` conversions into `Document` and `Bson`.
///
/// # Example
///
/// ```ignore
/// docexpr_core::operator_builder! {
///     /// Builder returned from `Expr::map`.
///     pub struct MapOperator => "$map";
/// }
///
/// impl MapOperator {
///     pub fn set_as(self, name: impl Into<String>) -> Self {
///         self.with("as", Bson::String(name.into()))
///     }
/// }
/// ```
#[macro_export]
macro_rules! operator_builder {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $operator:literal;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            spec: $crate::document::Document,
        }

        #[allow(dead_code)]
        impl $name {
            /// The wire name of the operator.
            pub const OPERATOR: &'static str = $operator;

            pub(crate) fn from_spec(spec: $crate::document::Document) -> Self {
                Self { spec }
            }

            fn with(mut self, key: &str, value: impl Into<$crate::document::Bson>) -> Self {
                self.spec.insert(key, value.into());
                self
            }

            /// Returns the wire name of the operator.
            pub fn operator(&self) -> &'static str {
                Self::OPERATOR
            }

            /// Returns the payload fields set so far.
            pub fn spec(&self) -> &$crate::document::Document {
                &self.spec
            }

            /// Returns the finished `{ operator: payload }` document.
            pub fn into_document(self) -> $crate::document::Document {
                let mut document = $crate::document::Document::new();
                document.insert(Self::OPERATOR, self.spec);
                document
            }
        }

        $crate::impl_into_document!($name);
    };
}

/// Declares a builder type for an operator whose payload is an argument array
/// with named optional trailing slots.
///
/// The generated type wraps a [`PositionalArgs`](crate::positional::PositionalArgs)
/// and provides `from_args(required)` (crate private), `args()`,
/// `into_document()` plus `From` conversions into `Document` and `Bson`.
///
/// # Example
///
/// ```ignore
/// docexpr_core::positional_builder! {
///     /// Builder returned from `Expr::index_of_array`.
///     pub struct IndexOfArrayOperator => "$indexOfArray" ["start", "end"];
/// }
/// ```
#[macro_export]
macro_rules! positional_builder {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $operator:literal [$($slot:literal),+ $(,)?];) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            args: $crate::positional::PositionalArgs,
        }

        #[allow(dead_code)]
        impl $name {
            /// The wire name of the operator.
            pub const OPERATOR: &'static str = $operator;

            const SLOTS: &'static [&'static str] = &[$($slot),+];

            pub(crate) fn from_args(required: Vec<$crate::document::Bson>) -> Self {
                Self {
                    args: $crate::positional::PositionalArgs::new($operator, required, Self::SLOTS),
                }
            }

            /// Returns the wire name of the operator.
            pub fn operator(&self) -> &'static str {
                Self::OPERATOR
            }

            /// Returns the arguments set so far, in wire order.
            pub fn args(&self) -> &[$crate::document::Bson] {
                self.args.as_slice()
            }

            /// Returns the finished `{ operator: [args] }` document.
            pub fn into_document(self) -> $crate::document::Document {
                let mut document = $crate::document::Document::new();
                document.insert(Self::OPERATOR, self.args.into_array());
                document
            }
        }

        $crate::impl_into_document!($name);
    };
}

/// Builds a single-key operator document `{ operator: payload }`.
pub fn operator(name: &str, payload: impl Into<bson::Bson>) -> bson::Document {
    let mut document = bson::Document::new();
    document.insert(name, payload.into());
    document
}

/// Builds a document of named fields from `(name, value)` pairs.
pub fn fields(pairs: impl IntoIterator<Item = (&'static str, bson::Bson)>) -> bson::Document {
    let mut document = bson::Document::new();
    for (name, value) in pairs {
        document.insert(name, value);
    }
    document
}
