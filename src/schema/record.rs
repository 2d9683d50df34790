// src/schema/record.rs

use super::types::{Column, ColumnKind, Version};

/// A fixed-shape, versioned star record.
///
/// Implementations are generated by `athyg_record!`, which derives the
/// column table and the field list from the same declaration.
pub trait Record: Sized {
    /// Dataset version this record belongs to.
    const VERSION: Version;
    /// Ordered column table; position `i` describes field `i`.
    const COLUMNS: &'static [Column];
    /// Exact arity of a data line.
    const ELEMENT_COUNT: usize;

    /// Convert exactly `ELEMENT_COUNT` tokens into a record.
    ///
    /// Arity is enforced by [`crate::process::build::build`]; a short slice
    /// here leaves the missing trailing fields as though their tokens were
    /// empty.
    fn from_fields(fields: &[&str]) -> Self;

    /// Borrowed, column-ordered view over the record's fields.
    fn values(&self) -> Vec<Value<'_>>;
}

/// A single field value, tagged with its column kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Unsigned(Option<u64>),
    Signed(Option<i64>),
    Decimal(Option<f64>),
    Character(Option<char>),
    Boolean(Option<bool>),
    Text(Option<&'a str>),
}

impl Value<'_> {
    pub fn kind(&self) -> ColumnKind {
        match self {
            Value::Unsigned(_) => ColumnKind::Unsigned,
            Value::Signed(_) => ColumnKind::Signed,
            Value::Decimal(_) => ColumnKind::Decimal,
            Value::Character(_) => ColumnKind::Character,
            Value::Boolean(_) => ColumnKind::Boolean,
            Value::Text(_) => ColumnKind::Text,
        }
    }

    pub fn is_present(&self) -> bool {
        match self {
            Value::Unsigned(v) => v.is_some(),
            Value::Signed(v) => v.is_some(),
            Value::Decimal(v) => v.is_some(),
            Value::Character(v) => v.is_some(),
            Value::Boolean(v) => v.is_some(),
            Value::Text(v) => v.is_some(),
        }
    }
}

/// Declares a record struct plus its `Record` impl.
///
/// Every field is `Option<T>` where `T: FromToken`; the column kind of each
/// entry in `COLUMNS` comes from `T::KIND`.
macro_rules! athyg_record {
    (
        $(#[$meta:meta])*
        $name:ident => $version:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: Option<$ty>, )+
        }

        impl $crate::schema::Record for $name {
            const VERSION: $crate::schema::Version = $crate::schema::Version::$version;
            const COLUMNS: &'static [$crate::schema::Column] = &[
                $(
                    $crate::schema::Column {
                        name: stringify!($field),
                        kind: <$ty as $crate::process::parse::FromToken>::KIND,
                    },
                )+
            ];
            const ELEMENT_COUNT: usize = Self::COLUMNS.len();

            fn from_fields(fields: &[&str]) -> Self {
                let mut fields = fields.iter().copied();
                Self {
                    $(
                        $field: <$ty as $crate::process::parse::FromToken>::from_token(
                            fields.next().unwrap_or_default(),
                        ),
                    )+
                }
            }

            fn values(&self) -> Vec<$crate::schema::Value<'_>> {
                vec![
                    $( <$ty as $crate::process::parse::FromToken>::as_value(&self.$field), )+
                ]
            }
        }
    };
}

pub(crate) use athyg_record;
