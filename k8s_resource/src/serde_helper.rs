/// Implements `Serialize`/`Deserialize` for a quantity type and generates a
/// `serde_with` adapter, `Helper`, for fields holding the raw representation.
///
/// Quantities serialize as their `Display` string. They deserialize from a
/// Kubernetes string or from a bare number, which `$from_i64`/`$from_f64`
/// turn into the quantity, returning `None` when it is out of range.
macro_rules! impl_serialize_as {
    (
        $type:ident,
        $raw:ty,
        $expecting:literal,
        $from_i64:expr,
        $from_f64:expr
    ) => {
        struct QuantityVisitor;

        impl<'de> serde::de::Visitor<'de> for QuantityVisitor {
            type Value = $type;

            fn expecting(
                &self,
                formatter: &mut std::fmt::Formatter,
            ) -> std::fmt::Result {
                formatter.write_str($expecting)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<$type>().map_err(E::custom)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ($from_i64)(v).ok_or_else(|| {
                    E::invalid_value(serde::de::Unexpected::Signed(v), &self)
                })
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let v = i64::try_from(v).map_err(|_| {
                    E::invalid_value(serde::de::Unexpected::Unsigned(v), &self)
                })?;
                serde::de::Visitor::visit_i64(self, v)
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ($from_f64)(v).ok_or_else(|| {
                    E::invalid_value(serde::de::Unexpected::Float(v), &self)
                })
            }
        }

        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(QuantityVisitor)
            }
        }

        #[doc = concat!(
            "`serde_with` adapter (de)serializing a raw `",
            stringify!($raw),
            "` as a [`",
            stringify!($type),
            "`] string."
        )]
        pub struct Helper;

        impl serde_with::SerializeAs<$raw> for Helper {
            fn serialize_as<S>(value: &$raw, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&$type::from(*value), serializer)
            }
        }

        impl<'de> serde_with::DeserializeAs<'de, $raw> for Helper {
            fn deserialize_as<D>(deserializer: D) -> Result<$raw, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(QuantityVisitor).map(<$raw>::from)
            }
        }
    };
}
