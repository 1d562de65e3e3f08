// Copyright (c) 2024 The LocalAttest Project

//! Macros implementing the common trait surface of the fixed-size byte
//! newtypes in this crate.

/// Implement conversions, comparisons, hashing, hex-formatted display, and
/// serde support for a newtype tuple struct wrapping a `[u8; $size]`.
///
/// The wrapped array may be larger than 32 bytes, so the serde support is
/// written by hand rather than derived.
#[macro_export]
macro_rules! impl_newtype_for_bytearray {
    ($($name:ident, $size:ident;)*) => {$(
        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0[..]
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self([0u8; $size])
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(src: [u8; $size]) -> Self {
                Self(src)
            }
        }

        impl From<&[u8; $size]> for $name {
            fn from(src: &[u8; $size]) -> Self {
                Self(*src)
            }
        }

        impl From<$name> for [u8; $size] {
            fn from(src: $name) -> Self {
                src.0
            }
        }

        impl<'bytes> ::core::convert::TryFrom<&'bytes [u8]> for $name {
            type Error = ::la_util_encodings::Error;

            fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
                if src.len() < $size {
                    return Err(::la_util_encodings::Error::InvalidInputLength);
                }

                let mut retval = Self([0u8; $size]);
                retval.0[..].copy_from_slice(&src[..$size]);
                Ok(retval)
            }
        }

        impl ::core::convert::TryFrom<::alloc::vec::Vec<u8>> for $name {
            type Error = ::la_util_encodings::Error;

            fn try_from(src: ::alloc::vec::Vec<u8>) -> Result<Self, Self::Error> {
                Self::try_from(&src[..])
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                write!(
                    formatter,
                    concat!(stringify!($name), "({})"),
                    ::hex_fmt::HexFmt(&self.0)
                )
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                write!(formatter, "{}", ::hex_fmt::HexFmt(&self.0))
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0[..] == other.0[..]
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.0, state)
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::la_util_from_random::FromRandom for $name {
            fn from_random<R: ::rand_core::CryptoRng + ::rand_core::RngCore>(
                csprng: &mut R,
            ) -> Self {
                Self(::la_util_from_random::FromRandom::from_random(csprng))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&self.0[..])
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                struct ByteVisitor;

                impl<'de> ::serde::de::Visitor<'de> for ByteVisitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        formatter: &mut ::core::fmt::Formatter,
                    ) -> ::core::fmt::Result {
                        write!(formatter, "a byte array of length {}", $size)
                    }

                    fn visit_bytes<E: ::serde::de::Error>(
                        self,
                        value: &[u8],
                    ) -> Result<Self::Value, E> {
                        if value.len() != $size {
                            return Err(E::invalid_length(value.len(), &self));
                        }
                        <$name as ::core::convert::TryFrom<&[u8]>>::try_from(value)
                            .map_err(|_| E::invalid_length(value.len(), &self))
                    }

                    fn visit_seq<A: ::serde::de::SeqAccess<'de>>(
                        self,
                        mut seq: A,
                    ) -> Result<Self::Value, A::Error> {
                        let mut retval = $name([0u8; $size]);
                        for (idx, byte) in retval.0.iter_mut().enumerate() {
                            *byte = seq.next_element()?.ok_or_else(|| {
                                ::serde::de::Error::invalid_length(idx, &self)
                            })?;
                        }
                        Ok(retval)
                    }
                }

                deserializer.deserialize_bytes(ByteVisitor)
            }
        }
    )*}
}
