//! Implements [`Serialize`] and [`Deserialize`] for the textual types.
//!
//! Scope names, scopes and selectors are stored in their source form, the way they appear in
//! theme files. Deserialization parses the text and fails on malformed input.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ast::Selector;
use crate::name::ScopeName;
use crate::parse::ParseError;
use crate::scope::Scope;

struct FromStrVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<T> Visitor<'_> for FromStrVisitor<T>
where
    T: FromStr<Err = ParseError>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

macro_rules! impl_serde_via_str {
    ($($ty:ty => $expecting:literal),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserializer.deserialize_str(FromStrVisitor {
                        expecting: $expecting,
                        marker: PhantomData,
                    })
                }
            }
        )+
    };
}

impl_serde_via_str! {
    ScopeName => "a dotted scope name",
    Scope => "a whitespace-separated list of scope names",
    Selector => "a scope selector",
}
