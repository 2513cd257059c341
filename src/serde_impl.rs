//! Serde support: an [`AtomicFlag`] serializes exactly like a `bool`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::flag::AtomicFlag;
use crate::trace::trace_event;

impl Serialize for AtomicFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.get())
    }
}

impl<'de> Deserialize<'de> for AtomicFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(Self::new)
    }
}

impl AtomicFlag {
    /// Decodes a `bool` from `deserializer` and stores it into this flag.
    ///
    /// Unlike [`Deserialize::deserialize`] this writes through `&self`, so a
    /// flag that is already shared between threads can be updated in place.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if the input is not a boolean. The
    /// stored value is left unchanged.
    ///
    /// Only the boolean itself is read. The value is stored as soon as it
    /// decodes, before the caller checks for trailing input (for example with
    /// `serde_json::Deserializer::end`). An input such as `true xyz` therefore
    /// stores `true` and only then fails the trailing check. Decode into a
    /// fresh value with [`Deserialize::deserialize`] first if the whole input
    /// must validate before the flag changes.
    pub fn deserialize_into<'de, D>(&self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = bool::deserialize(deserializer)?;
        self.store(value);
        trace_event!(value, "flag decoded from deserializer");
        Ok(())
    }
}
