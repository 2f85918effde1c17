//! Defines a labeled instance with binary features.
use fixedbitset::FixedBitSet;

use crate::error::{Error, Result};

use std::fmt;


/// A labeled example.
/// The label and every feature take value in `{0, 1}`;
/// features are packed into a bit vector.
/// An `Instance` is immutable once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Instance {
    id: String,
    label: bool,
    features: FixedBitSet,
}


impl Instance {
    /// Construct a new instance from raw `0/1` values.
    /// Returns [`Error::NonBinaryValue`] if the label or a feature
    /// is neither `0` nor `1`.
    pub fn new<S>(id: S, label: u8, features: &[u8]) -> Result<Self>
        where S: Into<String>
    {
        let id = id.into();
        let label = binary(&id, "label", label)?;

        let mut bits = FixedBitSet::with_capacity(features.len());
        for (f, &value) in features.iter().enumerate() {
            let column = format!("feature {f}");
            bits.set(f, binary(&id, &column, value)?);
        }

        Ok(Self::from_bits(id, label, bits))
    }


    /// Construct a new instance from an already packed bit vector.
    /// The number of features is `features.len()`.
    #[inline]
    pub fn from_bits<S>(id: S, label: bool, features: FixedBitSet) -> Self
        where S: Into<String>
    {
        Self { id: id.into(), label, features }
    }


    /// The identifier of this instance.
    /// Used for tracing only.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }


    /// The label of this instance.
    #[inline]
    pub fn label(&self) -> bool {
        self.label
    }


    /// Returns `true` if the `f`th feature is `1`.
    #[inline]
    pub fn feature(&self, f: usize) -> bool {
        self.features.contains(f)
    }


    /// The packed feature vector.
    #[inline]
    pub fn features(&self) -> &FixedBitSet {
        &self.features
    }


    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.len()
    }
}


fn binary(id: &str, column: &str, value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(Error::NonBinaryValue {
            id: id.to_string(),
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}


impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = (0..self.n_features())
            .map(|i| if self.feature(i) { '1' } else { '0' })
            .collect::<String>();
        f.debug_struct("Instance")
            .field("id", &self.id)
            .field("label", &u8::from(self.label))
            .field("features", &bits)
            .finish()
    }
}
