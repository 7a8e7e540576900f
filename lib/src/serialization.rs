//! Persistence of compiled transformer maps and configurations.
//!
//! Any type that is `Serialize + Deserialize` gets [`SerializableParams`]
//! through a blanket impl backed by `bincode`. The file helpers write the
//! raw byte encoding; there is no header or version tag.

use crate::transform::error::{Result, TransformError};
use std::path::Path;

/// A parameter representation that can be serialised to and from bytes.
pub trait SerializableParams: Sized {
    /// Serialise into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Deserialise from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Write the byte encoding to `path`.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read a value previously written with [`SerializableParams::save_to_file`].
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(TransformError::from)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(TransformError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{LinearScalingTransformation, SimpleTransform, TransformationMap};

    #[test]
    fn test_bytes_round_trip() {
        let map = TransformationMap::new()
            .with_global(vec![LinearScalingTransformation::new().into()])
            .with_feature("a", vec![SimpleTransform::threshold(0.0, 2.0).into()]);
        let bytes = map.to_bytes().unwrap();
        assert_eq!(TransformationMap::from_bytes(&bytes).unwrap(), map);
    }

    #[test]
    fn test_from_bytes_garbage() {
        let result = TransformationMap::from_bytes(&[0xff; 3]);
        assert!(matches!(result, Err(TransformError::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("feature_transforms_does_not_exist.bin");
        let result = TransformationMap::load_from_file(&path);
        assert!(matches!(result, Err(TransformError::Io(_))));
    }
}
