//! RON I/O
use crate::{error::Result, traits::Geometry};
use std::fs;

pub trait ConvertToSerializable: Sized {
    //! Convert to/from a serializable form holding the geometry type, id and point references
    type SerializableType: serde::Serialize;
    /// Convert to the serializable form
    fn to_serializable(&self) -> Self::SerializableType;
    /// Restore from the serializable form
    ///
    /// Fails if the stored data is for a different geometry type or has the wrong number
    /// of points. Restored points are new nodes, not shared with any other geometry.
    fn from_serializable(s: Self::SerializableType) -> Result<Self>;
}

pub trait RONExport: Geometry {
    //! Geometry export for RON

    /// Generate the RON string for a geometry
    fn to_ron_string(&self) -> Result<String>;

    /// Export as RON
    fn export_as_ron(&self, filename: &str) -> Result<()> {
        let ron_s = self.to_ron_string()?;
        fs::write(filename, ron_s)?;
        Ok(())
    }
}

pub trait RONImport: Sized + Geometry {
    //! Geometry import for RON

    /// Create a geometry from a RON string
    fn from_ron_string(s: &str) -> Result<Self>;

    /// Import from RON
    fn import_from_ron(filename: &str) -> Result<Self> {
        let content = fs::read_to_string(filename)?;
        Self::from_ron_string(&content)
    }
}
