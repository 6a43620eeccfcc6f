//! Cell locations of 3D fields.

use std::fmt;

/// Where on a grid cell the values of a field are located.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CellLocation {
    #[default]
    Centre,
    XLow,
    YLow,
    ZLow,
}

impl CellLocation {
    /// Human-readable name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Centre => "CELL_CENTRE",
            Self::XLow => "CELL_XLOW",
            Self::YLow => "CELL_YLOW",
            Self::ZLow => "CELL_ZLOW",
        }
    }
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
