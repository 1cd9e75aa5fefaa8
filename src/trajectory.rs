//! Receiver trajectories
use std::path::{Path, PathBuf};

use crate::{
    geodetic::{CoordinateConverter, Error as GeodeticError},
    position::{EcefPosition, GeodeticPosition},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Trajectory] is a non empty series of ECEF samples, in recording order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<EcefPosition>"))]
pub struct Trajectory(Vec<EcefPosition>);

/// Error raised when building a [Trajectory] without any sample
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
#[error("a trajectory requires at least one sample")]
pub struct EmptyTrajectory;

impl TryFrom<Vec<EcefPosition>> for Trajectory {
    type Error = EmptyTrajectory;
    fn try_from(samples: Vec<EcefPosition>) -> Result<Self, Self::Error> {
        Self::new(samples).ok_or(EmptyTrajectory)
    }
}

impl Trajectory {
    /// Builds a new [Trajectory]. Returns None if `samples` is empty.
    pub fn new(samples: Vec<EcefPosition>) -> Option<Self> {
        if samples.is_empty() {
            None
        } else {
            Some(Self(samples))
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a [Trajectory] has at least one sample.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First recorded sample
    pub fn start(&self) -> EcefPosition {
        self.0[0]
    }

    /// Last recorded sample. Same as [Self::start] for single sample trajectories.
    pub fn end(&self) -> EcefPosition {
        self.0[self.0.len() - 1]
    }

    pub fn samples(&self) -> &[EcefPosition] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EcefPosition> {
        self.0.iter()
    }

    /// Converts all samples to geodetic coordinates, preserving their order.
    pub fn to_geodetic(
        &self,
        converter: &CoordinateConverter,
    ) -> Result<Vec<GeodeticPosition>, GeodeticError> {
        converter.convert(&self.0)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a EcefPosition;
    type IntoIter = std::slice::Iter<'a, EcefPosition>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// [Dataset] is a titled [Trajectory]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset {
    /// Display title
    pub title: String,
    /// Source file, when loaded from one
    pub path: Option<PathBuf>,
    pub trajectory: Trajectory,
}

impl Dataset {
    pub fn new(title: &str, trajectory: Trajectory) -> Self {
        Self {
            title: title.to_string(),
            path: None,
            trajectory,
        }
    }

    /// Copies and returns Self with updated title
    pub fn with_title(&self, title: &str) -> Self {
        let mut s = self.clone();
        s.title = title.to_string();
        s
    }

    /// Copies and returns Self with source path
    pub fn with_path(&self, path: &Path) -> Self {
        let mut s = self.clone();
        s.path = Some(path.to_path_buf());
        s
    }
}
