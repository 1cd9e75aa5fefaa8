#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

pub mod dataset;
pub mod ellipsoid;
pub mod geodetic;
pub mod position;
pub mod signal;
pub mod summary;
pub mod trajectory;

#[cfg(feature = "html")]
#[cfg_attr(docsrs, doc(cfg(feature = "html")))]
pub mod plot;

mod constants;
mod error;
mod reader;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        dataset::DatasetLoader,
        ellipsoid::Ellipsoid,
        error::Error,
        geodetic::{CoordinateConverter, Error as GeodeticError},
        position::{EcefPosition, GeodeticPosition},
        signal::{SignalColumn, SignalRecord, SignalTable, SignalTableBuilder},
        summary::{
            CategoricalSummary, NumericSummary, SignalInsights, SignalSummary, SummaryReporter,
        },
        trajectory::{Dataset, EmptyTrajectory, Trajectory},
    };

    #[cfg(feature = "html")]
    #[cfg_attr(docsrs, doc(cfg(feature = "html")))]
    pub use crate::plot::{Figure, Panel, TrajectoryPlotter};

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
}
