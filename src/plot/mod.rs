//! Trajectories rendition, as interactive HTML charts
use maud::{html, Markup, PreEscaped, Render, DOCTYPE};

use plotly::{
    color::NamedColor,
    common::{Line, Marker, Mode, Title},
    layout::{Axis, Legend},
    Layout, Plot as Plotly, Scatter,
};

use crate::{
    geodetic::CoordinateConverter,
    position::GeodeticPosition,
    prelude::Error,
    trajectory::Dataset,
};

#[cfg(feature = "log")]
use log::debug;

/// One chart: a trajectory in geodetic coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Dataset title
    pub title: String,
    /// Longitudes [°], in recording order
    pub longitudes: Vec<f64>,
    /// Latitudes [°], in recording order
    pub latitudes: Vec<f64>,
    /// (lon, lat) of the first sample [°]
    pub start: (f64, f64),
    /// (lon, lat) of the last sample [°]
    pub end: (f64, f64),
}

impl Panel {
    fn new(title: &str, positions: &[GeodeticPosition]) -> Option<Self> {
        let first = positions.first()?;
        let last = positions.last()?;
        Some(Self {
            title: title.to_string(),
            longitudes: positions.iter().map(|p| p.longitude_ddeg).collect(),
            latitudes: positions.iter().map(|p| p.latitude_ddeg).collect(),
            start: (first.longitude_ddeg, first.latitude_ddeg),
            end: (last.longitude_ddeg, last.latitude_ddeg),
        })
    }

    /// Number of samples in this chart
    pub fn len(&self) -> usize {
        self.longitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longitudes.is_empty()
    }

    fn marker(name: &str, (lon, lat): (f64, f64), color: NamedColor) -> Box<Scatter<f64, f64>> {
        Scatter::new(vec![lon], vec![lat])
            .mode(Mode::Markers)
            .name(name)
            .marker(Marker::new().size(10).color(color))
    }

    /// Builds the plotly chart
    pub fn plot(&self) -> Plotly {
        let layout = Layout::new()
            .title(Title::with_text(&self.title))
            .x_axis(
                Axis::new()
                    .title(Title::with_text("Longitude"))
                    .show_grid(true)
                    .grid_color("rgba(0, 0, 0, 0.2)"),
            )
            .y_axis(
                Axis::new()
                    .title(Title::with_text("Latitude"))
                    .show_grid(true)
                    .grid_color("rgba(0, 0, 0, 0.2)"),
            )
            .legend(Legend::new())
            .show_legend(true)
            .auto_size(true);

        let mut plotly = Plotly::new();
        plotly.set_layout(layout);

        plotly.add_trace(
            Scatter::new(self.longitudes.clone(), self.latitudes.clone())
                .mode(Mode::Lines)
                .name("Travel Path")
                .line(Line::new().width(1.8).color(NamedColor::RoyalBlue)),
        );
        plotly.add_trace(Self::marker("Start", self.start, NamedColor::Red));
        plotly.add_trace(Self::marker("End", self.end, NamedColor::Green));
        plotly
    }
}

impl Render for Panel {
    fn render(&self) -> Markup {
        html! {
            div class="column" {
                (PreEscaped(self.plot().to_inline_html(None)))
            }
        }
    }
}

/// [Figure] gathers one [Panel] per [Dataset], side by side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Renders this [Figure] as a standalone HTML page
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for Figure {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "GNSS Trajectories" }
                    script src="https://cdn.plot.ly/plotly-2.12.1.min.js" {};
                    link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.0/css/bulma.min.css";
                }
                body {
                    section class="section" {
                        h1 class="title" { "GNSS Trajectories" }
                        div class="columns" {
                            @for panel in &self.panels {
                                (panel)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// [TrajectoryPlotter] projects [Dataset]s onto geodetic charts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrajectoryPlotter {
    converter: CoordinateConverter,
}

impl TrajectoryPlotter {
    pub fn new(converter: CoordinateConverter) -> Self {
        Self { converter }
    }

    /// Converts all datasets, in order, into one [Figure].
    /// Fails if no dataset is given or on the first invalid sample.
    pub fn render(&self, datasets: &[Dataset]) -> Result<Figure, Error> {
        if datasets.is_empty() {
            return Err(Error::NoDatasets);
        }
        let mut panels = Vec::with_capacity(datasets.len());
        for dataset in datasets {
            let positions = dataset.trajectory.to_geodetic(&self.converter)?;
            let panel = Panel::new(&dataset.title, &positions).ok_or_else(|| match &dataset.path {
                Some(path) => Error::EmptyDataset(path.clone()),
                None => Error::EmptyDataset(dataset.title.clone().into()),
            })?;

            #[cfg(feature = "log")]
            debug!(
                "\"{}\": start {:?} end {:?}",
                panel.title, panel.start, panel.end
            );

            panels.push(panel);
        }
        Ok(Figure { panels })
    }
}
