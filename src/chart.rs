//! Highcharts HTML export for numeric series extracted from a frame.

use serde::{Deserialize, Serialize};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::frame::{FrameError, data_frame::DataFrame};

/// Prefix of the temporary files written by [`Page::print`].
pub const TEMP_FILE_PREFIX: &str = "highcharts";

const JQUERY_URL: &str = "https://code.jquery.com/jquery-3.1.1.min.js";
const HIGHCHARTS_URL: &str = "https://code.highcharts.com/highcharts.js";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::rgba(124, 181, 236, 1.0)
    }
}

/// One plotted series: rows of `[x, y, ...]` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: Color,
    pub data: Vec<Vec<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Color, data: Vec<Vec<f64>>) -> Self {
        Series {
            name: name.into(),
            color,
            data,
        }
    }

    /// `[x, y]` points from two numeric columns of `df`.
    pub fn from_frame(
        df: &DataFrame,
        name: impl Into<String>,
        color: Color,
        x: &str,
        y: &str,
    ) -> Result<Self, FrameError> {
        let data = df.numeric_values(&[x, y])?;
        Ok(Series::new(name, color, data))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Highcharts chart type, e.g. `line` or `scatter`
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    pub x_axis: String,
    pub y_axis: String,
    pub series: Vec<Series>,
}

/// A page of charts rendered into one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub charts: Vec<Chart>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_chart(&mut self, chart: Chart) {
        self.charts.push(chart);
    }

    /// Writes the page to a new temporary `.html` file, keeps the file, and
    /// hands its path to `callback` (e.g. to open it in a browser).
    pub fn print<F>(&self, callback: F) -> Result<PathBuf, FrameError>
    where
        F: FnOnce(&Page, &Path) -> Result<(), FrameError>,
    {
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(".html")
            .tempfile()?;
        self.write_to(&mut file)?;
        file.flush()?;
        let (_, path) = file.keep().map_err(io::Error::from)?;
        callback(self, &path)?;
        Ok(path)
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), FrameError> {
        writeln!(w, "<html>")?;
        writeln!(w, "\t<head>")?;
        writeln!(w, "\t\t<script src=\"{JQUERY_URL}\"></script>")?;
        writeln!(w, "\t\t<script src=\"{HIGHCHARTS_URL}\"></script>")?;
        writeln!(w, "\t</head>")?;
        writeln!(w, "\t<body>")?;
        for i in 0..self.charts.len() {
            writeln!(w, "\t\t<div id=\"chart-{i}\"></div>")?;
        }
        writeln!(w, "\t\t<script>")?;
        writeln!(w, "\t\t\t$(function () {{")?;
        for (i, chart) in self.charts.iter().enumerate() {
            write_chart(w, i, chart)?;
        }
        writeln!(w, "\t\t\t}});")?;
        writeln!(w, "\t\t</script>")?;
        writeln!(w, "\t</body>")?;
        writeln!(w, "</html>")?;
        Ok(())
    }
}

fn write_chart<W: Write>(w: &mut W, idx: usize, chart: &Chart) -> Result<(), FrameError> {
    writeln!(w, "\t\t\t\tHighcharts.chart('chart-{idx}', {{")?;
    writeln!(w, "\t\t\t\t\tchart: {{ type: {} }},", js(&chart.kind)?)?;
    writeln!(w, "\t\t\t\t\ttitle: {{ text: {} }},", js(&chart.title)?)?;
    writeln!(w, "\t\t\t\t\tsubtitle: {{ text: {} }},", js(&chart.subtitle)?)?;
    for (axis, title) in [("xAxis", &chart.x_axis), ("yAxis", &chart.y_axis)] {
        if !title.is_empty() {
            writeln!(
                w,
                "\t\t\t\t\t{axis}: {{ title: {{ enabled: true, text: {} }} }},",
                js(title)?
            )?;
        }
    }
    writeln!(w, "\t\t\t\t\tseries: [")?;
    for series in &chart.series {
        let Color { r, g, b, a } = series.color;
        writeln!(
            w,
            "\t\t\t\t\t\t{{ name: {}, color: 'rgba({r}, {g}, {b}, {a})', data: {} }},",
            js(&series.name)?,
            js(&series.data)?
        )?;
    }
    writeln!(w, "\t\t\t\t\t],")?;
    writeln!(w, "\t\t\t\t}});")?;
    Ok(())
}

// JSON is valid JavaScript; `</` is escaped so values can't close the script tag.
// Non-finite numbers serialize as `null`.
fn js<T: Serialize + ?Sized>(value: &T) -> Result<String, FrameError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
