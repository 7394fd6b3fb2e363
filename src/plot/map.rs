use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path as SvgPath, Rectangle, Text};
use svg::Document;

use crate::samples::{AgeInterval, SampleRecord};

const MAP_WIDTH: f32 = 720.0;
const MAP_HEIGHT: f32 = 360.0;
const MARGIN: f32 = 20.0;
const LEGEND_WIDTH: f32 = 230.0;
const LEGEND_LINE_HEIGHT: f32 = 14.0;

/// Color for rows whose age interval is missing.
const UNDATED_COLOR: &str = "slategrey";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// Closest-match individuals
    Circle,
    /// Individuals carrying the query label itself
    Triangle,
}

/// One plotted row set: a haplogroup label and the samples belonging to it.
pub struct MapLayer<'a> {
    pub label: String,
    pub marker: Marker,
    pub rows: Vec<&'a SampleRecord>,
}

/// Equirectangular world projection into the map rectangle.
fn project(lat: f64, long: f64) -> (f32, f32) {
    let x = MARGIN + ((long + 180.0) / 360.0) as f32 * MAP_WIDTH;
    let y = MARGIN + ((90.0 - lat) / 180.0) as f32 * MAP_HEIGHT;
    (x, y)
}

fn circle(x: f32, y: f32, color: &str) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", 2.8)
        .set("fill", color)
        .set("stroke", "black")
        .set("stroke-width", 0.3)
}

fn triangle(x: f32, y: f32, color: &str) -> SvgPath {
    let data = Data::new()
        .move_to((x, y - 4.0))
        .line_to((x - 3.5, y + 3.0))
        .line_to((x + 3.5, y + 3.0))
        .close();
    SvgPath::new()
        .set("d", data)
        .set("fill", color)
        .set("stroke", "black")
        .set("stroke-width", 0.3)
}

fn interval_color(interval: Option<AgeInterval>) -> &'static str {
    interval.map_or(UNDATED_COLOR, |i| i.color())
}

fn interval_name(interval: Option<AgeInterval>) -> &'static str {
    interval.map_or("undated", |i| i.label())
}

/// Render the layers as an SVG document: graticule background, one mark per
/// located sample, legend entries per (label, age interval) group. Rows
/// without coordinates are skipped.
pub fn document(layers: &[MapLayer]) -> Document {
    let total_width = MAP_WIDTH + 2.0 * MARGIN + LEGEND_WIDTH;
    let total_height = MAP_HEIGHT + 2.0 * MARGIN;

    let mut doc = Document::new()
        .set("viewBox", (0.0, 0.0, total_width, total_height))
        .set("width", total_width)
        .set("height", total_height)
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", total_width)
                .set("height", total_height)
                .set("fill", "white"),
        );

    // graticule every 30 degrees
    for lon_step in 0..=12 {
        let (x, _) = project(0.0, -180.0 + 30.0 * lon_step as f64);
        doc = doc.add(
            Line::new()
                .set("x1", x)
                .set("y1", MARGIN)
                .set("x2", x)
                .set("y2", MARGIN + MAP_HEIGHT)
                .set("stroke", "lightgrey")
                .set("stroke-width", 0.5),
        );
    }
    for lat_step in 0..=6 {
        let (_, y) = project(90.0 - 30.0 * lat_step as f64, 0.0);
        doc = doc.add(
            Line::new()
                .set("x1", MARGIN)
                .set("y1", y)
                .set("x2", MARGIN + MAP_WIDTH)
                .set("y2", y)
                .set("stroke", "lightgrey")
                .set("stroke-width", 0.5),
        );
    }
    doc = doc.add(
        Rectangle::new()
            .set("x", MARGIN)
            .set("y", MARGIN)
            .set("width", MAP_WIDTH)
            .set("height", MAP_HEIGHT)
            .set("fill", "none")
            .set("stroke", "darkgrey")
            .set("stroke-width", 1.0),
    );

    let mut legend: Vec<(Marker, &'static str, String)> = Vec::new();

    for layer in layers {
        let mut grouped: BTreeMap<Option<AgeInterval>, Vec<&SampleRecord>> = BTreeMap::new();
        for &row in &layer.rows {
            grouped.entry(row.age_interval).or_default().push(row);
        }
        for (interval, rows) in grouped {
            let color = interval_color(interval);
            legend.push((
                layer.marker,
                color,
                format!("{} ({})", layer.label, interval_name(interval)),
            ));
            for row in rows {
                let (Some(lat), Some(long)) = (row.lat, row.long) else {
                    continue;
                };
                let (x, y) = project(lat, long);
                doc = match layer.marker {
                    Marker::Circle => doc.add(circle(x, y, color)),
                    Marker::Triangle => doc.add(triangle(x, y, color)),
                };
            }
        }
    }

    let legend_x = MAP_WIDTH + 2.0 * MARGIN + 10.0;
    let mut legend_y = MARGIN + 10.0;
    for (marker, color, text) in legend {
        doc = match marker {
            Marker::Circle => doc.add(circle(legend_x, legend_y - 3.0, color)),
            Marker::Triangle => doc.add(triangle(legend_x, legend_y - 3.0, color)),
        };
        doc = doc.add(
            Text::new(text)
                .set("x", legend_x + 10.0)
                .set("y", legend_y)
                .set("font-size", 10)
                .set("font-family", "sans-serif"),
        );
        legend_y += LEGEND_LINE_HEIGHT;
    }

    doc
}

pub fn save(path: &Path, layers: &[MapLayer]) -> Result<()> {
    svg::save(path, &document(layers))
        .with_context(|| format!("failed to write map {}", path.display()))
}
