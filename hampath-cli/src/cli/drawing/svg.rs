//! SVG drawing with a fixed circular layout.
//!
//! Vertices sit on a circle in insertion order, starting at the top and
//! running clockwise, so the same graph always produces the same document.

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use hampath_core::{Graph, HamiltonianPath};

const WIDTH: f64 = 1120.0;
const HEIGHT: f64 = 840.0;
const TITLE_BAND: f64 = 70.0;
const NODE_RADIUS: f64 = 24.0;
const LOOP_RADIUS: f64 = 12.0;

const EDGE_COLOUR: &str = "#444444";
const EDGE_WIDTH: f64 = 1.5;
const PATH_COLOUR: &str = "red";
const PATH_WIDTH: f64 = 3.0;
const NODE_COLOUR: &str = "#1f78b4";

type Point = (f64, f64);

/// Draws `graph` as an SVG document, overlaying the edges of `path`.
///
/// Edges are grey with arrowheads when the graph is directed. Path edges are
/// redrawn in red at width 3, and the title names the path or states that
/// none was found. The canvas is always 1120x840.
///
/// # Examples
/// ```
/// use hampath_cli::cli::render_svg;
/// use hampath_core::{Graph, search};
///
/// let graph: Graph = [("A".to_owned(), "B".to_owned())].into_iter().collect();
/// let paths = search(&graph, None, false)?;
/// let svg = render_svg(&graph, paths.first());
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("Hamiltonian path: A -&gt; B"));
/// # Ok::<(), hampath_core::HampathError>(())
/// ```
#[must_use]
pub fn render_svg(graph: &Graph, path: Option<&HamiltonianPath<String>>) -> String {
    let positions = layout(graph);
    let directed = graph.is_directed();
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n"
    );
    if directed {
        svg.push_str("<defs>\n");
        svg.push_str(&arrow_marker("arrow", EDGE_COLOUR));
        svg.push_str(&arrow_marker("path-arrow", PATH_COLOUR));
        svg.push_str("</defs>\n");
    }
    svg.push_str(&format!(
        "<rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"white\"/>\n"
    ));
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"42\" text-anchor=\"middle\" font-family=\"Arial, sans-serif\" \
         font-size=\"22\">{}</text>\n",
        WIDTH / 2.0,
        escape_xml(&title(path))
    ));

    let marker = directed.then_some("arrow");
    for (from, to) in graph.edges() {
        let (Some(&start), Some(&end)) = (positions.get(from.as_str()), positions.get(to.as_str()))
        else {
            continue;
        };
        if from == to {
            svg.push_str(&self_loop(start));
        } else {
            svg.push_str(&edge_line(start, end, EDGE_COLOUR, EDGE_WIDTH, marker));
        }
    }
    if let Some(path) = path {
        let marker = directed.then_some("path-arrow");
        for (from, to) in path.edges() {
            if let (Some(&start), Some(&end)) =
                (positions.get(from.as_str()), positions.get(to.as_str()))
            {
                svg.push_str(&edge_line(start, end, PATH_COLOUR, PATH_WIDTH, marker));
            }
        }
    }

    for vertex in graph.vertices() {
        let Some(&(x, y)) = positions.get(vertex.as_str()) else {
            continue;
        };
        svg.push_str(&format!(
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{NODE_RADIUS}\" fill=\"{NODE_COLOUR}\"/>\n"
        ));
        svg.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"Arial, sans-serif\" \
             font-size=\"14\" font-weight=\"bold\" fill=\"white\">{}</text>\n",
            y + 5.0,
            escape_xml(vertex)
        ));
    }
    svg.push_str("</svg>\n");
    svg
}

fn title(path: Option<&HamiltonianPath<String>>) -> String {
    match path {
        Some(path) => format!("Hamiltonian path: {path}"),
        None => "no Hamiltonian path found".to_owned(),
    }
}

/// Positions every vertex on a circle around the centre of the drawing area.
fn layout(graph: &Graph) -> HashMap<&str, Point> {
    let centre = (WIDTH / 2.0, TITLE_BAND + (HEIGHT - TITLE_BAND) / 2.0);
    let radius = WIDTH.min(HEIGHT - TITLE_BAND) / 2.0 - 2.0 * NODE_RADIUS;
    let count = u32::try_from(graph.vertex_count()).unwrap_or(u32::MAX);
    graph
        .vertices()
        .zip(0_u32..)
        .map(|(vertex, index)| {
            let point = if count == 1 {
                centre
            } else {
                let angle = -FRAC_PI_2 + TAU * f64::from(index) / f64::from(count);
                (
                    centre.0 + radius * angle.cos(),
                    centre.1 + radius * angle.sin(),
                )
            };
            (vertex.as_str(), point)
        })
        .collect()
}

fn arrow_marker(id: &str, colour: &str) -> String {
    format!(
        "<marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerUnits=\"userSpaceOnUse\" \
         markerWidth=\"12\" markerHeight=\"12\" orient=\"auto\">\
         <path d=\"M0,0 L10,5 L0,10 z\" fill=\"{colour}\"/></marker>\n"
    )
}

/// A straight edge trimmed to the rims of both vertex circles.
fn edge_line(start: Point, end: Point, colour: &str, width: f64, marker: Option<&str>) -> String {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = dx.hypot(dy);
    let (x1, y1, x2, y2) = if length > 2.0 * NODE_RADIUS {
        let (ux, uy) = (dx / length * NODE_RADIUS, dy / length * NODE_RADIUS);
        (start.0 + ux, start.1 + uy, end.0 - ux, end.1 - uy)
    } else {
        (start.0, start.1, end.0, end.1)
    };
    let marker = marker
        .map(|id| format!(" marker-end=\"url(#{id})\""))
        .unwrap_or_default();
    format!(
        "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" stroke=\"{colour}\" \
         stroke-width=\"{width}\"{marker}/>\n"
    )
}

fn self_loop((x, y): Point) -> String {
    format!(
        "<circle cx=\"{x:.1}\" cy=\"{:.1}\" r=\"{LOOP_RADIUS}\" fill=\"none\" stroke=\"{EDGE_COLOUR}\" \
         stroke-width=\"{EDGE_WIDTH}\"/>\n",
        y - NODE_RADIUS - LOOP_RADIUS / 2.0
    )
}

/// Escapes XML markup and replaces control characters XML cannot carry.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\t' | '\n' | '\r' => out.push(ch),
            ch if ch.is_control() => out.push(char::REPLACEMENT_CHARACTER),
            ch => out.push(ch),
        }
    }
    out
}
