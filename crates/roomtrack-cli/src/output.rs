//! Output formatting for route rendering.
//!
//! JSON output wraps the library response as `{"data": ...}`; text output is
//! a numbered walk-through meant for people.

use std::io::{self, Write};

use clap::ValueEnum;
use roomtrack_lib::{Polyline, RouteResponse};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::terminal::ColorPalette;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable JSON wrapped in a `data` envelope.
    #[default]
    Json,
    /// Turn-by-turn text.
    Text,
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    data: &'a T,
}

/// Write `value` as pretty JSON inside a `data` envelope.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Envelope { data: value })?;
    writeln!(out)
}

/// Extra context shown next to a text route.
#[derive(Debug, Clone, Default)]
pub struct RouteContext<'a> {
    /// Target exactly as the user typed it.
    pub requested: &'a str,
    /// Sum of edge weights along the path, when known.
    pub total_distance: Option<Decimal>,
    /// Names similar to the requested target, shown when nothing was found.
    pub suggestions: Vec<String>,
}

/// Render a route as numbered instructions.
pub fn write_route_text<W: Write>(
    out: &mut W,
    response: &RouteResponse,
    context: &RouteContext<'_>,
    palette: &ColorPalette,
) -> io::Result<()> {
    let p = palette;
    let (Some(start), Some(goal)) = (response.path.first(), response.path.last()) else {
        writeln!(
            out,
            "{}No route found to '{}'.{}{}",
            p.red,
            context.requested,
            p.reset,
            format_suggestions(&context.suggestions)
        )?;
        return Ok(());
    };

    writeln!(
        out,
        "Route to {}{}{} ({} {}):",
        p.white_bold,
        context.requested,
        p.reset,
        response.hop_count(),
        if response.hop_count() == 1 { "segment" } else { "segments" }
    )?;
    writeln!(out, "  {}STRT{} {}", p.tag_start, p.reset, start)?;
    for (index, segment) in response.route.iter().enumerate() {
        writeln!(
            out,
            "  {}WALK{} {:>2}. {} {}-> {}{}",
            p.tag_walk,
            p.reset,
            index + 1,
            segment.info,
            p.gray,
            segment.to,
            p.reset
        )?;
    }
    writeln!(out, "  {}GOAL{} {}", p.tag_goal, p.reset, goal)?;

    if let Some(total) = context.total_distance {
        writeln!(
            out,
            "Total distance: {}{}{}",
            p.green,
            total.round_dp(6).normalize(),
            p.reset
        )?;
    }
    Ok(())
}

/// Render network polylines as one line per segment.
pub fn write_polylines_text<W: Write>(out: &mut W, polylines: &[Polyline]) -> io::Result<()> {
    for [[lat_a, lng_a], [lat_b, lng_b]] in polylines {
        writeln!(out, "{lat_a},{lng_a} -> {lat_b},{lng_b}")?;
    }
    Ok(())
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(" Did you mean '{only}'?"),
        many => format!(
            " Did you mean one of: {}?",
            many.iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomtrack_lib::{plan_route, Location, Position, RecordSet, RouteRequest};

    fn two_stop_response() -> RouteResponse {
        let records = RecordSet {
            locations: vec![
                Location::parse("Door", "0", "0", "0", "1").unwrap(),
                Location::parse("Desk", "0", "3", "4", "1").unwrap(),
            ],
            indications: vec![roomtrack_lib::Indication {
                name_a: "Door".to_string(),
                name_b: "Desk".to_string(),
                forward_info: "Walk in".to_string(),
                backward_info: "Walk out".to_string(),
            }],
            groups: Vec::new(),
        };
        let here = Position::parse("0", "0", "0").unwrap();
        plan_route(&records, &RouteRequest::new("Desk", here)).unwrap()
    }

    fn render(response: &RouteResponse, context: &RouteContext<'_>) -> String {
        let mut buf = Vec::new();
        write_route_text(&mut buf, response, context, &ColorPalette::plain()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_route_lists_steps_and_distance() {
        let response = two_stop_response();
        let text = render(
            &response,
            &RouteContext {
                requested: "Desk",
                total_distance: Some(Decimal::from(5)),
                suggestions: Vec::new(),
            },
        );

        assert!(text.contains("Route to Desk (1 segment):"));
        assert!(text.contains("STRT Door"));
        assert!(text.contains(" 1. Walk out -> Desk"));
        assert!(text.contains("GOAL Desk"));
        assert!(text.contains("Total distance: 5"));
    }

    #[test]
    fn empty_route_mentions_suggestions() {
        let text = render(
            &RouteResponse::default(),
            &RouteContext {
                requested: "Dsk",
                total_distance: None,
                suggestions: vec!["Desk".to_string()],
            },
        );
        assert_eq!(text, "No route found to 'Dsk'. Did you mean 'Desk'?\n");
    }

    #[test]
    fn json_is_wrapped_in_data_envelope() {
        let mut buf = Vec::new();
        write_json(&mut buf, &RouteResponse::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["data"]["path"], serde_json::json!([]));
        assert_eq!(value["data"]["nodes"], serde_json::json!({}));
    }
}
