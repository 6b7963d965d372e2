// tests/rendering.rs
use glam::DVec2;
use turtle_trace::{
    Instruction, Pose, SvgConfig, SvgDocument, Trace, render_html, render_svg, run, write_document,
    write_to,
};

use Instruction as I;

fn square_trace() -> Trace {
    let program = vec![
        I::pen_size(2.0),
        I::repeat(4, [I::forward(50.0), I::left(90.0)]),
    ];
    run(Pose::new(250.0, 250.0, 0.0), &program).unwrap()
}

#[test]
fn test_segments_pair_consecutive_poses() {
    let trace = square_trace();
    let segments = trace.segments();
    assert_eq!(segments.len(), trace.len() - 1);

    for (i, seg) in segments.iter().enumerate() {
        let (a, b) = (trace.poses()[i], trace.poses()[i + 1]);
        assert_eq!(seg.start, a.position);
        assert_eq!(seg.end, b.position);
        assert_eq!(seg.pen_size, a.pen_size);
    }

    // The pen change itself is drawn with the old width.
    assert_eq!(segments[0].pen_size, 1.0);
    assert_eq!(segments[1].pen_size, 2.0);
    // Turns and pen changes do not move the turtle.
    assert!(segments[0].is_degenerate());
    assert!(segments[2].is_degenerate());
    assert!((segments[1].length() - 50.0).abs() < 1e-9);
}

#[test]
fn test_short_traces_have_no_segments() {
    let single = run(Pose::default(), &[]).unwrap();
    assert!(single.segments().is_empty());
}

#[test]
fn test_render_svg_lines() {
    let segments = square_trace().segments();
    let svg = render_svg(&segments, &SvgConfig::default());

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="0 0 500.0 500.0""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<line ").count(), segments.len());
    assert!(!svg.contains("<rect"));

    // Second segment is the first side of the square, drawn 2 units wide.
    assert!(
        svg.contains(r#"<line x1="250.0" y1="250.0" x2="300.0" y2="250.0" stroke="black" stroke-width="2.0""#),
        "{svg}"
    );
    assert!(!svg.contains("-0.0"), "negative zero leaked: {svg}");
}

#[test]
fn test_render_svg_config() {
    let segments = vec![turtle_trace::Segment {
        start: DVec2::new(1.23456, -0.00001),
        end: DVec2::new(10.0, 20.5),
        pen_size: 0.5,
    }];
    let config = SvgConfig {
        width: 100.0,
        height: 80.0,
        precision: 3,
        stroke: "#ff0000".to_string(),
        background: Some("white".to_string()),
    };
    let svg = render_svg(&segments, &config);

    assert!(svg.contains(r#"width="100.000" height="80.000""#));
    assert!(svg.contains(r#"<rect x="0" y="0" width="100%" height="100%" fill="white"/>"#));
    assert!(svg.contains(r#"x1="1.235" y1="0.000" x2="10.000" y2="20.500""#), "{svg}");
    assert!(svg.contains(r##"stroke="#ff0000" stroke-width="0.500""##));
}

#[test]
fn test_render_svg_without_segments() {
    let svg = render_svg(&[], &SvgConfig::default());
    assert_eq!(svg.matches("<line").count(), 0);
    assert!(svg.contains("</svg>"));
}

#[test]
fn test_svg_document_streams_into_writer() {
    use std::fmt::Write as _;

    let segments = square_trace().segments();
    let config = SvgConfig::default();

    let mut out = String::from("<!-- square -->\n");
    write!(out, "{}", SvgDocument::new(&segments, &config)).unwrap();
    assert_eq!(
        out.strip_prefix("<!-- square -->\n").unwrap(),
        render_svg(&segments, &config)
    );
}

#[test]
fn test_render_html_wraps_and_escapes() {
    let svg = render_svg(&square_trace().segments(), &SvgConfig::default());
    let html = render_html(&svg, "Squares & <Stars>");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Squares &amp; &lt;Stars&gt;</title>"));
    assert!(html.contains(&svg));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_write_to_buffer() {
    let mut buf = Vec::new();
    write_to(&mut buf, "<svg></svg>").unwrap();
    assert_eq!(buf, b"<svg></svg>");
}

#[test]
fn test_write_document_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.svg");

    let svg = render_svg(&square_trace().segments(), &SvgConfig::default());
    write_document(&path, &svg).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), svg);

    // Writing again truncates.
    write_document(&path, "short").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
}

#[test]
fn test_write_document_reports_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.svg");
    assert!(matches!(
        write_document(&path, "x"),
        Err(turtle_trace::TurtleError::Io(_))
    ));
}
