//! Draws one of the built-in turtle programs as SVG or HTML.
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use turtle_trace::{
    Instruction, Pose, Program, SvgConfig, render_html, render_svg, run, write_document, write_to,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Square,
    Star,
    Spiral,
    Flower,
}

/// Rings drawn by the spiral; each ring's sides grow by `size / SPIRAL_RINGS`.
const SPIRAL_RINGS: u32 = 20;

#[derive(Parser, Debug)]
#[command(name = "turtle-svg")]
#[command(about = "Runs a built-in turtle program and renders the path it draws")]
#[command(version)]
struct Args {
    /// Program to draw
    #[arg(short, long, value_enum, default_value = "square")]
    shape: Shape,

    /// Side length used by the program
    #[arg(long, default_value_t = 100.0)]
    size: f64,

    /// Pen width
    #[arg(long, default_value_t = 1.0)]
    pen_size: f64,

    /// Canvas width and height
    #[arg(long, default_value_t = 500.0)]
    canvas: f64,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Wrap the SVG in an HTML page
    #[arg(long)]
    html: bool,
}

fn program_for(shape: Shape, size: f64, pen_size: f64) -> Program {
    use Instruction as I;

    let body: Vec<Instruction> = match shape {
        Shape::Square => vec![I::repeat(4, [I::forward(size), I::left(90.0)])],
        Shape::Star => vec![I::repeat(5, [I::forward(size), I::right(144.0)])],
        Shape::Spiral => (1..=SPIRAL_RINGS)
            .map(|ring| {
                let side = size * f64::from(ring) / f64::from(SPIRAL_RINGS);
                I::repeat(2, [I::forward(side), I::left(90.0)])
            })
            .collect(),
        Shape::Flower => vec![I::repeat(
            36,
            [
                I::repeat(4, [I::forward(size), I::left(90.0)]),
                I::left(10.0),
            ],
        )],
    };

    let mut program = vec![I::pen_size(pen_size)];
    program.extend(body);
    program
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let program = program_for(args.shape, args.size, args.pen_size);
    let start = Pose::new(args.canvas / 2.0, args.canvas / 2.0, 0.0);
    let trace = run(start, &program).context("failed to evaluate turtle program")?;
    tracing::info!(poses = trace.len(), shape = ?args.shape, "program evaluated");

    let config = SvgConfig {
        width: args.canvas,
        height: args.canvas,
        ..Default::default()
    };
    let svg = render_svg(&trace.segments(), &config);
    let document = if args.html {
        render_html(&svg, "Turtle drawing")
    } else {
        svg
    };

    match &args.output {
        Some(path) => write_document(path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => write_to(io::stdout().lock(), &document)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_len(shape: Shape) -> usize {
        let program = program_for(shape, 100.0, 2.0);
        run(Pose::new(250.0, 250.0, 0.0), &program).unwrap().len()
    }

    #[test]
    fn test_shape_trace_lengths() {
        // Start pose, pen size, then the shape itself.
        assert_eq!(trace_len(Shape::Square), 1 + 1 + 4 * 2);
        assert_eq!(trace_len(Shape::Star), 1 + 1 + 5 * 2);
        assert_eq!(trace_len(Shape::Spiral), 1 + 1 + SPIRAL_RINGS as usize * 2 * 2);
        assert_eq!(trace_len(Shape::Flower), 1 + 1 + 36 * (4 * 2 + 1));
    }

    #[test]
    fn test_spiral_sides_grow() {
        let program = program_for(Shape::Spiral, 100.0, 1.0);
        let trace = run(Pose::new(250.0, 250.0, 0.0), &program).unwrap();
        let lengths: Vec<f64> = trace
            .segments()
            .iter()
            .map(|seg| seg.length())
            .filter(|len| *len > 0.0)
            .collect();

        assert_eq!(lengths.len(), SPIRAL_RINGS as usize * 2);
        assert!((lengths[0] - 5.0).abs() < 1e-9);
        assert!((lengths.last().unwrap() - 100.0).abs() < 1e-9);
        assert!(lengths.windows(2).all(|w| w[1] >= w[0] - 1e-9));
    }

    #[test]
    fn test_square_closes() {
        let start = Pose::new(250.0, 250.0, 0.0);
        let trace = run(start, &program_for(Shape::Square, 80.0, 1.0)).unwrap();
        assert!(trace.last().unwrap().abs_diff_eq(&start, 1e-6));
    }
}
