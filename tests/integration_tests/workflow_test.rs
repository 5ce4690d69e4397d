use bezier_stretch::data::StretchCase;
use bezier_stretch::modules::export::json::frames_to_json;
use bezier_stretch::modules::export::plot::{render_svg, PlotOptions, PlotSeries};
use bezier_stretch::modules::export::svg_path::ToSvgPath;
use bezier_stretch::modules::motion::stretch::stretch_control_polygon;
use bezier_stretch::modules::parse::json::cases_from_json;
use bezier_stretch::{evaluate_bezier, generate_stretched_curve, pt, FrameSequence};

#[test]
fn test_complete_workflow() {
    // Read the cases the demo driver runs by default
    let cases = cases_from_json(
        r#"[
            {"start": [0, 0], "end": [5, 5], "frames": 60, "factor": 0.5},
            {"start": [5, 0], "end": [0, 5], "frames": 60, "factor": 0.5},
            {"start": [2, 0], "end": [2, 5], "frames": 60, "factor": 0.5}
        ]"#,
    )
    .unwrap();
    assert_eq!(cases, StretchCase::default_cases());

    // Build the control polygon of the first case and check its path data
    let polygon = stretch_control_polygon(cases[0].start, cases[0].end, cases[0].factor);
    assert_eq!(polygon.to_svg_path(), "M0,0 Q5,10,5,5");

    // The explicit polygon and the generator agree
    let via_polygon = evaluate_bezier(&polygon, 60).unwrap();
    let via_generator = generate_stretched_curve(pt!(0, 0), pt!(5, 5), 60, 0.5).unwrap();
    assert_eq!(via_polygon, via_generator);

    // Frames survive a JSON dump
    let json = frames_to_json(&via_generator).unwrap();
    let parsed: FrameSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, via_generator);

    // Every case can be plotted together
    let frames: Vec<FrameSequence> = cases
        .iter()
        .map(|case| case.curve().generate().unwrap())
        .collect();
    let series: Vec<PlotSeries> = cases
        .iter()
        .zip(&frames)
        .map(|(case, frames)| PlotSeries::new(case.display_label(), frames))
        .collect();
    let svg = render_svg(&series, &PlotOptions::default()).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn test_vertical_case_bulges_left() {
    let frames = generate_stretched_curve(pt!(2, 0), pt!(2, 5), 60, 0.5).unwrap();
    let (xs, ys) = frames.into_parts();

    assert_eq!(xs.len(), 60);
    assert_eq!((xs[0], ys[0]), (2.0, 0.0));
    assert_eq!((xs[59], ys[59]), (2.0, 5.0));

    // mid-curve frames deviate from the vertical line x = 2
    let deviation = xs[20..40]
        .iter()
        .map(|x| (x - 2.0).abs())
        .fold(0.0, f64::max);
    assert!(deviation > 0.5);
}
