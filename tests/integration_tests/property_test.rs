use approx::{assert_abs_diff_eq, assert_relative_eq};
use bezier_stretch::modules::motion::stretch::stretch_control_point;
use bezier_stretch::modules::sample::bezier::{bernstein_basis_matrix, point_at};
use bezier_stretch::{
    binomial_coefficient, evaluate_bezier, generate_stretched_curve, ControlPolygon, Point,
    TimeSchedule,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

fn random_polygon(rng: &mut StdRng, len: usize) -> ControlPolygon {
    let coordinate = Normal::new(0.0, 50.0).unwrap();
    let points = (0..len)
        .map(|_| Point::new(coordinate.sample(rng), coordinate.sample(rng)))
        .collect();
    ControlPolygon::new(points).unwrap()
}

#[test]
fn test_partition_of_unity_at_random_parameters() {
    let mut rng = StdRng::seed_from_u64(7);
    let unit = Uniform::new_inclusive(0.0, 1.0);

    for degree in 0..16 {
        let t_values: Vec<f64> = (0..50).map(|_| unit.sample(&mut rng)).collect();
        let basis = bernstein_basis_matrix(degree, &t_values);
        for row in basis.row_iter() {
            assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_random_polygons_interpolate_endpoints() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.gen_range(1..10);
        let num_frames = rng.gen_range(2..120);
        let polygon = random_polygon(&mut rng, len);

        let frames = evaluate_bezier(&polygon, num_frames).unwrap();
        assert_eq!(frames.len(), num_frames);
        assert_eq!(frames.first(), Some(polygon.start()));
        assert_eq!(frames.last(), Some(polygon.end()));
    }
}

#[test]
fn test_frames_stay_in_control_bounds() {
    // each frame is a convex combination of the control points
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let len = rng.gen_range(1..8);
        let polygon = random_polygon(&mut rng, len);
        let points = polygon.points();
        let x_min = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let x_max = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let y_min = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let y_max = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        for frame in evaluate_bezier(&polygon, 40).unwrap().points() {
            assert!(frame.x >= x_min - 1e-9 && frame.x <= x_max + 1e-9);
            assert!(frame.y >= y_min - 1e-9 && frame.y <= y_max + 1e-9);
        }
    }
}

#[test]
fn test_frames_follow_eased_parameters() {
    let mut rng = StdRng::seed_from_u64(11);
    let polygon = random_polygon(&mut rng, 5);
    let t_values = TimeSchedule::default().parameters(33).unwrap();

    let frames = evaluate_bezier(&polygon, 33).unwrap();
    for (frame, t) in frames.points().zip(t_values) {
        let expected = point_at(&polygon, t);
        assert_relative_eq!(frame.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(frame.y, expected.y, epsilon = 1e-9);
    }
}

#[test]
fn test_binomial_symmetry_for_random_rows() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let n = rng.gen_range(0..80);
        let k = rng.gen_range(0..=n);
        assert_eq!(binomial_coefficient(n, k), binomial_coefficient(n, n - k));
        assert_eq!(binomial_coefficient(n, n + 1 + k), 0.0);
    }
}

#[test]
fn test_stretched_curves_for_random_endpoints() {
    let mut rng = StdRng::seed_from_u64(99);
    let coordinate = Uniform::new(-100.0, 100.0);
    let factor = Uniform::new(0.01, 2.0);

    for _ in 0..100 {
        let start = Point::new(coordinate.sample(&mut rng), coordinate.sample(&mut rng));
        let end = Point::new(coordinate.sample(&mut rng), coordinate.sample(&mut rng));
        let curve_factor = factor.sample(&mut rng);

        // positive factors always lift the control point above both endpoints
        let control = stretch_control_point(start, end, curve_factor);
        assert!(control.y > start.y.max(end.y));

        let frames = generate_stretched_curve(start, end, 60, curve_factor).unwrap();
        assert_eq!(frames.len(), 60);
        assert_eq!(frames.first(), Some(start));
        assert_eq!(frames.last(), Some(end));
    }
}
