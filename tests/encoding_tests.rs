use quakemap::prelude::*;

/// Integration tests for the visual encoding engine. The declared default
/// policy is greater-or-equal; strict-greater is covered explicitly.
#[cfg(test)]
mod encoding_tests {
    use super::*;

    const BOUNDARIES: [f64; 5] = [20.0, 50.0, 100.0, 200.0, 500.0];

    fn testville() -> EarthquakeFeature {
        EarthquakeFeature::new(
            "10km N of Testville",
            4.5,
            1_700_000_000_000,
            LatLng::new(37.0, -120.0),
            15.0,
        )
    }

    #[test]
    fn test_classify_is_total_and_monotonic() {
        for policy in [BoundaryPolicy::StrictGreater, BoundaryPolicy::GreaterOrEqual] {
            let scale = DepthScale::new(policy);
            let mut previous = 0;
            let mut depth = -100.0;
            while depth <= 1_000.0 {
                let band = scale.band_index(depth);
                assert!(band < 6);
                assert!(band >= previous, "band decreased at {} km", depth);
                assert!(scale.colors().contains(&scale.classify(depth)));
                previous = band;
                depth += 0.5;
            }
            assert!(scale.colors().contains(&scale.classify(f64::NAN)));
            assert!(scale.colors().contains(&scale.classify(f64::INFINITY)));
            assert!(scale.colors().contains(&scale.classify(f64::NEG_INFINITY)));
        }
    }

    #[test]
    fn test_boundaries_greater_or_equal() {
        let encoder = VisualEncoder::new(BoundaryPolicy::GreaterOrEqual);
        let colors = encoder.scale().colors().to_vec();
        for (i, boundary) in BOUNDARIES.iter().enumerate() {
            assert_eq!(encoder.classify_depth(*boundary), colors[i + 1], "at {} km", boundary);
        }
    }

    #[test]
    fn test_boundaries_strict_greater() {
        let encoder = VisualEncoder::new(BoundaryPolicy::StrictGreater);
        let colors = encoder.scale().colors().to_vec();
        for (i, boundary) in BOUNDARIES.iter().enumerate() {
            assert_eq!(encoder.classify_depth(*boundary), colors[i], "at {} km", boundary);
        }
    }

    #[test]
    fn test_open_ended_bands() {
        for policy in [BoundaryPolicy::StrictGreater, BoundaryPolicy::GreaterOrEqual] {
            let encoder = VisualEncoder::new(policy);
            assert_eq!(encoder.classify_depth(-5.0), encoder.classify_depth(0.0));
            assert_eq!(encoder.classify_depth(10_000.0), encoder.classify_depth(501.0));
        }
    }

    #[test]
    fn test_radius_is_four_times_magnitude() {
        let encoder = VisualEncoder::default();
        for magnitude in [0.0, 1.0, 5.0, -1.0] {
            let mut quake = testville();
            quake.magnitude = magnitude;
            assert_eq!(encoder.style_for(&quake).radius, 4.0 * magnitude);
        }
    }

    #[test]
    fn test_legend_shape() {
        let legend = VisualEncoder::default().build_legend();
        assert_eq!(legend.len(), 6);
        assert!(legend.rows.windows(2).all(|w| w[0].lower < w[1].lower));
        assert!(legend.rows[..5].iter().all(|r| r.upper.is_some()));

        let last = legend.rows.last().unwrap();
        assert_eq!(last.upper, None);
        assert_eq!(last.label, "500+");
    }

    #[test]
    fn test_testville_marker() {
        let encoder = VisualEncoder::default();
        let marker = encoder.encode_feature(0, &testville());
        let shallow = encoder.build_legend().rows[0].color;

        assert_eq!(marker.position, LatLng::new(37.0, -120.0));
        assert_eq!(marker.style.radius, 18.0);
        assert_eq!(marker.style.fill_color, shallow);

        let popup = marker.popup.unwrap();
        assert!(popup.contains("Testville"));
        assert!(popup.contains("Nov 14 2023 22:13:20"));
    }

    #[test]
    fn test_depth_500_is_deepest_under_default_policy() {
        let encoder = VisualEncoder::default();
        assert_eq!(encoder.policy(), BoundaryPolicy::GreaterOrEqual);

        let mut quake = testville();
        quake.depth_km = 500.0;
        let deepest = *encoder.scale().colors().last().unwrap();
        assert_eq!(encoder.style_for(&quake).fill_color, deepest);
        assert_eq!(deepest, Color::from_hex("#800026").unwrap());
    }

    #[test]
    fn test_depth_500_is_second_deepest_under_strict_policy() {
        let encoder = VisualEncoder::new(BoundaryPolicy::StrictGreater);
        let mut quake = testville();
        quake.depth_km = 500.0;
        assert_eq!(
            encoder.style_for(&quake).fill_color,
            Color::from_hex("#BD0026").unwrap()
        );
    }
}
