use lavs_core::types::{ContentType, LayerLabel, LayerResult, VerdictLabel};
use lavs_fusion::aggregation::{aggregate, VerdictBands};
use lavs_fusion::behavioral::analyze_behavior;
use lavs_fusion::pipeline::fuse;
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = Option<LayerLabel>> {
    prop_oneof![
        Just(None),
        Just(Some(LayerLabel::OriginMetadata)),
        Just(Some(LayerLabel::BehavioralDeviation)),
        prop::sample::select(ContentType::ALL.to_vec())
            .prop_map(|ct| Some(LayerLabel::ContentPattern(ct))),
        "[A-Za-z ]{0,12}".prop_map(|s| Some(LayerLabel::parse(&s))),
    ]
}

fn detail_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,24}",
        Just("too uniform lighting".to_string()),
        Just("GLCM homogeneity high".to_string()),
        Just("low entropy".to_string()),
    ]
}

fn layer_strategy() -> impl Strategy<Value = LayerResult> {
    (
        label_strategy(),
        prop::option::of(-50.0f64..150.0),
        prop::collection::vec(detail_strategy(), 0..4),
    )
        .prop_map(|(layer, score, details)| LayerResult {
            layer,
            score,
            details,
            raw: None,
        })
}

fn layers_strategy() -> impl Strategy<Value = Vec<LayerResult>> {
    prop::collection::vec(layer_strategy(), 0..10)
}

fn content_type_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec![
        "image", "video", "audio", "url", "text", "",
    ]))
}

fn rank(label: VerdictLabel) -> u8 {
    match label {
        VerdictLabel::Real => 0,
        VerdictLabel::Suspicious => 1,
        VerdictLabel::LikelyFake => 2,
    }
}

proptest! {
    #[test]
    fn final_score_always_in_range(layers in layers_strategy(), ct in content_type_strategy()) {
        let verdict = aggregate(&layers, ct);
        prop_assert!((0.0..=100.0).contains(&verdict.final_score));
    }

    #[test]
    fn verdict_is_banding_of_final_score(layers in layers_strategy(), ct in content_type_strategy()) {
        let verdict = aggregate(&layers, ct);
        prop_assert_eq!(verdict.verdict, VerdictBands::default().classify(verdict.final_score));
        prop_assert_eq!(verdict.risk_level, verdict.verdict.risk_level());
    }

    #[test]
    fn banding_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let bands = VerdictBands::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(bands.classify(lo)) <= rank(bands.classify(hi)));
    }

    #[test]
    fn aggregate_is_idempotent(layers in layers_strategy(), ct in content_type_strategy()) {
        let first = aggregate(&layers, ct);
        let second = aggregate(&layers, ct);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.final_score.to_bits(), second.final_score.to_bits());
    }

    #[test]
    fn breakdown_is_input_verbatim(layers in layers_strategy(), ct in content_type_strategy()) {
        let verdict = aggregate(&layers, ct);
        prop_assert_eq!(verdict.layer_breakdown, layers);
    }

    #[test]
    fn top_signals_bounded_and_named(layers in layers_strategy(), ct in content_type_strategy()) {
        let verdict = aggregate(&layers, ct);
        let named = layers.iter().filter(|l| l.named_layer().is_some()).count();
        prop_assert!(verdict.top_signals.len() <= 3);
        prop_assert_eq!(verdict.top_signals.len(), named.min(3));
    }

    #[test]
    fn missing_ai_bucket_shifts_toward_neutral(layers in layers_strategy()) {
        let image = aggregate(&layers, Some("image"));
        let unknown = aggregate(&layers, None);
        prop_assert!(unknown.component_scores.ai_risk.is_none());
        prop_assert_eq!(unknown.component_scores.metadata_risk, image.component_scores.metadata_risk);
        let ai_risk = image.component_scores.ai_risk.unwrap_or(50.0);
        let expected = image.final_score + 0.6 * (50.0 - ai_risk);
        prop_assert!((unknown.final_score - expected).abs() < 0.02);
    }

    #[test]
    fn behavioral_score_in_range(layers in layers_strategy()) {
        let result = analyze_behavior(&layers);
        let score = result.score.unwrap_or(-1.0);
        prop_assert!((0.0..=100.0).contains(&score));
        prop_assert!(!result.details.is_empty());
        prop_assert_eq!(result.layer, Some(LayerLabel::BehavioralDeviation));
    }

    #[test]
    fn fuse_appends_one_layer(layers in layers_strategy(), ct in content_type_strategy()) {
        let verdict = fuse(&layers, ct);
        prop_assert_eq!(verdict.layer_breakdown.len(), layers.len() + 1);
        prop_assert!((0.0..=100.0).contains(&verdict.final_score));
    }
}
