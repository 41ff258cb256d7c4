//! Tests for the fusion pipeline and verification.

use std::io::Write;

use lavs_core::config::LavsConfig;
use lavs_core::constants::DEFAULT_EXPLANATION;
use lavs_core::errors::{InputError, LavsErrorCode, ProducerError};
use lavs_core::traits::{EvidenceProducer, EvidenceSubject};
use lavs_core::types::{
    ComponentScores, ContentType, LayerLabel, LayerResult, RiskLevel, Verdict, VerdictLabel,
};
use lavs_fusion::pipeline::{explain, fuse, FusionPipeline, VerifyRequest};
use lavs_fusion::producers::{ProducerSet, StaticProducer};

fn layer(label: LayerLabel, score: f64, detail: &str) -> LayerResult {
    LayerResult::new(label, score, vec![detail.to_string()])
}

fn evidence() -> Vec<LayerResult> {
    vec![
        layer(LayerLabel::OriginMetadata, 90.0, "EXIF present"),
        layer(LayerLabel::ContentPattern(ContentType::Image), 40.0, "Noise level: 3.2"),
        layer(LayerLabel::ContentPattern(ContentType::Audio), 50.0, "Pitch drift: 1.1"),
        layer(LayerLabel::ContentPattern(ContentType::Url), 70.0, "Domain age: 4 years"),
    ]
}

fn producers() -> ProducerSet {
    StaticProducer::from_layers(evidence())
        .into_iter()
        .fold(ProducerSet::default(), |set, p| set.with(p))
}

fn png_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"\x89PNG\r\n\x1A\n\0\0\0\rIHDR").unwrap();
    file.flush().unwrap();
    file
}

struct BrokenMetadata;

impl EvidenceProducer for BrokenMetadata {
    fn label(&self) -> LayerLabel {
        LayerLabel::OriginMetadata
    }

    fn produce(&self, _subject: &EvidenceSubject) -> Result<LayerResult, ProducerError> {
        Err(ProducerError::Decode {
            what: "EXIF".to_string(),
            message: "truncated IFD".to_string(),
        })
    }
}

/// T5-PIPE-01: fuse appends exactly one behavioral layer, last.
#[test]
fn test_fuse_appends_behavioral_layer() {
    let outputs = vec![
        layer(LayerLabel::OriginMetadata, 90.0, "EXIF present"),
        layer(LayerLabel::ContentPattern(ContentType::Image), 40.0, "Noise level: 3.2"),
    ];
    let verdict = fuse(&outputs, Some("image"));
    assert_eq!(verdict.layer_breakdown.len(), 3);
    assert_eq!(&verdict.layer_breakdown[..2], &outputs[..]);
    let behavioral = &verdict.layer_breakdown[2];
    assert_eq!(behavioral.layer, Some(LayerLabel::BehavioralDeviation));
    // variance 625, no cues: clean
    assert_eq!(behavioral.score, Some(100.0));
    // 0.2*10 + 0.6*60 + 0.2*0
    assert_eq!(verdict.final_score, 38.0);
    assert_eq!(verdict.verdict, VerdictLabel::Suspicious);
    assert_eq!(verdict.component_scores.behavioral_risk, Some(0.0));
}

/// T5-PIPE-02: fuse with no producer output still has a behavioral layer.
#[test]
fn test_fuse_empty() {
    let verdict = fuse(&[], Some("image"));
    assert_eq!(verdict.layer_breakdown.len(), 1);
    // metadata and ai fall back to 50, behavioral risk 0
    assert_eq!(verdict.final_score, 40.0);
    assert_eq!(verdict.risk_level, RiskLevel::Medium);
}

/// T5-PIPE-03: No input is rejected.
#[test]
fn test_verify_no_input() {
    let pipeline = FusionPipeline::with_defaults();
    let blank = VerifyRequest {
        url: Some(String::new()),
        file: None,
    };
    for request in [VerifyRequest::default(), blank] {
        let err = pipeline.verify(&request, &producers()).unwrap_err();
        assert!(matches!(err, InputError::NoInput));
        assert_eq!(err.error_code(), "NO_INPUT");
    }
}

/// T5-PIPE-04: A URL runs metadata and URL producers only.
#[test]
fn test_verify_url() {
    let pipeline = FusionPipeline::with_defaults();
    let report = pipeline
        .verify(&VerifyRequest::for_url("https://example.com/post"), &producers())
        .unwrap();

    assert_eq!(report.classification.content_type, "url");
    let labels: Vec<_> = report
        .breakdown
        .layer_breakdown
        .iter()
        .filter_map(|l| l.layer.clone())
        .collect();
    assert_eq!(
        labels,
        vec![
            LayerLabel::OriginMetadata,
            LayerLabel::ContentPattern(ContentType::Url),
            LayerLabel::BehavioralDeviation,
        ]
    );
    assert_eq!(report.confidence, report.breakdown.final_score);
    assert_eq!(report.verdict, report.breakdown.verdict);
}

/// T5-PIPE-05: A URL the classifier cannot read still runs the URL
/// producer. Its layer stays in the breakdown and top signals, but the
/// default profile leaves the `ai` bucket empty.
#[test]
fn test_verify_unclassifiable_url() {
    let pipeline = FusionPipeline::with_defaults();
    let producers = ProducerSet::default()
        .with(Box::new(StaticProducer::new(layer(
            LayerLabel::OriginMetadata,
            90.0,
            "meta",
        ))))
        .with(Box::new(StaticProducer::new(layer(
            LayerLabel::ContentPattern(ContentType::Url),
            5.0,
            "Phishing form",
        ))));
    let report = pipeline
        .verify(&VerifyRequest::for_url("example.com/login"), &producers)
        .unwrap();

    assert_eq!(report.classification.content_type, "unknown");
    assert_eq!(report.breakdown.component_scores.ai_risk, None);
    let labels: Vec<_> = report
        .breakdown
        .layer_breakdown
        .iter()
        .filter_map(|l| l.layer.clone())
        .collect();
    assert_eq!(
        labels,
        vec![
            LayerLabel::OriginMetadata,
            LayerLabel::ContentPattern(ContentType::Url),
            LayerLabel::BehavioralDeviation,
        ]
    );
    assert_eq!(
        report.breakdown.top_signals[0],
        "Content-Specific AI Pattern Integrity (URL): Phishing form"
    );
    assert!(report.explanation.starts_with("Content-Specific AI Pattern Integrity (URL)"));
}

/// T5-PIPE-06: An image file runs metadata and image producers.
#[test]
fn test_verify_image_file() {
    let file = png_file();
    let pipeline = FusionPipeline::with_defaults();
    let report = pipeline
        .verify(&VerifyRequest::for_file(file.path()), &producers())
        .unwrap();

    assert_eq!(report.classification.content_type, "image");
    assert_eq!(report.classification.format.as_deref(), Some("png"));
    assert_eq!(report.breakdown.layer_breakdown.len(), 3);
    assert_eq!(report.breakdown.final_score, 38.0);
    assert_eq!(
        report.explanation,
        "Content-Specific AI Pattern Integrity (Image): Noise level: 3.2; \
         Origin & Metadata Consistency: EXIF present"
    );
}

/// T5-PIPE-07: Files outside image/video/audio are rejected.
#[test]
fn test_verify_unsupported_file() {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"%PDF-1.4\n").unwrap();
    file.flush().unwrap();

    let err = FusionPipeline::with_defaults()
        .verify(&VerifyRequest::for_file(file.path()), &producers())
        .unwrap_err();
    match err {
        InputError::UnsupportedContentType { content_type } => {
            assert_eq!(content_type, "application")
        }
        other => panic!("Expected UnsupportedContentType, got: {:?}", other),
    }
}

/// T5-PIPE-08: URL wins when both inputs are given.
#[test]
fn test_url_wins_over_file() {
    let request = VerifyRequest {
        url: Some("https://example.com".to_string()),
        file: Some("/definitely/not/here.png".into()),
    };
    let report = FusionPipeline::with_defaults()
        .verify(&request, &producers())
        .unwrap();
    assert_eq!(report.classification.content_type, "url");
}

/// T5-PIPE-09: A failing producer degrades instead of failing the request.
#[test]
fn test_verify_with_failing_producer() {
    let file = png_file();
    let set = ProducerSet::default()
        .with(Box::new(BrokenMetadata))
        .with(Box::new(StaticProducer::new(layer(
            LayerLabel::ContentPattern(ContentType::Image),
            40.0,
            "Noise level: 3.2",
        ))));
    let report = FusionPipeline::with_defaults()
        .verify(&VerifyRequest::for_file(file.path()), &set)
        .unwrap();
    let metadata = &report.breakdown.layer_breakdown[0];
    assert_eq!(metadata.score, Some(90.0));
    assert_eq!(
        metadata.first_detail(),
        "Error in Origin & Metadata Consistency: failed to decode EXIF: truncated IFD"
    );
}

/// T5-PIPE-10: Explanation fallbacks.
#[test]
fn test_explanation_fallbacks() {
    let mut verdict = Verdict {
        final_score: 50.0,
        verdict: VerdictLabel::Suspicious,
        risk_level: RiskLevel::Medium,
        layer_breakdown: vec![layer(LayerLabel::BehavioralDeviation, 100.0, "last finding")],
        component_scores: ComponentScores::default(),
        top_signals: vec![],
    };
    assert_eq!(explain(&verdict), "last finding");

    verdict.layer_breakdown.clear();
    assert_eq!(explain(&verdict), DEFAULT_EXPLANATION);

    verdict.top_signals = vec!["a: 1".into(), "b: 2".into(), "c: 3".into()];
    assert_eq!(explain(&verdict), "a: 1; b: 2");
}

/// T5-PIPE-11: Configuration flows through the pipeline.
#[test]
fn test_configured_pipeline() {
    let config = LavsConfig::from_toml(
        r#"
[fusion]
neutral_prior = 0.0

[behavioral]
penalty = 50
"#,
    )
    .unwrap();
    let pipeline = FusionPipeline::new(&config);
    let verdict = pipeline.fuse(&[], Some(ContentType::Video));
    assert_eq!(verdict.final_score, 0.0);
    assert_eq!(verdict.verdict, VerdictLabel::Real);

    let outputs = vec![
        layer(LayerLabel::OriginMetadata, 80.0, "EXIF present"),
        layer(LayerLabel::ContentPattern(ContentType::Video), 80.0, "Frames: 240"),
    ];
    let verdict = pipeline.fuse(&outputs, Some(ContentType::Video));
    assert_eq!(verdict.layer_breakdown[2].score, Some(50.0));
}
