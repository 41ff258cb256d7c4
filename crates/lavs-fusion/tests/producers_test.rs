//! Tests for producer orchestration and degradation.

use std::path::PathBuf;

use lavs_core::config::ProducerConfig;
use lavs_core::errors::ProducerError;
use lavs_core::traits::{EvidenceProducer, EvidenceSubject, SubjectSource};
use lavs_core::types::{Classification, ContentType, LayerLabel, LayerResult};
use lavs_fusion::producers::{ProducerSet, StaticProducer};

struct FailingProducer {
    label: LayerLabel,
    error: fn() -> ProducerError,
}

impl EvidenceProducer for FailingProducer {
    fn label(&self) -> LayerLabel {
        self.label.clone()
    }

    fn produce(&self, _subject: &EvidenceSubject) -> Result<LayerResult, ProducerError> {
        Err((self.error)())
    }
}

struct OutOfRangeProducer;

impl EvidenceProducer for OutOfRangeProducer {
    fn label(&self) -> LayerLabel {
        LayerLabel::parse("Overeager")
    }

    fn produce(&self, _subject: &EvidenceSubject) -> Result<LayerResult, ProducerError> {
        Ok(LayerResult {
            layer: Some(self.label()),
            score: Some(180.0),
            details: vec![],
            raw: None,
        })
    }
}

fn image_subject() -> EvidenceSubject {
    EvidenceSubject::new(
        SubjectSource::File(PathBuf::from("photo.png")),
        Classification::new("image", Some("png".into()), Some("image/png".into())),
    )
}

fn layer(label: LayerLabel, score: f64) -> LayerResult {
    LayerResult::new(label, score, vec![format!("score {score}")])
}

/// T4-PRD-01: Only producers supporting the content type run, metadata always.
#[test]
fn test_selection_by_content_type() {
    let set = ProducerSet::default()
        .with(Box::new(StaticProducer::new(layer(LayerLabel::OriginMetadata, 90.0))))
        .with(Box::new(StaticProducer::new(layer(
            LayerLabel::ContentPattern(ContentType::Image),
            40.0,
        ))))
        .with(Box::new(StaticProducer::new(layer(
            LayerLabel::ContentPattern(ContentType::Audio),
            10.0,
        ))));
    assert_eq!(set.len(), 3);

    let outputs = set.run(&image_subject());
    let labels: Vec<_> = outputs.iter().filter_map(|l| l.layer.clone()).collect();
    assert_eq!(
        labels,
        vec![
            LayerLabel::OriginMetadata,
            LayerLabel::ContentPattern(ContentType::Image),
        ]
    );
}

/// T4-PRD-02: Failures degrade into penalized layers, in place.
#[test]
fn test_failure_degrades() {
    let set = ProducerSet::new(ProducerConfig {
        failure_penalty: Some(15.0),
        parallel: Some(false),
    })
    .with(Box::new(FailingProducer {
        label: LayerLabel::OriginMetadata,
        error: || ProducerError::Io {
            path: "photo.png".to_string(),
            message: "permission denied".to_string(),
        },
    }))
    .with(Box::new(StaticProducer::new(layer(
        LayerLabel::ContentPattern(ContentType::Image),
        40.0,
    ))));

    let outputs = set.run(&image_subject());
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].layer, Some(LayerLabel::OriginMetadata));
    assert_eq!(outputs[0].score, Some(85.0));
    assert_eq!(
        outputs[0].details,
        vec![
            "Error in Origin & Metadata Consistency: I/O error reading photo.png: permission denied"
                .to_string()
        ]
    );
    assert_eq!(outputs[1].score, Some(40.0));
}

/// T4-PRD-03: Parallel and sequential runs agree, including order.
#[test]
fn test_parallel_matches_sequential() {
    let build = |parallel: bool| {
        let mut set = ProducerSet::new(ProducerConfig {
            failure_penalty: None,
            parallel: Some(parallel),
        });
        for i in 0..16_u32 {
            set.register(Box::new(StaticProducer::new(layer(
                LayerLabel::parse(&format!("Layer {i}")),
                f64::from(i) * 5.0,
            ))));
        }
        set.register(Box::new(FailingProducer {
            label: LayerLabel::parse("Flaky"),
            error: || ProducerError::Timeout { timeout_ms: 8000 },
        }));
        set
    };
    let subject = image_subject();
    let sequential = build(false).run(&subject);
    let parallel = build(true).run(&subject);
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.len(), 17);
    assert_eq!(sequential[16].score, Some(90.0));
}

/// T4-PRD-04: Out-of-range producer scores are clamped.
#[test]
fn test_scores_clamped() {
    let set = ProducerSet::default().with(Box::new(OutOfRangeProducer));
    let outputs = set.run(&image_subject());
    assert_eq!(outputs[0].score, Some(100.0));
}

/// T4-PRD-05: Static producers replay their layer verbatim.
#[test]
fn test_static_producer_replays_unlabeled_layer() {
    let raw = LayerResult {
        layer: None,
        score: None,
        details: vec!["free-floating note".to_string()],
        raw: None,
    };
    let producers = StaticProducer::from_layers(vec![raw.clone()]);
    assert_eq!(producers.len(), 1);
    assert!(producers[0].supports(None));
    assert_eq!(producers[0].produce(&image_subject()).unwrap(), raw);
}
