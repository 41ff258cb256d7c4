//! Partitioning layers into fusion buckets.

use lavs_core::types::{Bucket, ComponentScores, ContentType, LayerResult};

/// Unweighted mean risk per bucket. A bucket without members stays `None`.
///
/// Layers without a label, with a label outside the known vocabulary, or
/// with a content-specific label for another content type are skipped.
pub fn bucket_risks(layers: &[LayerResult], content_type: Option<ContentType>) -> ComponentScores {
    let mut sums = [0.0_f64; 3];
    let mut counts = [0_usize; 3];

    for layer in layers {
        let Some(bucket) = layer.layer.as_ref().and_then(|l| l.bucket(content_type)) else {
            continue;
        };
        let idx = slot(bucket);
        sums[idx] += layer.risk();
        counts[idx] += 1;
    }

    let mut scores = ComponentScores::default();
    for bucket in Bucket::ALL {
        let idx = slot(bucket);
        if counts[idx] > 0 {
            scores.set(bucket, Some(sums[idx] / counts[idx] as f64));
        }
    }
    scores
}

fn slot(bucket: Bucket) -> usize {
    match bucket {
        Bucket::Metadata => 0,
        Bucket::Ai => 1,
        Bucket::Behavioral => 2,
    }
}
