//! Top-signal extraction for explainability.

use lavs_core::types::LayerResult;

/// The `limit` highest-risk named layers as `"{layer}: {first detail}"`.
///
/// Every layer is eligible, bucketed or not. Layers without a usable label
/// are skipped. Equal risks keep input order.
pub fn top_signals(layers: &[LayerResult], limit: usize) -> Vec<String> {
    let mut ranked: Vec<(&LayerResult, f64)> = layers
        .iter()
        .filter(|l| l.named_layer().is_some())
        .map(|l| (l, l.risk()))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .filter_map(|(layer, _)| {
            layer
                .named_layer()
                .map(|label| format!("{}: {}", label, layer.first_detail()))
        })
        .collect()
}
