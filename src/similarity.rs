use std::collections::HashMap;

/// Weighted term overlap of two frequency tables: the sum of
/// `freq_a * freq_b` over every token present in both.
///
/// Shared terms are summed in token order, so the result does not depend on
/// which table is passed first.
pub fn compute_similarity(frequencies_a: &[(String, f64)], frequencies_b: &[(String, f64)]) -> f64 {
    if frequencies_a.is_empty() || frequencies_b.is_empty() {
        return 0.0;
    }
    let lookup: HashMap<&str, f64> = frequencies_a
        .iter()
        .map(|(token, frequency)| (token.as_str(), *frequency))
        .collect();

    let mut shared: Vec<(&str, f64)> = frequencies_b
        .iter()
        .filter_map(|(token, frequency_b)| {
            lookup
                .get(token.as_str())
                .map(|frequency_a| (token.as_str(), frequency_a * frequency_b))
        })
        .collect();
    shared.sort_by(|a, b| a.0.cmp(b.0));
    shared.iter().map(|(_, product)| product).sum()
}
