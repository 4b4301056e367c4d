use blockref_core::graph::GraphFormat;

/// Parse graph format from string
pub fn parse_graph_format(s: &str) -> std::result::Result<GraphFormat, String> {
    s.parse::<GraphFormat>().map_err(|e| e.to_string())
}

/// Parse a result limit. Zero is accepted and clamped later.
pub fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    s.parse::<usize>()
        .map_err(|_| format!("expected a non-negative integer, got '{}'", s))
}

/// Parse a minimum similarity score (finite, non-negative)
pub fn parse_min_score(s: &str) -> std::result::Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(format!("expected a non-negative number, got '{}'", s)),
    }
}
