//! Policy-chip classification.
//!
//! Downstream UIs show exception policies as short "chips".  Known policy
//! families are recognized by substring; anything unrecognized passes
//! through verbatim so no scraped policy is ever dropped.

/// Classify free-text policies into human-facing chip labels.
pub fn policy_chips(policies: &[String]) -> Vec<String> {
    policies
        .iter()
        .map(|policy| {
            let lowered = policy.to_lowercase();
            if lowered.contains("open year") {
                "Open year-round".to_string()
            } else if lowered.contains("not fixed") || lowered.contains("irregular") {
                "Hours vary".to_string()
            } else if lowered.contains("new year") {
                "New Year hours differ".to_string()
            } else {
                policy.clone()
            }
        })
        .collect()
}
