//! Fire-and-forget analytics events.
//!
//! Domain operations emit a named event after a successful mutation.
//! Emission goes to a dedicated tracing target so subscribers can route
//! it independently of application logging; it never blocks and never
//! fails the mutation that produced it.

pub const ANALYTICS_TARGET: &str = "dosa::analytics";

pub fn emit(event: &str, fields: &[(&str, &str)]) {
    let detail = fields.iter().map(|(k, v)| format!("{}={}", k, v)).collect::<Vec<_>>().join(" ");
    tracing::info!(target: "dosa::analytics", event, %detail);
}
