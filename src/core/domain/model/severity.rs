//! Severity scale shared by hosts and services.
//!
//! Icinga reports states as small ordinals. The dashboard keeps the raw
//! ordinals on its rows and only turns them into labels for display.

/// Placeholder shown for ordinals outside the known scale.
pub const UNKNOWN_LABEL: &str = "---";

const STATE_LABELS: [&str; 4] = ["OK", "Warning", "Critical", "Unknown"];
const STATE_TYPE_LABELS: [&str; 2] = ["Soft", "Hard"];

/// The highest known state ordinal (`Unknown`).
pub const MAX_STATE: i32 = 3;

/// The highest known state-type ordinal (`Hard`).
pub const MAX_STATE_TYPE: i32 = 1;

/// Returns the display label of a state ordinal (0=OK .. 3=Unknown).
///
/// Ordinals outside the scale map to [`UNKNOWN_LABEL`] instead of failing.
pub fn state_label(state: i32) -> &'static str {
    label_for(&STATE_LABELS, state)
}

/// Returns the display label of a state-type ordinal (0=Soft, 1=Hard).
///
/// Ordinals outside the scale map to [`UNKNOWN_LABEL`] instead of failing.
pub fn state_type_label(state_type: i32) -> &'static str {
    label_for(&STATE_TYPE_LABELS, state_type)
}

fn label_for(labels: &[&'static str], ordinal: i32) -> &'static str {
    usize::try_from(ordinal)
        .ok()
        .and_then(|index| labels.get(index).copied())
        .unwrap_or(UNKNOWN_LABEL)
}
