//! Day-of-week slot for scheduled lectures

use serde::{Deserialize, Serialize};

/// Day of week a regular lecture meets, or `Unscheduled` when the record
/// carries no weekly slot.
///
/// Declaration order is the fixed display/sort order (Monday first,
/// `Unscheduled` last); the derived `Ord` is used by the course comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekOfDay {
    /// Monday slot.
    Monday,
    /// Tuesday slot.
    Tuesday,
    /// Wednesday slot.
    Wednesday,
    /// Thursday slot.
    Thursday,
    /// Friday slot.
    Friday,
    /// Saturday slot.
    Saturday,
    /// Sunday slot.
    Sunday,
    /// No fixed weekly slot.
    Unscheduled,
}
