//! Label text production for the five named label slots.

use crate::core::data::DatedPoint;

/// Default chrono pattern for the selected data point label.
pub const DEFAULT_DATA_POINT_FORMAT: &str = "%m/%d/%y";

/// Default chrono pattern for the first/last boundary labels.
pub const DEFAULT_BOUNDARIES_FORMAT: &str = "%b-%y";

/// Renders one label, marking icon-bearing records with a leading bullet.
///
/// Records without an icon get matching lead whitespace so label columns
/// stay aligned.
#[must_use]
pub fn date_string(point: DatedPoint, format: &str) -> String {
    let formatted = point.date.format(format);
    if point.has_icon {
        format!("\u{2022} {formatted}")
    } else {
        format!("  {formatted}")
    }
}
