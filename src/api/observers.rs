use chrono::{DateTime, Utc};

type DateCallback = Box<dyn FnMut(DateTime<Utc>, usize)>;

/// Optional observer registrations.
///
/// Each hook is an independent registration so hosts subscribe to
/// exactly what they need. Hover fires on every tracking update with the
/// raw projected date; selection fires when a gesture ends and when an
/// auto-close is scheduled.
#[derive(Default)]
pub struct SliderObservers {
    on_date_selected: Option<DateCallback>,
    on_date_hovered: Option<DateCallback>,
    data_point_date_format: Option<String>,
    boundaries_date_format: Option<String>,
}

impl SliderObservers {
    pub fn set_on_date_selected(&mut self, callback: impl FnMut(DateTime<Utc>, usize) + 'static) {
        self.on_date_selected = Some(Box::new(callback));
    }

    pub fn set_on_date_hovered(&mut self, callback: impl FnMut(DateTime<Utc>, usize) + 'static) {
        self.on_date_hovered = Some(Box::new(callback));
    }

    /// Overrides the chrono pattern used for the selected data point
    /// label; `None` restores the built-in default.
    pub fn set_data_point_date_format(&mut self, format: Option<String>) {
        self.data_point_date_format = format;
    }

    /// Overrides the chrono pattern used for the boundary labels.
    pub fn set_boundaries_date_format(&mut self, format: Option<String>) {
        self.boundaries_date_format = format;
    }

    #[must_use]
    pub fn data_point_date_format(&self) -> Option<&str> {
        self.data_point_date_format.as_deref()
    }

    #[must_use]
    pub fn boundaries_date_format(&self) -> Option<&str> {
        self.boundaries_date_format.as_deref()
    }

    pub(crate) fn notify_selected(&mut self, date: DateTime<Utc>, index: usize) {
        if let Some(callback) = &mut self.on_date_selected {
            callback(date, index);
        }
    }

    pub(crate) fn notify_hovered(&mut self, date: DateTime<Utc>, index: usize) {
        if let Some(callback) = &mut self.on_date_hovered {
            callback(date, index);
        }
    }
}
