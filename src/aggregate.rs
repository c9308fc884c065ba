use crate::hours::{format_hours, HourFormat};
use crate::models::{Activity, HourRow, SummaryResponse};
use crate::week::{date_key, WeekRange};
use std::collections::BTreeMap;

pub type HourMap = BTreeMap<String, f64>;

/// Hours of one week grouped by customer and by project.
#[derive(Debug, Clone)]
pub struct WeeklySummary {
    pub range: WeekRange,
    pub customers: HourMap,
    pub projects: HourMap,
}

impl WeeklySummary {
    pub fn build(range: WeekRange, activities: &[Activity]) -> Self {
        Self {
            range,
            customers: aggregate_by(activities, |activity| activity.customer.name.as_str()),
            projects: aggregate_by(activities, |activity| activity.project.name.as_str()),
        }
    }

    pub fn to_response(&self, format: HourFormat) -> SummaryResponse {
        SummaryResponse {
            from: date_key(self.range.from_date()),
            to: date_key(self.range.to_date()),
            customers: hour_rows(&self.customers, format),
            projects: hour_rows(&self.projects, format),
        }
    }
}

pub fn aggregate_by<F>(activities: &[Activity], key: F) -> HourMap
where
    F: Fn(&Activity) -> &str,
{
    let mut totals = HourMap::new();
    for activity in activities {
        *totals.entry(key(activity).to_string()).or_insert(0.0) += activity.hours;
    }
    totals
}

fn hour_rows(totals: &HourMap, format: HourFormat) -> Vec<HourRow> {
    totals
        .iter()
        .map(|(name, hours)| HourRow {
            name: name.clone(),
            hours: *hours,
            display: format_hours(*hours, format),
        })
        .collect()
}
