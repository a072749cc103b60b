use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::WineryProfile;

pub const LOCAL_EVENT_NAME: &str = "Annual Wine Festival";
const FALLBACK_REGION: &str = "Wine Country";
const EVENT_LEAD_DAYS: i64 = 30;

const KEY_POINTS: [&str; 4] = [
    "Harvest season drives renewed interest in small-batch and estate wines",
    "Food and wine pairing stories perform strongly through the autumn months",
    "Visitors are looking for authentic, behind-the-scenes tasting experiences",
    "Sustainable and organic practices keep shaping buying decisions",
];

const SEASONAL_CONTEXT: &str = "Autumn harvest is the busiest stretch of the year for \
     tasting-room visits, wine club sign-ups and holiday gift buying.";

/// Synthetic market research for a winery's region.
///
/// Nothing here is looked up: the points and event are fixed, and the event is
/// always scheduled thirty days after `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchBrief {
    pub suggested_theme: String,
    pub key_points: Vec<String>,
    pub local_event_name: String,
    pub local_event_date: DateTime<Utc>,
    pub local_event_location: String,
    pub seasonal_context: String,
}

impl ResearchBrief {
    pub fn synthesize(profile: &WineryProfile, now: DateTime<Utc>) -> Self {
        let region = research_region(profile);
        Self {
            suggested_theme: format!("Seasonal Wine Trends in {region}"),
            key_points: KEY_POINTS.iter().map(|p| (*p).to_owned()).collect(),
            local_event_name: LOCAL_EVENT_NAME.to_owned(),
            local_event_date: now + Duration::days(EVENT_LEAD_DAYS),
            local_event_location: region.to_owned(),
            seasonal_context: SEASONAL_CONTEXT.to_owned(),
        }
    }
}

/// Region named in research output.
pub fn research_region(profile: &WineryProfile) -> &str {
    profile.location().unwrap_or(FALLBACK_REGION)
}
