//! Distribution channel categories and the metrics each one tracks
//!
//! Channel labels are free text ("LinkedIn", "Cold Email Outreach", ...).
//! They are classified once into a [`ChannelCategory`]; which metric fields
//! apply is then a table lookup on the category.

use serde::{Deserialize, Serialize};

use super::metric_keys::{
    ACCEPTANCE_RATE, ATTENDEES, CLICKS, CONNECTIONS_SENT, CONVERSION_RATE, COST, EMAILS_SENT,
    ENGAGEMENT_RATE, IMPRESSIONS, LEADS_GENERATED, MEETINGS_BOOKED, OPEN_RATE, RESPONSE_RATE,
    REVENUE_GENERATED, ROI,
};

/// Broad family a distribution channel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelCategory {
    /// LinkedIn outreach.
    LinkedIn,
    /// Email campaigns.
    Email,
    /// Paid advertising.
    PaidAds,
    /// Organic social media.
    Social,
    /// Content marketing and SEO.
    Content,
    /// Events, webinars and conferences.
    Events,
    /// Anything unrecognized.
    Other,
}

/// Word prefixes checked in order; first hit wins.
const CHANNEL_KEYWORDS: &[(&str, ChannelCategory)] = &[
    ("linkedin", ChannelCategory::LinkedIn),
    ("email", ChannelCategory::Email),
    ("e-mail", ChannelCategory::Email),
    ("newsletter", ChannelCategory::Email),
    ("ads", ChannelCategory::PaidAds),
    ("ppc", ChannelCategory::PaidAds),
    ("paid", ChannelCategory::PaidAds),
    ("sponsored", ChannelCategory::PaidAds),
    ("twitter", ChannelCategory::Social),
    ("facebook", ChannelCategory::Social),
    ("instagram", ChannelCategory::Social),
    ("tiktok", ChannelCategory::Social),
    ("social", ChannelCategory::Social),
    ("webinar", ChannelCategory::Events),
    ("event", ChannelCategory::Events),
    ("conference", ChannelCategory::Events),
    ("meetup", ChannelCategory::Events),
    ("blog", ChannelCategory::Content),
    ("content", ChannelCategory::Content),
    ("seo", ChannelCategory::Content),
    ("podcast", ChannelCategory::Content),
];

impl ChannelCategory {
    /// Classify a free-text channel label.
    #[must_use]
    pub fn classify(label: &str) -> Self {
        let lowered = label.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| c.is_whitespace() || c == '/' || c == ',' || c == '(' || c == ')')
            .filter(|w| !w.is_empty())
            .collect();

        CHANNEL_KEYWORDS
            .iter()
            .find(|(keyword, _)| words.iter().any(|w| w.starts_with(keyword)))
            .map_or(Self::Other, |(_, category)| *category)
    }

    /// Metric keys the dashboard shows and edits for this category.
    ///
    /// `cost` and `roi` apply everywhere.
    #[must_use]
    pub const fn applicable_metrics(self) -> &'static [&'static str] {
        match self {
            Self::LinkedIn => &[
                CONNECTIONS_SENT,
                ACCEPTANCE_RATE,
                RESPONSE_RATE,
                MEETINGS_BOOKED,
                LEADS_GENERATED,
                COST,
                ROI,
            ],
            Self::Email => &[
                EMAILS_SENT,
                OPEN_RATE,
                RESPONSE_RATE,
                MEETINGS_BOOKED,
                LEADS_GENERATED,
                COST,
                ROI,
            ],
            Self::PaidAds => &[
                IMPRESSIONS,
                CLICKS,
                CONVERSION_RATE,
                LEADS_GENERATED,
                REVENUE_GENERATED,
                COST,
                ROI,
            ],
            Self::Social => &[
                IMPRESSIONS,
                ENGAGEMENT_RATE,
                CLICKS,
                LEADS_GENERATED,
                COST,
                ROI,
            ],
            Self::Content => &[
                IMPRESSIONS,
                CLICKS,
                CONVERSION_RATE,
                LEADS_GENERATED,
                COST,
                ROI,
            ],
            Self::Events => &[
                ATTENDEES,
                LEADS_GENERATED,
                MEETINGS_BOOKED,
                REVENUE_GENERATED,
                COST,
                ROI,
            ],
            Self::Other => &[
                MEETINGS_BOOKED,
                LEADS_GENERATED,
                REVENUE_GENERATED,
                RESPONSE_RATE,
                IMPRESSIONS,
                COST,
                ROI,
            ],
        }
    }

    /// Whether `key` is tracked for this category.
    #[must_use]
    pub fn is_applicable(self, key: &str) -> bool {
        self.applicable_metrics().contains(&key)
    }
}
