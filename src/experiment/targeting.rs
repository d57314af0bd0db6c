//! Targeting - who an experiment reaches
//!
//! A record may carry an ICP reference, an inline custom definition and a
//! legacy audience string all at once (older records were migrated in
//! place). Exactly one is authoritative, by precedence:
//! ICP reference > custom targeting > legacy text.

use serde::{Deserialize, Serialize};

use super::ExperimentRecord;

/// A reusable Ideal Customer Profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcpProfile {
    /// Profile ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Target job titles.
    #[serde(default)]
    pub job_titles: Vec<String>,
    /// Target industries.
    #[serde(default)]
    pub industries: Vec<String>,
    /// Target company size bands.
    #[serde(default)]
    pub company_sizes: Vec<String>,
    /// Pain points the outreach addresses.
    #[serde(default)]
    pub pain_points: Vec<String>,
}

/// Targeting defined inline on a single experiment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTargeting {
    /// Target job titles.
    #[serde(default)]
    pub job_titles: Vec<String>,
    /// Target industries.
    #[serde(default)]
    pub industries: Vec<String>,
    /// Target company size bands.
    #[serde(default)]
    pub company_sizes: Vec<String>,
    /// Optional pain points.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pain_points: Vec<String>,
}

impl CustomTargeting {
    /// Whether nothing is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.job_titles.is_empty()
            && self.industries.is_empty()
            && self.company_sizes.is_empty()
            && self.pain_points.is_empty()
    }
}

/// The authoritative targeting mode of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Targeting<'a> {
    /// Reference to an [`IcpProfile`] by ID.
    Icp(&'a str),
    /// Inline definition.
    Custom(&'a CustomTargeting),
    /// Free-text audience from before structured targeting existed.
    Legacy(&'a str),
}

/// Pick the authoritative targeting mode of `record`.
///
/// Blank strings and empty custom definitions count as absent. Returns
/// `None` when the record has no targeting at all.
#[must_use]
pub fn resolve_targeting(record: &ExperimentRecord) -> Option<Targeting<'_>> {
    if let Some(id) = record.icp_profile_id().filter(|id| !id.trim().is_empty()) {
        return Some(Targeting::Icp(id));
    }
    if let Some(custom) = record.custom_targeting().filter(|c| !c.is_empty()) {
        return Some(Targeting::Custom(custom));
    }
    record
        .target_audience()
        .filter(|text| !text.trim().is_empty())
        .map(Targeting::Legacy)
}

/// Targeting with any ICP reference looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTargeting<'a> {
    /// Referenced profile was found.
    Profile(&'a IcpProfile),
    /// Referenced profile does not exist (deleted or never synced).
    MissingProfile(&'a str),
    /// Inline definition.
    Custom(&'a CustomTargeting),
    /// Legacy free text.
    Legacy(&'a str),
}

impl<'a> Targeting<'a> {
    /// Look up an ICP reference in `profiles`.
    #[must_use]
    pub fn lookup(self, profiles: &'a [IcpProfile]) -> ResolvedTargeting<'a> {
        match self {
            Self::Icp(id) => profiles
                .iter()
                .find(|p| p.id == id)
                .map_or(ResolvedTargeting::MissingProfile(id), ResolvedTargeting::Profile),
            Self::Custom(custom) => ResolvedTargeting::Custom(custom),
            Self::Legacy(text) => ResolvedTargeting::Legacy(text),
        }
    }
}

impl ResolvedTargeting<'_> {
    /// One-line description for cards and list rows.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Profile(profile) => profile.name.clone(),
            Self::MissingProfile(id) => format!("Unknown ICP ({id})"),
            Self::Custom(custom) => summarize_custom(custom),
            Self::Legacy(text) => text.trim().to_string(),
        }
    }
}

fn summarize_custom(custom: &CustomTargeting) -> String {
    const SHOWN: usize = 2;

    let source = [&custom.job_titles, &custom.industries, &custom.company_sizes]
        .into_iter()
        .find(|list| !list.is_empty());
    let Some(items) = source else {
        return "Custom targeting".to_string();
    };

    let head = items
        .iter()
        .take(SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > SHOWN {
        format!("{head} +{} more", items.len() - SHOWN)
    } else {
        head
    }
}
