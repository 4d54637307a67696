use serde::{Deserialize, Deserializer, Serialize};

/// Unix timestamp in seconds. Doubles as the posting identifier.
pub type Timestamp = i64;

/// A single job posting as published in `job_data.json`.
///
/// Every descriptive field is a plain string where an empty value means
/// "not specified". Absent and `null` fields deserialize to empty strings
/// and unknown fields are ignored, so the published file can grow new
/// columns without breaking older readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    /// Posting time; also used as the route identifier for the detail view
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: Timestamp,
    #[serde(deserialize_with = "null_as_default")]
    pub job_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_info: String,
    #[serde(deserialize_with = "null_as_default")]
    pub include_salary_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub employer_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub working_style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub compensation_info: String,
    #[serde(deserialize_with = "null_as_default")]
    pub compliance_plan: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_slack: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visa_sponsorship: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hiring_process: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comp_low: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comp_high: String,
}

/// Read `null` as the field's default, the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl JobRecord {
    /// A record is shown in listings only when it has a title, an employer
    /// and somewhere to apply.
    pub fn is_valid_for_display(&self) -> bool {
        !self.job_title.is_empty() && !self.employer_name.is_empty() && !self.job_link.is_empty()
    }

    pub fn has_visa_sponsorship(&self) -> bool {
        !self.visa_sponsorship.is_empty()
    }
}
