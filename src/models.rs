use serde::{Deserialize, Serialize};

// ============ Request Models ============

/// A lead-capture form submission as sent by the website.
///
/// Field names arrive camelCase. Every field is defaulted: the form contract
/// requires most of them, but nothing is enforced at this boundary and absent
/// fields pass through as empty strings / `None`, matching the nullable
/// columns in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    pub zip_code: String,
    pub source: String,
    /// ISO 8601 submission time, supplied by the form.
    pub timestamp: String,
    pub currently_insured: Option<String>,
    pub homeowner: Option<String>,
}

// ============ Store Models ============

/// Row shape inserted into the `leads` collection (snake_case columns).
///
/// `created_at` is taken verbatim from the submission's `timestamp` field,
/// so the store records the caller-supplied time, not server time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    pub zip_code: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currently_insured: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homeowner: Option<String>,
    pub created_at: String,
}

impl From<&LeadSubmission> for LeadRecord {
    fn from(lead: &LeadSubmission) -> Self {
        Self {
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            insurance_type: lead.insurance_type.clone(),
            zip_code: lead.zip_code.clone(),
            source: lead.source.clone(),
            currently_insured: lead.currently_insured.clone(),
            homeowner: lead.homeowner.clone(),
            created_at: lead.timestamp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let lead: LeadSubmission = serde_json::from_str("{}").unwrap();
        assert_eq!(lead.first_name, "");
        assert_eq!(lead.insurance_type, "");
        assert_eq!(lead.currently_insured, None);
        assert_eq!(lead.homeowner, None);
    }

    #[test]
    fn camel_case_fields_map_to_snake_case_record() {
        let lead: LeadSubmission = serde_json::from_value(serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "",
            "phone": "555-1234",
            "insuranceType": "Auto",
            "zipCode": "93001",
            "source": "website",
            "timestamp": "2024-01-15T10:00:00Z"
        }))
        .unwrap();

        let record = LeadRecord::from(&lead);
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.zip_code, "93001");
        assert_eq!(record.created_at, "2024-01-15T10:00:00Z");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["insurance_type"], "Auto");
        // Absent optionals are omitted from the insert payload entirely
        assert!(json.get("currently_insured").is_none());
        assert!(json.get("homeowner").is_none());
    }
}
