//! Rendering of the lead-notification email.
//!
//! The template is fixed: a styled header, a contact-information table with
//! conditionally rendered rows, a quick-actions block with `tel:`/`mailto:`
//! buttons, and a footer stamping the Pacific-time submission time.

use crate::models::LeadSubmission;
use chrono::DateTime;
use chrono_tz::America::Los_Angeles;

/// Fixed sender address for lead notifications.
pub const NOTIFY_FROM: &str = "805 Insurance <leads@805insurance.com>";
/// Fixed recipient for lead notifications.
pub const NOTIFY_TO: &str = "derrickbealer@gmail.com";

const LABEL_STYLE: &str =
    "padding: 10px 0; border-bottom: 1px solid #e5e7eb; font-weight: bold; color: #374151;";
const VALUE_STYLE: &str = "padding: 10px 0; border-bottom: 1px solid #e5e7eb; color: #1f2937;";
const LINK_STYLE: &str = "color: #2563eb; text-decoration: none;";

/// Subject line for a lead notification.
pub fn subject(lead: &LeadSubmission) -> String {
    format!(
        "New {} Lead: {} {} - {}",
        lead.insurance_type, lead.first_name, lead.last_name, lead.phone
    )
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<tr>
  <td style="{LABEL_STYLE}">{label}:</td>
  <td style="{VALUE_STYLE}">{value}</td>
</tr>
"#
    )
}

/// Renders the full HTML body for a lead notification.
pub fn render_html(lead: &LeadSubmission) -> String {
    let mut rows = String::new();

    rows.push_str(&detail_row(
        "Name",
        &format!("{} {}", lead.first_name, lead.last_name),
    ));
    rows.push_str(&detail_row(
        "Phone",
        &format!(
            r#"<a href="tel:{0}" style="{LINK_STYLE}">{0}</a>"#,
            lead.phone
        ),
    ));

    // An empty email means the form did not collect one
    let email_cell = if lead.email.is_empty() {
        "Not provided".to_string()
    } else {
        format!(
            r#"<a href="mailto:{0}" style="{LINK_STYLE}">{0}</a>"#,
            lead.email
        )
    };
    rows.push_str(&detail_row("Email", &email_cell));

    rows.push_str(&detail_row("Insurance Type", &lead.insurance_type));
    rows.push_str(&detail_row("ZIP Code", &lead.zip_code));

    if let Some(currently_insured) = &lead.currently_insured {
        rows.push_str(&detail_row("Currently Insured", currently_insured));
    }
    if let Some(homeowner) = &lead.homeowner {
        rows.push_str(&detail_row("Homeowner", homeowner));
    }

    // Last row has no bottom border
    rows.push_str(&format!(
        r#"<tr>
  <td style="padding: 10px 0; font-weight: bold; color: #374151;">Source:</td>
  <td style="padding: 10px 0; color: #1f2937;">{}</td>
</tr>
"#,
        lead.source
    ));

    let send_email_button = if lead.email.is_empty() {
        String::new()
    } else {
        format!(
            r#"<a href="mailto:{}" style="display: inline-block; background: #059669; color: white; padding: 10px 20px; text-decoration: none; border-radius: 6px;">Send Email</a>"#,
            lead.email
        )
    };

    let submitted_at = format_pacific_time(&lead.timestamp);

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background: linear-gradient(to right, #2563eb, #1d4ed8); padding: 20px; text-align: center;">
    <h1 style="color: white; margin: 0;">New Lead from 805 Insurance</h1>
  </div>

  <div style="padding: 30px; background: #f9fafb;">
    <h2 style="color: #1f2937; margin-top: 0;">Contact Information</h2>

    <table style="width: 100%; border-collapse: collapse;">
{rows}    </table>

    <div style="margin-top: 30px; padding: 20px; background: #dbeafe; border-radius: 8px;">
      <p style="margin: 0; color: #1e40af; font-weight: bold;">Quick Actions:</p>
      <p style="margin: 10px 0 0 0;">
        <a href="tel:{phone}" style="display: inline-block; background: #2563eb; color: white; padding: 10px 20px; text-decoration: none; border-radius: 6px; margin-right: 10px;">Call Now</a>
        {send_email_button}
      </p>
    </div>
  </div>

  <div style="padding: 20px; background: #1f2937; text-align: center;">
    <p style="color: #9ca3af; margin: 0; font-size: 12px;">
      This lead was submitted on {submitted_at} PST
    </p>
  </div>
</div>
"#,
        phone = lead.phone,
    )
}

/// en-US style Pacific-time rendering of the submission timestamp.
///
/// Falls back to the raw string when the timestamp is not valid RFC 3339.
fn format_pacific_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(&Los_Angeles)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane_doe() -> LeadSubmission {
        LeadSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: String::new(),
            phone: "555-1234".to_string(),
            insurance_type: "Auto".to_string(),
            zip_code: "93001".to_string(),
            source: "website".to_string(),
            timestamp: "2024-01-15T10:00:00Z".to_string(),
            currently_insured: None,
            homeowner: None,
        }
    }

    #[test]
    fn subject_interpolates_type_name_and_phone() {
        assert_eq!(subject(&jane_doe()), "New Auto Lead: Jane Doe - 555-1234");
    }

    #[test]
    fn missing_email_renders_not_provided() {
        let html = render_html(&jane_doe());
        assert!(html.contains("Not provided"));
        assert!(!html.contains("mailto:"));
        assert!(!html.contains("Send Email"));
    }

    #[test]
    fn present_email_renders_mailto_link_and_button() {
        let mut lead = jane_doe();
        lead.email = "jane@example.com".to_string();
        let html = render_html(&lead);
        assert!(html.contains(r#"<a href="mailto:jane@example.com""#));
        assert!(html.contains("Send Email"));
        assert!(!html.contains("Not provided"));
    }

    #[test]
    fn optional_rows_render_only_when_present() {
        let html = render_html(&jane_doe());
        assert!(!html.contains("Currently Insured"));
        assert!(!html.contains("Homeowner"));

        let mut lead = jane_doe();
        lead.currently_insured = Some("Yes".to_string());
        lead.homeowner = Some("No".to_string());
        let html = render_html(&lead);
        assert!(html.contains("Currently Insured:"));
        assert!(html.contains("Homeowner:"));
    }

    #[test]
    fn timestamp_renders_in_pacific_time() {
        // 10:00 UTC on 2024-01-15 is 02:00 in Los Angeles (UTC-8 in January)
        let html = render_html(&jane_doe());
        assert!(html.contains("1/15/2024, 2:00:00 AM"));
        assert!(html.contains("PST"));
    }

    #[test]
    fn daylight_saving_offset_applied_in_summer() {
        let mut lead = jane_doe();
        lead.timestamp = "2024-07-15T10:00:00Z".to_string();
        let html = render_html(&lead);
        // UTC-7 during daylight saving time
        assert!(html.contains("7/15/2024, 3:00:00 AM"));
    }

    #[test]
    fn unparseable_timestamp_falls_back_to_raw_string() {
        let mut lead = jane_doe();
        lead.timestamp = "yesterday".to_string();
        let html = render_html(&lead);
        assert!(html.contains("submitted on yesterday PST"));
    }

    #[test]
    fn phone_renders_as_tel_link() {
        let html = render_html(&jane_doe());
        assert!(html.contains(r#"<a href="tel:555-1234""#));
    }
}
