use crate::audit::models::{ALERT_MESSAGE_PREFIX, AccessGrant, BucketFinding, BucketInspection};

/// Classify a successfully retrieved ACL
pub fn classify_grants(grants: &[AccessGrant]) -> BucketInspection {
    let matching_grants = grants.iter().filter(|g| g.is_all_users()).count();
    if matching_grants > 0 {
        BucketInspection::Public { matching_grants }
    } else {
        BucketInspection::Private
    }
}

/// Names to put in the alert, in listing order. A bucket is repeated once
/// per matching grant, so a public-read-write bucket appears twice.
pub fn alert_entries(findings: &[BucketFinding]) -> Vec<&str> {
    findings
        .iter()
        .flat_map(|f| {
            let repeats = match f.inspection {
                BucketInspection::Public { matching_grants } => matching_grants,
                _ => 0,
            };
            std::iter::repeat_n(f.bucket.as_str(), repeats)
        })
        .collect()
}

/// Build the alert body, or `None` when nothing is public
pub fn alert_message<S: AsRef<str>>(public: &[S]) -> Option<String> {
    if public.is_empty() {
        return None;
    }
    let names: Vec<&str> = public.iter().map(AsRef::as_ref).collect();
    Some(format!("{}{}", ALERT_MESSAGE_PREFIX, names.join(", ")))
}
