use taxon_model::{RequiredColumnsCheck, Row};

/// Checks that the first row carries every required column name.
///
/// Column names are compared exactly, so rows should already be canonical.
pub fn validate_required_columns<S: AsRef<str>>(
    rows: &[Row],
    required: &[S],
) -> RequiredColumnsCheck {
    let Some(first) = rows.first() else {
        return RequiredColumnsCheck {
            valid: false,
            missing_headers: required.iter().map(|c| c.as_ref().to_string()).collect(),
            reason: "No data rows found".to_string(),
        };
    };

    let missing_headers: Vec<String> = required
        .iter()
        .map(|column| column.as_ref())
        .filter(|column| !first.contains_key(column))
        .map(str::to_string)
        .collect();

    let reason = if missing_headers.is_empty() {
        "All required headers present".to_string()
    } else {
        format!("Missing required headers: {}", missing_headers.join(", "))
    };

    RequiredColumnsCheck {
        valid: missing_headers.is_empty(),
        missing_headers,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxon_model::KEY_FIELDS;

    fn key_names() -> Vec<&'static str> {
        KEY_FIELDS.iter().map(|field| field.as_str()).collect()
    }

    #[test]
    fn empty_rows_fail() {
        let result = validate_required_columns(&[], &key_names());
        assert!(!result.valid);
        assert_eq!(result.missing_headers, vec!["Topic", "SubTopic", "Industry"]);
        assert_eq!(result.reason, "No data rows found");
    }

    #[test]
    fn reports_columns_absent_from_first_row() {
        let rows: Vec<Row> = vec![[("Topic", "a"), ("Industry", "b")].into_iter().collect()];
        let result = validate_required_columns(&rows, &key_names());
        assert!(!result.valid);
        assert_eq!(result.missing_headers, vec!["SubTopic"]);
        assert_eq!(result.reason, "Missing required headers: SubTopic");
    }

    #[test]
    fn passes_when_all_present() {
        let rows: Vec<Row> = vec![
            [("Topic", ""), ("SubTopic", ""), ("Industry", "")]
                .into_iter()
                .collect(),
        ];
        let result = validate_required_columns(&rows, &key_names());
        assert!(result.valid);
        assert_eq!(result.reason, "All required headers present");
    }
}
