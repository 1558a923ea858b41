use taxon_core::handle_validate;
use taxon_model::{DatasetPayload, Row, ValidateRequest};

const STRINGS_HEADERS: [&str; 9] = [
    "Tier",
    "Industry",
    "Topic",
    "SubTopic",
    "Prefix",
    "Fuzzing-Idx",
    "Prompt",
    "Risks",
    "Keywords",
];

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn row(cells: &[(&str, &str)]) -> Row {
    cells.iter().copied().collect()
}

fn classifications() -> DatasetPayload {
    DatasetPayload {
        headers: headers(&["topic", "Sub Topic", "INDUSTRY", "Classification"]),
        rows: vec![row(&[
            ("topic", "Payments"),
            ("Sub Topic", "ACH"),
            ("INDUSTRY", "Fintech"),
            ("Classification", "Restricted"),
        ])],
    }
}

#[test]
fn header_errors_are_reported_per_side() {
    let request = ValidateRequest {
        strings: DatasetPayload {
            headers: headers(&["Topic", "SubTopic", "Industry"]),
            rows: Vec::new(),
        },
        classifications: DatasetPayload {
            headers: headers(&["Topic", "SubTopic", "Industry"]),
            rows: Vec::new(),
        },
    };
    let response = handle_validate(&request);
    assert_eq!(response.status, 400);
    assert!(!response.is_valid());
    insta::assert_json_snapshot!(response.body, @r#"
    {
      "valid": false,
      "headerErrors": [
        {
          "type": "strings",
          "missingRequiredHeaders": [
            "Tier",
            "Prefix",
            "Fuzzing-Idx",
            "Prompt",
            "Risks",
            "Keywords"
          ],
          "reason": "Missing required headers: tier, prefix, fuzzingidx, prompt, risks, keywords"
        },
        {
          "type": "classifications",
          "missingRequiredHeaders": [
            "Classification"
          ],
          "reason": "Missing required headers: classification"
        }
      ]
    }
    "#);
}

#[test]
fn unmatched_rows_are_reported_with_totals() {
    let request = ValidateRequest {
        strings: DatasetPayload {
            headers: headers(&STRINGS_HEADERS),
            rows: vec![
                row(&[("Topic", "payments"), ("SubTopic", "ach"), ("Industry", "fintech")]),
                row(&[("Topic", "Unknown"), ("SubTopic", "Topic"), ("Industry", "Missing")]),
            ],
        },
        classifications: classifications(),
    };
    let response = handle_validate(&request);
    assert_eq!(response.status, 400);
    insta::assert_json_snapshot!(response.body, @r#"
    {
      "valid": false,
      "invalidRows": [
        {
          "rowIndex": 1,
          "row": {
            "Industry": "Missing",
            "SubTopic": "Topic",
            "Topic": "Unknown"
          },
          "reason": "No classification for Topic='Unknown', SubTopic='Topic', Industry='Missing'"
        }
      ],
      "totalRows": 2,
      "invalidCount": 1
    }
    "#);
}

#[test]
fn raw_headers_are_canonicalized_before_matching() {
    let mut strings_headers = headers(&STRINGS_HEADERS);
    strings_headers[3] = "sub_topic".to_string();
    let request = ValidateRequest {
        strings: DatasetPayload {
            headers: strings_headers,
            rows: vec![row(&[
                ("Topic", " Payments "),
                ("sub_topic", "ACH"),
                ("Industry", "FINTECH"),
            ])],
        },
        classifications: classifications(),
    };
    let response = handle_validate(&request);
    assert_eq!(response.status, 200);
    insta::assert_json_snapshot!(response.body, @r#"
    {
      "valid": true
    }
    "#);
}

#[test]
fn request_json_round_trips_into_a_response() {
    let body = serde_json::json!({
        "strings": {
            "headers": STRINGS_HEADERS,
            "rows": [{"Topic": "Payments", "SubTopic": null, "Industry": "Fintech"}]
        },
        "classifications": {
            "headers": ["Topic", "SubTopic", "Industry", "Classification"],
            "rows": [{"Topic": "Payments", "SubTopic": "ACH", "Industry": "Fintech"}]
        }
    });
    let request: ValidateRequest = serde_json::from_value(body).expect("decode request");
    let response = handle_validate(&request);
    let json = serde_json::to_value(&response.body).expect("encode body");
    assert_eq!(json["invalidRows"][0]["reason"], "Missing required fields: SubTopic");
    assert_eq!(json["invalidCount"], 1);
}
