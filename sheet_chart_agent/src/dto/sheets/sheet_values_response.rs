use crate::common::*;

#[doc = "GET spreadsheets/{id}/values/{range} 응답. 빈 시트면 values 필드가 없다."]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(rename_all = "camelCase")]
pub struct SheetValuesResponse {
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

#[doc = "GET spreadsheets/{id}?fields=sheets.properties.title 응답"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SpreadsheetMetaResponse {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SheetEntry {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SheetProperties {
    pub title: String,
}

#[doc = "Google API 공통 오류 응답"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct GoogleErrorResponse {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct GoogleErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_and_missing_values() {
        let raw: &str = r#"{
            "range": "Sheet1!A1:Z1000",
            "majorDimension": "ROWS",
            "values": [["Month", "Revenue"], ["Jan", 1000]]
        }"#;
        let res: SheetValuesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(res.values().len(), 2);
        assert_eq!(res.values()[1][1], json!(1000));

        let empty: SheetValuesResponse =
            serde_json::from_str(r#"{"range": "Sheet1!A1:Z1000", "majorDimension": "ROWS"}"#)
                .unwrap();
        assert!(empty.values().is_empty());
    }

    #[test]
    fn parses_sheet_titles_and_errors() {
        let meta: SpreadsheetMetaResponse = serde_json::from_str(
            r#"{"sheets": [{"properties": {"title": "Sheet1"}}, {"properties": {"title": "Q3"}}]}"#,
        )
        .unwrap();
        let titles: Vec<&str> = meta
            .sheets()
            .iter()
            .map(|s| s.properties().title().as_str())
            .collect();
        assert_eq!(titles, vec!["Sheet1", "Q3"]);

        let err: GoogleErrorResponse = serde_json::from_str(
            r#"{"error": {"code": 400, "message": "Unable to parse range: Q4", "status": "INVALID_ARGUMENT"}}"#,
        )
        .unwrap();
        assert_eq!(*err.error().code(), 400);
        assert!(err.error().message().contains("Unable to parse range"));
    }
}
