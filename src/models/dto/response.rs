use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadResultDto {
    pub total_rows: usize,
    pub valid_questions: usize,
    pub invalid_questions: usize,
    pub errors: Vec<String>,
}
