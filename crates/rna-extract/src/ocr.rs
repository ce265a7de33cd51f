//! OCR Space client: image bytes → raw label text.

use serde::Deserialize;
use serde_json::Value;

use crate::{ExtractClient, ExtractError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OcrResponse {
    #[serde(rename = "OCRExitCode", default)]
    ocr_exit_code: i32,
    #[serde(default)]
    parsed_results: Vec<ParsedResult>,
    /// OCR Space reports this as either a string or a list of strings.
    #[serde(default)]
    error_message: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ParsedResult {
    #[serde(default)]
    parsed_text: String,
}

impl OcrResponse {
    fn error_text(&self) -> String {
        match &self.error_message {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; "),
            _ => "Unknown Error".to_string(),
        }
    }
}

impl ExtractClient {
    /// Run OCR over JPEG image bytes and return the detected text.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Ocr`] when the service reports a failure exit
    /// code (bad image, key quota), or a transport/API error.
    pub async fn ocr_text(&self, image: Vec<u8>) -> Result<String, ExtractError> {
        if self.ocr.api_key.is_empty() {
            return Err(ExtractError::MissingApiKey { service: "OCR" });
        }

        let part = reqwest::multipart::Part::bytes(image)
            .file_name("image.jpg")
            .mime_str("image/jpeg")?;
        let form = reqwest::multipart::Form::new()
            .text("apikey", self.ocr.api_key.clone())
            .text("language", self.ocr.language.clone())
            .text("isOverlayRequired", "false")
            .text("FileType", "JPG")
            .text("OCREngine", self.ocr.engine.to_string())
            .part("screenshot", part);

        let resp = self
            .http
            .post(&self.ocr.endpoint)
            .multipart(form)
            .timeout(std::time::Duration::from_secs(self.ocr.timeout_secs))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ExtractError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let result: OcrResponse = resp.json().await?;
        if result.ocr_exit_code != 1 {
            return Err(ExtractError::Ocr(result.error_text()));
        }
        result
            .parsed_results
            .into_iter()
            .next()
            .map(|r| r.parsed_text)
            .ok_or_else(|| ExtractError::Ocr("no parsed results returned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_successful_response() {
        let raw = r#"{
            "OCRExitCode": 1,
            "ParsedResults": [{"ParsedText": "Nutrition Facts\nSodium 140mg"}]
        }"#;
        let resp: OcrResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.ocr_exit_code, 1);
        assert_eq!(
            resp.parsed_results[0].parsed_text,
            "Nutrition Facts\nSodium 140mg"
        );
    }

    #[test]
    fn error_message_as_string() {
        let raw = r#"{"OCRExitCode": 99, "ErrorMessage": "API key limit reached"}"#;
        let resp: OcrResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.error_text(), "API key limit reached");
    }

    #[test]
    fn error_message_as_list() {
        let raw = r#"{"OCRExitCode": 3, "ErrorMessage": ["Bad image", "Unsupported type"]}"#;
        let resp: OcrResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.error_text(), "Bad image; Unsupported type");
    }

    #[test]
    fn missing_error_message_falls_back() {
        let raw = r#"{"OCRExitCode": 6}"#;
        let resp: OcrResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.error_text(), "Unknown Error");
    }
}
