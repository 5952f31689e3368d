//! Response body extraction shared by the provider clients.

use crate::config::models::Provider;
use crate::llm::error_display;
use crate::llm::provider::LLMError;
use serde_json::Value;

/// Flatten chat message content that may be a string or a list of parts
pub fn extract_content_text(content: &Value) -> String {
    match content {
        Value::String(text) => text.to_string(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| match part {
                Value::String(text) => Some(text.as_str()),
                Value::Object(_) => part
                    .get("text")
                    .and_then(|t| t.as_str())
                    .or_else(|| part.get("content").and_then(|c| c.as_str())),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(""),
        _ => String::new(),
    }
}

fn first_choice(response: &Value, provider: Provider) -> Result<&Value, LLMError> {
    let choices = response
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| {
            LLMError::Provider(error_display::format_llm_error(
                provider,
                "Invalid response format: missing choices",
            ))
        })?;

    choices.first().ok_or_else(|| {
        LLMError::EmptyContent(error_display::format_llm_error(
            provider,
            "No choices in response",
        ))
    })
}

/// `choices[0].message.content` of a chat completion
pub fn chat_completion_text(response: &Value, provider: Provider) -> Result<String, LLMError> {
    let choice = first_choice(response, provider)?;
    let content = choice
        .get("message")
        .and_then(|message| message.get("content"))
        .map(extract_content_text)
        .unwrap_or_default();

    require_text(content, provider)
}

/// `choices[0].text` of a plain completion
pub fn completion_text(response: &Value, provider: Provider) -> Result<String, LLMError> {
    let choice = first_choice(response, provider)?;
    let text = choice
        .get("text")
        .and_then(|t| t.as_str())
        .unwrap_or_default()
        .to_string();

    require_text(text, provider)
}

/// `generated_text` of a text-generation response, either `[{..}, ..]` or a bare object
pub fn generated_text(response: &Value, provider: Provider) -> Result<String, LLMError> {
    if let Some(error) = response.get("error").and_then(|e| e.as_str()) {
        return Err(LLMError::Provider(error_display::format_llm_error(
            provider, error,
        )));
    }

    let entry = match response {
        Value::Array(entries) => entries.first().ok_or_else(|| {
            LLMError::EmptyContent(error_display::format_llm_error(
                provider,
                "Empty generation list",
            ))
        })?,
        other => other,
    };

    let text = entry
        .get("generated_text")
        .and_then(|t| t.as_str())
        .ok_or_else(|| {
            LLMError::Provider(error_display::format_llm_error(
                provider,
                "Invalid response format: missing generated_text",
            ))
        })?;

    Ok(text.to_string())
}

/// Remove every literal occurrence of the system prompt and the user prompt, then trim
///
/// Completion models tend to echo their input before continuing it.
pub fn strip_echo(text: &str, system_prompt: &str, prompt: &str) -> String {
    let mut stripped = text.to_string();
    for echoed in [system_prompt, prompt] {
        if !echoed.is_empty() {
            stripped = stripped.replace(echoed, "");
        }
    }
    stripped.trim().to_string()
}

fn require_text(text: String, provider: Provider) -> Result<String, LLMError> {
    if text.trim().is_empty() {
        Err(LLMError::EmptyContent(error_display::format_llm_error(
            provider,
            "Response carried no text",
        )))
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_content_text_variants() {
        assert_eq!(extract_content_text(&json!("plain")), "plain");
        assert_eq!(
            extract_content_text(&json!([
                "a",
                {"type": "text", "text": "b"},
                {"content": "c"},
                {"type": "image_url"},
                42
            ])),
            "abc"
        );
        assert_eq!(extract_content_text(&json!(null)), "");
        assert_eq!(extract_content_text(&json!({"text": "x"})), "");
    }

    #[test]
    fn test_chat_completion_text() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": "Hi there."}}]});
        assert_eq!(
            chat_completion_text(&body, Provider::OpenRouter).unwrap(),
            "Hi there."
        );

        let empty = json!({"choices": []});
        assert!(
            chat_completion_text(&empty, Provider::OpenRouter)
                .unwrap_err()
                .is_content_error()
        );

        let missing = json!({"choices": [{"message": {"content": null}}]});
        assert!(
            chat_completion_text(&missing, Provider::OpenRouter)
                .unwrap_err()
                .is_content_error()
        );

        let malformed = json!({"id": "x"});
        assert!(matches!(
            chat_completion_text(&malformed, Provider::OpenRouter),
            Err(LLMError::Provider(_))
        ));
    }

    #[test]
    fn test_completion_text() {
        let body = json!({"choices": [{"text": " once upon a time"}]});
        assert_eq!(
            completion_text(&body, Provider::OpenRouter).unwrap(),
            " once upon a time"
        );
        let blank = json!({"choices": [{"text": "   "}]});
        assert!(completion_text(&blank, Provider::OpenRouter).is_err());
    }

    #[test]
    fn test_generated_text_shapes() {
        let list = json!([{"generated_text": "first"}, {"generated_text": "second"}]);
        assert_eq!(generated_text(&list, Provider::HuggingFace).unwrap(), "first");

        let object = json!({"generated_text": "solo"});
        assert_eq!(generated_text(&object, Provider::HuggingFace).unwrap(), "solo");

        let error = json!({"error": "Model is loading"});
        let err = generated_text(&error, Provider::HuggingFace).unwrap_err();
        assert!(err.to_string().contains("Model is loading"));

        assert!(generated_text(&json!([]), Provider::HuggingFace).is_err());
    }

    #[test]
    fn test_strip_echo() {
        assert_eq!(
            strip_echo(
                "Prompt: Write a poem. Roses are red",
                "Prompt:",
                "Write a poem."
            ),
            "Roses are red"
        );
        assert_eq!(strip_echo("  keep me  ", "", ""), "keep me");
    }
}
