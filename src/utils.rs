use crate::constants::{
    FLAG_ENDPOINT, FLAG_OUTPUT, FLAG_OUTPUT_LONG, FLAG_PROVIDER, FLAG_PROVIDER_LONG,
    IMAGES_PER_REQUEST, RESPONSE_FORMAT_B64_JSON,
};
use crate::display::{present, report_error};
use crate::error::{GenerationError, Result};
use crate::images::{GeneratedIllustration, GenerationRequestBody};
use crate::provider::{Provider, ProviderConfig, ResponseShape};
use crate::secrets::{resolve_api_key, SecretStore};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use serde_json::Value;
use std::path::PathBuf;

const MAX_ERROR_BODY_CHARS: usize = 300;

/// Options gathered from the command line.
#[derive(Debug)]
pub struct CliOptions {
    pub provider: Provider,
    pub endpoint: Option<String>,
    pub output: Option<PathBuf>,
    pub scene: String,
}

/// Leading flags are options; everything after them (or after `--`) is the
/// scene description.
pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut provider = Provider::default();
    let mut endpoint = None;
    let mut output = None;
    let mut rest = args.iter().skip(1);
    let mut words = Vec::new();

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            FLAG_PROVIDER | FLAG_PROVIDER_LONG => {
                provider = option_value(arg, rest.next())?.parse()?;
            }
            FLAG_OUTPUT | FLAG_OUTPUT_LONG => {
                output = Some(PathBuf::from(option_value(arg, rest.next())?));
            }
            FLAG_ENDPOINT => {
                endpoint = Some(option_value(arg, rest.next())?.to_string());
            }
            "--" => {
                words.extend(rest.by_ref().cloned());
                break;
            }
            _ => {
                words.push(arg.clone());
                words.extend(rest.by_ref().cloned());
                break;
            }
        }
    }

    Ok(CliOptions {
        provider,
        endpoint,
        output,
        scene: words.join(" "),
    })
}

fn option_value<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| GenerationError::MissingOption(flag.to_string()))
}

pub fn build_headers(api_key: &str, secret_name: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
        .map_err(|_| GenerationError::InvalidApiKey(secret_name.to_string()))?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn build_generation_request(
    scene: &str,
    provider: &ProviderConfig,
) -> Result<GenerationRequestBody> {
    if scene.trim().is_empty() {
        return Err(GenerationError::EmptyDescription);
    }

    Ok(GenerationRequestBody {
        model: provider.model.to_string(),
        prompt: format!("{}{}", scene, provider.style_suffix),
        width: provider.width,
        height: provider.height,
        steps: provider.steps,
        n: IMAGES_PER_REQUEST,
        response_format: RESPONSE_FORMAT_B64_JSON.to_string(),
    })
}

/// Sends the single POST for a generation and returns the raw status and body.
pub async fn send_generation_request(
    client: &Client,
    provider: &ProviderConfig,
    api_key: &str,
    body: &GenerationRequestBody,
) -> Result<(StatusCode, String)> {
    let headers = build_headers(api_key, provider.secret_name)?;
    log::debug!(
        "posting generation request to {} (model {})",
        provider.endpoint,
        provider.model
    );

    let response = client
        .post(&provider.endpoint)
        .headers(headers)
        .json(body)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    log::debug!("{} answered {} ({} bytes)", provider.name, status, text.len());
    Ok((status, text))
}

pub fn decode_image_response(
    provider: &ProviderConfig,
    status: StatusCode,
    body: &str,
) -> Result<Vec<u8>> {
    if !status.is_success() {
        log::warn!("{} returned HTTP {}", provider.name, status);
        return Err(GenerationError::Http {
            status: status.as_u16(),
            message: error_message(status, body),
        });
    }

    let json: Value = serde_json::from_str(body)
        .map_err(|e| GenerationError::UnexpectedResponse(format!("invalid JSON: {}", e)))?;
    let payload = extract_image_payload(provider.response_shape, &json)?;

    Ok(base64::decode(strip_data_uri(payload))?)
}

fn extract_image_payload(shape: ResponseShape, json: &Value) -> Result<&str> {
    let entry = match shape {
        ResponseShape::DataB64Json => first_entry(json, "data")?.get("b64_json"),
        ResponseShape::GeneratedImages => Some(first_entry(json, "generated_images")?),
    };

    entry
        .and_then(Value::as_str)
        .filter(|payload| !payload.trim().is_empty())
        .ok_or(GenerationError::NoImageFound)
}

fn first_entry<'a>(json: &'a Value, field: &str) -> Result<&'a Value> {
    json.get(field)
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .ok_or_else(|| GenerationError::UnexpectedResponse(format!("missing `{}[0]`", field)))
}

// Some backends prefix the payload with a data URI header.
fn strip_data_uri(payload: &str) -> String {
    let payload = match payload.find("base64,") {
        Some(idx) if payload.starts_with("data:") => &payload[idx + "base64,".len()..],
        _ => payload,
    };
    payload.split_whitespace().collect()
}

fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status.canonical_reason().unwrap_or("unknown status").to_string();
    }
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

/// Runs one validate, build, send, decode pass. Input and key problems are
/// reported before anything goes over the network.
pub async fn generate_illustration(
    client: &Client,
    provider: &ProviderConfig,
    secrets: &dyn SecretStore,
    scene: &str,
) -> Result<GeneratedIllustration> {
    let body = build_generation_request(scene, provider)?;
    let api_key = resolve_api_key(secrets, provider)?;

    let spinner = create_spinner("yellow", "Generating the illustration...".to_string());
    let sent = send_generation_request(client, provider, &api_key, &body).await;
    spinner.finish_and_clear();

    let (status, text) = sent?;
    let image_bytes = decode_image_response(provider, status, &text)?;
    log::info!(
        "{} produced {} bytes with {}",
        provider.name,
        image_bytes.len(),
        provider.model
    );

    Ok(GeneratedIllustration::new(image_bytes, provider.model))
}

pub async fn process_command(
    client: &Client,
    args: &[String],
    secrets: &dyn SecretStore,
) -> Result<PathBuf> {
    let options = match parse_args(args) {
        Ok(options) => options,
        Err(e) => {
            report_error(&e);
            return Err(e);
        }
    };

    let mut provider = options.provider.config();
    if let Some(endpoint) = options.endpoint {
        provider = provider.with_endpoint(endpoint);
    }

    let outcome = generate_illustration(client, &provider, secrets, &options.scene).await;
    present(outcome, options.output.as_deref())
}
