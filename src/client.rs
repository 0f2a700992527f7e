use anyhow::{Result, anyhow};
use std::fs;
use std::path::Path;

use crate::config::ClientConfig;
use crate::dto::{ErrorBody, TranscriptionResult};

pub async fn send_transcription_request(config: &ClientConfig) -> Result<TranscriptionResult> {
    let client = reqwest::Client::new();

    if !Path::new(&config.media_file).exists() {
        return Err(anyhow!("Media file not found: {}", config.media_file));
    }
    let media_data =
        fs::read(&config.media_file).map_err(|e| anyhow!("Failed to read media file: {}", e))?;

    println!(
        "📁 Media file: {} ({} bytes)",
        config.media_file,
        media_data.len()
    );

    let form = reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(media_data).file_name(config.media_file.clone()),
    );

    let url = format!(
        "{}/api/transcribe_clean?language={}&vad={}",
        config.server_url, config.language, config.vad
    );
    println!("🚀 Sending transcription request to: {url}");

    let response = client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| anyhow!("Failed to send request: {}", e))?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .map_err(|e| anyhow!("Failed to read response: {}", e))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&response_text)
            .map(|body| body.error)
            .unwrap_or_else(|_| "Request failed".to_string());
        return Err(anyhow!("Server returned error {}: {}", status, message));
    }

    let result: TranscriptionResult = serde_json::from_str(&response_text)
        .map_err(|e| anyhow!("Failed to parse JSON response: {}", e))?;

    Ok(result)
}

pub async fn check_server_health(server_url: &str) -> Result<()> {
    let client = reqwest::Client::new();

    println!("🔍 Checking server health at: {server_url}/api/v1/health");

    let response = client
        .get(format!("{server_url}/api/v1/health"))
        .send()
        .await
        .map_err(|e| anyhow!("Failed to connect to server: {}", e))?;

    if response.status().is_success() {
        println!("✅ Server is healthy");
        Ok(())
    } else {
        Err(anyhow!("Server health check failed: {}", response.status()))
    }
}

fn print_result(result: &TranscriptionResult) -> Result<()> {
    println!("Language: {}", result.language);
    println!("Duration: {}s", result.duration);
    println!("\nText:\n{}", result.text);
    if let Some(raw) = &result.text_raw {
        println!("\nRaw:\n{raw}");
    }
    println!(
        "\nSegments:\n{}",
        serde_json::to_string_pretty(&result.segments)?
    );
    Ok(())
}

pub async fn run_client(config: ClientConfig) -> Result<()> {
    println!("🎵 MN-ASR Upload Client");
    println!("=======================");
    println!(
        "📁 File: {} (language={}, vad={})",
        config.media_file, config.language, config.vad
    );
    println!();

    if let Err(e) = check_server_health(&config.server_url).await {
        eprintln!("❌ {e}");
        eprintln!("💡 Make sure the relay is running: mn-asr-web serve");
        return Err(e);
    }

    match send_transcription_request(&config).await {
        Ok(result) => {
            println!("\n✅ Transcription completed!");
            println!("📝 Result:");
            print_result(&result)?;
        }
        Err(e) => {
            eprintln!("❌ Transcription failed: {e}");
            return Err(e);
        }
    }

    Ok(())
}
