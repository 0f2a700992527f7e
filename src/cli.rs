use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mn-asr-web",
    about = "MN-ASR Web Upload - relay and upload client for a speech-recognition backend",
    long_about = "Serves a browser upload page and a relay endpoint that forwards media uploads to an external speech-recognition backend, plus a command-line client for sending files through the relay.",
    after_help = "EXAMPLES:\n    # Start the relay server (backend address from BACKEND_URL)\n    mn-asr-web serve\n\n    # Start the relay against an explicit backend\n    mn-asr-web serve --backend-url http://asr.internal:9000\n\n    # Send a file through the relay\n    mn-asr-web file recording.wav\n\n    # Disable voice-activity detection\n    mn-asr-web file podcast.mp3 --vad false\n\n    # Use a different relay when in client mode\n    mn-asr-web file audio.wav --server-url http://my-server:3000"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(name = "serve")]
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value = "3000")]
        port: u16,

        /// Backend base address; overrides the BACKEND_URL environment variable.
        #[arg(long)]
        backend_url: Option<String>,
    },
    #[command(name = "file")]
    TranscribeFile {
        media_file: String,

        #[arg(long, default_value = "http://localhost:3000")]
        server_url: String,

        #[arg(long, default_value = "mn")]
        language: String,

        #[arg(long, default_value = "true", value_parser = validate_vad)]
        vad: String,
    },
}

pub fn validate_vad(s: &str) -> Result<String, String> {
    match s {
        "true" | "false" => Ok(s.to_string()),
        _ => Err("VAD must be \"true\" or \"false\"".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vad_accepts_booleans_only() {
        assert!(validate_vad("true").is_ok());
        assert!(validate_vad("false").is_ok());
        assert!(validate_vad("yes").is_err());
        assert!(validate_vad("1").is_err());
    }

    #[test]
    fn file_command_defaults() {
        let cli = Cli::parse_from(["mn-asr-web", "file", "recording.wav"]);
        match cli.command {
            Commands::TranscribeFile {
                media_file,
                server_url,
                language,
                vad,
            } => {
                assert_eq!(media_file, "recording.wav");
                assert_eq!(server_url, "http://localhost:3000");
                assert_eq!(language, "mn");
                assert_eq!(vad, "true");
            }
            _ => panic!("expected file command"),
        }
    }
}
