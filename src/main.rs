use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use iocraft::prelude::*;
use url::Url;

use crate::client::StorageClient;
use crate::session::{UploadCandidate, UploadSession};
use crate::ui::{
    ConfigHeader, ErrorMessage, GalleryList, InputPrompt, SessionHeader, SuccessMessage,
};

mod client;
mod clipboard;
mod config;
mod gallery;
mod mime;
mod rest_types;
mod session;
mod ui;

#[derive(Parser)]
#[command(name = "imgup")]
#[command(version)]
#[command(about = "Publish images through a presigned-upload service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure imgup interactively
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config) => interactive_config(),
        None => {
            let config = config::read_config()?;
            let client = StorageClient::new(config.api_base);
            run_session(UploadSession::new(client)).await
        }
    }
}

const HELP: &str = "\
Commands:
  select <path>   choose a local image for upload
  upload          upload the selected image
  url <link>      add an image by its URL
  copy <index>    copy a gallery link to the clipboard
  list            show the gallery
  help            show this help
  quit            exit";

async fn run_session(mut session: UploadSession<StorageClient>) -> Result<()> {
    element!(SessionHeader()).print();
    println!("{HELP}");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "select" => select(&mut session, rest),
            "upload" => {
                if let Some(candidate) = session.pending() {
                    println!("Uploading {}...", candidate.name);
                }
                session.upload().await;
                match session.error() {
                    Some(err) => element!(ErrorMessage(message: err.to_string())).print(),
                    None => {
                        if let Some(entry) = session.gallery().entries().last() {
                            element!(SuccessMessage(
                                message: format!("Uploaded {} -> {}", entry.name, entry.url)
                            ))
                            .print();
                        }
                    }
                }
            }
            "url" => {
                session.add_from_url(rest);
                report(&session, "Image added from URL");
            }
            "copy" => copy_link(&session, rest),
            "list" => {
                element!(GalleryList(entries: session.gallery().entries().to_vec())).print();
            }
            "help" => println!("{HELP}"),
            "quit" | "exit" => return Ok(()),
            other => {
                element!(ErrorMessage(message: format!("Unknown command: {other}"))).print();
            }
        }
    }
}

fn select(session: &mut UploadSession<StorageClient>, path: &str) {
    if path.is_empty() {
        element!(ErrorMessage(message: "Usage: select <path>".to_string())).print();
        return;
    }

    match UploadCandidate::from_path(Path::new(path)) {
        Ok(candidate) => {
            let label = format!("Selected {} ({} B)", candidate.name, candidate.size);
            session.select_file(candidate);
            report(session, &label);
        }
        Err(err) => {
            element!(ErrorMessage(message: format!("{err:#}"))).print();
        }
    }
}

fn report(session: &UploadSession<StorageClient>, success: &str) {
    match session.error() {
        Some(err) => element!(ErrorMessage(message: err.to_string())).print(),
        None => element!(SuccessMessage(message: success.to_string())).print(),
    }
}

fn copy_link(session: &UploadSession<StorageClient>, index: &str) {
    let Ok(index) = index.parse::<usize>() else {
        element!(ErrorMessage(message: "Usage: copy <index>".to_string())).print();
        return;
    };

    match session.gallery().get(index) {
        Some(entry) => {
            clipboard::copy(&entry.url);
            element!(SuccessMessage(message: format!("Copied link for {}", entry.name))).print();
        }
        None => {
            element!(ErrorMessage(message: format!("No gallery entry {index}"))).print();
        }
    }
}

fn read_input(prompt: &str, default: Option<&str>, description: Option<&str>) -> Result<String> {
    element! {
        InputPrompt(
            prompt: prompt.to_string(),
            default: default.map(|s| s.to_string()),
            description: description.map(|s| s.to_string())
        )
    }
    .print();

    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim().to_string();

    if input.is_empty()
        && let Some(def) = default
    {
        return Ok(def.to_string());
    }
    Ok(input)
}

fn interactive_config() -> Result<()> {
    element!(ConfigHeader()).print();

    let api_base = loop {
        let input = read_input(
            "API Base URL",
            None,
            Some("Root endpoint of the upload-slot service"),
        )?;

        match Url::parse(&input) {
            Ok(url) => break url,
            Err(e) => {
                element!(ErrorMessage(message: format!("Invalid URL: {}", e))).print();
                println!();
            }
        }
    };

    config::write_config(config::ConfigFile {
        api_base: Some(api_base),
    })?;

    element!(SuccessMessage(message: "Configuration complete!".to_string())).print();
    Ok(())
}
