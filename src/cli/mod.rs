//! CLI module for autolink-rs
//!
//! This module handles command line argument parsing and linking of input text.

use crate::config::AppConfig;
use crate::entity::formatter::{self, OutputFormat};
use crate::error::{AutolinkError, Result};
use crate::linker::Autolinker;
use clap::Parser;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autolink-rs")]
#[command(version, about = "Turn URLs, emails, phone numbers, mentions and hashtags in text into links")]
#[command(long_about = "autolink-rs finds linkable entities in HTML or plain text and wraps them in anchor tags.\n\n\
    Text comes from command line arguments, a pipe, or interactive mode.\n\n\
    Examples:\n  \
    $ autolink-rs \"Visit example.com\"\n  \
    $ cat post.html | autolink-rs --mention twitter --hashtag twitter\n  \
    $ autolink-rs --json \"mail joe@example.com\"\n  \
    $ autolink-rs --highlight < notes.txt")]
pub struct Cli {
    /// Text to link (if not provided, read from standard input)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Output matches as JSON
    #[arg(short, long, conflicts_with = "highlight")]
    pub json: bool,

    /// Mark matches inline instead of linking them
    #[arg(short = 'H', long)]
    pub highlight: bool,

    /// Treat input as plain text, matching inside markup too
    #[arg(short, long)]
    pub plain: bool,

    /// Link @mentions to this service (twitter, instagram, soundcloud, tiktok)
    #[arg(long, value_name = "SERVICE")]
    pub mention: Option<String>,

    /// Link #hashtags to this service (twitter, facebook, instagram, tiktok)
    #[arg(long, value_name = "SERVICE")]
    pub hashtag: Option<String>,

    /// Base CSS class for generated anchors
    #[arg(long, value_name = "NAME")]
    pub class_name: Option<String>,

    /// Do not link URLs
    #[arg(long)]
    pub no_urls: bool,

    /// Do not link email addresses
    #[arg(long)]
    pub no_email: bool,

    /// Do not link phone numbers
    #[arg(long)]
    pub no_phone: bool,

    /// Config file (default: <config dir>/autolink-rs/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command line options on top of the loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if self.highlight {
            config.output.format = OutputFormat::Highlight;
        }
        if let Some(mention) = &self.mention {
            config.linker.mention = Some(mention.clone());
        }
        if let Some(hashtag) = &self.hashtag {
            config.linker.hashtag = Some(hashtag.clone());
        }
        if let Some(class_name) = &self.class_name {
            config.linker.class_name = class_name.clone();
        }
        if self.no_urls {
            config.linker.urls.enabled = false;
        }
        if self.no_email {
            config.linker.email = false;
        }
        if self.no_phone {
            config.linker.phone = false;
        }
        if self.verbose {
            config.global.verbose = true;
        }
    }

    pub fn run(&self, mut config: AppConfig) -> Result<()> {
        self.apply(&mut config);

        let linker = Autolinker::new(&config.linker)?;
        log::debug!("{:?}", linker);

        if !self.texts.is_empty() {
            for text in &self.texts {
                println!("{}", self.process(text, &linker, &config)?);
            }
        } else {
            self.process_stdin(&linker, &config)?;
        }

        Ok(())
    }

    /// Process text from stdin (pipe or interactive mode)
    fn process_stdin(&self, linker: &Autolinker, config: &AppConfig) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        if atty::is(atty::Stream::Stdin) {
            println!("autolink-rs interactive mode (type quit or Ctrl+D to exit)");

            for line in stdin.lock().lines() {
                let line = line?;
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "quit" || trimmed == "exit" {
                    break;
                }

                println!("{}", self.process(trimmed, linker, config)?);
                stdout.flush()?;
            }
        } else {
            // Pipe mode: the whole input is one document, so markup may span lines
            let mut buffer = String::new();
            stdin.lock().read_to_string(&mut buffer)?;

            let output = self.process(&buffer, linker, config)?;
            stdout.write_all(output.as_bytes())?;
            if config.output.format == OutputFormat::Json {
                writeln!(stdout)?;
            }
        }

        Ok(())
    }

    /// Link or describe the matches in one piece of text
    fn process(&self, text: &str, linker: &Autolinker, config: &AppConfig) -> Result<String> {
        let matches = if self.plain {
            linker.parse_plain(text)
        } else {
            linker.parse(text)
        };

        match config.output.format {
            OutputFormat::Html if self.plain => Ok(formatter::replace(text, &matches.matches, |m| {
                Some(linker.tag_builder().build(m))
            })),
            OutputFormat::Html => Ok(linker.link(text)),
            OutputFormat::Json => {
                formatter::format_json(&matches.matches, &config.linker.class_name)
                    .map_err(AutolinkError::JsonError)
            }
            OutputFormat::Highlight => {
                for m in &matches {
                    log::debug!("{}", formatter::format_match(m));
                }
                let use_color = config.output.enable_colors && atty::is(atty::Stream::Stdout);
                Ok(formatter::format_highlight(text, &matches.matches, use_color))
            }
        }
    }
}
