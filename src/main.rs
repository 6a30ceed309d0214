//! Proposalboard CLI
//!
//! Edits the stored proposal draft one command at a time. Every invocation
//! restores the draft, applies the command and saves on exit, so a sequence
//! of commands behaves like one editing session.
//!
//! ## Usage
//!
//! ```bash
//! proposalboard set --name 홍길동 --date 2024-03-15T14:30
//! proposalboard edit 1 --file listing.txt
//! proposalboard export --format png --no-contact
//! ```

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use proposalboard::app::{AppEvent, ProposalApp, ViewMode};
use proposalboard::constants::RESET_CONFIRM_PROMPT;
use proposalboard::export::{ExportFormat, ExportOutcome};
use proposalboard::notifications::NoticeVariant;
use proposalboard::render::format_meeting_datetime;
use proposalboard::settings::AppSettings;
use proposalboard::types::datetime_local;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "proposalboard")]
#[command(about = "Meeting property proposals for real-estate agents")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current draft
    Show,

    /// Set customer fields
    Set {
        /// Customer name
        #[arg(short, long)]
        name: Option<String>,

        /// Meeting time, e.g. 2024-03-15T14:30 (empty clears it)
        #[arg(short, long)]
        date: Option<String>,

        /// Customer requirements
        #[arg(short, long)]
        requirements: Option<String>,
    },

    /// Add a property block
    Add {
        /// Listing text
        text: Option<String>,

        /// Read the listing text from a file ("-" for stdin)
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Replace the text of a property block
    Edit {
        /// Block number, starting at 1
        index: usize,

        /// Listing text
        text: Option<String>,

        /// Read the listing text from a file ("-" for stdin)
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Remove a property block
    Remove {
        /// Block number, starting at 1
        index: usize,
    },

    /// Render the preview as an HTML page
    Preview {
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the page in the browser
        #[arg(long)]
        open: bool,
    },

    /// Save the draft as a named proposal
    Save,

    /// List saved proposals
    List,

    /// Load a saved proposal into the draft
    Load { id: i64 },

    /// Delete a saved proposal
    Delete { id: i64 },

    /// Open a proposal from the document store
    OpenRemote { id: String },

    /// Export the preview as an image
    Export {
        /// png, jpg or pdf (defaults to the configured format)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Leave the contact lines out of the image
        #[arg(long)]
        no_contact: bool,
    },

    /// Clear the draft and all stored data
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proposalboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => AppSettings::load_from(path),
        None => AppSettings::load(),
    };

    let mut app = ProposalApp::builder(settings).build();
    let result = run(&mut app, cli.command);
    app.handle(AppEvent::Unload)?;
    print_notices(&mut app);
    result
}

fn run(app: &mut ProposalApp, command: Commands) -> Result<()> {
    match command {
        Commands::Show => show(app),
        Commands::Set {
            name,
            date,
            requirements,
        } => {
            if let Some(name) = name {
                app.handle(AppEvent::CustomerNameChanged(name))?;
            }
            if let Some(raw) = date {
                let value = datetime_local::parse(&raw);
                if value.is_none() && !raw.trim().is_empty() {
                    bail!("invalid meeting time '{}' (expected YYYY-MM-DDTHH:MM)", raw);
                }
                app.handle(AppEvent::MeetingDateChanged(value))?;
            }
            if let Some(requirements) = requirements {
                app.handle(AppEvent::RequirementsChanged(requirements))?;
            }
            show(app);
        }
        Commands::Add { text, file } => {
            let text = listing_text(text, file.as_deref())?;
            app.handle(AppEvent::AddProperty)?;
            if let Some(text) = text {
                let index = app.property_count() - 1;
                app.handle(AppEvent::PropertyChanged { index, text })?;
            }
            println!("{} property blocks", app.property_count());
        }
        Commands::Edit { index, text, file } => {
            let text = listing_text(text, file.as_deref())?.unwrap_or_default();
            app.handle(AppEvent::PropertyChanged {
                index: block_index(index)?,
                text,
            })?;
        }
        Commands::Remove { index } => {
            app.handle(AppEvent::RemoveProperty(block_index(index)?))?;
            println!("{} property blocks", app.property_count());
        }
        Commands::Preview { output, open } => {
            app.handle(AppEvent::SwitchMode(ViewMode::Preview))?;
            let page = app.preview().to_page(&app.settings().title);
            let target = match output {
                Some(path) => Some(path),
                None if open => Some(std::env::temp_dir().join("proposalboard-preview.html")),
                None => None,
            };
            match target {
                Some(path) => {
                    std::fs::write(&path, page)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("{}", path.display());
                    if open {
                        open::that(&path)
                            .with_context(|| format!("Failed to open {}", path.display()))?;
                    }
                }
                None => println!("{}", page),
            }
        }
        Commands::Save => {
            app.handle(AppEvent::SaveProposal)?;
        }
        Commands::List => {
            let saved = app.saved_proposals();
            if saved.is_empty() {
                println!("No saved proposals");
            }
            for proposal in saved {
                println!(
                    "{}  {}  {} ({} listings)",
                    proposal.id,
                    proposal.saved_at,
                    proposal.customer_name,
                    proposal.properties.len()
                );
            }
        }
        Commands::Load { id } => {
            app.handle(AppEvent::LoadProposal(id))?;
            show(app);
        }
        Commands::Delete { id } => app.handle(AppEvent::DeleteProposal(id))?,
        Commands::OpenRemote { id } => {
            app.handle(AppEvent::OpenRemote(id))?;
            show(app);
        }
        Commands::Export { format, no_contact } => {
            let mut options = app.default_export_options();
            if let Some(format) = format {
                options.format = format;
            }
            if no_contact {
                options = options.without_contact();
            }
            if let ExportOutcome::Delivered { path, .. } = app.export(options)? {
                println!("{}", path.display());
            }
        }
        Commands::Reset { yes } => {
            let confirmed = yes || confirm(RESET_CONFIRM_PROMPT)?;
            app.handle(AppEvent::Reset { confirmed })?;
        }
    }
    Ok(())
}

fn show(app: &ProposalApp) {
    let draft = app.draft();
    println!("고객명: {}", draft.customer_name);
    println!("미팅 일시: {}", format_meeting_datetime(draft.meeting_date_time));
    println!("희망 조건: {}", draft.requirements);
    for (i, block) in draft.properties.iter().enumerate() {
        println!();
        println!("[매물 {}]", i + 1);
        if block.trim().is_empty() {
            println!("(비어 있음)");
        } else {
            println!("{}", block);
        }
    }
}

/// 1-based block number from the command line to a block index
fn block_index(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("block numbers start at 1"),
    }
}

fn listing_text(text: Option<String>, file: Option<&Path>) -> Result<Option<String>> {
    match file {
        Some(path) if path == Path::new("-") => {
            let text = std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?;
            Ok(Some(text))
        }
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Some(text))
        }
        None => Ok(text),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}\n[y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_notices(app: &mut ProposalApp) {
    for notice in app.notices_mut().drain() {
        match notice.variant {
            NoticeVariant::Error | NoticeVariant::Warning => eprintln!("{}", notice.display_line()),
            NoticeVariant::Success | NoticeVariant::Info => println!("{}", notice.display_line()),
        }
    }
}
