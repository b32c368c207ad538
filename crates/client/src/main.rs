use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use domain::models::{parse_kid_count, SessionState};
use tracing::info;

use rsvp_client::config::Config;
use rsvp_client::http::HttpRsvpApi;
use rsvp_client::logging::init_logging;
use rsvp_client::page::PageContext;
use rsvp_client::session::{RsvpSession, SubmitOutcome};

#[derive(Parser)]
#[command(name = "rsvp")]
#[command(about = "Look up a wedding invitation and send the RSVP", long_about = None)]
struct Cli {
    /// Invitation page URL, e.g. https://example.com/rsvp/?code=ABC123
    page_url: String,

    /// Bring the plus-one (only used when the invitation offers one)
    #[arg(long)]
    plus_one: bool,

    /// Number of kids attending; required when the invitation includes kids
    #[arg(long)]
    kids: Option<String>,

    /// Dietary restrictions or allergies
    #[arg(long, default_value = "")]
    dietary: String,

    /// Message for the couple
    #[arg(long, default_value = "")]
    message: String,

    /// Song request
    #[arg(long, default_value = "")]
    song: String,

    /// Send the response instead of only showing the invitation
    #[arg(long)]
    submit: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    init_logging(&config.logging);

    info!("Starting RSVP client v{}", env!("CARGO_PKG_VERSION"));

    let page = PageContext::parse(&cli.page_url)?;
    if !page.show_section() {
        println!("No invitation code in the page URL; nothing to show.");
        return Ok(());
    }

    let api_base = page.api_base(&config.api)?;
    info!(api_base = %api_base, "Using RSVP API");

    let api = Arc::new(HttpRsvpApi::new(api_base.clone(), &config.api)?);
    let session = RsvpSession::new(
        api,
        config.session_config(api_base.as_str()),
        page.invite_code(),
    );

    match session.start().await {
        SessionState::Idle => {
            println!("The invitation code is empty.");
            return Ok(());
        }
        SessionState::Error(message) => {
            println!("Error: {}", message);
            return Ok(());
        }
        SessionState::Confirmed => {
            print_confirmation(&session);
            return Ok(());
        }
        _ => print_form(&session),
    }

    if !cli.submit {
        return Ok(());
    }

    session.set_plus_one(cli.plus_one);
    if let Some(count) = cli.kids.as_deref().and_then(parse_kid_count) {
        if let Err(err) = session.select_kid_count(count) {
            println!("Error: {}", err);
            return Ok(());
        }
    }
    session.edit_draft(|draft| {
        draft.dietary_info = cli.dietary.clone();
        draft.message_for_us = cli.message.clone();
        draft.song_request = cli.song.clone();
    });

    match session.submit().await {
        SubmitOutcome::Confirmed => {
            if session.take_celebration() {
                println!("*** Thank you! ***");
            }
            print_confirmation(&session);
        }
        SubmitOutcome::Invalid(err) | SubmitOutcome::Failed(err) => {
            println!("Error: {}", err);
        }
        SubmitOutcome::Ignored => {
            println!("Nothing was sent.");
        }
    }

    Ok(())
}

fn print_form(session: &RsvpSession) {
    println!("Invitation for {}", session.guest_name().unwrap_or_default());

    let size = session.invite_size_message();
    if !size.is_empty() {
        println!("{}", size);
    }
    if session.show_plus_one() {
        println!("  --plus-one    bring your plus-one");
    }
    if session.show_kids() {
        let options: Vec<String> = session
            .kid_options()
            .iter()
            .map(|n| n.to_string())
            .collect();
        println!("  --kids N      required, one of {}", options.join(", "));
    }
    println!("  --dietary, --message, --song are optional");
}

fn print_confirmation(session: &RsvpSession) {
    println!(
        "RSVP received for {}. See you there!",
        session.guest_name().unwrap_or_default()
    );
}
