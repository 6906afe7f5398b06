//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `contacts_core` linkage.
//! - Print filtered sample contacts for quick local sanity checks.
//!
//! Usage: `contacts_cli [query...]`

use contacts_core::{ContactSource, Directory, InMemoryContactSource};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("contacts_core ping={}", contacts_core::ping());
    println!("contacts_core version={}", contacts_core::core_version());

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let directory = match Directory::from_contacts(InMemoryContactSource::sample().load_contacts())
    {
        Ok(directory) => directory,
        Err(err) => {
            eprintln!("failed to load contacts: {err}");
            return ExitCode::FAILURE;
        }
    };

    let hits = directory.filter_str(&query);
    for contact in &hits {
        println!(
            "{}\t{}\t{}\t{}",
            contact.id,
            contact.name,
            contact.phone_number,
            contact.email.as_deref().unwrap_or("-")
        );
    }
    println!("matches={}", hits.len());
    ExitCode::SUCCESS
}
