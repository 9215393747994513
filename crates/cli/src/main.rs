//! Terminal front end for the LiteStart onboarding wizard.
//!
//! Drives a [`WizardShell`] over stdin: renders the progress bar and the
//! current step's fields, reads values, and maps next/back/complete input
//! to shell events. The welcome screen before step 1 lives here, not in
//! the state machine.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use litestart_core::attachment::FileCandidate;
use litestart_core::draft::Role;
use litestart_core::vocab;
use litestart_submit::{SignupClient, SubmitConfig};
use litestart_wizard::{WizardShell, LABEL_COMPLETE};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "litestart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SubmitConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Loaded signup configuration");
    let transport = Arc::new(SignupClient::from_config(&config));

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("LiteStart — where students and startups meet.\n");
    let role = prompt_role(&mut input)?;

    // Welcome screen (the wizard itself starts at step 1).
    prompt(&mut input, "Press Enter to get started")?;

    let mut shell = WizardShell::new(role, transport);

    loop {
        render_step_header(&shell);
        edit_current_step(&mut input, &mut shell)?;

        let view = shell.view();
        let action = if view.primary_label == LABEL_COMPLETE {
            prompt(&mut input, "[c]omplete  [b]ack  [e]dit again  [q]uit")?
        } else {
            prompt(&mut input, "[n]ext  [b]ack  [e]dit again  [q]uit")?
        };

        match action.as_str() {
            "n" | "next" => {
                if !shell.next() {
                    print_notification(&mut shell);
                }
            }
            "c" | "complete" => {
                println!("Submitting…");
                match shell.submit().await {
                    Some(_) => {
                        println!("\nAll done! We'll be in touch soon.");
                        return Ok(());
                    }
                    None => print_notification(&mut shell),
                }
            }
            "b" | "back" => shell.back(),
            "e" | "edit" => {}
            "q" | "quit" => {
                println!("Signup abandoned. Nothing was saved.");
                return Ok(());
            }
            other => println!("Unrecognized action '{other}'."),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_step_header(shell: &WizardShell) {
    let view = shell.view();
    let filled = (view.progress * 20.0).round() as usize;
    println!(
        "\n[{}{}] Step {}/{} — {}",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        view.step,
        view.step_count,
        view.step_label
    );
}

fn print_notification(shell: &mut WizardShell) {
    if let Some(message) = shell.take_notification() {
        println!("! {message}");
    }
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

/// Print `label` and read one trimmed line.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read stdin")?;
    Ok(line.trim().to_string())
}

/// Prompt for a field, keeping the current value on empty input.
fn prompt_field(input: &mut impl BufRead, label: &str, current: &str) -> Result<String> {
    let answer = if current.is_empty() {
        prompt(input, label)?
    } else {
        prompt(input, &format!("{label} [{current}]"))?
    };
    if answer.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(answer)
    }
}

fn prompt_role(input: &mut impl BufRead) -> Result<Role> {
    loop {
        let answer = prompt(input, "Are you a [s]tudent or a s[t]artup?")?;
        match answer.to_lowercase().as_str() {
            "s" | "student" => return Ok(Role::Student),
            "t" | "startup" => return Ok(Role::Startup),
            _ => println!("Please answer 'student' or 'startup'."),
        }
    }
}

/// Read a file from disk and hand it to the shell's attachment gate.
fn prompt_attachment(input: &mut impl BufRead, shell: &mut WizardShell, label: &str) -> Result<()> {
    let current = shell
        .draft()
        .attachment()
        .map(|f| f.name().to_string())
        .unwrap_or_default();

    let path = prompt_field(input, label, &current)?;
    if path.is_empty() || path == current {
        return Ok(());
    }

    let path = Path::new(&path);
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("! Could not read {}: {e}", path.display());
            return Ok(());
        }
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let accepted = shell.attach_file(FileCandidate {
        name,
        content_type: content_type_for(path).to_string(),
        bytes,
    });
    if !accepted {
        print_notification(shell);
    }
    Ok(())
}

/// Map a file extension to the declared MIME type.
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

// ---------------------------------------------------------------------------
// Step editors
// ---------------------------------------------------------------------------

fn edit_current_step(input: &mut impl BufRead, shell: &mut WizardShell) -> Result<()> {
    let view = shell.view();
    match view.role {
        Role::Student => edit_student_step(input, shell, view.step),
        Role::Startup => edit_startup_step(input, shell, view.step),
    }
}

fn edit_student_step(input: &mut impl BufRead, shell: &mut WizardShell, step: u8) -> Result<()> {
    match step {
        1 => {
            let d = shell.draft().as_student().cloned().expect("student draft");
            let first_name = prompt_field(input, "First name", &d.first_name)?;
            let last_name = prompt_field(input, "Last name", &d.last_name)?;
            let email = prompt_field(input, "University email", &d.email)?;

            let d = shell.draft_mut().as_student_mut().expect("student draft");
            d.first_name = first_name;
            d.last_name = last_name;
            d.email = email;
        }
        2 => {
            let d = shell.draft().as_student().cloned().expect("student draft");
            let university = prompt_field(input, "University", &d.university)?;
            let major = prompt_field(input, "Major / field of study", &d.major)?;
            println!("Graduation years: {}", vocab::GRADUATION_YEARS.join(", "));
            let graduation_year = prompt_field(input, "Graduation year", &d.graduation_year)?;

            let d = shell.draft_mut().as_student_mut().expect("student draft");
            d.university = university;
            d.major = major;
            d.graduation_year = graduation_year;
        }
        3 => {
            println!("Suggested skills: {}", vocab::SKILL_TAGS.join(", "));
            let chosen = shell
                .draft()
                .as_student()
                .expect("student draft")
                .skills
                .as_slice()
                .join(", ");
            if !chosen.is_empty() {
                println!("Currently selected: {chosen}");
            }
            let answer = prompt(input, "Toggle skills (comma-separated, blank to keep)")?;
            if !answer.is_empty() {
                let d = shell.draft_mut().as_student_mut().expect("student draft");
                for tag in answer.split(',') {
                    let tag = tag.trim();
                    if !tag.is_empty() {
                        d.skills.toggle(tag);
                    }
                }
            }
            prompt_attachment(input, shell, "CV file path (PDF/DOC/DOCX, max 10 MiB)")?;
        }
        _ => {
            let d = shell.draft().as_student().cloned().expect("student draft");
            println!("Availability: {}", vocab::AVAILABILITY_OPTIONS.join(", "));
            let availability = prompt_field(input, "Weekly availability", &d.availability)?;
            let portfolio_url = prompt_field(input, "Portfolio URL (optional)", &d.portfolio_url)?;

            let d = shell.draft_mut().as_student_mut().expect("student draft");
            d.availability = availability;
            d.portfolio_url = portfolio_url;
        }
    }
    Ok(())
}

fn edit_startup_step(input: &mut impl BufRead, shell: &mut WizardShell, step: u8) -> Result<()> {
    match step {
        1 => {
            let d = shell.draft().as_startup().cloned().expect("startup draft");
            let company_name = prompt_field(input, "Company name", &d.company_name)?;
            let contact_name = prompt_field(input, "Contact name", &d.contact_name)?;
            let email = prompt_field(input, "Work email", &d.email)?;
            let website = prompt_field(input, "Website", &d.website)?;

            let d = shell.draft_mut().as_startup_mut().expect("startup draft");
            d.company_name = company_name;
            d.contact_name = contact_name;
            d.email = email;
            d.website = website;

            prompt_attachment(input, shell, "Logo file path (max 5 MiB)")?;
        }
        2 => {
            let d = shell.draft().as_startup().cloned().expect("startup draft");
            println!("Industries: {}", vocab::INDUSTRY_OPTIONS.join(", "));
            let industry = prompt_field(input, "Industry", &d.industry)?;
            let industry_other = if industry == vocab::INDUSTRY_OTHER {
                prompt_field(input, "Describe your industry", &d.industry_other)?
            } else {
                d.industry_other.clone()
            };
            println!("Company sizes: {}", vocab::COMPANY_SIZE_OPTIONS.join(", "));
            let company_size = prompt_field(input, "Company size", &d.company_size)?;
            let description = prompt_field(input, "What does your company do?", &d.description)?;
            let location = prompt_field(input, "Location", &d.location)?;

            let d = shell.draft_mut().as_startup_mut().expect("startup draft");
            d.industry = industry;
            d.industry_other = industry_other;
            d.company_size = company_size;
            d.description = description;
            d.location = location;
        }
        _ => {
            let d = shell.draft().as_startup().cloned().expect("startup draft");
            let founding_year = prompt_field(input, "Founding year", &d.founding_year)?;
            let linkedin_url = prompt_field(input, "LinkedIn URL (optional)", &d.linkedin_url)?;

            let d = shell.draft_mut().as_startup_mut().expect("startup draft");
            d.founding_year = founding_year;
            d.linkedin_url = linkedin_url;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_covers_allowed_extensions() {
        assert_eq!(content_type_for(Path::new("cv.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("cv.DOCX")), "application/vnd.openxmlformats-officedocument.wordprocessingml.document");
        assert_eq!(content_type_for(Path::new("logo.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(
            content_type_for(Path::new("archive.zip")),
            "application/octet-stream"
        );
        assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
    }
}
