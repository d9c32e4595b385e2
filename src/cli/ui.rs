use colored::*;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use textwrap::wrap;

use crate::materializer::{WriteReport, DEFAULT_PRIMARY_FILENAME};
use crate::models::{ComplexityTier, Document};

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(4)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Spinner shown while waiting on the completion service
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Ask whether to save the generated bundle
pub fn confirm_save() -> std::io::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Save this code to file?")
        .default(true)
        .interact()
        .map_err(std::io::Error::other)
}

/// Prompt for the main script filename
pub fn ask_filename() -> std::io::Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter filename")
        .default(DEFAULT_PRIMARY_FILENAME.to_string())
        .interact_text()
        .map_err(std::io::Error::other)
}

/// Render a summary of an accepted document
pub fn print_document(doc: &Document) {
    let tier = match doc.metadata.complexity {
        ComplexityTier::Beginner => "beginner".green(),
        ComplexityTier::Intermediate => "intermediate".yellow(),
        ComplexityTier::Advanced => "advanced".red(),
    };
    println!(
        "{} {} | {} lines | {} artifact(s)",
        "Complexity:".bold(),
        tier,
        doc.metadata.estimated_lines,
        doc.metadata.artifact_count
    );

    if !doc.documentation.description.is_empty() {
        print_header("Description");
        print_text(&doc.documentation.description);
    }

    print_header("Generated Perl Script");
    println!("{}", doc.primary_artifact);

    for artifact in &doc.auxiliary_artifacts {
        print_header(&format!("{} ({:?})", artifact.filename, artifact.kind));
        if !artifact.description.is_empty() {
            print_info(&artifact.description);
        }
        println!("{}", artifact.content);
    }

    if !doc.dependencies.is_empty() {
        print_header("Dependencies");
        for module in &doc.dependencies.core {
            print_result("Core", module);
        }
        for module in &doc.dependencies.third_party {
            let detail = if module.purpose.is_empty() {
                module.install_command.clone()
            } else {
                format!("{} ({})", module.install_command, module.purpose)
            };
            print_result(&format!("CPAN {}", module.name), &detail);
        }
        for req in &doc.dependencies.system {
            print_result("System", req);
        }
    }

    if !doc.code_structure.functions.is_empty() {
        print_header("Functions");
        for func in &doc.code_structure.functions {
            print_result(&func.name, &func.description);
            if !func.parameters.is_empty() {
                println!("  parameters: {}", func.parameters.join(", "));
            }
        }
    }

    if !doc.documentation.usage_examples.is_empty() {
        print_header("Usage Examples");
        for example in &doc.documentation.usage_examples {
            println!("  {}", example.cyan());
        }
    }

    if !doc.best_practices.is_empty() {
        print_header("Best Practices Applied");
        for practice in &doc.best_practices {
            println!("  {} {}", "✓".green(), practice);
        }
    }
}

/// Report materialization results, written and failed files alike
pub fn print_write_report(report: &WriteReport) {
    for path in &report.written {
        print_success(&format!("saved {}", path.display()));
    }
    for failure in &report.failures {
        print_error(&format!("{}: {}", failure.path.display(), failure.message));
    }
}
