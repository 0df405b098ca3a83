//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! `format_*` functions build strings and are testable; `display_*` functions print them.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{PreReleaseKind, Tag, TagSet};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the proposed tag and what it was derived from.
///
/// # Arguments
/// * `source` - Tag the proposal was derived from (None for a fresh stream)
/// * `new_tag` - The new tag being proposed
pub fn display_proposed_tag(source: Option<&str>, new_tag: &str) {
    match source {
        Some(old) => {
            println!("\n{}", style("Proposed Tag:").bold());
            println!("  From: {}", style(old).red());
            println!("  To:   {}", style(new_tag).green());
        }
        None => {
            println!("\n{}", style("Initial Tag:").bold());
            println!("  New tag: {}", style(new_tag).green());
        }
    }
}

/// Display the current tag of each class.
pub fn display_tag_listing(tags: &TagSet) {
    println!("{}", style("Current tags:").bold());
    for line in format_tag_listing(tags) {
        println!("{}", line);
    }
}

/// One line per class: `production`, `dev`, `rc`, `patch`, each with its latest tag.
pub fn format_tag_listing(tags: &TagSet) -> Vec<String> {
    let classes = std::iter::once(None).chain(PreReleaseKind::ALL.into_iter().map(Some));

    classes
        .map(|kind| {
            let current = tags
                .current(kind)
                .map(Tag::to_string)
                .unwrap_or_else(|| "-".to_string());
            format!(
                "  {:<10} {} ({} tag(s))",
                class_label(kind),
                current,
                tags.of_class(kind).count()
            )
        })
        .collect()
}

/// Human-readable class name, `production` for `None`
pub fn class_label(kind: Option<PreReleaseKind>) -> &'static str {
    match kind {
        None => "production",
        Some(kind) => kind.identifier(),
    }
}

/// Display manual push instruction for a tag.
///
/// # Arguments
/// * `tag` - The tag that was created locally
/// * `remote` - The remote name (e.g., "origin")
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To publish this tag, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
