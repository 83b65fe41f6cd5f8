//! Formatting functions for UI output.
//!
//! All display logic lives here, separated from user interaction.

use console::style;

use crate::domain::Version;
use crate::warning::DeployWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✔").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a warning raised while updating files.
pub fn display_warning(warning: &DeployWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Echo a command line before it runs.
pub fn display_command(command: &str) {
    println!("Running command: {}", style(command).cyan());
}

pub fn display_current_version(version: &Version) {
    println!("\nCurrent version: {}\n", style(version).bold());
}

/// Final banner once every step has been offered.
pub fn display_complete(project_name: &str, version: &Version) {
    println!(
        "\n{} Deployment of {} {} complete!\n",
        style("✔").green(),
        project_name,
        version
    );
}

/// Render a numbered choice list with the default marked.
pub fn format_choices(message: &str, choices: &[&str], default: usize) -> String {
    let mut out = format!("\n{}\n", style(message).bold());
    for (i, choice) in choices.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, choice));
    }
    out.push_str(&format!(
        "Select (1-{}) [default: {}]: ",
        choices.len(),
        default + 1
    ));
    out
}

/// Render a yes/no question with the default capitalised.
pub fn format_confirm(message: &str, default: bool) -> String {
    let hint = if default { "(Y/n)" } else { "(y/N)" };
    format!("\n{} {}: ", message, hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_choices_marks_default() {
        console::set_colors_enabled(false);
        let text = format_choices(
            "Which version part do you want to update?",
            &["major", "minor", "patch"],
            2,
        );
        assert!(text.contains("Which version part do you want to update?"));
        assert!(text.contains("  1. major\n"));
        assert!(text.contains("  3. patch\n"));
        assert!(text.ends_with("Select (1-3) [default: 3]: "));
    }

    #[test]
    fn test_format_confirm_default_no() {
        assert_eq!(
            format_confirm("Do you want to create a tag?", false),
            "\nDo you want to create a tag? (y/N): "
        );
    }

    #[test]
    fn test_format_confirm_default_yes() {
        assert!(format_confirm("Continue?", true).ends_with("(Y/n): "));
    }

    #[test]
    fn test_display_helpers_do_not_panic() {
        display_success("package.json updated");
        display_status("dry run");
        display_error("boom");
        display_command("grunt dist");
    }
}
