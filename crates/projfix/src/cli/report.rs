//! Report command - list files awaiting Xcode registration
//!
//! Renders the built-in registration manifest as a checklist followed by
//! the manual registration options. Printing is the whole job: the
//! project file is never opened or modified here.

use projfix_registry::{FileRegistration, PENDING_REGISTRATIONS};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Arguments for the report command
#[derive(Debug, Default)]
pub struct ReportArgs {
    pub json: bool,
    pub quiet: bool,
}

/// Width of the `=` rules framing the report
const RULE_WIDTH: usize = 60;

/// Header printed above the per-file blocks
const HEADER: &str = "Files that need to be added to Xcode project:";

/// Closing instructions. Registration has to happen in Xcode or through a
/// project generator; this tool only reports what is missing.
const MANUAL_STEPS: &str = "\
IMPORTANT: Xcode project files should be modified by Xcode,
not manually edited. Options:

1. EASIEST: Open Xcode and drag files into the project
   - Open TaskSnap.xcodeproj in Xcode
   - Drag new files into appropriate groups

2. Use xcodeproj gem (if installed):
   gem install xcodeproj
   ruby -rxcodeproj -e '...'

3. Regenerate project with tuist/xcodegen

Recommended: Use Option 1 (drag in Xcode)";

/// Complete report in JSON form
#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    files: &'a [FileRegistration],
    summary: ReportSummary,
}

/// Summary statistics
#[derive(Debug, Serialize)]
struct ReportSummary {
    total: usize,
    by_group: BTreeMap<String, usize>,
}

/// Execute the report command
pub fn run(args: ReportArgs) -> anyhow::Result<()> {
    let registrations = PENDING_REGISTRATIONS;
    debug!(total = registrations.len(), "rendering registration report");

    if args.json {
        output_json(registrations)?;
    } else if args.quiet {
        output_quiet(registrations);
    } else {
        print!("{}", render_report(registrations));
    }

    Ok(())
}

/// Render one descriptor as its three-line block plus trailing blank line.
fn render_entry(reg: &FileRegistration) -> String {
    format!(
        "Would add: {}\n  Type: {}\n  Group: {}\n\n",
        reg.path,
        reg.file_type,
        reg.group_path()
    )
}

/// Render the full text report: header, one block per file, manual steps.
///
/// The output is a pure function of the input slice; reruns over the same
/// manifest are byte-identical.
pub fn render_report(registrations: &[FileRegistration]) -> String {
    let rule = "=".repeat(RULE_WIDTH);

    let mut out = format!("{HEADER}\n{rule}\n");
    for reg in registrations {
        out.push_str(&render_entry(reg));
    }
    out.push_str(&format!("\n{rule}\n\n{MANUAL_STEPS}\n"));
    out
}

/// Output as JSON
fn output_json(registrations: &[FileRegistration]) -> anyhow::Result<()> {
    let mut by_group: BTreeMap<String, usize> = BTreeMap::new();
    for reg in registrations {
        *by_group.entry(reg.group_path()).or_insert(0) += 1;
    }

    let output = ReportOutput {
        files: registrations,
        summary: ReportSummary {
            total: registrations.len(),
            by_group,
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output just file paths (quiet mode)
fn output_quiet(registrations: &[FileRegistration]) {
    for reg in registrations {
        println!("{}", reg.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_format() {
        let reg = FileRegistration {
            path: "A/B.ext",
            file_type: "source-code:x",
            group: &["A"],
        };

        assert_eq!(
            render_entry(&reg),
            "Would add: A/B.ext\n  Type: source-code:x\n  Group: A\n\n"
        );
    }

    #[test]
    fn test_report_has_block_per_file_in_order() {
        let report = render_report(PENDING_REGISTRATIONS);

        assert_eq!(
            report.matches("Would add: ").count(),
            PENDING_REGISTRATIONS.len()
        );

        // blocks appear in manifest order
        let mut cursor = 0;
        for reg in PENDING_REGISTRATIONS {
            let needle = format!("Would add: {}\n", reg.path);
            let pos = report[cursor..]
                .find(&needle)
                .unwrap_or_else(|| panic!("missing or out of order: {}", reg.path));
            cursor += pos + needle.len();
        }
    }

    #[test]
    fn test_blocks_end_with_blank_line() {
        let report = render_report(PENDING_REGISTRATIONS);
        let lines: Vec<&str> = report.lines().collect();

        for (idx, line) in lines.iter().enumerate() {
            if line.starts_with("Would add: ") {
                assert!(lines[idx + 1].starts_with("  Type: "));
                assert!(lines[idx + 2].starts_with("  Group: "));
                assert_eq!(lines[idx + 3], "");
            }
        }
    }

    #[test]
    fn test_trailer_constant_and_list_independent() {
        let empty = render_report(&[]);
        let full = render_report(PENDING_REGISTRATIONS);

        let trailer = format!("\n{}\n\n{}\n", "=".repeat(RULE_WIDTH), MANUAL_STEPS);
        assert!(empty.ends_with(&trailer));
        assert!(full.ends_with(&trailer));

        // empty list still renders header and trailer, just no blocks
        assert!(empty.starts_with(HEADER));
        assert_eq!(empty.matches("Would add: ").count(), 0);
    }

    #[test]
    fn test_report_is_idempotent() {
        assert_eq!(
            render_report(PENDING_REGISTRATIONS),
            render_report(PENDING_REGISTRATIONS)
        );
    }
}
