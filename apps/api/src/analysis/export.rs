//! Plain-text serialization of an `OptimizedDraft` for copy or download.

use std::fmt::Write;

use crate::models::analysis::OptimizedDraft;

pub const EXPORT_FILE_NAME: &str = "optimized-cv.txt";

/// Renders the draft field by field: summary, experience, skills, education,
/// then certifications when there are any. Depends on the draft alone.
pub fn render_plain_text(draft: &OptimizedDraft) -> String {
    let mut out = String::new();

    out.push_str("PROFESSIONAL SUMMARY\n");
    out.push_str(&draft.professional_summary);
    out.push_str("\n\n");

    out.push_str("WORK EXPERIENCE\n");
    for exp in &draft.experience {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} | {}", exp.title, exp.company);
        let _ = writeln!(out, "{}", exp.period);
        for achievement in &exp.achievements {
            let _ = writeln!(out, "• {achievement}");
        }
        out.push('\n');
    }

    out.push_str("SKILLS\n");
    let _ = writeln!(out, "Technical: {}", draft.skills.hard.join(", "));
    let _ = writeln!(out, "Soft Skills: {}\n", draft.skills.soft.join(", "));

    out.push_str("EDUCATION\n");
    for edu in &draft.education {
        let _ = writeln!(out, "{} | {} | {}", edu.degree, edu.institution, edu.year);
    }

    if !draft.certifications.is_empty() {
        out.push_str("\nCERTIFICATIONS\n");
        for cert in &draft.certifications {
            let _ = writeln!(out, "• {cert}");
        }
    }

    out
}
