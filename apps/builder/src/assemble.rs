//! Form-to-document assembly.
//!
//! Walks the current form state and produces the nested submission
//! document: fixed fields by direct lookup, skills by delimiter splitting,
//! and one object per rendered entry group recovered from control names.
//! Read-only over the surface; runs just before transmission.

use serde_json::Value;

use crate::entries::GroupKind;
use crate::models::resume::{GroupObject, PersonalInfo, ResumeDocument, Sections};
use crate::naming;
use crate::surface::{Element, Surface};

/// Builds the submission document from the current form state. Groups whose
/// identifying field is blank after trimming are left out; omission is
/// policy, not an error.
pub fn build_document(surface: &Surface) -> ResumeDocument {
    ResumeDocument {
        resume_name: fixed_value(surface, "resume_name"),
        sections: Sections {
            personal_info: PersonalInfo {
                full_name: fixed_value(surface, "pi_full_name"),
                email: fixed_value(surface, "pi_email"),
                phone: fixed_value(surface, "pi_phone"),
                location: fixed_value(surface, "pi_location"),
                linkedin: fixed_value(surface, "pi_linkedin"),
                github: fixed_value(surface, "pi_github"),
            },
            summary: fixed_value(surface, "summary_text"),
            experience: collect_groups(surface, GroupKind::Experience),
            education: collect_groups(surface, GroupKind::Education),
            skills: split_skills(&fixed_value(surface, "skills_text")),
            projects: collect_groups(surface, GroupKind::Project),
        },
    }
}

fn fixed_value(surface: &Surface, name: &str) -> String {
    surface.control_value(name).unwrap_or_default().to_string()
}

/// Splits the raw skills text on newlines and commas. Runs of consecutive
/// delimiters collapse; pieces are trimmed and empties dropped, order kept.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(|c| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a multi-line field into trimmed, non-empty lines.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collects the rendered groups of one kind, top to bottom.
fn collect_groups(surface: &Surface, kind: GroupKind) -> Vec<GroupObject> {
    surface
        .query_class(kind.entry_class())
        .into_iter()
        .filter_map(|entry| collect_group(entry, kind))
        .collect()
}

/// Flattens one group element to its object. Controls whose names do not
/// decode are skipped; the group is dropped entirely when its identifying
/// field is blank.
fn collect_group(entry: &Element, kind: GroupKind) -> Option<GroupObject> {
    let mut object = GroupObject::new();
    for control in entry.controls() {
        let Some(decoded) = naming::decode_control_name(&control.name) else {
            continue;
        };
        let value = if kind.multiline_key() == Some(decoded.field_key.as_str()) {
            Value::Array(
                split_lines(&control.value)
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            )
        } else {
            Value::String(control.value.trim().to_string())
        };
        object.insert(decoded.field_key, value);
    }

    let identifying = object
        .get(kind.identifying_key())
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if identifying.is_empty() {
        None
    } else {
        Some(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::EntryGroupManager;
    use crate::page::build_resume_page;

    fn populated_page() -> (Surface, EntryGroupManager) {
        let surface = build_resume_page("http://localhost/save");
        let manager = EntryGroupManager::new(&surface);
        (surface, manager)
    }

    #[test]
    fn test_skills_split_on_newline_and_comma() {
        assert_eq!(
            split_skills("Go, Rust\nPython,, C++"),
            vec!["Go", "Rust", "Python", "C++"]
        );
    }

    #[test]
    fn test_skills_split_empty_input() {
        assert!(split_skills("").is_empty());
        assert!(split_skills(" ,\n, ").is_empty());
    }

    #[test]
    fn test_lines_split_drops_blank_lines() {
        assert_eq!(
            split_lines("Led team\n\nShipped X\n  "),
            vec!["Led team", "Shipped X"]
        );
    }

    #[test]
    fn test_group_without_identifying_field_is_omitted() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Experience);
        surface.set_control_value("experience-1-company", "Acme");

        let document = build_document(&surface);
        assert!(document.sections.experience.is_empty());
    }

    #[test]
    fn test_group_with_identifying_field_is_included() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Experience);
        surface.set_control_value("experience-1-job_title", "Engineer");
        surface.set_control_value("experience-1-company", "Acme");

        let document = build_document(&surface);
        assert_eq!(document.sections.experience.len(), 1);
        let entry = &document.sections.experience[0];
        assert_eq!(entry["job_title"], "Engineer");
        assert_eq!(entry["company"], "Acme");
    }

    #[test]
    fn test_whitespace_only_identifying_field_is_omitted() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Education);
        surface.set_control_value("education-1-degree", "   ");

        assert!(build_document(&surface).sections.education.is_empty());
    }

    #[test]
    fn test_responsibilities_become_line_list() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Experience);
        surface.set_control_value("experience-1-job_title", "Engineer");
        surface.set_control_value(
            "experience-1-responsibilities",
            "Led team\n\nShipped X\n  ",
        );

        let document = build_document(&surface);
        assert_eq!(
            document.sections.experience[0]["responsibilities"],
            serde_json::json!(["Led team", "Shipped X"])
        );
    }

    #[test]
    fn test_project_description_stays_single_string() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Project);
        surface.set_control_value("project-1-name", "Atlas");
        surface.set_control_value("project-1-description", "line one\nline two");

        let document = build_document(&surface);
        assert_eq!(
            document.sections.projects[0]["description"],
            "line one\nline two"
        );
    }

    #[test]
    fn test_group_values_are_trimmed() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Education);
        surface.set_control_value("education-1-degree", "  BSc  ");
        surface.set_control_value("education-1-institution", " MIT ");

        let entry = &build_document(&surface).sections.education[0];
        assert_eq!(entry["degree"], "BSc");
        assert_eq!(entry["institution"], "MIT");
    }

    #[test]
    fn test_undecodable_control_names_are_skipped() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Experience);
        surface.set_control_value("experience-1-job_title", "Engineer");
        surface.append_child(
            "experienceEntry-1",
            crate::surface::Element::new().control("csrf_token", "abc123"),
        );

        let entry = &build_document(&surface).sections.experience[0];
        assert!(entry.get("csrf_token").is_none());
    }

    #[test]
    fn test_hyphen_split_field_key_is_rejoined() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Experience);
        surface.set_control_value("experience-1-job_title", "Engineer");
        surface.append_child(
            "experienceEntry-1",
            crate::surface::Element::new().control("experience-1-team-size", "4"),
        );

        let entry = &build_document(&surface).sections.experience[0];
        assert_eq!(entry["team_size"], "4");
    }

    #[test]
    fn test_fixed_fields_pass_through() {
        let (mut surface, _) = populated_page();
        surface.set_control_value("resume_name", "Backend 2026");
        surface.set_control_value("pi_full_name", "Ada Lovelace");
        surface.set_control_value("pi_email", "ada@example.com");
        surface.set_control_value("summary_text", "Systems engineer.");

        let document = build_document(&surface);
        assert_eq!(document.resume_name, "Backend 2026");
        assert_eq!(document.sections.personal_info.full_name, "Ada Lovelace");
        assert_eq!(document.sections.personal_info.email, "ada@example.com");
        assert_eq!(document.sections.summary, "Systems engineer.");
    }

    #[test]
    fn test_round_trip_preserves_counts_and_render_order() {
        let (mut surface, mut manager) = populated_page();
        for i in 1..=3 {
            manager.add_group(&mut surface, GroupKind::Experience);
            surface.set_control_value(
                &format!("experience-{i}-job_title"),
                &format!("Role {i}"),
            );
        }
        for i in 1..=2 {
            manager.add_group(&mut surface, GroupKind::Education);
            surface.set_control_value(
                &format!("education-{i}-degree"),
                &format!("Degree {i}"),
            );
        }
        manager.add_group(&mut surface, GroupKind::Project);
        surface.set_control_value("project-1-name", "Atlas");

        let sections = build_document(&surface).sections;
        assert_eq!(sections.experience.len(), 3);
        assert_eq!(sections.education.len(), 2);
        assert_eq!(sections.projects.len(), 1);
        let titles: Vec<_> = sections
            .experience
            .iter()
            .map(|e| e["job_title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["Role 1", "Role 2", "Role 3"]);
    }

    #[test]
    fn test_removed_group_is_absent_from_document() {
        let (mut surface, mut manager) = populated_page();
        for i in 1..=2 {
            manager.add_group(&mut surface, GroupKind::Project);
            surface.set_control_value(&format!("project-{i}-name"), &format!("P{i}"));
        }
        surface.remove_by_id("projectEntry-1");

        let projects = build_document(&surface).sections.projects;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["name"], "P2");
    }

    #[test]
    fn test_assembly_has_no_side_effects_on_the_form() {
        let (mut surface, mut manager) = populated_page();
        manager.add_group(&mut surface, GroupKind::Experience);
        surface.set_control_value("experience-1-job_title", "  Engineer  ");

        build_document(&surface);
        // Trimming happens in the document, never in the form.
        assert_eq!(
            surface.control_value("experience-1-job_title"),
            Some("  Engineer  ")
        );
    }
}
