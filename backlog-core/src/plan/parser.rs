//! Overview and requirements document parsers

use tracing::debug;

use super::{Backlog, Epic, Initiative, Story};

/// Extract acceptance-criteria lines from the requirements document.
///
/// Looks for a `##` heading whose text contains "acceptance criteria"
/// (case-insensitive); the section runs until the next `##` heading or end
/// of input. Every bulleted line inside the section is collected with its
/// marker stripped. A missing section yields an empty list, not an error.
pub fn parse_acceptance_criteria(content: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut in_section = false;

    for line in content.lines() {
        if line.starts_with("##") {
            if in_section {
                break;
            }
            in_section = line
                .trim_start_matches('#')
                .trim()
                .to_lowercase()
                .contains("acceptance criteria");
            continue;
        }

        if in_section {
            if let Some(item) = line.trim().strip_prefix('-') {
                items.push(item.trim().to_string());
            }
        }
    }

    items
}

/// Render criteria as an unchecked markdown task list
pub fn build_checklist(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- [ ] {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse the overview document into the initiative/epic/story tree.
///
/// Line-oriented scan with two cursors (current initiative, current epic).
/// An epic bullet with no open initiative is dropped, as is any story under
/// it; a story line with no open epic is dropped. Everything else that
/// matches no rule is ignored.
pub fn parse_overview(content: &str) -> Backlog {
    let mut initiatives: Vec<Initiative> = Vec::new();
    let mut current_initiative: Option<Initiative> = None;
    let mut current_epic: Option<Epic> = None;

    for line in content.lines() {
        if line.starts_with("## Initiative") {
            // Close out the previous cursors before opening a new section
            flush_epic(&mut current_initiative, &mut current_epic);
            if let Some(initiative) = current_initiative.take() {
                initiatives.push(initiative);
            }

            let name = line.trim_start_matches('#').trim().to_string();
            current_initiative = Some(Initiative {
                name,
                epics: Vec::new(),
            });
            continue;
        }

        let trimmed = line.trim();
        if trimmed.starts_with("- **Epic") {
            flush_epic(&mut current_initiative, &mut current_epic);

            let name = trimmed
                .trim_start_matches(['-', ' '])
                .trim_matches('*')
                .trim()
                .to_string();

            if current_initiative.is_none() {
                debug!(epic = %name, "Epic outside any initiative, dropping");
            }
            // The cursor is claimed either way so that stories under an
            // orphan epic are dropped with it.
            current_epic = Some(Epic {
                name,
                stories: Vec::new(),
            });
            continue;
        }

        if let Some(story) = parse_story_line(line) {
            match current_epic {
                Some(ref mut epic) => epic.stories.push(story),
                None => debug!(code = %story.code, "Story outside any epic, dropping"),
            }
        }
    }

    flush_epic(&mut current_initiative, &mut current_epic);
    if let Some(initiative) = current_initiative.take() {
        initiatives.push(initiative);
    }

    Backlog { initiatives }
}

/// Attach the open epic to the open initiative, dropping it when orphaned
fn flush_epic(initiative: &mut Option<Initiative>, epic: &mut Option<Epic>) {
    if let Some(epic) = epic.take() {
        if let Some(initiative) = initiative.as_mut() {
            initiative.epics.push(epic);
        }
    }
}

/// Match `US <code>: <description> (_Sprint <n>_)` anywhere in the line.
///
/// The code is digits and dots only; anything else fails the match and the
/// line is ignored.
fn parse_story_line(line: &str) -> Option<Story> {
    let start = line.find("US ")?;
    let rest = &line[start + 3..];

    let (code, rest) = rest.split_once(": ")?;
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let (description, rest) = rest.split_once(" (_Sprint ")?;
    let (sprint, _) = rest.split_once("_)")?;
    let sprint: u32 = sprint.parse().ok()?;

    Some(Story {
        code: code.to_string(),
        description: description.trim().to_string(),
        sprint,
    })
}
