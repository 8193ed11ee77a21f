use crate::heading::{self, Heading};
use serde::{Deserialize, Serialize};

/// A contiguous run of content lines under one heading chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Colon-joined heading texts, outermost ancestor first
    /// (e.g. `"Main Method: Advanced Topic"`).
    pub header_path: String,

    /// Non-blank content lines in source order.
    pub content: Vec<String>,
}

/// Split markdown content into sections keyed by their heading chain.
///
/// One forward pass over the lines, maintaining a strict-nesting heading
/// stack: a heading opens a child scope only when its level is strictly
/// deeper than the current top; a same-or-shallower heading first closes
/// every scope at its level or deeper. Headings with no content lines are
/// never emitted but still narrow the stack for what follows.
///
/// "Listing N.N" pseudo-headings are source-code exhibits, not topics: when
/// at least one section already exists, their lines are appended to the most
/// recently emitted section and the heading stack is left untouched. A
/// listing heading appearing before any section falls through to normal
/// heading processing.
#[must_use]
pub fn markdown_to_sections(content: &str) -> Vec<Section> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut sections: Vec<Section> = Vec::new();
    let mut stack: Vec<Heading> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(heading) = Heading::parse(lines[i]) else {
            i += 1;
            continue;
        };
        i += 1;

        if heading.is_listing() && !sections.is_empty() {
            let listing = collect_content(&lines, &mut i);
            if let Some(prev) = sections.last_mut() {
                prev.content.extend(listing);
            }
            continue;
        }

        while stack.last().is_some_and(|top| top.level >= heading.level) {
            stack.pop();
        }
        stack.push(heading);

        let content = collect_content(&lines, &mut i);
        if content.is_empty() {
            continue;
        }

        let header_path = stack
            .iter()
            .map(|h| h.text.as_str())
            .collect::<Vec<_>>()
            .join(": ");
        sections.push(Section {
            header_path,
            content,
        });
    }

    sections
}

/// Consume non-heading lines starting at `*i`, keeping the non-blank ones.
fn collect_content(lines: &[&str], i: &mut usize) -> Vec<String> {
    let mut content = Vec::new();
    while *i < lines.len() && !heading::is_heading_line(lines[*i]) {
        let line = lines[*i];
        if !line.trim().is_empty() {
            content.push(line.to_string());
        }
        *i += 1;
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.header_path.as_str()).collect()
    }

    #[test]
    fn sibling_headings_replace_deeper_scopes() {
        let markdown = "\
# Chapter
## First Topic
first body
### Detail
detail body
## Second Topic
second body";

        let sections = markdown_to_sections(markdown);
        assert_eq!(
            paths(&sections),
            vec![
                "Chapter: First Topic",
                "Chapter: First Topic: Detail",
                "Chapter: Second Topic",
            ]
        );
    }

    #[test]
    fn heading_without_content_is_dropped_but_still_nests() {
        let markdown = "\
### Beginner Topic
#### What Is a Method?
A method is a named block of code.";

        let sections = markdown_to_sections(markdown);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header_path, "Beginner Topic: What Is a Method?");
        assert_eq!(sections[0].content, vec!["A method is a named block of code."]);
    }

    #[test]
    fn listing_content_merges_into_previous_section() {
        let markdown = "\
## Working with Variables
Prose that introduces the listing.

### Listing 1.12: Declaring and Assigning a Variable
let max = 1;
let min = 0;

## Next Topic
More prose.";

        let sections = markdown_to_sections(markdown);
        assert_eq!(paths(&sections), vec!["Working with Variables", "Next Topic"]);
        assert_eq!(
            sections[0].content,
            vec![
                "Prose that introduces the listing.",
                "let max = 1;",
                "let min = 0;",
            ]
        );
    }

    #[test]
    fn leading_listing_heading_falls_through_to_a_normal_section() {
        let markdown = "\
### Listing 1.1: Orphaned Exhibit
orphan line";

        let sections = markdown_to_sections(markdown);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header_path, "Listing 1.1: Orphaned Exhibit");
        assert_eq!(sections[0].content, vec!["orphan line"]);
    }

    #[test]
    fn blank_lines_are_a_delimiter_signal_not_content() {
        let markdown = "\
## Topic

line one


line two";

        let sections = markdown_to_sections(markdown);
        assert_eq!(sections[0].content, vec!["line one", "line two"]);
    }

    #[test]
    fn preamble_before_the_first_heading_is_skipped() {
        let markdown = "\
front matter
more front matter
## Topic
body";

        let sections = markdown_to_sections(markdown);
        assert_eq!(paths(&sections), vec!["Topic"]);
        assert_eq!(sections[0].content, vec!["body"]);
    }

    #[test]
    fn handles_carriage_return_separators() {
        let markdown = "## Topic\r\nbody line\r\nsecond line";

        let sections = markdown_to_sections(markdown);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, vec!["body line", "second line"]);
    }
}
