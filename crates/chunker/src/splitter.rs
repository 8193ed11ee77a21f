use crate::config::ChunkingConfig;

/// Approximate token count for a piece of text.
///
/// Roughly four bytes per token, the same heuristic the whole engine uses
/// for budgeting. This is an approximation, not a real tokenizer; it is the
/// single seam to change if chunk boundaries ever need to track a specific
/// embedding model's vocabulary.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    (text.len() / 4).max(1)
}

/// Split one section's content lines into header-prefixed chunks.
///
/// Lines are accumulated greedily until the next line would push the chunk
/// past `max_tokens_per_chunk` (the header's token cost is charged against
/// every chunk). Closing a chunk seeds the next one with the trailing
/// `overlap_tokens` worth of lines from the chunk just closed, so local
/// context survives the boundary. A single line that exceeds the budget on
/// its own becomes an oversized chunk; content is never dropped.
#[must_use]
pub fn split_section_lines(
    lines: &[String],
    header: &str,
    config: &ChunkingConfig,
) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    let header_tokens = estimate_tokens(header);
    let budget = config
        .max_tokens_per_chunk
        .saturating_sub(header_tokens)
        .max(1);

    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_tokens = 0usize;

    for line in lines {
        let line_tokens = estimate_tokens(line);

        if !current.is_empty() && current_tokens + line_tokens > budget {
            let mut carry = tail_by_tokens(&current, config.overlap_tokens);
            groups.push(std::mem::take(&mut current));

            // Shed the oldest carried lines until the new line fits.
            let mut carry_tokens: usize = carry.iter().map(|l| estimate_tokens(l)).sum();
            while !carry.is_empty() && carry_tokens + line_tokens > budget {
                carry_tokens -= estimate_tokens(carry.remove(0));
            }
            current = carry;
            current_tokens = carry_tokens;
        }

        current.push(line.as_str());
        current_tokens += line_tokens;
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
        .into_iter()
        .map(|group| format!("{header}{}", group.join("\n")))
        .collect()
}

/// Trailing lines of `lines` worth roughly `tokens` tokens, oldest first.
fn tail_by_tokens<'a>(lines: &[&'a str], tokens: usize) -> Vec<&'a str> {
    if tokens == 0 || lines.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut remaining = tokens;

    for &line in lines.iter().rev() {
        let t = estimate_tokens(line);
        out.push(line);
        if t >= remaining {
            break;
        }
        remaining -= t;
    }

    out.reverse();
    out
}
