use crate::block::Segment;

const FENCE: &str = "```";
const MAX_LANGUAGE_LEN: usize = 15;

/// Split message text into alternating prose and code segments on triple-backtick fences.
///
/// Parts at odd positions sit inside a fence. An unterminated trailing fence is
/// still returned as a code segment so partially streamed messages keep their
/// content visible.
pub fn segment(text: &str) -> Vec<Segment> {
    let parts: Vec<&str> = text.split(FENCE).collect();
    if parts.len() % 2 == 0 {
        tracing::debug!(fences = parts.len() - 1, "unterminated code fence");
    }

    parts
        .into_iter()
        .enumerate()
        .filter_map(|(i, part)| {
            if i % 2 == 1 {
                code_segment(part)
            } else {
                prose_segment(part)
            }
        })
        .collect()
}

fn prose_segment(part: &str) -> Option<Segment> {
    if part.trim().is_empty() {
        return None;
    }
    Some(Segment {
        is_code: false,
        language: None,
        content: part.trim_matches(['\n', '\r']).to_string(),
    })
}

fn code_segment(part: &str) -> Option<Segment> {
    let (language, content) = match part.split_once('\n') {
        Some((first, rest)) if is_language_tag(first.trim()) => {
            (Some(first.trim().to_string()), rest.trim())
        }
        _ => (None, part.trim()),
    };
    if content.is_empty() {
        return None;
    }
    Some(Segment {
        is_code: true,
        language,
        content: content.to_string(),
    })
}

fn is_language_tag(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.chars().count() <= MAX_LANGUAGE_LEN
        && !candidate.contains(' ')
        && candidate.is_ascii()
}
