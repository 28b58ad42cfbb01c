//! Deterministic group ids and readable group names.

/// `grp_` followed by the first 16 hex chars of blake3(topic, member ids).
pub fn group_id<'a>(topic: &str, member_ids: impl IntoIterator<Item = &'a str>) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(topic.as_bytes());
    for id in member_ids {
        hasher.update(b"\n");
        hasher.update(id.as_bytes());
    }
    let hex = hasher.finalize().to_hex();
    format!("grp_{}", &hex.as_str()[..16])
}

/// "Service questions", "Service questions (2)", ...
pub fn group_name(topic: &str, ordinal: usize) -> String {
    let title = title_case(topic);
    if ordinal <= 1 {
        format!("{title} questions")
    } else {
        format!("{title} questions ({ordinal})")
    }
}

fn title_case(topic: &str) -> String {
    topic
        .split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
