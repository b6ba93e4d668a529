//! Fixed prompt templates.

use super::{ContentType, GenerationRequest, RefineRequest};

/// System prompt for content generation and refinement.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates content for Seventh-day Adventist (SDA) churches. Generate biblically sound, uplifting content that aligns with SDA beliefs and values.";

/// System prompt for topic suggestions.
pub const SUGGEST_SYSTEM_PROMPT: &str = "You are a helpful assistant for Seventh-day Adventist (SDA) churches. Suggest relevant, engaging topics for church content.";

/// User prompt for a generation request.
pub fn user_prompt(request: &GenerationRequest) -> String {
    let topic = request.topic.trim();
    let audience = request.audience();
    let scripture = request.scripture();

    let focus = |lead: &str| {
        scripture
            .map(|s| format!(" {} {}.", lead, s))
            .unwrap_or_default()
    };

    match request.content_type {
        ContentType::Sermon => format!(
            "Generate a sermon outline/preaching points on the topic: \"{topic}\".{} Target audience: {audience}. Include introduction, main points (at least 3), and conclusion. Make it biblically grounded and practical for {audience}.",
            focus("Focus on this scripture:"),
        ),
        ContentType::Devotional => format!(
            "Generate a daily devotional for {audience}. Topic: \"{topic}\".{} Include title, Bible verse, main message (2-3 paragraphs), reflection question, and short prayer.",
            focus("Base it on:"),
        ),
        ContentType::BibleStudy => format!(
            "Generate a Bible study outline for {audience}. Topic: \"{topic}\".{} Include introduction, key verse, 5 discussion questions, and application points.",
            focus("Use this scripture:"),
        ),
        ContentType::Prayer => format!(
            "Generate prayer points and a prayer for {audience}. Topic: \"{topic}\". Include prayers for the church, community, and personal needs. End with a closing prayer."
        ),
        ContentType::Announcement => format!(
            "Generate church announcement text for {audience}. Topic: \"{topic}\". Make it welcoming, clear, and professional."
        ),
        ContentType::Bulletin => {
            let time = request
                .service_time()
                .map(|t| format!(" Service time: {}.", t))
                .unwrap_or_default();
            format!(
                "Generate a weekly church bulletin for {audience}. Topic: \"{topic}\".{time} Include: welcome message, service times, upcoming events, announcements, and prayer requests. Make it welcoming, well-organized, and ready to print."
            )
        }
    }
}

/// User prompt asking for topic suggestions as a JSON array.
pub fn suggestion_prompt(content_type: ContentType, audience: &str) -> String {
    format!(
        "Suggest 5-6 relevant topics for a {} targeting {}. Return ONLY a JSON array of strings, nothing else. Example: [\"Topic 1\", \"Topic 2\", \"Topic 3\"]",
        content_type.as_str(),
        audience
    )
}

/// User prompt for revising existing content.
pub fn refine_prompt(request: &RefineRequest) -> String {
    let title = if request.title.trim().is_empty() {
        String::new()
    } else {
        format!(" titled \"{}\"", request.title.trim())
    };
    format!(
        "Revise the following {}{} according to this instruction: {}. Keep the markdown structure (headings, lists, scripture references) and return only the revised content.\n\n{}",
        request.content_type.label().to_lowercase(),
        title,
        request.instruction.trim(),
        request.content
    )
}
