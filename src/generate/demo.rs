//! Demo templates used when no completion backend is available.

use super::{ContentType, GenerationRequest, GenerationResponse, GenerationStatus};

/// Marker line closing every demo template.
pub const DEMO_MARKER: &str = "*Demo content - Add your OpenAI API key to get AI-generated content*";

/// Build the demo template for a request.
pub fn demo_content(request: &GenerationRequest) -> String {
    let topic = request.topic.trim();
    let audience = request.audience();
    let scripture = request.scripture();

    match request.content_type {
        ContentType::Sermon => format!(
            r#"# Sermon: {topic}

*Prepared for {audience}*

---

## Introduction

Dear brothers and sisters, today we come together to study "{topic}" - a topic that is close to God's heart and vital for our spiritual growth.

{opening}

---

## Point 1: The Biblical Foundation

The Bible teaches us that {topic} is essential to our walk with Christ. Throughout Scripture, we see examples of those who embraced this truth and those who strayed from it.

---

## Point 2: Practical Application

How do we apply {topic} to our daily lives? 

1. Daily prayer and reflection
2. Study of God's Word
3. Fellowship with other believers
4. Service to others

---

## Point 3: The Call to Action

As {audience}, we are called to:

- Embrace this truth wholeheartedly
- Share it with others
- Live it out daily

---

## Conclusion

Let us pray that God will help us to understand and apply "{topic}" to our lives. May we grow in grace and knowledge of our Lord Jesus Christ.

**Prayer:** Dear Lord, help us to embrace {topic} and live it out in our daily lives. In Jesus' name, Amen.

---

*Demo content - Add your OpenAI API key to get AI-generated content*"#,
            opening = scripture
                .map(|s| format!("As we look at {}, we see...", s))
                .unwrap_or_else(|| "Let us open our hearts to what God wants to teach us today.".to_string()),
        ),
        ContentType::Devotional => format!(
            r#"# Daily Devotional: {topic}

*For {audience}*

---

## Scripture
{verse}

## Message

Today's message focuses on "{topic}" - a theme that resonates throughout the Bible and speaks to our daily walk with God.

When we think about {topic}, we are reminded that God is always with us. He desires for us to grow in our faith and understanding of His love.

## Reflection

Take a moment to consider:

- How has {topic} impacted your life this week?
- What steps can you take to grow deeper in this area?
- Who can you share this with?

## Prayer

Dear Heavenly Father, thank You for Your love and guidance. Help us to focus on {topic} and apply it to our daily lives. Give us the strength to walk in Your ways.

We pray this in Jesus' name, Amen.

---

*Demo content - Add your OpenAI API key to get AI-generated content*"#,
            verse = scripture.unwrap_or("Psalm 23:1 - The LORD is my shepherd; I shall not want."),
        ),
        ContentType::BibleStudy => format!(
            r#"# Bible Study: {topic}

*For {audience}*

---

## Opening Prayer

Let us pray: Lord, open our hearts and minds as we study Your Word. Teach us Your truth. In Jesus' name, Amen.

---

## Introduction

Tonight, we dive into the important topic of "{topic}" and what the Bible teaches us about it.

## Key Verse

{verse}

## Discussion Questions

1. What does the Bible say about {topic}?
2. How did Jesus demonstrate this in His ministry?
3. What can we learn from the early church?
4. How should {audience} apply this today?
5. What changes do we need to make?

## Application

This week, consider:

- Reading verses about {topic} daily
- Sharing what you learn with a friend
- Practicing this in your daily life

## Closing Prayer

Father, thank You for Your Word. Help us to apply these truths to our lives. Use us to share Your love with others.

In Jesus' name, Amen.

---

*Demo content - Add your OpenAI API key to get AI-generated content*"#,
            verse = scripture.unwrap_or("Psalm 119:105 - Your word is a lamp to my feet and a light to my path."),
        ),
        ContentType::Prayer => format!(
            r#"# Prayer Points: {topic}

---

## Prayer for the Church

Lord, we pray for our SDA family worldwide. Help us to grow in {topic}. Unite us in love and purpose.

## Prayer for Our Community

We lift up our local communities. May {topic} be demonstrated through our actions and witness.

## Prayer for Personal Growth

Lord, help each of us to embrace {topic} in our personal lives. Give us the strength to live according to Your will.

## Closing Prayer

Dear God, we thank You for hearing our prayers. May Your will be done in all things.

In Jesus' name, Amen.

---

*Demo content - Add your OpenAI API key to get AI-generated content*"#
        ),
        ContentType::Announcement => format!(
            r#"# Church Announcement: {topic}

---

Dear Church Family,

We are excited to share about "{topic}" with you this week.

**Details:**
- Join us as we explore this important topic together
- All {audience} are welcome to participate

For more information, please contact the church office.

God bless you!

---

*Demo content - Add your OpenAI API key to get AI-generated content*"#
        ),
        ContentType::Bulletin => format!(
            r#"# Weekly Church Bulletin
*{topic}*

---

## Welcome & Announcements

Welcome to our church family! We are glad to have you join us for worship today.

---

## Service Times

**Sabbath School:** 9:30 AM
**Main Service:** 11:00 AM
**Youth Fellowship:** 3:00 PM

---

## Upcoming Events

- **Prayer Meeting:** Wednesday, 6:00 PM
- **Bible Study:** Thursday, 7:00 PM
- **Community Outreach:** Saturday, 9:00 AM

---

## Announcements

**Scripture Reading:** {reading}

- Welcome to all visitors!
- Please join us for fellowship lunch after service
- Children's storytime during sermon

---

## Prayer Requests

*Lift up these requests in your prayers:*

- Church growth and unity
- Community needs
- Health and healing
- Missionary work

---

## Church Contact

**Address:** [Your Church Address]
**Phone:** [Phone Number]
**Email:** [Email]

*We exist to glorify God and share His love with our community.*

---

*Demo content - Add your OpenAI API key to get AI-generated content*"#,
            reading = scripture.unwrap_or("To be announced"),
        ),
    }
}

/// Demo response for a request.
pub fn demo_response(request: &GenerationRequest) -> GenerationResponse {
    GenerationResponse {
        title: request.title(),
        content: demo_content(request),
        status: GenerationStatus::Demo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_carries_marker() {
        for content_type in ContentType::ALL {
            let content = demo_content(&GenerationRequest::new(content_type, "Hope"));
            assert!(content.starts_with("# "), "{} template", content_type);
            assert!(content.ends_with(DEMO_MARKER), "{} template", content_type);
            assert!(content.contains("Demo content"));
        }
    }

    #[test]
    fn test_scripture_substitution() {
        let req = GenerationRequest::new(ContentType::Devotional, "Rest");
        assert!(demo_content(&req).contains("Psalm 23:1 - The LORD is my shepherd"));

        let req = req.with_scripture("Matthew 11:28");
        let content = demo_content(&req);
        assert!(content.contains("## Scripture\nMatthew 11:28\n"));
        assert!(!content.contains("Psalm 23:1"));
    }

    #[test]
    fn test_bulletin_reading() {
        let req = GenerationRequest::new(ContentType::Bulletin, "Harvest");
        assert!(demo_content(&req).contains("**Scripture Reading:** To be announced"));
        let req = req.with_scripture("Psalm 100");
        assert!(demo_content(&req).contains("**Scripture Reading:** Psalm 100"));
    }
}
