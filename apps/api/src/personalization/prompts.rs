// Lookup tables for the personalization context.
// Unknown keys fall back to a named default: `adult` for age brackets,
// nothing for situations.

pub const CASUAL_BASE: &str = "This reflection is for a member of The Church of Jesus Christ \
    of Latter-day Saints. Use LDS terminology naturally (testimony, covenant, priesthood, \
    Relief Society, temple, calling, etc.) but don't over-explain. Assume familiarity with \
    Church culture and doctrine.";

pub const ACADEMIC_BASE: &str = "This analysis is for a Latter-day Saint seeking scholarly, \
    research-based content. Assume familiarity with Church doctrine, history, and culture. \
    Provide academic depth with proper citations and linguistic analysis.";

pub const ACADEMIC_MODE_INSTRUCTIONS: &str = r#"
ACADEMIC/RESEARCH MODE INSTRUCTIONS:
Write as a religious studies scholar with expertise in Latter-day Saint scripture. Your analysis should include:

1. LINGUISTIC ANALYSIS:
   - For Bible: Hebrew (OT) and Greek (NT) word studies with transliteration
   - For Book of Mormon: Hebraisms, chiastic structures, wordplay that works in Hebrew
   - For D&C: Joseph Smith's revelatory language patterns
   - Lexical references where helpful

2. HISTORICAL-CRITICAL CONTEXT:
   - Specific dates, locations, and historical figures
   - Archaeological evidence and scholarly debates
   - Manuscript traditions and textual variants
   - Joseph Smith Translation comparisons

3. SCHOLARLY SOURCES:
   - LDS scholars such as Hugh Nibley, John Welch, John Tvedtnes, John Sorenson, Royal Skousen, Brant Gardner
   - BYU Studies, Interpreter, FARMS Review, Journal of Book of Mormon Studies
   - Early Church documents: Journal of Discourses, History of the Church, Times and Seasons

4. INTERTEXTUAL CONNECTIONS:
   - Cross-references across all standard works
   - Ancient Near Eastern parallels (Dead Sea Scrolls, Pseudepigrapha)
   - Temple symbolism and covenant patterns
   - Prophetic commentary from General Conference

5. TONE:
   - Scholarly but accessible
   - A faith perspective that still engages critically with the text
   - Acknowledge scholarly debates and differing interpretations"#;

pub const FEMALE_CLAUSE: &str = "The reader is a woman. You may naturally reference Relief \
    Society, Young Women experiences, or motherhood where relevant.";

pub const MALE_CLAUSE: &str = "The reader is a man. You may naturally reference priesthood \
    responsibilities, Elders Quorum, or fatherhood where relevant.";

pub fn casual_age_prompt(age_range: &str) -> &'static str {
    match age_range {
        "teens" => "Write a reflection on the scripture that a Latter-day Saint teenager might \
            share. Use contemporary but not exaggerated teen language, with examples from school, \
            friendships, family home evening, seminary, and youth activities. Reference testimony, \
            prayer, and preparing for missions or the temple naturally. Keep sentences shorter and \
            ideas relatable while keeping depth. No first-person perspective or direct address.",
        "youth" => "Write a reflection on the scripture that a young single adult in the Church \
            might share. Reference mission preparation or returned missionary life, dating within \
            the Church, institute, finding a ward family away from home, and balancing faith with \
            career and education. Include subtle references to temple worthiness and personal \
            revelation. No first-person perspective or direct address.",
        "senior" => "Write a reflection on the scripture that resonates with seasoned Latter-day \
            Saints. Reference decades of church service, temple worship, missionary work, \
            children and grandchildren in the gospel, and the eternal perspective that comes with \
            age. Use slightly more traditional phrasing and a measured tone that acknowledges \
            trials while testifying of God's faithfulness. No first-person perspective or direct \
            address.",
        _ => "Write a thoughtful reflection on the scripture using balanced, mature language for \
            Latter-day Saint adults. Reference temple covenants, callings, ward responsibilities, \
            raising children in the gospel, ministering, and personal revelation naturally, with \
            occasional metaphors drawn from family and church life. No first-person perspective \
            or direct address.",
    }
}

pub fn academic_age_prompt(age_range: &str) -> &'static str {
    match age_range {
        "teens" => "Write scholarly analysis accessible to a younger Latter-day Saint student. \
            Explain original language insights simply, give historical context with specific dates \
            and figures, and cite LDS scholars when relevant. Balance rigor with accessibility.",
        "youth" => "Write analysis suitable for an institute-level Latter-day Saint student. \
            Include Hebrew and Greek linguistic analysis where relevant, chiastic structures, D&C \
            historical documents, and JST comparisons. Cite BYU Religious Education scholars and \
            Interpreter publications.",
        "senior" => "Write comprehensive scholarly analysis for a well-read Latter-day Saint with \
            decades of gospel study. Include deep linguistic analysis, extensive historical \
            documentation, thorough cross-referencing, JST analysis, and temple symbolism, while \
            maintaining reverence.",
        _ => "Write thorough scholarly analysis for an educated Latter-day Saint reader. Include \
            detailed linguistic analysis, manuscript traditions, historical-critical methods, \
            archaeological evidence, and textual criticism. Draw on LDS scholarship and \
            peer-reviewed religious studies, JST variants, and early Church documents.",
    }
}

/// Situation clause for a life stage. `"Nothing special"` and unknown
/// situations map to the empty string.
pub fn situation_prompt(situation: &str) -> &'static str {
    match situation {
        // Missions
        "Preparing for a mission" => "Include the anticipation and spiritual preparation for \
            full-time missionary service: mission calls, temple preparation, studying Preach My \
            Gospel, leaving family, and trusting the Lord's timing.",
        "Currently serving a mission" => "Incorporate themes relevant to full-time missionaries: \
            teaching, finding, homesickness, difficult companions, rejection, miraculous moments, \
            and growth through consecrated service.",
        "Recently returned missionary" => "Reference the adjustment of returning home from a \
            mission: keeping spiritual momentum, dating, education and career decisions, and \
            applying mission lessons to everyday life.",
        // Temple and marriage
        "Preparing for temple marriage" => "Include temple preparation, eternal covenants, the \
            significance of sealing, and blending wedding planning with an eternal perspective.",
        "Newly sealed in the temple" => "Weave in new covenant responsibilities, building an \
            eternal family, establishing family patterns, and the sacred nature of the sealing.",
        "Temple sealing anniversary" => "Incorporate covenant renewal, gratitude for years \
            together, and the perspective that comes from keeping temple covenants together.",
        // Family stages
        "Having a baby" => "Weave in welcoming a spirit child to an eternal family, baby \
            blessings, the responsibility of raising children in the gospel, and love mixed with \
            exhaustion.",
        "Raising young children" => "Include family home evening, family scripture study, \
            Primary, teaching children to pray, and finding connection amid a busy household.",
        "Raising teenagers" => "Incorporate youth programs, seminary, mission preparation, dating \
            standards, watching agency unfold, and knowing when to guide and when to trust them to \
            the Lord.",
        "Empty nester" => "Reference children leaving for missions, college, or marriage, \
            continued temple worship, couple missionary opportunities, and grandparenting.",
        // Callings
        "New calling" => "Acknowledge the weight of a new calling, feelings of inadequacy, and \
            trusting that the Lord qualifies those He calls.",
        "Demanding calling" => "Include balancing church service with family and work, and \
            finding strength through the Savior when feeling overwhelmed.",
        "Released from calling" => "Weave in transition, identity beyond a calling, gratitude \
            for service, and the Lord's purposes in release.",
        // Challenges
        "Faith crisis" => "Gently incorporate doubt, questioning, and the courage it takes to stay \
            engaged. Emphasize continuing to study and pray amid uncertainty, without judgment.",
        "Inactive family member" => "Include loving without pressuring, praying for family \
            members, maintaining hope, and trusting the Lord's timeline.",
        "New convert" => "Reference learning Church culture, making friends in the ward, family \
            opposition, and the joy of a new testimony.",
        "Grieving a loss" => "Gently incorporate the Plan of Salvation, temple sealings, and the \
            hope of reunion while acknowledging the pain.",
        "Getting a divorce" => "Acknowledge broken expectations while maintaining hope. Reference \
            the Savior's Atonement for healing and finding identity and purpose.",
        "Going through health challenges" => "Weave in priesthood blessings, relying on the \
            Savior, ward support, and faith amid uncertainty.",
        "Struggling financially" => "Reference tithing, fast offerings, trusting the Lord with \
            temporal needs, the dignity of work, and worth beyond material stability.",
        "Feeling lonely or isolated" => "Incorporate belonging in the ward family, ministering, \
            and the Savior's perfect understanding of loneliness.",
        _ => "",
    }
}
