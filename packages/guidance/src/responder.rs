//! # Keyword responder
//!
//! The assistant has no model behind it. [`respond`] lower-cases the message,
//! checks each [`Topic`] in priority order for one of its keywords, and returns
//! that topic's canned paragraph. Messages that match nothing get
//! [`FALLBACK`].
//!
//! Priority matters: "job" belongs to [`Topic::Career`], which is checked
//! before [`Topic::Placement`], so "job opportunity" never reaches placement.

/// Message the conversation opens with.
pub const GREETING: &str = "Hello! I'm your AI Career Assistant. I can help you with career guidance, college selection, scholarship information, and more. What would you like to know?";

pub const FALLBACK: &str = "I understand you're looking for guidance. I can help you with college selection, career planning, scholarships, and course recommendations. Could you please be more specific about what you'd like to know?";

/// Suggested prompts shown under the chat log.
pub const QUICK_QUESTIONS: &[&str] = &[
    "What are the best engineering colleges in Coimbatore?",
    "How can I get scholarships for my studies?",
    "What career options are available in technology?",
    "Tell me about placement opportunities",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    College,
    Scholarship,
    Career,
    Placement,
    Courses,
}

impl Topic {
    /// Topics in the order they are tried.
    pub const PRIORITY: [Topic; 5] = [
        Topic::College,
        Topic::Scholarship,
        Topic::Career,
        Topic::Placement,
        Topic::Courses,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::College => &["college", "university"],
            Topic::Scholarship => &["scholarship", "financial aid"],
            Topic::Career => &["career", "job"],
            Topic::Placement => &["placement", "job opportunity"],
            Topic::Courses => &["course", "program"],
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            Topic::College => "Based on your profile, I recommend looking into engineering colleges in Coimbatore like Karpagam College of Engineering, PSG College of Technology, and CIT. These institutions offer excellent programs with good placement records.",
            Topic::Scholarship => "There are several scholarships available for students in Tamil Nadu. Some popular ones include Merit Scholarships, SC/ST scholarships, and private foundation scholarships. Would you like specific information about any particular scholarship?",
            Topic::Career => "Career planning involves understanding your interests, skills, and market demand. Popular career paths in technology include Software Engineering, Data Science, AI/ML, and Cybersecurity. What field interests you most?",
            Topic::Placement => "Placement opportunities depend on your college, skills, and chosen field. Top engineering colleges in Coimbatore have placement rates of 80-95% with average packages ranging from ₹4-12 LPA.",
            Topic::Courses => "Popular undergraduate courses include B.Tech (Computer Science, Mechanical, Electrical), B.Sc (Physics, Chemistry, Mathematics), BBA, and specialized programs in emerging technologies.",
        }
    }
}

/// The first topic, in priority order, whose keyword occurs in `message`.
pub fn classify(message: &str) -> Option<Topic> {
    let message = message.to_lowercase();
    Topic::PRIORITY
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|k| message.contains(k)))
}

pub fn respond(message: &str) -> &'static str {
    classify(message).map_or(FALLBACK, Topic::reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_topic_is_reachable() {
        assert_eq!(classify("Which UNIVERSITY?"), Some(Topic::College));
        assert_eq!(classify("any financial aid"), Some(Topic::Scholarship));
        assert_eq!(classify("I want a job"), Some(Topic::Career));
        assert_eq!(classify("placement stats"), Some(Topic::Placement));
        assert_eq!(classify("which program"), Some(Topic::Courses));
    }

    #[test]
    fn test_scholarship_in_any_case() {
        assert_eq!(respond("ScHoLaRsHiP please"), Topic::Scholarship.reply());
        assert_eq!(respond("need a scholarship for placement"), Topic::Scholarship.reply());
    }

    #[test]
    fn test_college_beats_scholarship() {
        assert_eq!(respond("scholarship at which college?"), Topic::College.reply());
    }

    #[test]
    fn test_job_opportunity_resolves_to_career() {
        assert_eq!(classify("any job opportunity?"), Some(Topic::Career));
    }

    #[test]
    fn test_quick_questions() {
        let topics: Vec<_> = QUICK_QUESTIONS.iter().map(|q| classify(q)).collect();
        assert_eq!(
            topics,
            vec![
                Some(Topic::College),
                Some(Topic::Scholarship),
                Some(Topic::Career),
                Some(Topic::Placement),
            ]
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(respond("hello there"), FALLBACK);
        assert_eq!(respond(""), FALLBACK);
    }
}
