use serde::Serialize;

use super::Searchable;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Faq {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    /// Id of a [`FaqCategory`].
    pub category: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaqCategory {
    pub id: &'static str,
    pub name: &'static str,
}

impl Searchable for Faq {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.question, self.answer]
    }

    fn kind(&self) -> Option<&str> {
        Some(self.category)
    }
}

/// Options of the category select box; the first is the "all" sentinel.
pub const FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory { id: "all", name: "All Topics" },
    FaqCategory { id: "account", name: "Account & Profile" },
    FaqCategory { id: "colleges", name: "College Information" },
    FaqCategory { id: "scholarships", name: "Scholarships" },
    FaqCategory { id: "technical", name: "Technical Issues" },
];

pub const FAQS: &[Faq] = &[
    Faq {
        id: "1",
        question: "How do I update my profile information?",
        answer: "Go to Profile Setup section and edit your details. Click Save Profile to update your information.",
        category: "account",
    },
    Faq {
        id: "2",
        question: "How can I find colleges in Coimbatore?",
        answer: "Use the College Explorer section to search and filter colleges by location, type, and other criteria.",
        category: "colleges",
    },
    Faq {
        id: "3",
        question: "What scholarships are available for engineering students?",
        answer: "Check the Scholarships section for merit-based and need-based scholarships. We have information about government and private scholarships.",
        category: "scholarships",
    },
    Faq {
        id: "4",
        question: "How do I contact Karpagam College?",
        answer: "You can contact Karpagam College at +91-422-2611146 or visit their website at www.kce.ac.in",
        category: "colleges",
    },
    Faq {
        id: "5",
        question: "Can I change the app theme?",
        answer: "Yes! Go to Settings > Appearance to change between light, dark, and system themes.",
        category: "technical",
    },
];
