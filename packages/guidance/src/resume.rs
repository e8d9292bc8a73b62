//! Resume builder state.

use serde::Serialize;

use crate::user::User;

/// Number of skills shown in the preview before the "+N" chip.
pub const PREVIEW_SKILLS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Creative,
    Minimal,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Modern,
        Template::Classic,
        Template::Creative,
        Template::Minimal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Template::Modern => "Modern",
            Template::Classic => "Classic",
            Template::Creative => "Creative",
            Template::Minimal => "Minimal",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Template::Modern => "Clean and professional design",
            Template::Classic => "Traditional format",
            Template::Creative => "Colorful and unique layout",
            Template::Minimal => "Simple and elegant",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub grade: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResumeData {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub template: Template,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ResumeData {
    /// A starter resume for `user`.
    pub fn for_user(user: &User) -> Self {
        Self {
            personal: PersonalInfo {
                name: user.full_name.clone(),
                email: user.email.clone(),
                phone: user.phone_number.clone(),
                location: "Coimbatore, Tamil Nadu".to_string(),
                linkedin: String::new(),
                github: String::new(),
            },
            summary: "Passionate computer science student with strong problem-solving skills and experience in web development.".to_string(),
            education: vec![Education {
                degree: "B.Tech Computer Science".to_string(),
                institution: "Karpagam College of Engineering".to_string(),
                year: "2022-2026".to_string(),
                grade: "8.5 CGPA".to_string(),
            }],
            skills: strings(&["JavaScript", "React", "Python", "Java", "SQL"]),
            projects: vec![Project {
                name: "Career Guidance Platform".to_string(),
                description: "A web application to help students choose their career paths".to_string(),
                technologies: strings(&["React", "Node.js", "MongoDB"]),
                link: String::new(),
            }],
            template: Template::default(),
        }
    }

    pub fn personal_field(&self, field: PersonalField) -> &str {
        let p = &self.personal;
        match field {
            PersonalField::Name => &p.name,
            PersonalField::Email => &p.email,
            PersonalField::Phone => &p.phone,
            PersonalField::Location => &p.location,
            PersonalField::Linkedin => &p.linkedin,
            PersonalField::Github => &p.github,
        }
    }

    pub fn set_personal(&mut self, field: PersonalField, value: impl Into<String>) {
        let p = &mut self.personal;
        let slot = match field {
            PersonalField::Name => &mut p.name,
            PersonalField::Email => &mut p.email,
            PersonalField::Phone => &mut p.phone,
            PersonalField::Location => &mut p.location,
            PersonalField::Linkedin => &mut p.linkedin,
            PersonalField::Github => &mut p.github,
        };
        *slot = value.into();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    /// Append a skill. Blank input is ignored; returns whether it was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Remove the skill at `index`; out-of-range indices are ignored.
    pub fn remove_skill(&mut self, index: usize) -> Option<String> {
        (index < self.skills.len()).then(|| self.skills.remove(index))
    }

    pub fn select_template(&mut self, template: Template) {
        self.template = template;
    }

    /// The skills shown in the preview, and how many more are hidden.
    pub fn preview_skills(&self) -> (&[String], usize) {
        let shown = self.skills.len().min(PREVIEW_SKILLS);
        (&self.skills[..shown], self.skills.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume() -> ResumeData {
        ResumeData::for_user(&User::default())
    }

    #[test]
    fn test_starter_resume() {
        let r = resume();
        assert_eq!(r.personal.name, "Roshini ks");
        assert_eq!(r.skills.len(), 5);
        assert_eq!(r.template, Template::Modern);
    }

    #[test]
    fn test_add_skill_ignores_blank() {
        let mut r = resume();
        assert!(!r.add_skill("   "));
        assert!(r.add_skill("Rust"));
        assert_eq!(r.skills.last().map(String::as_str), Some("Rust"));
        assert_eq!(r.skills.len(), 6);
    }

    #[test]
    fn test_remove_skill_out_of_range() {
        let mut r = resume();
        assert_eq!(r.remove_skill(42), None);
        assert_eq!(r.skills.len(), 5);
        assert_eq!(r.remove_skill(0).as_deref(), Some("JavaScript"));
        assert_eq!(r.skills[0], "React");
    }

    #[test]
    fn test_preview_overflow() {
        let mut r = resume();
        let (shown, more) = r.preview_skills();
        assert_eq!(shown.len(), 4);
        assert_eq!(more, 1);

        r.remove_skill(0);
        r.remove_skill(0);
        let (shown, more) = r.preview_skills();
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_set_personal_field() {
        let mut r = resume();
        r.set_personal(PersonalField::Github, "github.com/asha");
        assert_eq!(r.personal_field(PersonalField::Github), "github.com/asha");
        r.set_summary("Aspiring engineer.");
        assert_eq!(r.summary, "Aspiring engineer.");
    }
}
