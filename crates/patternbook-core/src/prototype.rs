use crate::{log, log::Topic};
use std::collections::BTreeMap;

///
/// Resume
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resume {
    pub name: String,
    pub age: u32,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
}

impl Resume {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            experience: Vec::new(),
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_experience(mut self, entry: impl Into<String>) -> Self {
        self.experience.push(entry.into());
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }
}

///
/// Report
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub title: String,
    pub author: String,
    pub date: String,
    pub content: String,
}

impl Report {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
            content: String::new(),
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

///
/// Document
///
/// Closed set of template kinds. Cloning is always deep, so a document
/// created from a template shares nothing with it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Document {
    Report(Report),
    Resume(Resume),
}

impl Document {
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Report(report) => report.title.clone(),
            Self::Resume(resume) => format!("{}'s Resume", resume.name),
        }
    }

    #[must_use]
    pub const fn as_resume_mut(&mut self) -> Option<&mut Resume> {
        match self {
            Self::Resume(resume) => Some(resume),
            Self::Report(_) => None,
        }
    }

    #[must_use]
    pub const fn as_report_mut(&mut self) -> Option<&mut Report> {
        match self {
            Self::Report(report) => Some(report),
            Self::Resume(_) => None,
        }
    }

    pub fn display(&self) {
        match self {
            Self::Resume(r) => {
                log!(Topic::Prototype, Info, "=== Resume ===");
                log!(Topic::Prototype, Info, "Name: {} | Age: {}", r.name, r.age);
                for (i, exp) in r.experience.iter().enumerate() {
                    log!(Topic::Prototype, Info, "  experience {}. {exp}", i + 1);
                }
                log!(Topic::Prototype, Info, "Skills: {}", r.skills.join(", "));
            }
            Self::Report(r) => {
                log!(Topic::Prototype, Info, "=== Report ===");
                log!(Topic::Prototype, Info, "Title: {}", r.title);
                log!(Topic::Prototype, Info, "Author: {} | Date: {}", r.author, r.date);
                log!(Topic::Prototype, Info, "Content: {}", r.content);
            }
        }
    }
}

///
/// DocumentRegistry
///

#[derive(Debug, Default)]
pub struct DocumentRegistry {
    templates: BTreeMap<String, Document>,
}

impl DocumentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, returning the one it replaced.
    pub fn register(&mut self, name: impl Into<String>, document: Document) -> Option<Document> {
        self.templates.insert(name.into(), document)
    }

    /// Fresh copy of the named template.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<Document> {
        let doc = self.templates.get(name).cloned();
        if doc.is_none() {
            log!(Topic::Prototype, Warn, "no template named {name}");
        }

        doc
    }

    #[must_use]
    pub fn template(&self, name: &str) -> Option<&Document> {
        self.templates.get(name)
    }

    /// Template names with their document titles, in name order.
    #[must_use]
    pub fn list(&self) -> Vec<(&str, String)> {
        self.templates
            .iter()
            .map(|(name, doc)| (name.as_str(), doc.title()))
            .collect()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> DocumentRegistry {
        let mut registry = DocumentRegistry::new();
        registry.register(
            "resume",
            Document::Resume(
                Resume::new("John Doe", 28)
                    .with_experience("ABC Corp - Software Engineer (2020-2023)")
                    .with_skill("Rust"),
            ),
        );
        registry.register(
            "report",
            Document::Report(
                Report::new("Q4 Sales Report", "Sales Department", "2025-01-01")
                    .with_content("Targets reached."),
            ),
        );
        registry
    }

    #[test]
    fn clone_is_independent_of_template() {
        let registry = registry();
        let mut copy = registry.create("resume").unwrap();

        let resume = copy.as_resume_mut().unwrap();
        resume.name = "Jane Smith".to_string();
        resume.skills.push("Go".to_string());

        let template = registry.template("resume").unwrap();
        assert_eq!(template.title(), "John Doe's Resume");
        assert_eq!(copy.title(), "Jane Smith's Resume");
        assert_ne!(&copy, template);
    }

    #[test]
    fn fresh_copy_equals_template() {
        let registry = registry();

        assert_eq!(
            registry.create("report").as_ref(),
            registry.template("report")
        );
    }

    #[test]
    fn unknown_template_is_none() {
        assert!(registry().create("invoice").is_none());
    }

    #[test]
    fn list_is_sorted_by_name() {
        let registry = registry();
        let listed = registry.list();

        assert_eq!(listed[0], ("report", "Q4 Sales Report".to_string()));
        assert_eq!(listed[1], ("resume", "John Doe's Resume".to_string()));
    }

    #[test]
    fn register_replaces_existing() {
        let mut registry = registry();
        let old = registry.register(
            "report",
            Document::Report(Report::new("Annual", "Tech", "2025-12-31")),
        );

        assert_eq!(old.unwrap().title(), "Q4 Sales Report");
        assert!(registry.create("report").unwrap().as_report_mut().is_some());
    }
}
