//! Portfolio profile content.
//!
//! Everything shown on the static pages besides blog posts comes from a
//! [`SiteProfile`]. The built-in default can be replaced with a JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Project shown on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Named group of skills, e.g. "languages".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// Job or education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub period: String,
    pub summary: String,
}

/// External profile link shown in the footer and contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// All portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteProfile {
    pub owner: String,
    pub domain: String,
    pub base_url: String,
    pub intro: Vec<String>,
    pub about: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Entry>,
    pub education: Vec<Entry>,
    pub projects: Vec<Project>,
    /// Index into `projects` of the project featured on the home page.
    pub featured_project: Option<usize>,
    pub email: String,
    pub socials: Vec<SocialLink>,
    pub blog_description: String,
}

impl SiteProfile {
    /// Loads profile from a JSON file; missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site profile: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid site profile JSON: {}", path.display()))
    }

    /// Featured project, if the index is in range.
    pub fn featured(&self) -> Option<&Project> {
        self.featured_project.and_then(|i| self.projects.get(i))
    }

    /// Blog title, e.g. "Kalan Roye's Blog".
    pub fn blog_title(&self) -> String {
        format!("{}'s Blog", self.owner)
    }

    /// Skills rendered as the pretty JSON document shown by `cat skills.json`.
    ///
    /// Group order is preserved.
    pub fn skills_json(&self) -> String {
        let mut out = String::from("{\n");
        for (i, group) in self.skills.iter().enumerate() {
            out.push_str(&format!("  {}: [\n", json_string(&group.name)));
            for (j, item) in group.items.iter().enumerate() {
                let comma = if j + 1 < group.items.len() { "," } else { "" };
                out.push_str(&format!("    {}{}\n", json_string(item), comma));
            }
            let comma = if i + 1 < self.skills.len() { "," } else { "" };
            out.push_str(&format!("  ]{}\n", comma));
        }
        out.push('}');
        out
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SiteProfile {
    fn default() -> Self {
        let skill = |name: &str, items: &[&str]| SkillGroup {
            name: name.to_string(),
            items: strings(items),
        };
        let entry = |title: &str, period: &str, summary: &str| Entry {
            title: title.to_string(),
            period: period.to_string(),
            summary: summary.to_string(),
        };
        let project = |title: &str, description: &str, technologies: &[&str], link: &str| Project {
            title: title.to_string(),
            description: description.to_string(),
            technologies: strings(technologies),
            link: Some(link.to_string()),
            github: None,
            image: None,
        };

        Self {
            owner: "Kalan Roye".to_string(),
            domain: "kalanroye.com".to_string(),
            base_url: "https://kalanroye.com".to_string(),
            intro: strings(&[
                "Hey! I'm Kalan Roye. Welcome to my digital workspace.",
                "I'm a software developer focused on creating innovative, user-friendly solutions. My work spans across web development, AI systems, and data science.",
                "Feel free to explore my projects, read my blog, or get in touch.",
            ]),
            about: strings(&[
                "I'm Kalan Roye, a software developer with a passion for creating elegant solutions to complex problems.",
                "With a background in computer science and several years of experience working with a variety of technologies, I specialize in full-stack development, AI integration, and building scalable applications.",
                "When I'm not coding, you can find me catching up on the latest tech news, contributing to open-source projects, or hiking in the summer.",
            ]),
            skills: vec![
                skill("languages", &["JavaScript/TypeScript", "Python", "Java", "C", "Verse"]),
                skill("frontend", &["React", "Next.js", "HTML/CSS", "Tailwind CSS"]),
                skill("backend", &["Node.js", "GraphQL", "FastAPI"]),
                skill("databases", &["PostgreSQL", "MongoDB", "Redis", "Supabase", "Firebase"]),
                skill("devOps", &["Docker", "AWS", "Google Cloud", "CI/CD", "Git", "Linux"]),
                skill("AI", &["OpenAI API", "ComfyUI", "Ollama"]),
            ],
            experience: vec![
                entry(
                    "Full-Stack Developer @ Unifor",
                    "December 2024 - January 2025",
                    "Revamped Unifor District 300's website to be more user-friendly and accessible using React, Next.js, and Tailwind CSS.",
                ),
                entry(
                    "Data Analyst @ Regional Municipality of Halton",
                    "June 2024 - August 2024",
                    "Transformed and migrated 311 operational data, automated classification, configured Salesforce environments, designed executive-level reports and dashboards, and led the creation of Halton Region's first AI chatbot prototype.",
                ),
            ],
            education: vec![entry(
                "Bachelor of Science - Honours Specialization in Computer Science",
                "Western University, 2023 - Present",
                "Relevant Courses: Data Structures and Algorithms, Software Tools and Systems Programming, Computer Systems Architecture.",
            )],
            projects: vec![
                project(
                    "AI-Powered Task Manager",
                    "A task management application that uses machine learning to prioritize and categorize tasks based on user behavior patterns.",
                    &["React", "Node.js", "TensorFlow.js", "MongoDB"],
                    "https://github.com/kayroye/ai-task-manager",
                ),
                project(
                    "E-commerce Platform",
                    "A full-featured e-commerce platform with product management, shopping cart, payment processing, and order tracking.",
                    &["Next.js", "Express", "PostgreSQL", "Stripe API"],
                    "https://github.com/kayroye/ecommerce-platform",
                ),
                project(
                    "Real-time Collaboration Tool",
                    "A collaborative workspace that allows teams to work together in real-time on documents, code, and design files.",
                    &["Vue.js", "Socket.io", "Redis", "AWS"],
                    "https://github.com/kayroye/collab-tool",
                ),
                project(
                    "Personal Finance Dashboard",
                    "A dashboard for tracking personal finances, including expense categorization, budget planning, and financial goal setting.",
                    &["React", "D3.js", "Firebase", "Plaid API"],
                    "https://github.com/kayroye/finance-dashboard",
                ),
            ],
            featured_project: Some(0),
            email: "hello@kalanroye.com".to_string(),
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/kayroye".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/kalan-roye".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    url: "https://x.com/kaywritescode".to_string(),
                },
            ],
            blog_description:
                "Articles and tutorials about software development, AI, and technology".to_string(),
        }
    }
}
