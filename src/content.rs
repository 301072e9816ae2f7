//! Everything the pages show. A built-in sample is used unless a JSON file
//! is supplied; fields missing from the file fall back to the sample.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("could not read content file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn is_mailto(&self) -> bool {
        self.url.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Short handle shown top-right, links back home.
    pub initials: String,
    pub bio: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub headline: String,
    pub summary: String,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Job>,
    pub photos: Vec<String>,
    pub note: String,
    pub now_playing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub headline: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub profile: Profile,
    pub about: About,
    pub contact: Contact,
}

impl Content {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "alex rivera".into(),
            initials: "ar".into(),
            bio: "computer science senior graduating this spring. interested in systems, \
                  full-stack development and machine learning."
                .into(),
            links: vec![
                Link::new("alex@example.com", "mailto:alex@example.com"),
                Link::new("resume", "https://example.com/resume.pdf"),
                Link::new("linkedin", "https://www.linkedin.com/in/example/"),
            ],
        }
    }
}

impl Default for About {
    fn default() -> Self {
        let skills = [
            ("languages", &["rust", "python", "c++", "typescript", "sql"][..]),
            ("frameworks", &["react", "axum", "django", "tailwind css"][..]),
            ("databases", &["postgresql", "sqlite", "mongodb"][..]),
            ("tools & platforms", &["git", "docker", "pytorch", "aws"][..]),
        ]
        .into_iter()
        .map(|(category, skills)| SkillCategory {
            category: category.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

        Self {
            headline: "about me".into(),
            summary: "i came to computer science to build things that matter. i like \
                      hard problems, clear code, and helping other people get into stem."
                .into(),
            skills,
            experience: vec![
                Job {
                    title: "research assistant".into(),
                    company: "state university".into(),
                    date: "january 2026 - present".into(),
                    location: "remote".into(),
                    description: "building image-based object detection models for \
                                  roadway hazard detection."
                        .into(),
                },
                Job {
                    title: "coding instructor".into(),
                    company: "community code club".into(),
                    date: "december 2024 - present".into(),
                    location: "on-site".into(),
                    description: "teaching students ages 6-14 the fundamentals of \
                                  programming through game projects."
                        .into(),
                },
            ],
            photos: vec![
                "presenting research at a student conference.".into(),
                "third place at my first hackathon!".into(),
            ],
            note: "when i'm not at a keyboard: chess, guitar, and cooking. \
                   say hi if you want to talk about any of them."
                .into(),
            now_playing: "twilight by elliott smith".into(),
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            headline: "contact me".into(),
            links: vec![
                Link::new("linkedin", "https://www.linkedin.com/in/example/"),
                Link::new("github", "https://github.com/example"),
                Link::new("email", "mailto:alex@example.com"),
            ],
        }
    }
}
