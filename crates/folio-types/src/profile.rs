//! Portfolio profile dataset.
//!
//! The profile is inert data: the informational commands read it and turn it
//! into output lines. A sample profile is embedded in the binary; a TOML or
//! JSON file with the same shape can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

const BUILTIN_PROFILE: &str = include_str!("../assets/profile.toml");

/// Name, headline role, and one-sentence value statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub value: String,
}

/// A named group of skills. Underscores in the name render as spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub impact: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_host_title")]
    pub host_title: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            host_title: default_host_title(),
        }
    }
}

fn default_prompt() -> String {
    "user@host:~$".to_string()
}

fn default_host_title() -> String {
    "portfolio.sh".to_string()
}

/// The full portfolio dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub header: Header,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certs: Vec<String>,
    pub contact: Contact,
    #[serde(default)]
    pub meta: Meta,
}

impl Profile {
    /// The sample profile compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_PROFILE)
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn from_json_str(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Load a profile file. `.json` files are read as JSON, anything else
    /// as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        let profile = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&src)?,
            _ => Self::from_toml_str(&src)?,
        };
        if profile.header.name.trim().is_empty() {
            return Err(FolioError::Config(format!(
                "profile {} has an empty header.name",
                path.display()
            )));
        }
        log::info!("Loaded profile for {} from {}", profile.header.name, path.display());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_profile_parses() {
        let p = Profile::builtin().unwrap();
        assert!(!p.header.name.is_empty());
        assert!(!p.skills.is_empty());
        assert!(!p.experience.is_empty());
        assert!(!p.projects.is_empty());
        assert!(p.contact.email.contains('@'));
        assert!(p.contact.resume.is_some());
    }

    #[test]
    fn skill_group_display_name_replaces_underscores() {
        let g = SkillGroup {
            name: "Cloud_Infrastructure".into(),
            items: vec![],
        };
        assert_eq!(g.display_name(), "Cloud Infrastructure");
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let src = r#"
[header]
name = "Ada"
role = "Engineer"

[contact]
email = "ada@example.dev"
github = "https://github.com/ada"
linkedin = "https://linkedin.com/in/ada"
"#;
        let p = Profile::from_toml_str(src).unwrap();
        assert!(p.certs.is_empty());
        assert_eq!(p.meta.prompt, "user@host:~$");
        assert!(p.contact.resume.is_none());
    }

    #[test]
    fn json_profile_loads_from_path() {
        let json = serde_json::to_string(&Profile::builtin().unwrap()).unwrap();
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let p = Profile::from_path(file.path()).unwrap();
        assert_eq!(p, Profile::builtin().unwrap());
    }

    #[test]
    fn empty_name_is_rejected() {
        let src = r#"
[header]
name = " "
role = "x"

[contact]
email = "a@b"
github = "g"
linkedin = "l"
"#;
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(src.as_bytes()).unwrap();
        let err = Profile::from_path(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Profile::from_path(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
