//! Site owner profile and page copy, read from `profile.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub base_url: String,
    pub person: Person,
    pub social: Vec<SocialLink>,
    pub home: HomeCopy,
    pub about: AboutCopy,
    pub work: WorkCopy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub first_name: String,
    pub role: String,
    pub avatar: String,
    pub email: String,
    pub location: String,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeCopy {
    pub title: String,
    pub description: String,
    pub headline: String,
    pub subline: String,
    pub featured_title: String,
    pub featured_href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutCopy {
    pub title: String,
    pub description: String,
    pub intro_title: String,
    pub intro: String,
    pub experiences: Vec<Experience>,
    pub studies: Vec<Study>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub timeframe: String,
    pub role: String,
    pub achievements: Vec<String>,
    pub images: Vec<ProfileImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Study {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkCopy {
    pub title: String,
    pub description: String,
    /// Shown on highlight slides for projects without images.
    pub fallback_image: String,
}

impl Default for WorkCopy {
    fn default() -> Self {
        Self {
            title: "Projects".to_string(),
            description: String::new(),
            fallback_image: "/images/projects/placeholder.png".to_string(),
        }
    }
}

impl Profile {
    /// Read the profile from `path`. A missing file yields an empty profile.
    pub async fn load(path: &Path) -> Result<Self, ProfileError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Profile not found, using an empty profile");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ProfileError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let profile: Profile = toml::from_str(&raw).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), name = %profile.person.name, "Loaded profile");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_profile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.toml");
        std::fs::write(
            &path,
            r#"
[person]
name = "Nguyen Phan Hong Ngoc"
role = "Investment Analyst"

[[social]]
name = "LinkedIn"
link = "https://www.linkedin.com/in/example/"

[[about.experiences]]
company = "TNB Aura"
timeframe = "Jun 2024 - Jan 2025"
achievements = ["Sourced 10 potential deals"]
images = [{ src = "/images/projects/research.png", alt = "Research" }]

[work]
title = "Projects"
"#,
        )
        .unwrap();

        let profile = Profile::load(&path).await.unwrap();
        assert_eq!(profile.person.role, "Investment Analyst");
        assert_eq!(profile.social.len(), 1);
        assert_eq!(profile.about.experiences[0].images[0].alt, "Research");
        assert_eq!(profile.work.fallback_image, "/images/projects/placeholder.png");
    }

    #[tokio::test]
    async fn test_missing_profile_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let profile = Profile::load(&temp_dir.path().join("none.toml")).await.unwrap();
        assert!(profile.person.name.is_empty());
        assert_eq!(profile.work.title, "Projects");
    }
}
