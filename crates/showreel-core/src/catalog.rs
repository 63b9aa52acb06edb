use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// One case study shown on a carousel slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    /// Image path or URL for the slide artwork
    #[serde(default)]
    pub image: String,
    pub description: String,
    /// Where "download" points
    #[serde(default = "default_download_link")]
    pub download_link: String,
}

fn default_download_link() -> String {
    "#".to_string()
}

/// Ordered list of case studies the carousel pages through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "case_study", default)]
    pub studies: Vec<CaseStudy>,
}

impl Catalog {
    pub fn new(studies: Vec<CaseStudy>) -> Self {
        Self { studies }
    }

    pub fn len(&self) -> usize {
        self.studies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CaseStudy> {
        self.studies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaseStudy> {
        self.studies.iter()
    }

    /// Load a catalog file. `.json` files are read as JSON, anything else
    /// as TOML with `[[case_study]]` tables.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::from_toml(&content)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))
    }

    /// Load `path` if given, otherwise the built-in catalog
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// The seven case studies shipped with the showreel
    pub fn builtin() -> Self {
        let study = |n: usize, title: &str, description: &str| CaseStudy {
            title: title.to_string(),
            image: format!("/case{n}.jpg"),
            description: description.to_string(),
            download_link: default_download_link(),
        };

        Self::new(vec![
            study(
                1,
                "AI in Educational Skill Development",
                "Discover how AI transforms educational skill development by personalizing learning paths, enhancing student engagement, and enabling adaptive training programs.",
            ),
            study(
                2,
                "AI in Machine Learning Solutions",
                "Explore advanced machine learning techniques powering real-time analytics, predictive modeling, and automation that drive smarter decisions across industries.",
            ),
            study(
                3,
                "AI in Autonomous Vehicles",
                "Learn how AI ensures real-time adaptation, situational awareness, and safety through intelligent decision-making in next-generation autonomous vehicles.",
            ),
            study(
                4,
                "AI in Business Intelligence",
                "Boost business intelligence with AI-enabled predictive analytics, helping organizations forecast trends, optimize performance, and stay ahead competitively.",
            ),
            study(
                5,
                "AI in Predictive Maintenance",
                "Use AI-driven predictive maintenance to minimize downtime, reduce repair costs, and improve equipment longevity by detecting failures before they occur.",
            ),
            study(
                6,
                "AI powered Cybersecurity",
                "Empower cybersecurity with AI-based real-time threat detection, automated responses, and proactive defenses that ensure stronger digital protection.",
            ),
            study(
                7,
                "AI in Biotechnology",
                "Discover how AI accelerates biotechnology research by predicting protein structures, optimizing drug discovery, and enhancing genomic analysis for precision medicine.",
            ),
        ])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_has_seven() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get(6).map(|s| s.image.as_str()), Some("/case7.jpg"));
    }

    #[test]
    fn test_parse_toml_catalog() {
        let catalog = Catalog::from_toml(
            r#"
            [[case_study]]
            title = "One"
            description = "First"

            [[case_study]]
            title = "Two"
            description = "Second"
            download_link = "https://example.com/two.pdf"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.studies[0].download_link, "#");
        assert_eq!(catalog.studies[1].download_link, "https://example.com/two.pdf");
    }

    #[test]
    fn test_empty_toml_is_empty_catalog() {
        assert!(Catalog::from_toml("").unwrap().is_empty());
    }

    #[test]
    fn test_load_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("studies.toml");
        std::fs::write(&path, "[[case_study]]\ntitle = \"One\"\ndescription = \"First\"\n")
            .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.studies[0].title, "One");
    }

    #[test]
    fn test_load_json_file_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("studies.JSON");
        std::fs::write(
            &path,
            r#"{"case_study": [{"title": "One", "description": "First"}, {"title": "Two", "description": "Second", "image": "/two.jpg"}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.studies[1].image, "/two.jpg");
        assert_eq!(catalog.studies[0].download_link, "#");
    }

    #[test]
    fn test_json_content_in_toml_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("studies.toml");
        std::fs::write(&path, r#"{"case_study": []}"#).unwrap();
        assert!(matches!(Catalog::load(&path), Err(Error::Catalog(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Catalog::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        assert_eq!(Catalog::load_or_builtin(None).unwrap().len(), 7);
    }

    #[test]
    fn test_bad_toml_is_catalog_error() {
        let err = Catalog::from_toml("[[case_study]]\ntitle = 3").unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }
}
