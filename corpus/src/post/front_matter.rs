//! Loader for Markdown posts with a front-matter header.
//!
//! Two header formats are accepted, chosen by the opening delimiter line.
//! `+++` opens a TOML block:
//!
//! ```text
//! +++
//! id = "large-reasoning-models"
//! title = "Thinking Models"
//! date = 2025-12-29
//! read_time = "8 min read"
//! excerpt = "..."
//! tags = ["AI", "LLM"]
//! +++
//!
//! Markdown body...
//! ```
//!
//! `---` opens a YAML block, where the reading time may also be spelled
//! `readTime`:
//!
//! ```text
//! ---
//! id: "large-reasoning-models"
//! title: "Thinking Models"
//! date: "2025-12-29"
//! readTime: "8 min read"
//! tags: ["AI", "LLM"]
//! ---
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::{Post, PostId};
use crate::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Yaml,
}

impl Format {
    fn from_delimiter(line: &str) -> Option<Self> {
        match line.trim_end() {
            "+++" => Some(Format::Toml),
            "---" => Some(Format::Yaml),
            _ => None,
        }
    }

    fn delimiter(self) -> &'static str {
        match self {
            Format::Toml => "+++",
            Format::Yaml => "---",
        }
    }
}

#[derive(Debug, Deserialize)]
struct FrontMatter {
    id: String,
    title: String,
    #[serde(deserialize_with = "deserialize_date")]
    date: NaiveDate,
    #[serde(default, alias = "readTime")]
    read_time: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Parse one post document. `source_name` is only used in error messages.
pub fn parse_post(source_name: &str, text: &str) -> Result<Post, ContentError> {
    let missing = || ContentError::MissingFrontMatter {
        source_name: source_name.to_string(),
    };

    let text = text.trim_start_matches('\u{feff}');
    let opening = text.split_inclusive('\n').next().ok_or_else(missing)?;
    let format = Format::from_delimiter(opening).ok_or_else(missing)?;

    let rest = &text[opening.len()..];
    let (header, body) = split_front_matter(rest, format.delimiter()).ok_or_else(missing)?;

    let front: FrontMatter = match format {
        Format::Toml => toml::from_str(header).map_err(|source| ContentError::FrontMatter {
            source_name: source_name.to_string(),
            source,
        })?,
        Format::Yaml => {
            serde_yaml::from_str(header).map_err(|source| ContentError::YamlFrontMatter {
                source_name: source_name.to_string(),
                source,
            })?
        }
    };

    let post = Post {
        id: PostId::new(front.id.trim()),
        title: front.title,
        date: front.date,
        read_time: front.read_time,
        excerpt: front.excerpt,
        tags: front.tags,
        content: body.trim_start_matches(['\r', '\n']).to_string(),
    };

    if post.id.is_empty() {
        return Err(ContentError::EmptyId { title: post.title });
    }

    Ok(post)
}

/// Split at the closing delimiter line into (header, body).
fn split_front_matter<'a>(rest: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == delimiter {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Accepts `"2025-12-29"` in either format, and a bare TOML date or
/// datetime literal such as `2025-12-29` or `2025-12-29T08:00:00Z`.
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    struct DateVisitor;

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = NaiveDate;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a YYYY-MM-DD date")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<NaiveDate, E> {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(E::custom)
        }

        // TOML hands date literals over as a single-entry map.
        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<NaiveDate, A::Error> {
            use de::Error;

            let (_, raw) = map
                .next_entry::<String, String>()?
                .ok_or_else(|| A::Error::custom("empty date value"))?;
            let datetime: toml::value::Datetime = raw.parse().map_err(A::Error::custom)?;
            let date = datetime
                .date
                .ok_or_else(|| A::Error::custom(format!("`{raw}` has no date part")))?;
            NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                .ok_or_else(|| A::Error::custom(format!("`{raw}` is not a calendar date")))
        }
    }

    deserializer.deserialize_any(DateVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "+++\n\
id = \"moe-scaling\"\n\
title = \"Scaling MoE\"\n\
date = \"2025-11-02\"\n\
read_time = \"6 min read\"\n\
excerpt = \"Sparse experts.\"\n\
tags = [\"AI\", \"MoE\"]\n\
+++\n\
\n\
# Heading\n\
\n\
---\n\
Body text.\n";

    const YAML_DOC: &str = "---\n\
id: \"large-reasoning-models\"\n\
title: \"Thinking Models: The Evolution from 'Autofill' to 'Architect'\"\n\
date: \"2025-12-29\"\n\
readTime: \"8 min read\"\n\
excerpt: \"Reasoning models plan before they answer.\"\n\
tags: [\"AI\", \"Machine Learning\", \"Chain of Thought\"]\n\
---\n\
\n\
In the early days of LLMs...\n\
\n\
---\n\
\n\
## System 2\n";

    #[test]
    fn test_parse_post() {
        let post = parse_post("moe.md", DOC).unwrap();
        assert_eq!(post.id.as_str(), "moe-scaling");
        assert_eq!(post.title, "Scaling MoE");
        assert_eq!(post.date.to_string(), "2025-11-02");
        assert_eq!(post.read_time, "6 min read");
        assert_eq!(post.tags, vec!["AI", "MoE"]);
        assert!(post.content.starts_with("# Heading"));
        assert!(post.content.contains("---\nBody text."));
    }

    #[test]
    fn test_toml_date_literal() {
        let doc = "+++\nid = \"x\"\ntitle = \"Bare date\"\ndate = 2025-12-29\n+++\nbody\n";
        let post = parse_post("bare.md", doc).unwrap();
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());

        let doc = "+++\nid = \"x\"\ntitle = \"Stamp\"\ndate = 2025-03-04T08:30:00Z\n+++\n";
        let post = parse_post("stamp.md", doc).unwrap();
        assert_eq!(post.date.to_string(), "2025-03-04");

        let doc = "+++\nid = \"x\"\ntitle = \"Clock\"\ndate = 08:30:00\n+++\n";
        let err = parse_post("clock.md", doc).unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { .. }));
    }

    #[test]
    fn test_yaml_front_matter() {
        let post = parse_post("large-reasoning-models.md", YAML_DOC).unwrap();
        assert_eq!(post.id.as_str(), "large-reasoning-models");
        assert_eq!(
            post.title,
            "Thinking Models: The Evolution from 'Autofill' to 'Architect'"
        );
        assert_eq!(post.date.to_string(), "2025-12-29");
        assert_eq!(post.read_time, "8 min read");
        assert_eq!(post.tags, vec!["AI", "Machine Learning", "Chain of Thought"]);
        assert!(post.content.starts_with("In the early days"));
        assert!(post.content.contains("---\n\n## System 2"));
    }

    #[test]
    fn test_yaml_unquoted_date_and_snake_case_key() {
        let doc = "---\nid: notes\ntitle: Notes\ndate: 2024-06-01\nread_time: 2 min read\n---\n";
        let post = parse_post("notes.md", doc).unwrap();
        assert_eq!(post.date.to_string(), "2024-06-01");
        assert_eq!(post.read_time, "2 min read");
        assert!(post.content.is_empty());
    }

    #[test]
    fn test_invalid_yaml_front_matter() {
        let doc = "---\nid: x\ntitle: [unclosed\n---\n";
        let err = parse_post("broken.md", doc).unwrap_err();
        assert!(matches!(err, ContentError::YamlFrontMatter { .. }));
        assert!(err.to_string().starts_with("broken.md: invalid front matter"));
    }

    #[test]
    fn test_crlf_delimiters() {
        let doc = DOC.replace('\n', "\r\n");
        let post = parse_post("moe.md", &doc).unwrap();
        assert_eq!(post.id.as_str(), "moe-scaling");
        assert!(post.content.starts_with("# Heading"));

        let post = parse_post("lrm.md", &YAML_DOC.replace('\n', "\r\n")).unwrap();
        assert_eq!(post.read_time, "8 min read");
    }

    #[test]
    fn test_missing_front_matter() {
        let err = parse_post("plain.md", "# Just markdown\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { .. }));

        let unterminated = "+++\nid = \"x\"\n";
        let err = parse_post("open.md", unterminated).unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { .. }));

        let mismatched = "+++\nid = \"x\"\n---\nbody\n";
        let err = parse_post("mixed.md", mismatched).unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { .. }));
    }

    #[test]
    fn test_invalid_front_matter() {
        let doc = "+++\nid = \"x\"\ntitle = \"No date\"\n+++\nbody\n";
        let err = parse_post("nodate.md", doc).unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { .. }));
        assert!(err.to_string().starts_with("nodate.md: invalid front matter"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let doc = "+++\nid = \" \"\ntitle = \"Untitled\"\ndate = \"2025-01-01\"\n+++\n";
        let err = parse_post("blank.md", doc).unwrap_err();
        assert!(matches!(err, ContentError::EmptyId { .. }));
    }
}
