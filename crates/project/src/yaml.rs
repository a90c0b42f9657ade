// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! project.yaml schema.
//!
//! Only the keys that shape a build are read; everything else in the file
//! (contacts, homepage, language, ...) is ignored.
//!
//! ```yaml
//! image: gcr.io/oss-fuzz/libpng
//! fuzzing_engines:
//!   - libfuzzer
//!   - afl
//! sanitizers:
//!   - address
//!   - memory:
//!       experimental: true
//! run_tests: false
//! ```

use fb_core::{project::default_image, FuzzingEngine, ProjectDescriptor, Sanitizer, SanitizerEntry};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// project.yaml as written, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectYaml {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_sanitizers")]
    pub sanitizers: Option<Vec<SanitizerEntry>>,
    #[serde(default)]
    pub fuzzing_engines: Option<Vec<FuzzingEngine>>,
    #[serde(default)]
    pub run_tests: Option<bool>,
}

impl ProjectYaml {
    /// Apply defaults; `dir_name` names the project when the file does not.
    pub fn into_descriptor(self, dir_name: &str) -> ProjectDescriptor {
        let name = self.name.unwrap_or_else(|| dir_name.to_string());
        ProjectDescriptor {
            image: self.image.unwrap_or_else(|| default_image(&name)),
            sanitizers: self.sanitizers.unwrap_or_else(|| {
                Sanitizer::DEFAULT.into_iter().map(SanitizerEntry::new).collect()
            }),
            fuzzing_engines: self
                .fuzzing_engines
                .unwrap_or_else(|| FuzzingEngine::DEFAULT.to_vec()),
            run_tests: self.run_tests.unwrap_or(true),
            name,
        }
    }
}

/// Parse project.yaml contents. An empty file means "all defaults".
pub fn parse_project_yaml(content: &str) -> Result<ProjectYaml, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(ProjectYaml::default());
    }
    serde_yaml::from_str(content)
}

/// Sanitizers are either bare names or single-key maps carrying options.
fn deserialize_sanitizers<'de, D>(deserializer: D) -> Result<Option<Vec<SanitizerEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        Name(String),
        WithOptions(BTreeMap<String, Option<serde_json::Value>>),
    }

    let Some(helpers) = Option::<Vec<Helper>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let mut entries = Vec::with_capacity(helpers.len());
    for helper in helpers {
        match helper {
            Helper::Name(name) => {
                let sanitizer = name.parse::<Sanitizer>().map_err(serde::de::Error::custom)?;
                entries.push(SanitizerEntry::new(sanitizer));
            }
            Helper::WithOptions(map) => {
                for (name, options) in map {
                    let sanitizer = name.parse::<Sanitizer>().map_err(serde::de::Error::custom)?;
                    entries.push(match options {
                        Some(options) => SanitizerEntry::with_options(sanitizer, options),
                        None => SanitizerEntry::new(sanitizer),
                    });
                }
            }
        }
    }
    Ok(Some(entries))
}

#[cfg(test)]
#[path = "yaml_tests.rs"]
mod tests;
