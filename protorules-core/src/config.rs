//! # Pattern Configuration
//!
//! Patterns can be declared in a JSON document instead of code. Predicates are expressions over
//! the named [`MethodTrait`]s:
//!
//! ```json
//! {
//!   "patterns": [
//!     {
//!       "name": "paginated",
//!       "when": { "all": ["non_streaming", "paginated"] },
//!       "fragments": [
//!         { "text": "ListRange " },
//!         { "when": "long_running", "then": "Future", "else": "Sync" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! * A predicate expression is a trait name, `{ "not": expr }`, `{ "all": [expr, ...] }` or
//!   `{ "any": [expr, ...] }`.
//! * A fragment is either `{ "text": "..." }` or `{ "when": expr, "then": "...", "else": "..." }`,
//!   `else` defaulting to the empty string.
//! * A pattern without `when` is always emitted.
//!
//! Unknown trait names are rejected when the document is parsed.
use crate::fragment::{Pattern, PredicatedFragment};
use crate::predicate::{self, Predicate};
use crate::traits::MethodTrait;
use prost_reflect::MethodDescriptor;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read pattern configuration: '{0}'")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern configuration: '{0}'")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PredicateExpr {
    Trait(MethodTrait),
    Not { not: Box<PredicateExpr> },
    All { all: Vec<PredicateExpr> },
    Any { any: Vec<PredicateExpr> },
}

impl PredicateExpr {
    pub fn to_predicate(&self) -> Predicate<MethodDescriptor> {
        match self {
            PredicateExpr::Trait(method_trait) => method_trait.predicate(),
            PredicateExpr::Not { not } => predicate::not(not.to_predicate()),
            PredicateExpr::All { all } => predicate::all_of(all.iter().map(Self::to_predicate)),
            PredicateExpr::Any { any } => predicate::any_of(any.iter().map(Self::to_predicate)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FragmentConfig {
    Text {
        text: String,
    },
    Conditional {
        when: PredicateExpr,
        then: String,
        #[serde(default, rename = "else")]
        otherwise: String,
    },
}

impl FragmentConfig {
    pub fn compile(&self) -> PredicatedFragment<MethodDescriptor> {
        match self {
            FragmentConfig::Text { text } => PredicatedFragment::always(text.as_str()),
            FragmentConfig::Conditional {
                when,
                then,
                otherwise,
            } => PredicatedFragment::new(when.to_predicate(), then.as_str(), otherwise.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternDefinition {
    pub name: String,
    #[serde(default)]
    pub when: Option<PredicateExpr>,
    #[serde(default)]
    pub fragments: Vec<FragmentConfig>,
}

impl PatternDefinition {
    pub fn compile(&self) -> Pattern<MethodDescriptor> {
        let gate = self
            .when
            .as_ref()
            .map_or_else(Predicate::always, PredicateExpr::to_predicate);
        let fragments = self.fragments.iter().map(FragmentConfig::compile).collect();
        Pattern::new(fragments, gate)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatternConfig {
    pub patterns: Vec<PatternDefinition>,
}

impl PatternConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Compiles every pattern, keeping declaration order.
    pub fn compile(&self) -> Vec<Pattern<MethodDescriptor>> {
        self.patterns.iter().map(PatternDefinition::compile).collect()
    }
}

impl FromStr for PatternConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}
