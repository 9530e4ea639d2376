/// Evaluation of `rules` predicates on libraries and argument templates
use crate::game::manifest::types::{Rule, RuleAction};
use crate::game::platform::{Arch, Platform};
use regex::Regex;
use std::collections::BTreeSet;

/// Launcher features enabled for this launch (`has_custom_resolution`,
/// `is_demo_user`, ...). Features not present are off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    enabled: BTreeSet<String>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: &str) -> Self {
        self.enable(feature);
        self
    }

    pub fn enable(&mut self, feature: &str) {
        self.enabled.insert(feature.to_string());
    }

    pub fn is_enabled(&self, feature: &str) -> bool {
        self.enabled.contains(feature)
    }
}

/// Returns whether an entry gated by `rules` applies.
///
/// Rules are applied in order and the last matching rule decides; when no
/// rule matches the entry is excluded. An absent or empty rule list always
/// applies.
pub fn rules_allow(rules: Option<&[Rule]>, platform: &Platform, features: &FeatureSet) -> bool {
    let rules = match rules {
        Some(rules) if !rules.is_empty() => rules,
        _ => return true,
    };

    let mut allow = false;
    for rule in rules {
        if rule_matches(rule, platform, features) {
            allow = rule.action == RuleAction::Allow;
        }
    }
    allow
}

fn rule_matches(rule: &Rule, platform: &Platform, features: &FeatureSet) -> bool {
    if let Some(ref os_rule) = rule.os {
        if let Some(ref name) = os_rule.name {
            if name != platform.os.as_str() {
                return false;
            }
        }

        if let Some(ref arch) = os_rule.arch {
            if Arch::from_name(arch) != Some(platform.arch) {
                return false;
            }
        }

        if let Some(ref version_expr) = os_rule.version {
            // An invalid expression never matches
            match Regex::new(version_expr) {
                Ok(re) if re.is_match(&platform.os_version) => {}
                _ => return false,
            }
        }
    }

    if let Some(ref required) = rule.features {
        for (feature, state) in required {
            if features.is_enabled(feature) != *state {
                return false;
            }
        }
    }

    true
}
