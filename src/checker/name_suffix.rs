use indexmap::IndexSet;

use crate::scene::SceneObject;

use super::{CheckFault, CheckVerdict, Checker};

/// Naming convention: the object name must end with one of the allowed suffixes.
#[derive(Debug, Clone)]
pub struct NameSuffixChecker {
    allowed_suffixes: IndexSet<String>,
}

impl NameSuffixChecker {
    #[must_use]
    pub const fn new(allowed_suffixes: IndexSet<String>) -> Self {
        Self { allowed_suffixes }
    }
}

impl Checker for NameSuffixChecker {
    fn label(&self) -> &'static str {
        "object name"
    }

    fn check(&self, object: &SceneObject) -> Result<CheckVerdict, CheckFault> {
        Ok(check_object_name(&object.name, &self.allowed_suffixes))
    }
}

/// Case-sensitive, exact suffix match. An empty suffix set never passes.
#[must_use]
pub fn check_object_name(name: &str, allowed_suffixes: &IndexSet<String>) -> CheckVerdict {
    let listed = format_suffixes(allowed_suffixes);
    if allowed_suffixes
        .iter()
        .any(|suffix| name.ends_with(suffix.as_str()))
    {
        CheckVerdict::pass(format!("Object '{name}' naming OK (ends with {listed})."))
    } else {
        CheckVerdict::fail(format!("Object '{name}' does not end with {listed}."))
    }
}

fn format_suffixes(suffixes: &IndexSet<String>) -> String {
    format!("{:?}", suffixes.iter().collect::<Vec<_>>())
}

#[cfg(test)]
#[path = "name_suffix_tests.rs"]
mod tests;
