//! Named input validators
//!
//! Questions carry a list of [`Rule`]s which are checked in order; the first
//! failure message is shown and the question is asked again.

pub const REGISTRY_SUFFIX_MESSAGE: &str = "The registry address must end with a '/'";
pub const EMAIL_MESSAGE: &str = "You must provide a valid email address";

/// A single validation rule keyed by field semantic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be blank
    Required,
    /// Value must end with `suffix`
    EndsWith {
        suffix: char,
        message: &'static str,
    },
    /// Value must contain `needle`
    Contains {
        needle: char,
        message: &'static str,
    },
}

/// Image registry addresses are used as a prefix, so they need a trailing '/'
pub const REGISTRY_ADDRESS: Rule = Rule::EndsWith {
    suffix: '/',
    message: REGISTRY_SUFFIX_MESSAGE,
};

pub const EMAIL_ADDRESS: Rule = Rule::Contains {
    needle: '@',
    message: EMAIL_MESSAGE,
};

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), String> {
        match *self {
            Rule::Required => required(value),
            Rule::EndsWith { suffix, message } => ends_with(value, suffix, message),
            Rule::Contains { needle, message } => contains(value, needle, message),
        }
    }
}

/// Check every rule in order, stopping at the first failure
pub fn check_all(rules: &[Rule], value: &str) -> Result<(), String> {
    rules.iter().try_for_each(|rule| rule.check(value))
}

pub fn required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("Value is required".to_string())
    } else {
        Ok(())
    }
}

pub fn ends_with(value: &str, suffix: char, message: &str) -> Result<(), String> {
    if value.ends_with(suffix) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

pub fn contains(value: &str, needle: char, message: &str) -> Result<(), String> {
    if value.contains(needle) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Registry address: required and ends with '/'
pub fn registry_address(value: &str) -> Result<(), String> {
    check_all(&[Rule::Required, REGISTRY_ADDRESS], value)
}

/// Email address: required and contains '@'
pub fn email_address(value: &str) -> Result<(), String> {
    check_all(&[Rule::Required, EMAIL_ADDRESS], value)
}
