//! Interview role categories.
//!
//! Roles only gate question-bank lookup. The role string a client sends is
//! embedded verbatim in prompts, so an unrecognized role still produces a
//! sensible AI question — it just falls back to the default bank when one
//! is needed.

/// Role category for question-bank selection. Unrecognized strings degrade
/// to the default rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    SoftwareEngineer,
    #[default]
    HrInterview,
    MbaInterview,
}

impl Role {
    /// Parses a client-supplied role string, degrading to the default
    /// category when the string is not recognized.
    pub fn parse(s: &str) -> Role {
        match s {
            "Software Engineer" => Role::SoftwareEngineer,
            "HR Interview" => Role::HrInterview,
            "MBA Interview" => Role::MbaInterview,
            _ => Role::default(),
        }
    }

}
