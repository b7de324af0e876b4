use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One repeatable group flattened to `field_key → value`. Values are
/// strings, except a kind's designated multi-line field, which serializes
/// as an array of lines. Keyed dynamically because field sets are recovered
/// from control names at assembly time.
pub type GroupObject = Map<String, Value>;

/// The submission document POSTed to the form's configured action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub resume_name: String,
    pub sections: Sections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    pub personal_info: PersonalInfo,
    pub summary: String,
    /// Ordered as rendered, top to bottom. Groups whose identifying field
    /// is blank are omitted, so ordinal gaps are expected.
    pub experience: Vec<GroupObject>,
    pub education: Vec<GroupObject>,
    pub skills: Vec<String>,
    pub projects: Vec<GroupObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}
