use serde::{Deserialize, Serialize};

use crate::{mock, types::SubjectId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SubjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SubjectCreate {
    pub(crate) fn synthesize(self) -> Subject {
        Subject {
            id: self.id.unwrap_or_else(mock::mock_id),
            name: self.name,
            description: self.description,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SubjectUpdate {
    /// Overlay the set fields onto `subject`
    pub fn apply(self, subject: &mut Subject) {
        if let Some(name) = self.name {
            subject.name = name;
        }
        if let Some(description) = self.description {
            subject.description = Some(description);
        }
        if let Some(icon) = self.icon {
            subject.icon = Some(icon);
        }
    }
}
