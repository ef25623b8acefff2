//! Static settings form shown in the host's extension settings.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormItem {
    /// Read-only text row.
    Label {
        id: String,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    pub items: Vec<FormItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Form {
    pub sections: Vec<FormSection>,
}
impl Form {
    /// The template's form: a single informational section, no settings.
    pub fn template() -> Self {
        Self {
            sections: vec![FormSection {
                id: "template-section".to_string(),
                header: Some("Content Template".to_string()),
                footer: Some("Settings added by your extension will appear here.".to_string()),
                items: vec![FormItem::Label {
                    id: "template-label".to_string(),
                    title: "This extension serves a bundled catalog".to_string(),
                    subtitle: Some("There is nothing to configure.".to_string()),
                }],
            }],
        }
    }
}
