#[derive(serde::Deserialize, serde::Serialize, Debug)]
pub struct CleanFormArgs {
    pub text: String,
    // HTML checkboxes are only submitted when checked
    #[serde(default)]
    pub strip_message_ids: Option<String>,
}

impl CleanFormArgs {
    pub fn strip_message_ids(&self) -> bool {
        self.strip_message_ids.is_some()
    }
}
