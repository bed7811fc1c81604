use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct HookModel {
    #[serde(default)]
    pub id: Option<String>,
    pub display_name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct HookWorkspace {
    #[serde(default)]
    pub current_dir: Option<String>,
}

/// Session descriptor Claude Code pipes to the statusline command on stdin.
#[derive(Deserialize, Debug, Clone)]
pub struct HookJson {
    pub model: HookModel,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub transcript_path: Option<String>,
    #[serde(default)]
    pub workspace: Option<HookWorkspace>,
}

impl HookJson {
    /// Working directory reported by the hook: `cwd` first, then `workspace.current_dir`.
    pub fn working_dir(&self) -> Option<&str> {
        self.cwd
            .as_deref()
            .or_else(|| self.workspace.as_ref()?.current_dir.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn transcript(&self) -> Option<&str> {
        self.transcript_path
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn model_id(&self) -> Option<&str> {
        self.model.id.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_hook_parses() {
        let hook: HookJson =
            serde_json::from_str(r#"{"model":{"display_name":"Claude Sonnet 4"}}"#).unwrap();
        assert_eq!(hook.model.display_name, "Claude Sonnet 4");
        assert!(hook.model_id().is_none());
        assert!(hook.working_dir().is_none());
        assert!(hook.transcript().is_none());
    }

    #[test]
    fn unused_hook_keys_are_ignored() {
        let hook: HookJson = serde_json::from_str(
            r#"{"session_id":"abc","version":"1.0.80","model":{"display_name":"m"},"cwd":"/p"}"#,
        )
        .unwrap();
        assert_eq!(hook.working_dir(), Some("/p"));
    }

    #[test]
    fn cwd_falls_back_to_workspace_dir() {
        let hook: HookJson = serde_json::from_str(
            r#"{"model":{"display_name":"m","id":"x"},"workspace":{"current_dir":"/tmp/p"}}"#,
        )
        .unwrap();
        assert_eq!(hook.working_dir(), Some("/tmp/p"));

        let hook: HookJson = serde_json::from_str(
            r#"{"model":{"display_name":"m"},"cwd":"/a","workspace":{"current_dir":"/b"}}"#,
        )
        .unwrap();
        assert_eq!(hook.working_dir(), Some("/a"));
    }

    #[test]
    fn empty_transcript_path_is_absent() {
        let hook: HookJson =
            serde_json::from_str(r#"{"model":{"display_name":"m"},"transcript_path":"  "}"#)
                .unwrap();
        assert!(hook.transcript().is_none());
    }
}
