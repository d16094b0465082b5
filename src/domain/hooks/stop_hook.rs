//! `Stop` hook entries in the assistant's settings document
//!
//! The settings file layout is:
//!
//! ```json
//! { "hooks": { "Stop": [ { "hooks": [ { "type": "command", "command": "...", "timeout": 30 } ] } ] } }
//! ```

use std::path::Path;

use serde_json::{json, Map, Value};

use crate::domain::error::HookSettingsError;

/// Hook event fired when the assistant finishes a task
pub const HOOK_EVENT: &str = "Stop";

/// Seconds the assistant waits for the hook command
pub const HOOK_TIMEOUT_SECS: u64 = 30;

/// Substrings identifying commands installed by this tool
const OWN_MARKERS: &[&str] = &["ccnotify", "claude-code-notify-lite"];

/// What an upsert did to the settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookChange {
    Added,
    Updated,
}

/// Whether a hook command was installed by this tool
pub fn is_own_command(command: &str) -> bool {
    OWN_MARKERS.iter().any(|marker| command.contains(marker))
}

/// Build the hook command line for an executable
pub fn hook_command(exe: &Path) -> String {
    format!("\"{}\" run", exe.display())
}

/// Build a `Stop` hook group running `command`
pub fn stop_hook_group(command: &str) -> Value {
    json!({
        "hooks": [
            {
                "type": "command",
                "command": command,
                "timeout": HOOK_TIMEOUT_SECS
            }
        ]
    })
}

fn group_has_own_command(group: &Value) -> bool {
    group
        .get("hooks")
        .and_then(Value::as_array)
        .is_some_and(|hooks| hooks.iter().any(entry_is_own))
}

fn entry_is_own(entry: &Value) -> bool {
    entry
        .get("command")
        .and_then(Value::as_str)
        .is_some_and(is_own_command)
}

/// Add our `Stop` hook group, replacing an existing group that already
/// runs one of our commands.
pub fn upsert_stop_hook(
    settings: &mut Value,
    command: &str,
) -> Result<HookChange, HookSettingsError> {
    let root = settings
        .as_object_mut()
        .ok_or_else(|| HookSettingsError::Malformed("settings root is not an object".into()))?;

    let hooks = root
        .entry("hooks")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| HookSettingsError::Malformed("\"hooks\" is not an object".into()))?;

    let stop = hooks
        .entry(HOOK_EVENT)
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| HookSettingsError::Malformed("\"hooks.Stop\" is not an array".into()))?;

    let group = stop_hook_group(command);
    match stop.iter().position(group_has_own_command) {
        Some(index) => {
            stop[index] = group;
            Ok(HookChange::Updated)
        }
        None => {
            stop.push(group);
            Ok(HookChange::Added)
        }
    }
}

/// Remove our commands from every `Stop` group.
///
/// Groups left empty are dropped, then an empty `Stop` list, then an
/// empty `hooks` object. Returns the number of commands removed.
pub fn remove_stop_hooks(settings: &mut Value) -> usize {
    let Some(root) = settings.as_object_mut() else {
        return 0;
    };
    let Some(hooks) = root.get_mut("hooks").and_then(Value::as_object_mut) else {
        return 0;
    };
    let Some(stop) = hooks.get_mut(HOOK_EVENT).and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut removed = 0;
    stop.retain_mut(|group| {
        let Some(entries) = group.get_mut("hooks").and_then(Value::as_array_mut) else {
            return true;
        };
        let before = entries.len();
        entries.retain(|entry| !entry_is_own(entry));
        removed += before - entries.len();
        !entries.is_empty()
    });

    if stop.is_empty() {
        hooks.remove(HOOK_EVENT);
    }
    if hooks.is_empty() {
        root.remove("hooks");
    }

    removed
}

/// Whether the settings contain one of our `Stop` hooks
pub fn has_stop_hook(settings: &Value) -> bool {
    settings
        .get("hooks")
        .and_then(|hooks| hooks.get(HOOK_EVENT))
        .and_then(Value::as_array)
        .is_some_and(|stop| stop.iter().any(group_has_own_command))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CMD: &str = "\"/usr/local/bin/ccnotify\" run";

    #[test]
    fn own_command_detection() {
        assert!(is_own_command(CMD));
        assert!(is_own_command("node /x/claude-code-notify-lite/run.js"));
        assert!(!is_own_command("say done"));
    }

    #[test]
    fn hook_command_quotes_executable() {
        assert_eq!(
            hook_command(Path::new("/opt/my tools/ccnotify")),
            "\"/opt/my tools/ccnotify\" run"
        );
    }

    #[test]
    fn upsert_into_empty_settings() {
        let mut settings = json!({});
        assert_eq!(upsert_stop_hook(&mut settings, CMD).unwrap(), HookChange::Added);

        let entry = &settings["hooks"]["Stop"][0]["hooks"][0];
        assert_eq!(entry["type"], "command");
        assert_eq!(entry["command"], CMD);
        assert_eq!(entry["timeout"], 30);
        assert!(has_stop_hook(&settings));
    }

    #[test]
    fn upsert_keeps_foreign_hooks_and_replaces_ours() {
        let mut settings = json!({
            "model": "opus",
            "hooks": {
                "Stop": [
                    { "hooks": [{ "type": "command", "command": "say done" }] },
                    { "hooks": [{ "type": "command", "command": "\"/old/ccnotify\" run" }] }
                ],
                "PreToolUse": []
            }
        });

        assert_eq!(upsert_stop_hook(&mut settings, CMD).unwrap(), HookChange::Updated);

        let stop = settings["hooks"]["Stop"].as_array().unwrap();
        assert_eq!(stop.len(), 2);
        assert_eq!(stop[0]["hooks"][0]["command"], "say done");
        assert_eq!(stop[1]["hooks"][0]["command"], CMD);
        assert_eq!(settings["model"], "opus");
        assert!(settings["hooks"]["PreToolUse"].is_array());
    }

    #[test]
    fn upsert_appends_next_to_foreign_groups() {
        let mut settings = json!({
            "hooks": { "Stop": [{ "hooks": [{ "type": "command", "command": "say done" }] }] }
        });
        assert_eq!(upsert_stop_hook(&mut settings, CMD).unwrap(), HookChange::Added);
        assert_eq!(settings["hooks"]["Stop"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn upsert_rejects_malformed_layout() {
        let mut not_object = json!([]);
        assert!(upsert_stop_hook(&mut not_object, CMD).is_err());

        let mut bad_stop = json!({ "hooks": { "Stop": "nope" } });
        assert!(upsert_stop_hook(&mut bad_stop, CMD).is_err());
        assert_eq!(bad_stop["hooks"]["Stop"], "nope");
    }

    #[test]
    fn remove_prunes_empty_containers() {
        let mut settings = json!({ "model": "opus" });
        upsert_stop_hook(&mut settings, CMD).unwrap();

        assert_eq!(remove_stop_hooks(&mut settings), 1);
        assert_eq!(settings, json!({ "model": "opus" }));
        assert!(!has_stop_hook(&settings));
    }

    #[test]
    fn remove_keeps_foreign_entries() {
        let mut settings = json!({
            "hooks": {
                "Stop": [
                    { "hooks": [
                        { "type": "command", "command": "say done" },
                        { "type": "command", "command": CMD }
                    ] },
                    { "matcher": "x" }
                ],
                "Notification": [{ "hooks": [] }]
            }
        });

        assert_eq!(remove_stop_hooks(&mut settings), 1);

        let stop = settings["hooks"]["Stop"].as_array().unwrap();
        assert_eq!(stop.len(), 2);
        assert_eq!(stop[0]["hooks"].as_array().unwrap().len(), 1);
        assert_eq!(stop[0]["hooks"][0]["command"], "say done");
        assert!(settings["hooks"]["Notification"].is_array());
    }

    #[test]
    fn remove_from_settings_without_hooks_is_noop() {
        let mut settings = json!({ "theme": "dark" });
        assert_eq!(remove_stop_hooks(&mut settings), 0);
        assert_eq!(settings, json!({ "theme": "dark" }));
    }
}
