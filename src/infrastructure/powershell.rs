//! PowerShell script builders for the Windows toast and sound paths
//!
//! User-controlled text never reaches the script unescaped: toast text is
//! XML-escaped inside a literal here-string and file paths are quoted as
//! single-quoted PowerShell literals.

use std::path::Path;

use crate::domain::notification::Toast;

/// Interpreter binary
pub const POWERSHELL: &str = "powershell";

/// Application id the toast is attributed to
pub const TOAST_APP_ID: &str = "Claude Code";

/// Escape text for use inside an XML element.
///
/// `'` is escaped too so the result can sit inside a single-quoted
/// here-string without terminating it.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Quote text as a single-quoted PowerShell literal (no interpolation).
pub fn quote_powershell_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Arguments for running `script` non-interactively
pub fn command_args(script: &str, bypass_policy: bool) -> Vec<String> {
    let mut args = vec!["-NoProfile".to_string()];
    if bypass_policy {
        args.push("-ExecutionPolicy".to_string());
        args.push("Bypass".to_string());
    }
    args.push("-Command".to_string());
    args.push(script.to_string());
    args
}

/// Builds the ToastText02 notification script
#[derive(Debug, Clone)]
pub struct ToastScript<'a> {
    toast: &'a Toast,
    app_id: &'a str,
}

impl<'a> ToastScript<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self {
            toast,
            app_id: TOAST_APP_ID,
        }
    }

    pub fn with_app_id(mut self, app_id: &'a str) -> Self {
        self.app_id = app_id;
        self
    }

    fn template(&self) -> String {
        format!(
            "<toast>\n  <visual>\n    <binding template=\"ToastText02\">\n      \
             <text id=\"1\">{}</text>\n      <text id=\"2\">{}</text>\n    \
             </binding>\n  </visual>\n</toast>",
            escape_xml(&self.toast.title),
            escape_xml(&self.toast.body),
        )
    }

    pub fn build(&self) -> String {
        // The closing '@ must start its own line.
        [
            "[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null".to_string(),
            "[Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom.XmlDocument, ContentType = WindowsRuntime] | Out-Null".to_string(),
            format!("$template = @'\n{}\n'@", self.template()),
            "$xml = New-Object Windows.Data.Xml.Dom.XmlDocument".to_string(),
            "$xml.LoadXml($template)".to_string(),
            "$toast = [Windows.UI.Notifications.ToastNotification]::new($xml)".to_string(),
            format!(
                "[Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier({}).Show($toast)",
                quote_powershell_literal(self.app_id)
            ),
        ]
        .join("\n")
    }
}

/// Builds the MediaPlayer playback script
#[derive(Debug, Clone)]
pub struct MediaPlayerScript<'a> {
    path: &'a Path,
    volume: f64,
}

impl<'a> MediaPlayerScript<'a> {
    /// `volume` is a fraction in 0.0..=1.0
    pub fn new(path: &'a Path, volume: f64) -> Self {
        Self {
            path,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn build(&self) -> String {
        let uri = quote_powershell_literal(&self.path.to_string_lossy());
        [
            "Add-Type -AssemblyName PresentationCore".to_string(),
            "$player = New-Object System.Windows.Media.MediaPlayer".to_string(),
            format!("$player.Open([System.Uri]{})", uri),
            format!("$player.Volume = {:.2}", self.volume),
            "Start-Sleep -Milliseconds 300".to_string(),
            "$player.Play()".to_string(),
            "Start-Sleep -Seconds 3".to_string(),
            "$player.Close()".to_string(),
        ]
        .join("; ")
    }
}
