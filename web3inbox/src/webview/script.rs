/// Wraps a serialised JSON message in the script that delivers it to the page.
pub trait ScriptFormatter: Send + Sync {
    fn format_script(&self, message: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChatScriptFormatter;

impl ScriptFormatter for ChatScriptFormatter {
    fn format_script(&self, message: &str) -> String {
        format!("window.web3inbox.chat.postMessage({message})")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PushScriptFormatter;

impl ScriptFormatter for PushScriptFormatter {
    fn format_script(&self, message: &str) -> String {
        format!("window.web3inbox.push.postMessage({message})")
    }
}
