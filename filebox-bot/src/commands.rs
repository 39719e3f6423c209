//! Command decoding: raw message text (command token or menu label) → [`Command`].

use crate::markdown::parse_deep_link;
use crate::texts::{LABEL_DELETE, LABEL_FILES, LABEL_HELP, LABEL_UPLOAD};

/// A user command. Decoded once per message; messages that decode to nothing are uploads or
/// invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start download_<payload>`; payload as received (still encoded).
    Download(String),
    /// `/start`, `/help` or the help button.
    Help,
    /// `/list` or the files button.
    List,
    /// `/delete [name]` or the delete button. Argument trimmed; None when empty.
    Delete(Option<String>),
    /// The upload button.
    UploadHint,
}

impl Command {
    /// Decodes `text`. Command tokens may carry a `@botname` suffix (`/list@filebox_bot`).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(command) = Self::from_label(text) {
            return Some(command);
        }

        let body = text.strip_prefix('/')?;
        let (token, argument) = match body.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (body, ""),
        };
        let name = token.split('@').next().unwrap_or(token);

        match name {
            "start" => Some(match parse_deep_link(argument) {
                Some(payload) => Command::Download(payload.to_string()),
                None => Command::Help,
            }),
            "help" => Some(Command::Help),
            "list" => Some(Command::List),
            "delete" => Some(Command::Delete(
                Some(argument.to_string()).filter(|a| !a.is_empty()),
            )),
            _ => None,
        }
    }

    fn from_label(text: &str) -> Option<Self> {
        match text {
            LABEL_HELP => Some(Command::Help),
            LABEL_FILES => Some(Command::List),
            LABEL_DELETE => Some(Command::Delete(None)),
            LABEL_UPLOAD => Some(Command::UploadHint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_variants() {
        assert_eq!(Command::parse("/start"), Some(Command::Help));
        assert_eq!(Command::parse("/start ref_42"), Some(Command::Help));
        assert_eq!(
            Command::parse("/start download_my_file"),
            Some(Command::Download("my_file".to_string()))
        );
        assert_eq!(
            Command::parse("/start@filebox_bot download_photo_1700000000"),
            Some(Command::Download("photo_1700000000".to_string()))
        );
    }

    #[test]
    fn test_parse_list_and_help() {
        assert_eq!(Command::parse("/list"), Some(Command::List));
        assert_eq!(Command::parse("  /list@filebox_bot  "), Some(Command::List));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
    }

    #[test]
    fn test_parse_delete_argument() {
        assert_eq!(Command::parse("/delete"), Some(Command::Delete(None)));
        assert_eq!(Command::parse("/delete    "), Some(Command::Delete(None)));
        assert_eq!(
            Command::parse("/delete my report.pdf"),
            Some(Command::Delete(Some("my report.pdf".to_string())))
        );
    }

    #[test]
    fn test_parse_menu_labels() {
        assert_eq!(Command::parse(LABEL_HELP), Some(Command::Help));
        assert_eq!(Command::parse(LABEL_FILES), Some(Command::List));
        assert_eq!(Command::parse(LABEL_DELETE), Some(Command::Delete(None)));
        assert_eq!(Command::parse(LABEL_UPLOAD), Some(Command::UploadHint));
    }

    #[test]
    fn test_parse_non_commands() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse("/unknown"), None);
        assert_eq!(Command::parse("list"), None);
    }
}
