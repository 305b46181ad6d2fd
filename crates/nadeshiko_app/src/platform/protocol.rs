//! JSON-lines wire format spoken by `serve`.

use nadeshiko_core::{Document, Msg, PanelMessage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDocument {
    pub uri: String,
    pub language_id: String,
    pub text: String,
}

/// Host events and panel UI messages received from the editor side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inbound {
    ActiveEditorChanged {
        #[serde(default)]
        document: Option<WireDocument>,
    },
    DocumentChanged {
        document: WireDocument,
    },
    ManualUpdate,
    ToggleAutoUpdate {
        value: bool,
    },
    Dispose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Outbound {
    Update { content: String },
}

impl From<WireDocument> for Document {
    fn from(doc: WireDocument) -> Self {
        Document::new(doc.uri, doc.language_id, doc.text)
    }
}

impl From<Inbound> for Msg {
    fn from(inbound: Inbound) -> Self {
        match inbound {
            Inbound::ActiveEditorChanged { document } => {
                Msg::ActiveEditorChanged(document.map(Document::from))
            }
            Inbound::DocumentChanged { document } => Msg::DocumentChanged(document.into()),
            Inbound::ManualUpdate => Msg::ManualUpdate,
            Inbound::ToggleAutoUpdate { value } => Msg::ToggleAutoUpdate(value),
            Inbound::Dispose => Msg::PanelDisposed,
        }
    }
}

impl From<PanelMessage> for Outbound {
    fn from(message: PanelMessage) -> Self {
        match message {
            PanelMessage::Update { content } => Outbound::Update { content },
        }
    }
}

pub fn parse_inbound(line: &str) -> Result<Inbound, serde_json::Error> {
    serde_json::from_str(line)
}

pub fn encode_outbound(message: &Outbound) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_host_events() {
        let inbound = parse_inbound(
            r#"{"type":"activeEditorChanged","document":{"uri":"file:///A.java","languageId":"java","text":"class A {}"}}"#,
        )
        .unwrap();
        assert_eq!(
            Msg::from(inbound),
            Msg::ActiveEditorChanged(Some(Document::java("file:///A.java", "class A {}")))
        );

        let closed = parse_inbound(r#"{"type":"activeEditorChanged","document":null}"#).unwrap();
        assert_eq!(Msg::from(closed), Msg::ActiveEditorChanged(None));
        let omitted = parse_inbound(r#"{"type":"activeEditorChanged"}"#).unwrap();
        assert_eq!(Msg::from(omitted), Msg::ActiveEditorChanged(None));
    }

    #[test]
    fn parses_ui_messages() {
        assert_eq!(
            parse_inbound(r#"{"type":"manualUpdate"}"#).unwrap(),
            Inbound::ManualUpdate
        );
        assert_eq!(
            Msg::from(parse_inbound(r#"{"type":"toggleAutoUpdate","value":false}"#).unwrap()),
            Msg::ToggleAutoUpdate(false)
        );
        assert_eq!(
            Msg::from(parse_inbound(r#"{"type":"dispose"}"#).unwrap()),
            Msg::PanelDisposed
        );
    }

    #[test]
    fn rejects_unknown_or_incomplete_messages() {
        assert!(parse_inbound(r#"{"type":"reload"}"#).is_err());
        assert!(parse_inbound(r#"{"type":"toggleAutoUpdate"}"#).is_err());
        assert!(parse_inbound("not json").is_err());
    }

    #[test]
    fn encodes_update_message() {
        let line = encode_outbound(&PanelMessage::update("変換中...").into()).unwrap();
        assert_eq!(line, r#"{"type":"update","content":"変換中..."}"#);
    }
}
