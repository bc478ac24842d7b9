use serde::Serialize;
use serde_json::{Map, Value};

use valstream_pipeline::InboundValidation;

use crate::TransportError;

/// Name of the stream carrying validation messages.
pub const VALIDATIONS_STREAM: &str = "validations";

#[derive(Serialize)]
struct Subscribe<'a> {
    command: &'static str,
    streams: &'a [String],
}

/// The command subscribing to `streams`.
pub fn subscribe_command(streams: &[String]) -> String {
    let command = Subscribe {
        command: "subscribe",
        streams,
    };

    // Serializing a struct of strings cannot fail.
    serde_json::to_string(&command).unwrap_or_default()
}

/// A frame received from the stream.
#[derive(Clone, Debug, PartialEq)]
pub enum Inbound {
    Validation(InboundValidation),
    /// Reply to a command, such as the subscription.
    Response(Value),
    /// Any other message, identified by its `type`.
    Other(Option<String>),
}

pub fn parse_inbound(text: &str) -> Result<Inbound, TransportError> {
    let frame: Map<String, Value> = serde_json::from_str(text)?;

    let kind = frame.get("type").and_then(Value::as_str).map(str::to_string);

    match kind.as_deref() {
        Some("validationReceived") => validation(frame),
        Some("response") => Ok(Inbound::Response(Value::Object(frame))),
        None if frame.contains_key("validation_public_key") && frame.contains_key("data") => {
            validation(frame)
        }
        _ => Ok(Inbound::Other(kind)),
    }
}

fn validation(frame: Map<String, Value>) -> Result<Inbound, TransportError> {
    let validation = serde_json::from_value(Value::Object(frame))?;
    Ok(Inbound::Validation(validation))
}
