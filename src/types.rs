//! Core types for the Luraph API wire format

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Privilege tier gating which accounts may see and use an option
///
/// Enforced server-side; the client never filters options by tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LuraphOptionTier {
    /// Available to every customer account
    CustomerOnly,
    /// Requires a premium subscription
    PremiumOnly,
    /// Reserved for administrator accounts
    AdminOnly,
}

/// Widget type of an option, determining the legal shape of its value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LuraphOptionType {
    /// Boolean toggle
    Checkbox,
    /// One value out of the spec's `choices` list
    Dropdown,
    /// Free-form text
    Text,
}

/// Value supplied for one option in a job submission
///
/// CHECKBOX options take a boolean, DROPDOWN and TEXT options take a
/// string. The client does not validate values against the node's
/// option specs; invalid combinations come back as a server error at
/// job-creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LuraphOptionValue {
    /// Boolean value for a CHECKBOX option
    Flag(bool),
    /// String value for a DROPDOWN or TEXT option
    Text(String),
}

impl From<bool> for LuraphOptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<String> for LuraphOptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for LuraphOptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Mapping from option id to the value chosen for it
pub type LuraphOptionList = HashMap<String, LuraphOptionValue>;

/// Server-declared specification of one configurable obfuscation option
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LuraphOptionInfo {
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Privilege tier required to use this option
    pub tier: LuraphOptionTier,
    /// Widget type; determines the legal value shape
    #[serde(rename = "type")]
    pub kind: LuraphOptionType,
    /// Legal values for DROPDOWN options; empty for other types
    #[serde(default)]
    pub choices: Vec<String>,
    /// Whether a value must be supplied when the option is applicable
    #[serde(default)]
    pub required: bool,
    /// Conditional activation: maps another option's id to the values of
    /// that option under which this one becomes applicable. Not enforced
    /// client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<HashMap<String, Vec<LuraphOptionValue>>>,
}

/// One obfuscation node advertised by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuraphNode {
    /// Current load indicator for the node
    pub cpu_usage: f64,
    /// Options this node supports, keyed by option id
    pub options: HashMap<String, LuraphOptionInfo>,
}

/// Response of [`Luraph::get_nodes`](crate::Luraph::get_nodes)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuraphNodesResponse {
    /// Id of the node the server recommends, or `None` when no node is
    /// currently marked stable. Callers must handle `None` explicitly
    /// rather than defaulting to an arbitrary node.
    #[serde(default)]
    pub recommended_id: Option<String>,
    /// All available nodes, keyed by node id
    pub nodes: HashMap<String, LuraphNode>,
}

/// Response of [`Luraph::create_new_job`](crate::Luraph::create_new_job)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuraphNewJobResponse {
    /// Opaque id of the newly queued job
    pub job_id: String,
}

/// Result of one [`Luraph::get_job_status`](crate::Luraph::get_job_status) poll
///
/// Exactly one of two states: `success: true` with `error: None`, or
/// `success: false` with a non-empty error string. The API reports no
/// separate "still running" state; absence of an error is success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LuraphJobStatusResponse {
    /// Whether the job has completed without a reported error
    pub success: bool,
    /// Human-readable failure reason, present iff `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Downloaded obfuscation artifact
#[derive(Clone, Debug, PartialEq)]
pub struct LuraphDownloadResponse {
    /// File name from the `Content-Disposition` header, or the default
    /// `script-obfuscated.lua` when the header yields nothing
    pub file_name: String,
    /// The obfuscated source text
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_info_deserializes_wire_shape() {
        let info: LuraphOptionInfo = serde_json::from_value(json!({
            "name": "Target Version",
            "description": "Lua version to emit",
            "tier": "CUSTOMER_ONLY",
            "type": "DROPDOWN",
            "choices": ["Lua 5.1", "LuaJIT"],
            "required": true,
            "dependencies": {
                "INTENSE_VM_STRUCTURE": [true]
            }
        }))
        .unwrap();

        assert_eq!(info.tier, LuraphOptionTier::CustomerOnly);
        assert_eq!(info.kind, LuraphOptionType::Dropdown);
        assert_eq!(info.choices, vec!["Lua 5.1", "LuaJIT"]);
        assert!(info.required);
        let deps = info.dependencies.unwrap();
        assert_eq!(
            deps["INTENSE_VM_STRUCTURE"],
            vec![LuraphOptionValue::Flag(true)]
        );
    }

    #[test]
    fn test_option_info_defaults_for_omitted_fields() {
        // CHECKBOX options typically arrive without choices or dependencies
        let info: LuraphOptionInfo = serde_json::from_value(json!({
            "name": "Intense VM Structure",
            "description": "Harder to trace VM layout",
            "tier": "PREMIUM_ONLY",
            "type": "CHECKBOX"
        }))
        .unwrap();

        assert!(info.choices.is_empty());
        assert!(!info.required);
        assert!(info.dependencies.is_none());
    }

    #[test]
    fn test_option_value_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(LuraphOptionValue::from(true)).unwrap(),
            json!(true)
        );
        assert_eq!(
            serde_json::to_value(LuraphOptionValue::from("Lua 5.1")).unwrap(),
            json!("Lua 5.1")
        );
    }

    #[test]
    fn test_nodes_response_null_recommendation() {
        let resp: LuraphNodesResponse = serde_json::from_value(json!({
            "recommendedId": null,
            "nodes": {}
        }))
        .unwrap();
        assert_eq!(resp.recommended_id, None);

        // An absent key behaves the same as an explicit null
        let resp: LuraphNodesResponse = serde_json::from_value(json!({ "nodes": {} })).unwrap();
        assert_eq!(resp.recommended_id, None);
    }
}
