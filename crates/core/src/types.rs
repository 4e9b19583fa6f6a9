/// Free-form JSON object used for metadata maps.
pub type JsonMap = std::collections::BTreeMap<String, serde_json::Value>;
