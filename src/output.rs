use crate::metadata::Metadata;
use crate::uagen_error::UagenError;
use std::fs;
use std::path::Path;

pub const USER_AGENTS_FILE: &str = "user_agents.json";
pub const METADATA_FILE: &str = "user_agents_metadata.json";

/// Writes the shuffled list as a pretty-printed JSON array.
pub fn write_user_agents<P: AsRef<Path>>(path: P, user_agents: &[String]) -> Result<(), UagenError> {
    let json = serde_json::to_string_pretty(user_agents)?;
    fs::write(path, json)?;
    Ok(())
}

/// Writes the metadata record as a pretty-printed JSON object.
pub fn write_metadata<P: AsRef<Path>>(path: P, metadata: &Metadata) -> Result<(), UagenError> {
    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(path, json)?;
    Ok(())
}
