//! Decode the payload of a finished activity.

use anyhow::anyhow;
use serde::de::DeserializeOwned;
use temporal_sdk_core_protos::coresdk::{
    FromJsonPayloadExt,
    activity_result::{ActivityResolution, activity_resolution::Status},
};

/// Turn an [`ActivityResolution`] into the activity's typed return value.
///
/// Failed, cancelled and backed-off activities become errors carrying the
/// failure message reported by the server.
pub fn parse_activity_result<T: DeserializeOwned>(
    res: &ActivityResolution,
) -> Result<T, anyhow::Error> {
    match res.status.as_ref() {
        Some(Status::Completed(success)) => {
            let payload = success
                .result
                .as_ref()
                .ok_or_else(|| anyhow!("activity completed without a result payload"))?;
            Ok(T::from_json_payload(payload)?)
        }
        Some(Status::Failed(failed)) => {
            let message = failed
                .failure
                .as_ref()
                .map(|f| f.message.clone())
                .unwrap_or_else(|| "unknown failure".to_owned());
            Err(anyhow!("activity failed: {message}"))
        }
        Some(Status::Cancelled(_)) => Err(anyhow!("activity was cancelled")),
        Some(Status::Backoff(_)) => Err(anyhow!("activity is backing off")),
        None => Err(anyhow!("activity resolution has no status")),
    }
}
