use serde::Deserialize;

/// Request body for answering a friendship request.
///
/// Carries exactly one field; anything else in the body is rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RespondFriendshipRequest {
    /// "ACCEPTED" or "REJECTED"
    pub status: String,
}
