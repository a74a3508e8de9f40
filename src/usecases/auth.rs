use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::messages::MessageParticipants;
use crate::models::auth::Claims;
use crate::repositories::messages;

/// Requires an authenticated user.
pub fn require_login(current_user: Option<&Claims>) -> ServiceResult<&Claims> {
    current_user.ok_or(AppError::Unauthorized)
}

/// Requires that the authenticated user is `username`.
pub fn require_matching_user<'a>(
    current_user: Option<&'a Claims>,
    username: &str,
) -> ServiceResult<&'a Claims> {
    let claims = require_login(current_user)?;
    match claims.username == username {
        true => Ok(claims),
        false => Err(AppError::Unauthorized),
    }
}

fn recipient_check(claims: &Claims, participants: &MessageParticipants) -> ServiceResult<()> {
    match claims.username == participants.to_username {
        true => Ok(()),
        false => Err(AppError::Unauthorized),
    }
}

fn participant_check(claims: &Claims, participants: &MessageParticipants) -> ServiceResult<()> {
    match claims.username == participants.to_username
        || claims.username == participants.from_username
    {
        true => Ok(()),
        false => Err(AppError::Unauthorized),
    }
}

async fn fetch_participants<C: Context>(
    ctx: &C,
    message_id: u64,
) -> ServiceResult<MessageParticipants> {
    match messages::fetch_participants(ctx, message_id).await {
        Ok(Some(participants)) => Ok(participants),
        // Existence is not revealed to callers who could not access the message.
        Ok(None) => Err(AppError::Unauthorized),
        Err(e) => unexpected(e),
    }
}

/// Requires that the authenticated user is the message's recipient.
pub async fn require_recipient<C: Context>(
    ctx: &C,
    claims: &Claims,
    message_id: u64,
) -> ServiceResult<()> {
    let participants = fetch_participants(ctx, message_id).await?;
    recipient_check(claims, &participants)
}

/// Requires that the authenticated user is the message's sender or recipient.
pub async fn require_participant<C: Context>(
    ctx: &C,
    claims: &Claims,
    message_id: u64,
) -> ServiceResult<()> {
    let participants = fetch_participants(ctx, message_id).await?;
    participant_check(claims, &participants)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(username: &str) -> Claims {
        Claims {
            username: username.to_owned(),
        }
    }

    fn participants(from: &str, to: &str) -> MessageParticipants {
        MessageParticipants {
            from_username: from.to_owned(),
            to_username: to.to_owned(),
        }
    }

    #[test]
    fn anonymous_requests_are_rejected() {
        assert!(matches!(
            require_login(None),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn logged_in_user_passes_login_check() {
        let claims = claims("alice");
        assert_eq!(require_login(Some(&claims)).unwrap().username, "alice");
    }

    #[test]
    fn matching_user_check_compares_usernames() {
        let claims = claims("alice");
        assert!(require_matching_user(Some(&claims), "alice").is_ok());
        assert!(matches!(
            require_matching_user(Some(&claims), "bob"),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            require_matching_user(None, "alice"),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn only_recipient_passes_recipient_check() {
        let message = participants("alice", "bob");
        assert!(recipient_check(&claims("bob"), &message).is_ok());
        assert!(recipient_check(&claims("alice"), &message).is_err());
        assert!(recipient_check(&claims("mallory"), &message).is_err());
    }

    #[test]
    fn sender_and_recipient_pass_participant_check() {
        let message = participants("alice", "bob");
        assert!(participant_check(&claims("alice"), &message).is_ok());
        assert!(participant_check(&claims("bob"), &message).is_ok());
        assert!(participant_check(&claims("mallory"), &message).is_err());
    }
}
