use crate::application::errors::ApplicationError;
use crate::domain::member::MemberId;
use crate::domain::repositories::{Member, MemberRepository};

/// Looks up members and checks that every one of them is enrolled
///
/// Fails on the first unknown id; otherwise reports every non-enrolled
/// member as `name(status)`.
pub async fn resolve_enrolled_members(
    repository: &dyn MemberRepository,
    ids: &[MemberId],
) -> Result<Vec<Member>, ApplicationError> {
    let found = repository.find_by_ids(ids).await?;
    if found.len() != ids.len() {
        return Err(ApplicationError::Repository(format!(
            "member lookup returned {} results for {} ids",
            found.len(),
            ids.len()
        )));
    }

    let mut members = Vec::with_capacity(ids.len());
    for (id, member) in ids.iter().zip(found) {
        match member {
            Some(member) => members.push(member),
            None => return Err(ApplicationError::MemberNotFound(id.clone())),
        }
    }

    let not_enrolled: Vec<String> = members
        .iter()
        .filter(|m| !m.is_enrolled())
        .map(|m| format!("{}({})", m.name, m.status))
        .collect();

    if !not_enrolled.is_empty() {
        return Err(ApplicationError::MemberNotEnrolled(not_enrolled));
    }

    Ok(members)
}
