use serenity::all::{
    PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};

/// Separator between server names in the `names` argument.
pub const NAME_SEPARATOR: &str = ", ";

/// What a member is allowed to do with study groups, derived from their role
/// ids instead of matching role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// No roles assigned yet; the member hasn't introduced themselves.
    Unregistered,
    /// Holds the incoming role and isn't a student yet.
    Incoming,
    Student,
}

impl Standing {
    /// Classify a member from their cached role ids. `roles` does not contain
    /// the `@everyone` role, so an empty slice means no assigned roles at all.
    pub fn classify(roles: &[RoleId], incoming_role: RoleId) -> Self {
        if roles.is_empty() {
            Standing::Unregistered
        } else if roles.contains(&incoming_role) {
            Standing::Incoming
        } else {
            Standing::Student
        }
    }

    pub fn rejection(self) -> Option<Rejection> {
        match self {
            Standing::Unregistered => Some(Rejection::Unregistered),
            Standing::Incoming => Some(Rejection::NotStudent),
            Standing::Student => None,
        }
    }
}

/// Every way a study group command refuses to act. Each variant maps to an
/// ephemeral warning; none of these are errors in the `Report` sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Unregistered,
    NotStudent,
    DuplicateName,
    MemberMismatch,
    GroupNotFound(String),
    NotGroupMember,
}

impl Rejection {
    pub fn message(&self) -> String {
        match self {
            Rejection::Unregistered => {
                "You haven't yet introduced yourself! Make sure you use the **/intro** command first."
                    .into()
            }
            Rejection::NotStudent => {
                "You are not allowed to manage study groups, you aren't a student :)".into()
            }
            Rejection::DuplicateName => {
                "Group name already in use. Enter a more unique group name.".into()
            }
            Rejection::MemberMismatch => {
                "Check the names you entered, and the format in which you entered them.".into()
            }
            Rejection::GroupNotFound(name) => {
                format!("There is no study group named **{name}**.")
            }
            Rejection::NotGroupMember => {
                "You are not a part of this study group. You cannot delete it.".into()
            }
        }
    }
}

/// Resolve a `", "`-separated list of server names against the guild roster.
///
/// Each name takes the first roster entry whose display name matches it
/// exactly; names that match nothing are dropped. If not every name resolved,
/// the whole list is refused so a typo never silently shrinks the group.
pub fn resolve_members(
    names: &str,
    roster: &[(UserId, String)],
) -> Result<Vec<UserId>, Rejection> {
    let mut resolved = Vec::new();
    let mut requested = 0usize;

    for name in names.split(NAME_SEPARATOR) {
        requested += 1;

        if let Some((user_id, _)) = roster.iter().find(|(_, display)| display == name) {
            resolved.push(*user_id);
        }
    }

    if resolved.len() != requested {
        return Err(Rejection::MemberMismatch);
    }

    Ok(resolved)
}

/// Build the overwrite set for a study group channel: hide the channel from
/// `@everyone`, keep it visible to the bot and to every group member.
///
/// Text and voice channels both gate visibility on `VIEW_CHANNEL`, so the
/// same set is applied to both halves of the pair.
pub fn channel_overwrites(
    everyone: RoleId,
    bot: UserId,
    members: &[UserId],
) -> Vec<PermissionOverwrite> {
    let mut overwrites = Vec::with_capacity(members.len() + 2);

    overwrites.push(PermissionOverwrite {
        allow: Permissions::empty(),
        deny: Permissions::VIEW_CHANNEL,
        kind: PermissionOverwriteType::Role(everyone),
    });
    overwrites.push(PermissionOverwrite {
        allow: Permissions::VIEW_CHANNEL,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Member(bot),
    });

    for &member in members {
        overwrites.push(PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(member),
        });
    }

    overwrites
}

/// Whether a user appears as a member-kind entry in a channel's overwrite
/// list. Role overwrites never count, even if the role id happens to share
/// the user's snowflake.
pub fn is_overwrite_member(overwrites: &[PermissionOverwrite], user_id: UserId) -> bool {
    overwrites
        .iter()
        .any(|overwrite| overwrite.kind == PermissionOverwriteType::Member(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[(u64, &str)]) -> Vec<(UserId, String)> {
        entries
            .iter()
            .map(|&(id, name)| (UserId::new(id), name.to_string()))
            .collect()
    }

    #[test]
    fn classify_no_roles_is_unregistered() {
        let incoming = RoleId::new(10);

        assert_eq!(Standing::classify(&[], incoming), Standing::Unregistered);
    }

    #[test]
    fn classify_incoming_role_wins_over_other_roles() {
        let incoming = RoleId::new(10);
        let roles = [RoleId::new(7), incoming, RoleId::new(12)];

        assert_eq!(Standing::classify(&roles, incoming), Standing::Incoming);
    }

    #[test]
    fn classify_any_other_role_is_student() {
        let incoming = RoleId::new(10);
        let roles = [RoleId::new(7)];

        assert_eq!(Standing::classify(&roles, incoming), Standing::Student);
        assert!(Standing::classify(&roles, incoming).rejection().is_none());
    }

    #[test]
    fn resolve_matches_every_name() {
        let roster = roster(&[(1, "John D"), (2, "Jane D"), (3, "Adam S")]);

        let members = resolve_members("John D, Jane D", &roster).unwrap();

        assert_eq!(members, vec![UserId::new(1), UserId::new(2)]);
    }

    #[test]
    fn resolve_takes_the_first_matching_entry() {
        let roster = roster(&[(1, "John D"), (2, "John D")]);

        let members = resolve_members("John D", &roster).unwrap();

        assert_eq!(members, vec![UserId::new(1)]);
    }

    #[test]
    fn resolve_refuses_unknown_names() {
        let roster = roster(&[(1, "John D")]);

        assert_eq!(
            resolve_members("John D, Jane D", &roster),
            Err(Rejection::MemberMismatch)
        );
    }

    #[test]
    fn resolve_refuses_wrong_separator() {
        // "John D,Jane D" splits into a single unmatched name
        let roster = roster(&[(1, "John D"), (2, "Jane D")]);

        assert_eq!(
            resolve_members("John D,Jane D", &roster),
            Err(Rejection::MemberMismatch)
        );
    }

    #[test]
    fn resolve_refuses_empty_input() {
        let roster = roster(&[(1, "John D")]);

        assert_eq!(resolve_members("", &roster), Err(Rejection::MemberMismatch));
    }

    #[test]
    fn overwrites_deny_everyone_and_allow_bot_and_members() {
        let everyone = RoleId::new(100);
        let bot = UserId::new(200);
        let members = [UserId::new(1), UserId::new(2)];

        let overwrites = channel_overwrites(everyone, bot, &members);

        assert_eq!(overwrites.len(), 4);
        assert!(overwrites.iter().any(|o| {
            o.kind == PermissionOverwriteType::Role(everyone)
                && o.deny.contains(Permissions::VIEW_CHANNEL)
                && o.allow.is_empty()
        }));
        for user in [bot, members[0], members[1]] {
            assert!(overwrites.iter().any(|o| {
                o.kind == PermissionOverwriteType::Member(user)
                    && o.allow.contains(Permissions::VIEW_CHANNEL)
                    && o.deny.is_empty()
            }));
        }
    }

    #[test]
    fn overwrite_membership_ignores_role_entries() {
        let overwrites = channel_overwrites(RoleId::new(100), UserId::new(200), &[UserId::new(1)]);

        assert!(is_overwrite_member(&overwrites, UserId::new(1)));
        assert!(is_overwrite_member(&overwrites, UserId::new(200)));
        // same snowflake as the everyone role, but as a user
        assert!(!is_overwrite_member(&overwrites, UserId::new(100)));
        assert!(!is_overwrite_member(&overwrites, UserId::new(2)));
    }
}
