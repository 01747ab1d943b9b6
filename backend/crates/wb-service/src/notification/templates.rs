use wb_core::ItemKind;

pub fn member_assigned(fullname: &str, kind: ItemKind, item_name: &str) -> String {
    format!(
        "Hello {},\n\nYou have been assigned to the {} \"{}\". \
         Please check the details and take necessary actions.\n\nThank you!",
        fullname,
        kind.label(),
        item_name
    )
}

pub fn member_removed(fullname: &str, kind: ItemKind, item_name: &str) -> String {
    format!(
        "Hello {},\n\nYou have been removed from the {} \"{}\".\n\nThank you!",
        fullname,
        kind.label(),
        item_name
    )
}

pub const PASSWORD_RESET_SUBJECT: &str = "Password Reset Request";

pub fn password_reset_body(link: &str) -> String {
    format!(
        "<p>You requested a password reset.</p>\
         <p>Click <a href=\"{link}\">here</a> to reset your password. \
         The link expires in one hour.</p>"
    )
}

pub fn workspace_invite_subject(workspace_name: &str) -> String {
    format!("You have been invited to {}", workspace_name)
}

pub fn workspace_invite_body(inviter: &str, workspace_name: &str, link: &str) -> String {
    format!(
        "<p>{inviter} invited you to join the workspace <b>{workspace_name}</b>.</p>\
         <p><a href=\"{link}\">Accept the invitation</a></p>"
    )
}

/// Appends `token` as a query parameter.
pub fn link_with_token(base: &str, token: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}token={}", base, separator, token)
}
