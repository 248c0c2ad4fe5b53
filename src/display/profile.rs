//! Profile display formatting

use crate::models::{Profile, ProfileId};

/// Format the profile list, marking the active one
pub fn format_profile_list(profiles: &[Profile], active_id: ProfileId) -> String {
    let mut output = String::new();

    for profile in profiles {
        let marker = if profile.id == active_id { "*" } else { " " };
        output.push_str(&format!(
            "{} {:20} {}  created {}\n",
            marker,
            profile.name,
            profile.id,
            profile.created_at.format("%Y-%m-%d")
        ));
    }

    output
}
