//! Plain-text rendering.

use crate::RandomUser;

/// Renders each user as five labelled lines followed by a 20-dash separator.
#[must_use]
pub fn render(users: &[RandomUser]) -> String {
    let separator = "-".repeat(20);
    users
        .iter()
        .map(|user| {
            format!(
                "First Name: {}\nLast Name: {}\nEmail: {}\nCity: {}\nCountry: {}\n{separator}\n",
                user.name.first, user.name.last, user.email, user.location.city, user.location.country
            )
        })
        .collect()
}
