//! Built-in form definitions

use super::{FieldOption, FormConfig, FormField};

pub const CONTACT_FORM_ID: &str = "contact";
pub const SURVEY_FORM_ID: &str = "survey";
pub const REGISTRATION_FORM_ID: &str = "registration";

pub fn contact_form() -> FormConfig {
    FormConfig::new(
        CONTACT_FORM_ID,
        vec![
            FormField::input("name", "Name")
                .with_placeholder("Your name")
                .required(),
            FormField::input("email", "Email")
                .with_placeholder("you@example.com")
                .with_attr("type", "email")
                .required(),
            FormField::select(
                "topic",
                "Topic",
                vec![
                    FieldOption::new("general", "General question"),
                    FieldOption::new("support", "Support"),
                    FieldOption::new("sales", "Sales"),
                ],
            ),
            FormField::textarea("message", "Message").with_placeholder("How can we help?"),
            FormField::checkbox("subscribe", "Subscribe to updates"),
        ],
    )
    .with_title("Contact Form")
    .with_labels("Send", "Cancel")
}

pub fn survey_form() -> FormConfig {
    let ratings = (1..=5i64)
        .map(|n| FieldOption::new(n, &n.to_string()))
        .collect();

    FormConfig::new(
        SURVEY_FORM_ID,
        vec![
            FormField::select(
                "q1",
                "Did you find what you were looking for?",
                vec![FieldOption::new("yes", "Yes"), FieldOption::new("no", "No")],
            )
            .required(),
            FormField::select("rating", "Overall rating", ratings),
            FormField::checkbox("recommend", "Would you recommend us?"),
            FormField::textarea("comments", "Comments"),
        ],
    )
    .with_title("Survey")
}

pub fn registration_form() -> FormConfig {
    FormConfig::new(
        REGISTRATION_FORM_ID,
        vec![
            FormField::input("username", "Username")
                .with_attr("maxlength", 32)
                .required(),
            FormField::input("email", "Email")
                .with_attr("type", "email")
                .required(),
            FormField::input("password", "Password")
                .with_attr("type", "password")
                .required(),
            FormField::select(
                "country",
                "Country",
                vec![
                    FieldOption::new("de", "Germany"),
                    FieldOption::new("fr", "France"),
                    FieldOption::new("us", "United States"),
                    FieldOption::new("other", "Other"),
                ],
            ),
            FormField::input("referral", "Referral code")
                .with_placeholder("Not available yet")
                .disabled(),
            FormField::textarea("bio", "About you"),
            FormField::checkbox("terms", "I accept the terms").required(),
        ],
    )
    .with_title("Registration")
    .with_labels("Register", "Cancel")
}
