//! Sample registration form used by the demo host

use fetchform::{Control, Form, SelectOption};

pub fn registration_form() -> Form {
    Form::new(vec![
        Control::text("name").with_value("John Doe"),
        Control::input("email", "email").with_value("johndoe@example.com"),
        Control::hidden("token"),
        Control::radio("gender", "m"),
        Control::radio("gender", "f").checked(),
        Control::radio("gender", "x"),
        Control::checkbox("subscribe"),
        Control::select(
            "country",
            vec![
                SelectOption::new("de").labeled("Germany"),
                SelectOption::new("fr").labeled("France").selected(),
                SelectOption::new("us").labeled("United States"),
            ],
        ),
        Control::select_multiple(
            "interests",
            vec![
                SelectOption::new("rust").labeled("Rust").selected(),
                SelectOption::new("tui").labeled("Terminal UIs"),
                SelectOption::new("forms").labeled("Forms").selected(),
            ],
        ),
        Control::textarea("bio"),
        Control::input("referral", "text")
            .with_value("newsletter")
            .disabled(),
    ])
}
