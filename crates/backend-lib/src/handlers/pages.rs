// ============================
// crates/backend-lib/src/handlers/pages.rs
// ============================
//! HTML pages rendered by the login handlers.

const BASE_STYLE: &str =
    "body { font-family: Arial, sans-serif; max-width: 500px; margin: 50px auto; padding: 20px; }";

const LOGIN_STYLE: &str = r#"
            .form-container { border: 1px solid #ddd; padding: 20px; border-radius: 5px; }
            input[type="password"] { width: 100%; padding: 10px; margin: 10px 0; border: 1px solid #ddd; border-radius: 3px; }
            button { background-color: #007bff; color: white; padding: 10px 20px; border: none; border-radius: 3px; cursor: pointer; }
            button:hover { background-color: #0056b3; }
            .error { color: red; margin: 10px 0; }
            .requirements { font-size: 12px; color: #666; margin: 10px 0; }"#;

const ERROR_STYLE: &str = r#"
            .error { color: red; margin: 10px 0; }
            a { color: #007bff; text-decoration: none; }
            ul { margin: 10px 0; }"#;

const WELCOME_STYLE: &str = r#"
            .welcome-container { border: 1px solid #ddd; padding: 20px; border-radius: 5px; text-align: center; }
            button { background-color: #28a745; color: white; padding: 10px 20px; border: none; border-radius: 3px; cursor: pointer; }
            button:hover { background-color: #218838; }"#;

const BACK_LINK: &str = r#"<a href="/">Back to login</a>"#;

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        {BASE_STYLE}{style}
    </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// The login form with the list of password requirements
pub fn login_page() -> String {
    layout(
        "Secure Password Login",
        LOGIN_STYLE,
        r#"    <div class="form-container">
        <h2>Secure Password Login</h2>
        <form method="POST" action="/login">
            <label for="password">Password:</label>
            <input type="password" id="password" name="password" required>
            <div class="requirements">
                Password requirements:
                <ul>
                    <li>At least 8 characters long</li>
                    <li>Contains uppercase and lowercase letters</li>
                    <li>Contains at least one digit</li>
                    <li>Contains at least one special character</li>
                    <li>Not a common password</li>
                </ul>
            </div>
            <button type="submit">Login</button>
        </form>
    </div>"#,
    )
}

pub fn missing_password_page() -> String {
    layout(
        "Login Error",
        ERROR_STYLE,
        &format!("    <div class=\"error\">Password is required</div>\n    {BACK_LINK}"),
    )
}

/// One list item per violation message, in the order given
pub fn validation_failed_page(errors: &[&str]) -> String {
    let items: String = errors
        .iter()
        .map(|error| format!("<li class=\"error\">{}</li>", escape_html(error)))
        .collect();

    layout(
        "Password Validation Failed",
        ERROR_STYLE,
        &format!(
            "    <h3>Password validation failed:</h3>\n    <ul>\n        {items}\n    </ul>\n    {BACK_LINK}"
        ),
    )
}

/// Success page. The submitted password is deliberately not shown.
pub fn welcome_page() -> String {
    layout(
        "Welcome",
        WELCOME_STYLE,
        r#"    <div class="welcome-container">
        <h2>Welcome!</h2>
        <p>Your password has been successfully validated.</p>
        <form method="GET" action="/">
            <button type="submit">Logout</button>
        </form>
    </div>"#,
    )
}
