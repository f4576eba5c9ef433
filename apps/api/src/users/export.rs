//! CSV rendering for the user export download.

use crate::models::user::UserRecord;

pub const EXPORT_FILENAME: &str = "users.csv";

const HEADER: [&str; 5] = ["ID", "Name", "Email", "Last Login", "Role"];

/// Renders users as CSV with a header row, CRLF line endings and minimal quoting.
pub fn users_to_csv(users: &[UserRecord]) -> String {
    let mut out = String::new();
    write_row(&mut out, HEADER.iter().map(|h| h.to_string()));
    for user in users {
        write_row(
            &mut out,
            [
                user.id.to_string(),
                user.name.clone(),
                user.email.clone(),
                user.last_login.map(|d| d.to_string()).unwrap_or_default(),
                user.role.clone(),
            ],
        );
    }
    out
}

fn write_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(&field));
    }
    out.push_str("\r\n");
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
