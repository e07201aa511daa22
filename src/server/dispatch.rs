use crate::protocol::Subject;

/// The response sent for a subject code the server does not know.
pub const UNRECOGNISED: &str = "subject not recognised :(";

/// Computes the response for a command.
///
/// This is a total function: every code/content pair has a defined answer,
/// with unknown codes mapping to [`UNRECOGNISED`] rather than an error.
pub fn respond(code: &str, content: &str) -> String {
    match Subject::from_code(code) {
        Some(Subject::Capitalise) => capitalise(content),
        Some(Subject::Reverse) => reverse(content),
        Some(Subject::ByteValues) => byte_values(content),
        None => UNRECOGNISED.to_string(),
    }
}

/// Maps every character to its uppercase form.
pub(crate) fn capitalise(content: &str) -> String {
    content.to_uppercase()
}

/// Reverses the character sequence end-to-end.
pub(crate) fn reverse(content: &str) -> String {
    content.chars().rev().collect()
}

/// Renders each UTF-8 byte of the content as its unsigned decimal value,
/// space-separated, trailing space included.
pub(crate) fn byte_values(content: &str) -> String {
    content.bytes().map(|b| format!("{b} ")).collect()
}
