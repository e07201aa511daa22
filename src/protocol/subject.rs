/// A recognized subject code.
///
/// Each variant selects one of the server's text transforms. The code is the
/// two-character tag carried on the wire; the label is the human-readable
/// name shown in the client's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Capitalise,
    Reverse,
    ByteValues,
}

impl Subject {
    /// Every recognized subject, in menu order.
    pub const ALL: [Subject; 3] = [Subject::Capitalise, Subject::Reverse, Subject::ByteValues];

    /// The two-character wire code for this subject.
    pub fn code(&self) -> &'static str {
        match self {
            Subject::Capitalise => "CL",
            Subject::Reverse => "RV",
            Subject::ByteValues => "BV",
        }
    }

    /// The menu label for this subject.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Capitalise => "Capitalise",
            Subject::Reverse => "Reverse",
            Subject::ByteValues => "Get byte value",
        }
    }

    /// Looks up a wire code. Codes are case-sensitive; anything other than
    /// the three known codes returns `None`.
    pub fn from_code(code: &str) -> Option<Subject> {
        match code {
            "CL" => Some(Subject::Capitalise),
            "RV" => Some(Subject::Reverse),
            "BV" => Some(Subject::ByteValues),
            _ => None,
        }
    }
}
