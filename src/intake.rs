//! Patient intake: a coded condition mapped to a fixed nursing procedure.

use std::fmt;

/// Question asked for the patient's name.
pub const NAME_PROMPT: &str = "Who is the patient being entered into the system?";
/// Question asked for the patient's age.
pub const AGE_PROMPT: &str = "How old is the patient?";
/// Question asked for the two-letter status code.
pub const STATUS_PROMPT: &str =
    "What is the current condition of the patient (EM = Emaciated, EX = Exhausted, IP = In Pain)?";

/// Condition of a patient as entered at intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// `EM`
    Emaciated,
    /// `EX`
    Exhausted,
    /// `IP`
    InPain,
    // kept verbatim
    Unrecognized(String),
}

impl Status {
    /// Exact, case-sensitive match on the known codes.
    pub fn from_code(code: &str) -> Self {
        match code {
            "EM" => Status::Emaciated,
            "EX" => Status::Exhausted,
            "IP" => Status::InPain,
            other => Status::Unrecognized(other.to_string()),
        }
    }

    /// Text shown as the patient's status. Unknown codes are echoed back as typed.
    pub fn label(&self) -> &str {
        match self {
            Status::Emaciated => "Emaciated",
            Status::Exhausted => "Exhausted",
            Status::InPain => "Currently in pain",
            Status::Unrecognized(code) => code.as_str(),
        }
    }

    /// Procedure the staff should follow. Unknown codes get the discharge procedure.
    pub fn procedure(&self) -> &'static str {
        match self {
            Status::Emaciated => {
                "Inform nurse and have them put the patient on a new diet and nutritional plan."
            }
            Status::Exhausted => "Have nurse place patient in bed and prepare them to rest.",
            Status::InPain => "Have nurse place patient on painkillers and prepare them to rest.",
            Status::Unrecognized(_) => "Sign patient out of hospital.",
        }
    }
}

/// One intake entry. The age is kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeRecord {
    pub name: String,
    pub age: String,
    pub status: Status,
}

impl IntakeRecord {
    /// Build a record from the three raw answers.
    pub fn new(name: impl Into<String>, age: impl Into<String>, status_code: &str) -> Self {
        IntakeRecord {
            name: name.into(),
            age: age.into(),
            status: Status::from_code(status_code),
        }
    }
}

impl fmt::Display for IntakeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patient name: {}", self.name)?;
        writeln!(f, "Patient age: {}", self.age)?;
        writeln!(f, "Patient status: {}", self.status.label())?;
        writeln!(f, "{}", self.status.procedure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emaciated_gets_diet_plan() {
        let record = IntakeRecord::new("Ada", "42", "EM");
        assert_eq!(record.status, Status::Emaciated);
        assert_eq!(
            record.to_string(),
            "Patient name: Ada\n\
             Patient age: 42\n\
             Patient status: Emaciated\n\
             Inform nurse and have them put the patient on a new diet and nutritional plan.\n"
        );
    }

    #[test]
    fn known_codes_map_to_labels_and_procedures() {
        let cases = [
            (
                "EX",
                "Exhausted",
                "Have nurse place patient in bed and prepare them to rest.",
            ),
            (
                "IP",
                "Currently in pain",
                "Have nurse place patient on painkillers and prepare them to rest.",
            ),
        ];
        for (code, label, procedure) in cases {
            let status = Status::from_code(code);
            assert_eq!(status.label(), label);
            assert_eq!(status.procedure(), procedure);
        }
    }

    #[test]
    fn unknown_code_is_echoed_and_discharged() {
        let record = IntakeRecord::new("Bob", "7", "ZZ");
        assert_eq!(record.status, Status::Unrecognized("ZZ".into()));
        assert_eq!(
            record.to_string(),
            "Patient name: Bob\n\
             Patient age: 7\n\
             Patient status: ZZ\n\
             Sign patient out of hospital.\n"
        );
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(Status::from_code("em"), Status::Unrecognized("em".into()));
        assert_eq!(Status::from_code(" EM"), Status::Unrecognized(" EM".into()));
    }

    #[test]
    fn same_answers_render_the_same() {
        let first = IntakeRecord::new("Cy", "30", "IP").to_string();
        let second = IntakeRecord::new("Cy", "30", "IP").to_string();
        assert_eq!(first, second);
    }
}
