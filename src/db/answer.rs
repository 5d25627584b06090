use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

/// Correct-answer letter of a question.
///
/// Travels as a one-character string both on the wire and in the `answer CHAR(1)` column.
/// Parsing is case-insensitive, the stored form is always uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Answer {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Answer must be A, B, C or D, got {0:?}")]
pub struct InvalidAnswer(pub String);

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::A => "A",
            Answer::B => "B",
            Answer::C => "C",
            Answer::D => "D",
        }
    }
}

impl FromStr for Answer {
    type Err = InvalidAnswer;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "A" => Ok(Answer::A),
            "B" => Ok(Answer::B),
            "C" => Ok(Answer::C),
            "D" => Ok(Answer::D),
            _ => Err(InvalidAnswer(value.to_owned())),
        }
    }
}

impl TryFrom<String> for Answer {
    type Error = InvalidAnswer;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Answer> for String {
    fn from(answer: Answer) -> Self {
        answer.as_str().to_owned()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Stored as CHAR(1), so decode through the string types and let Postgres cast text on insert.
impl Type<Postgres> for Answer {
    fn type_info() -> PgTypeInfo {
        <str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for Answer {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Answer {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <String as Decode<Postgres>>::decode(value)?;
        Ok(raw.trim_end().parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_to_uppercase() {
        assert_eq!("b".parse::<Answer>(), Ok(Answer::B));
        assert_eq!("D".parse::<Answer>(), Ok(Answer::D));
        assert_eq!(Answer::B.to_string(), "B");
    }

    #[test]
    fn rejects_letters_outside_range() {
        for bad in ["E", "e", "", "AB", " a", "b ", "1"] {
            assert!(bad.parse::<Answer>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn serializes_as_single_letter() {
        let answer: Answer = serde_json::from_str(r#""c""#).unwrap();
        assert_eq!(answer, Answer::C);
        assert_eq!(serde_json::to_string(&answer).unwrap(), r#""C""#);
        assert!(serde_json::from_str::<Answer>(r#""x""#).is_err());
    }
}
