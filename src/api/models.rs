//! API request and response models.
//!
//! This module defines the inbound request body and the exercise structure
//! returned to callers. The exercise mirrors the structured-output contract
//! sent to the provider; [`Exercise::validate`] covers the constraints the
//! type system alone cannot express.

use serde::{Deserialize, Serialize};

/// Number of answer options in every exercise.
pub const OPTION_COUNT: usize = 4;

/// Request body for exercise generation.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRequest {
    /// User prompt driving the generation. Absent and `null` both
    /// deserialize to `None` so the handler can reject them with the
    /// documented 400 body instead of a generic extractor error.
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Russian grammatical cases offered as quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RussianCase {
    Prepositional,
    Dative,
    Accusative,
    Genitive,
}

/// One selectable answer in the quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseOption {
    /// Grammatical case this option claims applies
    pub case: RussianCase,

    /// Free-text label shown to the learner (in French)
    pub label: String,
}

/// A generated exercise, returned to the caller exactly as produced by the
/// provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// A Russian sentence containing the preposition under study
    pub sentence: String,

    /// The preposition in the sentence
    pub word: String,

    /// Question asking why the preposition requires its case
    pub question: String,

    /// Exactly four answer options
    pub options: Vec<CaseOption>,

    /// Index of the correct option, in `[0, 3]`
    pub correct: u8,

    /// Short explanation in French
    pub explanation: String,
}

impl Exercise {
    /// Check the structural constraints serde cannot enforce: the option
    /// count and the range of the answer index.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.options.len() != OPTION_COUNT {
            return Err(format!(
                "expected {} options, got {}",
                OPTION_COUNT,
                self.options.len()
            ));
        }
        if usize::from(self.correct) >= OPTION_COUNT {
            return Err(format!(
                "correct index {} out of range 0..{}",
                self.correct, OPTION_COUNT
            ));
        }
        Ok(())
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_exercise() -> Exercise {
        Exercise {
            sentence: "Книга лежит на столе.".to_string(),
            word: "на".to_string(),
            question: "Pourquoi la préposition 'на' demande-t-elle le prépositionnel ?"
                .to_string(),
            options: vec![
                CaseOption {
                    case: RussianCase::Prepositional,
                    label: "Règle grammaticale fixe".to_string(),
                },
                CaseOption {
                    case: RussianCase::Dative,
                    label: "Pour indiquer le destinataire".to_string(),
                },
                CaseOption {
                    case: RussianCase::Accusative,
                    label: "Pour indiquer l'objet".to_string(),
                },
                CaseOption {
                    case: RussianCase::Genitive,
                    label: "Pour exprimer la possession".to_string(),
                },
            ],
            correct: 0,
            explanation: "Avec un sens locatif, 'на' régit le prépositionnel.".to_string(),
        }
    }

    #[test]
    fn test_case_serde_is_lowercase() {
        let serialized = serde_json::to_value(RussianCase::Prepositional).unwrap();
        assert_eq!(serialized, json!("prepositional"));

        let parsed: RussianCase = serde_json::from_value(json!("genitive")).unwrap();
        assert_eq!(parsed, RussianCase::Genitive);
    }

    #[test]
    fn test_unknown_case_is_rejected() {
        let result: std::result::Result<RussianCase, _> =
            serde_json::from_value(json!("vocative"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_exercise() {
        assert!(sample_exercise().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_option_count() {
        let mut exercise = sample_exercise();
        exercise.options.pop();
        let err = exercise.validate().unwrap_err();
        assert!(err.contains("expected 4 options"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut exercise = sample_exercise();
        exercise.correct = 4;
        let err = exercise.validate().unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_request_prompt_absent_and_null_deserialize() {
        let absent: ExerciseRequest = serde_json::from_value(json!({})).unwrap();
        assert!(absent.prompt.is_none());

        let null: ExerciseRequest = serde_json::from_value(json!({ "prompt": null })).unwrap();
        assert!(null.prompt.is_none());

        let present: ExerciseRequest =
            serde_json::from_value(json!({ "prompt": "hello" })).unwrap();
        assert_eq!(present.prompt.as_deref(), Some("hello"));
    }

    #[test]
    fn test_exercise_round_trips_through_json() {
        let exercise = sample_exercise();
        let value = serde_json::to_value(&exercise).unwrap();
        assert_eq!(value["options"].as_array().unwrap().len(), 4);
        assert_eq!(value["correct"], 0);

        let back: Exercise = serde_json::from_value(value).unwrap();
        assert_eq!(back.word, "на");
        assert_eq!(back.options[0].case, RussianCase::Prepositional);
    }
}
