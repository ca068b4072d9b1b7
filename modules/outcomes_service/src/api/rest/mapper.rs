//! Mapper implementations for converting between DTOs and contract models
//!
//! Request conversions are fallible: they run the presence checks and
//! apply defaults before anything reaches the domain service.

use super::dto::*;
use crate::contract::{self, OutcomesError};
use crate::domain::validation::{
    hours_or_default, prerequisites_or_default, require_number, require_text,
};

fn missing(field: &str) -> String {
    format!("Missing required field: {}", field)
}

// ===== Reference data conversions =====

impl From<contract::Faculty> for FacultyDto {
    fn from(faculty: contract::Faculty) -> Self {
        Self {
            faculty_id: faculty.id,
            faculty_name: faculty.name,
        }
    }
}

impl From<contract::Track> for TrackDto {
    fn from(track: contract::Track) -> Self {
        Self {
            track_id: track.id,
            faculty_id: track.faculty_id,
            track_name: track.name,
        }
    }
}

impl From<contract::Curriculum> for CurriculumDto {
    fn from(curriculum: contract::Curriculum) -> Self {
        Self {
            curriculum_id: curriculum.id,
            track_id: curriculum.track_id,
            name: curriculum.name,
            curriculum_code: curriculum.code,
            curr_period: curriculum.period,
            total_hours: curriculum.total_hours,
            lecture_hours: curriculum.lecture_hours,
            lab_hours: curriculum.lab_hours,
            prerequisites: curriculum.prerequisites,
        }
    }
}

impl TryFrom<AddCurriculumRequest> for contract::NewCurriculum {
    type Error = OutcomesError;

    fn try_from(req: AddCurriculumRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            track_id: require_number(req.track_id, &missing("track_id"))?,
            name: require_text(req.name, &missing("name"))?,
            code: require_text(req.curriculum_code, &missing("curriculum_code"))?,
            period: require_text(req.curr_period, &missing("curr_period"))?,
            total_hours: require_number(req.total_hours, &missing("total_hours"))?,
            lecture_hours: hours_or_default(req.lecture_hours),
            lab_hours: hours_or_default(req.lab_hours),
            prerequisites: prerequisites_or_default(req.prerequisites),
        })
    }
}

impl From<contract::BloomLevel> for BloomLevelDto {
    fn from(level: contract::BloomLevel) -> Self {
        Self {
            bloom_level_id: level.id,
            name: level.name,
        }
    }
}

impl From<contract::Verb> for VerbDto {
    fn from(verb: contract::Verb) -> Self {
        Self {
            verb_id: verb.id,
            verb_name: verb.name,
            bloom_level_id: verb.bloom_level_id,
        }
    }
}

impl From<contract::Verb> for LevelVerbDto {
    fn from(verb: contract::Verb) -> Self {
        Self {
            verb_id: verb.id,
            name: verb.name,
        }
    }
}

impl AddBloomLevelRequest {
    pub fn into_name(self) -> Result<String, OutcomesError> {
        require_text(self.level_en, &missing("level_en"))
    }
}

impl AddVerbRequest {
    /// Validated `(bloom_level_id, verb name)`
    pub fn into_parts(self) -> Result<(i32, String), OutcomesError> {
        let bloom_level_id = require_number(self.bloom_level_id, &missing("bloom_level_id"))?;
        let name = require_text(self.verb_en, &missing("verb_en"))?;
        Ok((bloom_level_id, name))
    }
}

// ===== Account conversions =====

impl From<contract::User> for UserDto {
    fn from(user: contract::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<contract::Professor> for ProfessorDto {
    fn from(professor: contract::Professor) -> Self {
        Self {
            id: professor.id,
            name: professor.name,
            users_id: professor.user_id,
            users_name: professor.username,
        }
    }
}

impl TryFrom<SignupRequest> for contract::NewAccount {
    type Error = OutcomesError;

    fn try_from(req: SignupRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            username: require_text(req.username, &missing("username"))?,
            password: require_text(req.password, &missing("password"))?,
            professor_name: require_text(req.professor_name, &missing("professorName"))?,
            email: require_text(req.email, &missing("email"))?,
        })
    }
}

impl LoginRequest {
    /// Validated `(email, password)`
    pub fn into_credentials(self) -> Result<(String, String), OutcomesError> {
        let email = require_text(self.email, &missing("email"))?;
        let password = require_text(self.password, &missing("password"))?;
        Ok((email, password))
    }
}

impl ListSubmissionsQuery {
    /// Parsed `professorId` filter. Absent or blank lists every submission.
    pub fn professor_filter(&self) -> Result<Option<i32>, OutcomesError> {
        match self.professor_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| OutcomesError::validation("Invalid professorId")),
        }
    }
}

impl From<contract::AuthenticatedUser> for LoginResponse {
    fn from(user: contract::AuthenticatedUser) -> Self {
        Self {
            message: "Login successful".to_string(),
            user_id: user.user_id,
            professor_id: user.professor_id,
            name: user.name,
            role: user.role,
        }
    }
}

// ===== Submission conversions =====

impl YearValue {
    fn into_text(self) -> Option<String> {
        match self {
            YearValue::Text(text) if !text.is_empty() => Some(text),
            YearValue::Number(n) if n != 0 => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<OutcomeRequest> for contract::OutcomeInput {
    fn from(req: OutcomeRequest) -> Self {
        Self {
            id: req.id,
            bloom_level_id: req.bloom_level_id,
            verb_id: req.verb_id,
            object: req.object,
            qualifier: req.qualifier,
        }
    }
}

impl TryFrom<SubmissionRequest> for contract::NewSubmission {
    type Error = OutcomesError;

    fn try_from(req: SubmissionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            professor_id: require_number(req.professor_id, &missing("professor_id"))?,
            curriculum_id: require_number(req.curriculum_id, &missing("curriculum_id"))?,
            level: require_number(req.level, &missing("level"))?,
            year: require_text(req.year.and_then(YearValue::into_text), &missing("year"))?,
            outcomes: req
                .outcomes
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }
}

impl From<contract::SubmissionDocument> for SubmissionDocumentDto {
    fn from(doc: contract::SubmissionDocument) -> Self {
        Self {
            id: doc.id,
            professor: doc.professor,
            year: doc.year,
            level: doc.level,
            curriculum_id: doc.curriculum_id,
            created_at: doc.created_at,
            curriculum: doc.curriculum.into(),
            outcomes: doc.outcomes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<contract::CurriculumDocument> for CurriculumDocumentDto {
    fn from(doc: contract::CurriculumDocument) -> Self {
        Self {
            name: doc.name,
            code: doc.code,
            period: doc.period,
            total_hours: doc.total_hours,
            lecture_hours: doc.lecture_hours,
            lab_hours: doc.lab_hours,
            prerequisites: doc.prerequisites,
            faculty: doc.faculty,
            track: doc.track,
        }
    }
}

impl From<contract::OutcomeDocument> for OutcomeDocumentDto {
    fn from(doc: contract::OutcomeDocument) -> Self {
        Self {
            id: doc.id,
            bloom_level_id: doc.bloom_level_id,
            verb_id: doc.verb_id,
            bloom_level: doc.bloom_level,
            verb: doc.verb,
            object: doc.object,
            qualifier: doc.qualifier,
        }
    }
}
