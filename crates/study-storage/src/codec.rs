//! On-disk record format
//!
//! The data file predates this tool and uses Portuguese field names, so the
//! stored shape is kept separate from the in-memory model. Early versions of
//! the format carried a boolean `realizada` flag instead of the `status`
//! field; decoding accepts both, encoding always emits `status`.

use serde::{Deserialize, Serialize};
use study_core::{SessionStatus, StudySession};

/// One session as it appears in the data file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    id: u32,
    materia: String,
    topico: String,
    duracao_minutos: u32,
    #[serde(default)]
    descricao: String,
    #[serde(flatten)]
    status: StoredStatus,
    data_criacao: String,
    #[serde(default)]
    data_realizacao: Option<String>,
}

/// Status field, current form or the legacy boolean flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredStatus {
    Current { status: WireStatus },
    Legacy { realizada: bool },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum WireStatus {
    #[serde(rename = "pendente")]
    Pendente,
    #[serde(rename = "realizada")]
    Realizada,
}

impl StoredSession {
    pub(crate) fn into_session(self) -> StudySession {
        let status = match self.status {
            StoredStatus::Current {
                status: WireStatus::Pendente,
            } => SessionStatus::Pending,
            StoredStatus::Current {
                status: WireStatus::Realizada,
            } => SessionStatus::Done,
            StoredStatus::Legacy { realizada: false } => SessionStatus::Pending,
            StoredStatus::Legacy { realizada: true } => SessionStatus::Done,
        };

        StudySession {
            id: self.id,
            subject: self.materia,
            topic: self.topico,
            duration_minutes: self.duracao_minutos,
            description: self.descricao,
            status,
            created_at: self.data_criacao,
            completed_at: self.data_realizacao,
        }
    }
}

impl From<&StudySession> for StoredSession {
    fn from(session: &StudySession) -> Self {
        let status = match session.status {
            SessionStatus::Pending => WireStatus::Pendente,
            SessionStatus::Done => WireStatus::Realizada,
        };

        Self {
            id: session.id,
            materia: session.subject.clone(),
            topico: session.topic.clone(),
            duracao_minutos: session.duration_minutes,
            descricao: session.description.clone(),
            status: StoredStatus::Current { status },
            data_criacao: session.created_at.clone(),
            data_realizacao: session.completed_at.clone(),
        }
    }
}
